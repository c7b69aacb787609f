//! Printed tube geometry and fit checks
//!
//! The tube sections join with a male plug that seats inside the next
//! section's bore, so the plug wall, the sleeve channel liner, and the coax
//! all compete for the same interior. These checks reject combinations that
//! cannot be assembled.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{PlanError, Result};

/// Coax series the feedline can use
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
pub enum CoaxSeries {
    Rg58,
    Rg8x,
    Rg6,
}

impl CoaxSeries {
    /// Jacket outer diameter in mm
    pub fn od_mm(&self) -> f64 {
        match self {
            Self::Rg58 => 5.0,
            Self::Rg8x => 6.1,
            Self::Rg6 => 6.8,
        }
    }
}

impl std::fmt::Display for CoaxSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Rg58 => "RG-58",
            Self::Rg8x => "RG-8X",
            Self::Rg6 => "RG-6",
        };
        write!(f, "{}", label)
    }
}

/// Printed tube stack dimensions in mm
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TubeGeometry {
    pub tube_od_mm: f64,
    pub wall_mm: f64,
    /// Bore of the liner ring the copper sleeve sits in
    pub sleeve_channel_id_mm: f64,
    pub joint_length_mm: f64,
    pub joint_clearance_mm: f64,
    pub coax: CoaxSeries,
}

impl Default for TubeGeometry {
    fn default() -> Self {
        Self {
            tube_od_mm: 32.0,
            wall_mm: 2.5,
            sleeve_channel_id_mm: 18.0,
            joint_length_mm: 25.0,
            joint_clearance_mm: 0.25,
            coax: CoaxSeries::Rg8x,
        }
    }
}

impl TubeGeometry {
    pub fn tube_id_mm(&self) -> f64 {
        self.tube_od_mm - 2.0 * self.wall_mm
    }

    fn inner_r_mm(&self) -> f64 {
        self.tube_id_mm() / 2.0
    }

    pub fn male_plug_outer_r_mm(&self) -> f64 {
        self.inner_r_mm() - self.joint_clearance_mm
    }

    pub fn male_plug_inner_r_mm(&self) -> f64 {
        self.inner_r_mm() - self.wall_mm
    }

    /// Wall left between the tube bore and the sleeve channel
    pub fn liner_wall_mm(&self) -> f64 {
        self.inner_r_mm() - self.sleeve_channel_id_mm / 2.0
    }

    /// Coax exit hole, jacket OD plus 2mm clearance
    pub fn coax_hole_dia_mm(&self) -> f64 {
        self.coax.od_mm() + 2.0
    }

    /// Fit checks for the printed joints, the sleeve channel, and the coax
    pub fn validate(&self) -> Result<()> {
        let outer_r = self.male_plug_outer_r_mm();
        let inner_r = self.male_plug_inner_r_mm();
        if inner_r >= outer_r - 0.5 {
            return Err(PlanError::PlugWallTooThin {
                outer_r_mm: outer_r,
                inner_r_mm: inner_r,
            });
        }
        if self.sleeve_channel_id_mm >= self.tube_id_mm() - 2.0 {
            return Err(PlanError::ChannelTooLarge {
                channel_id_mm: self.sleeve_channel_id_mm,
                tube_id_mm: self.tube_id_mm(),
            });
        }
        if self.coax.od_mm() >= self.sleeve_channel_id_mm - 4.0 {
            return Err(PlanError::CoaxTooLarge {
                coax_od_mm: self.coax.od_mm(),
                channel_id_mm: self.sleeve_channel_id_mm,
            });
        }
        Ok(())
    }

    /// Validated dimension breakdown for the plan output
    pub fn report(&self) -> Result<GeometryReport> {
        self.validate()?;
        Ok(GeometryReport {
            tube_od_mm: self.tube_od_mm,
            tube_id_mm: self.tube_id_mm(),
            sleeve_channel_id_mm: self.sleeve_channel_id_mm,
            liner_wall_mm: self.liner_wall_mm(),
            joint_length_mm: self.joint_length_mm,
            coax: self.coax,
            coax_hole_dia_mm: self.coax_hole_dia_mm(),
        })
    }
}

/// Resolved dimensions as they appear in the exported plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeometryReport {
    pub tube_od_mm: f64,
    pub tube_id_mm: f64,
    pub sleeve_channel_id_mm: f64,
    pub liner_wall_mm: f64,
    pub joint_length_mm: f64,
    pub coax: CoaxSeries,
    pub coax_hole_dia_mm: f64,
}
