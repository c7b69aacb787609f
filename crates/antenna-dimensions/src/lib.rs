//! Antenna Element Dimensions
//!
//! Wavelength-derived cut lengths for coaxial sleeve ("flowerpot") antennas.
//! Built around the VHF airband version (118-136 MHz, centered at 127 MHz)
//! but accepts any positive target frequency.
//!
//! All lengths are millimeters. The sleeve is the quarter-wave copper choke
//! inside the lower tube; the radiator is the half-wave wire continuing above
//! the feedpoint. Elements are cut over-length by the trim margin and trimmed
//! down to the nominal length while watching SWR.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Speed of light in mm/s
pub const SPEED_OF_LIGHT_MM_S: f64 = 299_792_458_000.0;

/// Default over-length allowance removed during tuning (2%)
pub const DEFAULT_TRIM_MARGIN: f64 = 0.02;

/// Velocity factor for the radiator wire running inside the ASA tube
pub const VF_RADIATOR: f64 = 0.95;

/// Velocity factor for the air-spaced copper foil sleeve
pub const VF_SLEEVE: f64 = 1.0;

/// Sleeve is a quarter-wave choke
pub const SLEEVE_FRACTION: f64 = 0.25;

/// Radiator is a half-wave element
pub const RADIATOR_FRACTION: f64 = 0.5;

#[derive(Error, Debug)]
pub enum DimensionError {
    #[error("invalid {parameter}: {value} ({constraint})")]
    InvalidInput {
        parameter: &'static str,
        value: f64,
        constraint: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DimensionError>;

/// Target frequency band in MHz
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrequencyBand {
    pub lower_mhz: f64,
    pub center_mhz: f64,
    pub upper_mhz: f64,
}

impl FrequencyBand {
    pub fn new(lower_mhz: f64, center_mhz: f64, upper_mhz: f64) -> Result<Self> {
        if !(lower_mhz > 0.0) {
            return Err(DimensionError::InvalidInput {
                parameter: "band lower bound",
                value: lower_mhz,
                constraint: "must be > 0 MHz",
            });
        }
        if !(center_mhz > lower_mhz) {
            return Err(DimensionError::InvalidInput {
                parameter: "center frequency",
                value: center_mhz,
                constraint: "must be above the band lower bound",
            });
        }
        if !(upper_mhz > center_mhz) {
            return Err(DimensionError::InvalidInput {
                parameter: "band upper bound",
                value: upper_mhz,
                constraint: "must be above the center frequency",
            });
        }
        Ok(Self {
            lower_mhz,
            center_mhz,
            upper_mhz,
        })
    }

    /// Aircraft band, 118-136 MHz, centered at 127 MHz
    pub fn vhf_airband() -> Self {
        Self {
            lower_mhz: 118.0,
            center_mhz: 127.0,
            upper_mhz: 136.0,
        }
    }

    pub fn contains(&self, frequency_mhz: f64) -> bool {
        frequency_mhz >= self.lower_mhz && frequency_mhz <= self.upper_mhz
    }
}

/// Which physical element the parameters describe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ElementKind {
    Sleeve,
    Radiator,
}

/// Electrical parameters for one element
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ElementSpec {
    pub kind: ElementKind,
    pub wavelength_fraction: f64,
    pub velocity_factor: f64,
    pub trim_margin: f64,
}

impl ElementSpec {
    /// Quarter-wave sleeve with the build's stock constants
    pub fn sleeve(trim_margin: f64) -> Self {
        Self {
            kind: ElementKind::Sleeve,
            wavelength_fraction: SLEEVE_FRACTION,
            velocity_factor: VF_SLEEVE,
            trim_margin,
        }
    }

    /// Half-wave radiator with the build's stock constants
    pub fn radiator(trim_margin: f64) -> Self {
        Self {
            kind: ElementKind::Radiator,
            wavelength_fraction: RADIATOR_FRACTION,
            velocity_factor: VF_RADIATOR,
            trim_margin,
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.wavelength_fraction > 0.0) {
            return Err(DimensionError::InvalidInput {
                parameter: "wavelength fraction",
                value: self.wavelength_fraction,
                constraint: "must be > 0",
            });
        }
        if !(self.velocity_factor > 0.0) {
            return Err(DimensionError::InvalidInput {
                parameter: "velocity factor",
                value: self.velocity_factor,
                constraint: "must be > 0",
            });
        }
        if !(self.trim_margin >= 0.0 && self.trim_margin < 1.0) {
            return Err(DimensionError::InvalidInput {
                parameter: "trim margin",
                value: self.trim_margin,
                constraint: "must be in [0, 1)",
            });
        }
        Ok(())
    }
}

/// Computed lengths for one element. Cut the piece at `cut_mm`, trim toward
/// `nominal_mm` during tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ElementLengths {
    pub kind: ElementKind,
    pub cut_mm: f64,
    pub nominal_mm: f64,
}

/// Free-space wavelength in mm
pub fn wavelength_mm(frequency_mhz: f64) -> Result<f64> {
    if !(frequency_mhz > 0.0) {
        return Err(DimensionError::InvalidInput {
            parameter: "frequency",
            value: frequency_mhz,
            constraint: "must be > 0 MHz",
        });
    }
    Ok(SPEED_OF_LIGHT_MM_S / (frequency_mhz * 1e6))
}

/// Cut and nominal lengths for one element at the given frequency
pub fn element_lengths(frequency_mhz: f64, spec: &ElementSpec) -> Result<ElementLengths> {
    spec.validate()?;
    let wavelength = wavelength_mm(frequency_mhz)?;
    let nominal_mm = wavelength * spec.wavelength_fraction * spec.velocity_factor;
    let cut_mm = nominal_mm * (1.0 + spec.trim_margin);
    Ok(ElementLengths {
        kind: spec.kind,
        cut_mm,
        nominal_mm,
    })
}

/// Lengths for every element at the band center frequency
pub fn compute_elements(band: &FrequencyBand, specs: &[ElementSpec]) -> Result<Vec<ElementLengths>> {
    specs
        .iter()
        .map(|spec| element_lengths(band.center_mhz, spec))
        .collect()
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nominal_never_exceeds_cut(
            freq in 0.1f64..5000.0,
            margin in 0.0f64..0.99,
        ) {
            let lengths = element_lengths(freq, &ElementSpec::sleeve(margin)).unwrap();
            prop_assert!(lengths.nominal_mm <= lengths.cut_mm);
            if margin > 0.0 {
                prop_assert!(lengths.nominal_mm < lengths.cut_mm);
            }
        }

        #[test]
        fn doubling_frequency_halves_cut(freq in 0.1f64..2500.0) {
            let spec = ElementSpec::radiator(DEFAULT_TRIM_MARGIN);
            let at_f = element_lengths(freq, &spec).unwrap();
            let at_2f = element_lengths(freq * 2.0, &spec).unwrap();
            let ratio = at_2f.cut_mm / at_f.cut_mm;
            prop_assert!((ratio - 0.5).abs() < 1e-9);
        }

        #[test]
        fn lengths_are_positive_and_finite(
            freq in 0.1f64..5000.0,
            fraction in 0.01f64..2.0,
            vf in 0.1f64..1.0,
        ) {
            let spec = ElementSpec {
                kind: ElementKind::Radiator,
                wavelength_fraction: fraction,
                velocity_factor: vf,
                trim_margin: DEFAULT_TRIM_MARGIN,
            };
            let lengths = element_lengths(freq, &spec).unwrap();
            prop_assert!(lengths.cut_mm.is_finite() && lengths.cut_mm > 0.0);
            prop_assert!(lengths.nominal_mm.is_finite() && lengths.nominal_mm > 0.0);
        }
    }
}
