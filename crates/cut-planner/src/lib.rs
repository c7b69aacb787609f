//! Flowerpot Antenna Cut Planner
//!
//! Turns a target frequency into a complete build plan for the 3D-printed
//! flowerpot antenna: element cut lengths, printed tube fit checks, and the
//! section stack needed to print a tube taller than the printer.
//!
//! The electrical lengths come from the `antenna-dimensions` crate; this
//! crate adds the physical side of the build. The stock build is a 32mm OD
//! ASA tube printed in 240mm sections with 25mm glue joints, an 18mm internal
//! channel for the copper sleeve, and RG-8X feedline.

use antenna_dimensions::DimensionError;
use thiserror::Error;

pub mod geometry;
pub mod plan;
pub mod sections;

pub use geometry::{CoaxSeries, GeometryReport, TubeGeometry};
pub use plan::{build_plan, write_json, CutPlan, PlanMetadata};
pub use sections::{plan_sections, SectionPlan, SectionRole, TubeSection};

/// Tallest printable section on the stock printer (Bambu X1C) in mm
pub const MAX_PRINT_HEIGHT_MM: f64 = 240.0;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    #[error("male plug wall too thin: outer radius {outer_r_mm:.2}mm, inner radius {inner_r_mm:.2}mm")]
    PlugWallTooThin { outer_r_mm: f64, inner_r_mm: f64 },
    #[error("sleeve channel ID {channel_id_mm}mm too large for tube ID {tube_id_mm}mm")]
    ChannelTooLarge { channel_id_mm: f64, tube_id_mm: f64 },
    #[error("coax OD {coax_od_mm}mm too large for {channel_id_mm}mm sleeve channel")]
    CoaxTooLarge { coax_od_mm: f64, channel_id_mm: f64 },
    #[error("print height {print_height_mm}mm leaves no section body above the {joint_length_mm}mm joint")]
    PrintHeightTooShort {
        print_height_mm: f64,
        joint_length_mm: f64,
    },
}

pub type Result<T> = std::result::Result<T, PlanError>;
