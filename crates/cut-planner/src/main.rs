//! Flowerpot Antenna Cut Planner CLI
//!
//! Computes element cut lengths and the printable section stack for the
//! VHF airband flowerpot antenna.
//!
//! Usage:
//!   plan-cuts --frequency 127 --coax rg8x --json plan.json

use antenna_dimensions::{ElementSpec, FrequencyBand, DEFAULT_TRIM_MARGIN, VF_RADIATOR, VF_SLEEVE};
use anyhow::Result;
use clap::Parser;
use cut_planner::{build_plan, write_json, CoaxSeries, TubeGeometry, MAX_PRINT_HEIGHT_MM};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "plan-cuts",
    about = "Cut and print planning for the flowerpot antenna build"
)]
struct Args {
    /// Target center frequency in MHz
    #[arg(short, long, default_value_t = 127.0)]
    frequency: f64,

    /// Band lower bound in MHz
    #[arg(long, default_value_t = 118.0)]
    band_lower: f64,

    /// Band upper bound in MHz
    #[arg(long, default_value_t = 136.0)]
    band_upper: f64,

    /// Over-length allowance removed during tuning
    #[arg(short, long, default_value_t = DEFAULT_TRIM_MARGIN)]
    trim_margin: f64,

    /// Radiator velocity factor
    #[arg(long, default_value_t = VF_RADIATOR)]
    radiator_vf: f64,

    /// Sleeve velocity factor
    #[arg(long, default_value_t = VF_SLEEVE)]
    sleeve_vf: f64,

    /// Feedline coax series
    #[arg(long, value_enum, default_value = "rg8x")]
    coax: CoaxSeries,

    /// Printer build height in mm
    #[arg(long, default_value_t = MAX_PRINT_HEIGHT_MM)]
    max_print_height: f64,

    /// Write the full plan as JSON
    #[arg(short, long)]
    json: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let band = FrequencyBand::new(args.band_lower, args.frequency, args.band_upper)?;

    let mut sleeve = ElementSpec::sleeve(args.trim_margin);
    sleeve.velocity_factor = args.sleeve_vf;
    let mut radiator = ElementSpec::radiator(args.trim_margin);
    radiator.velocity_factor = args.radiator_vf;

    let geometry = TubeGeometry {
        coax: args.coax,
        ..TubeGeometry::default()
    };

    let plan = build_plan(band, geometry, args.max_print_height, &[sleeve, radiator])?;

    info!("{}", "=".repeat(60));
    info!("VHF Flowerpot Antenna Cut Planner");
    info!("{}", "=".repeat(60));
    info!(
        "Frequency:      {:.1} MHz ({:.0}-{:.0} MHz band)",
        band.center_mhz, band.lower_mhz, band.upper_mhz
    );
    for element in &plan.elements {
        info!(
            "{:<9?} cut {:.1}mm, trim toward {:.1}mm",
            element.kind, element.cut_mm, element.nominal_mm
        );
    }
    info!("Total length:   {:.1}mm", plan.metadata.total_antenna_mm);
    info!(
        "Tube:           {:.0}/{:.0}mm OD/ID, {:.0}mm sleeve channel",
        plan.geometry.tube_od_mm, plan.geometry.tube_id_mm, plan.geometry.sleeve_channel_id_mm
    );
    info!(
        "Coax:           {} ({:.1}mm exit hole)",
        plan.geometry.coax, plan.geometry.coax_hole_dia_mm
    );
    info!(
        "Sections:       {} total, {} sleeve-lined, {:.0}mm body each",
        plan.sections.sections.len(),
        plan.sections.sleeve_sections,
        plan.sections.section_body_mm
    );
    for section in &plan.sections.sections {
        debug!("  section {:02}: {:?}", section.index, section.role);
    }

    if let Some(path) = &args.json {
        info!("Writing plan to {:?}", path);
        write_json(&plan, path)?;
    }

    Ok(())
}
