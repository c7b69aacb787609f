//! Build plan assembly and export

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use antenna_dimensions::{
    compute_elements, ElementKind, ElementLengths, ElementSpec, FrequencyBand,
};
use serde::{Deserialize, Serialize};

use crate::geometry::{GeometryReport, TubeGeometry};
use crate::sections::{plan_sections, SectionPlan};
use crate::Result;

/// Complete build plan: what to cut, what to print, what to order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutPlan {
    pub band: FrequencyBand,
    pub elements: Vec<ElementLengths>,
    pub geometry: GeometryReport,
    pub sections: SectionPlan,
    pub metadata: PlanMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub total_antenna_mm: f64,
    /// Over-length allowance the cut lengths were computed with
    pub trim_margin: f64,
    pub generated_at: String,
}

/// Compose element lengths, geometry checks, and the section stack into one
/// plan at the band center frequency
pub fn build_plan(
    band: FrequencyBand,
    geometry: TubeGeometry,
    max_print_height_mm: f64,
    specs: &[ElementSpec],
) -> Result<CutPlan> {
    let elements = compute_elements(&band, specs)?;
    let report = geometry.report()?;

    let total_antenna_mm: f64 = elements.iter().map(|e| e.cut_mm).sum();
    let sleeve_cut_mm = elements
        .iter()
        .find(|e| e.kind == ElementKind::Sleeve)
        .map(|e| e.cut_mm)
        .unwrap_or(0.0);

    let sections = plan_sections(
        total_antenna_mm,
        sleeve_cut_mm,
        max_print_height_mm,
        geometry.joint_length_mm,
    )?;

    let trim_margin = specs.first().map(|s| s.trim_margin).unwrap_or(0.0);

    Ok(CutPlan {
        band,
        elements,
        geometry: report,
        sections,
        metadata: PlanMetadata {
            total_antenna_mm,
            trim_margin,
            generated_at: chrono::Utc::now().to_rfc3339(),
        },
    })
}

/// Write the plan as pretty-printed JSON
pub fn write_json(plan: &CutPlan, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, plan)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use antenna_dimensions::DEFAULT_TRIM_MARGIN;

    fn airband_plan() -> CutPlan {
        build_plan(
            FrequencyBand::vhf_airband(),
            TubeGeometry::default(),
            crate::MAX_PRINT_HEIGHT_MM,
            &[
                ElementSpec::sleeve(DEFAULT_TRIM_MARGIN),
                ElementSpec::radiator(DEFAULT_TRIM_MARGIN),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_airband_plan_totals() {
        let plan = airband_plan();
        assert_eq!(plan.elements.len(), 2);
        // 602mm sleeve + 1144mm radiator
        assert!((plan.metadata.total_antenna_mm - 1745.6).abs() < 0.5);
        assert_eq!(plan.sections.sections.len(), 9);
        assert_eq!(plan.sections.sleeve_sections, 3);
    }

    #[test]
    fn test_plan_timestamp_is_rfc3339() {
        let plan = airband_plan();
        assert!(chrono::DateTime::parse_from_rfc3339(&plan.metadata.generated_at).is_ok());
    }

    #[test]
    fn test_plan_rejects_bad_geometry() {
        let geometry = TubeGeometry {
            sleeve_channel_id_mm: 26.0,
            ..TubeGeometry::default()
        };
        let result = build_plan(
            FrequencyBand::vhf_airband(),
            geometry,
            crate::MAX_PRINT_HEIGHT_MM,
            &[ElementSpec::sleeve(DEFAULT_TRIM_MARGIN)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let plan = airband_plan();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        write_json(&plan, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let loaded: CutPlan = serde_json::from_str(&raw).unwrap();
        assert_eq!(loaded.band.center_mhz, 127.0);
        assert_eq!(loaded.metadata.trim_margin, DEFAULT_TRIM_MARGIN);
        assert_eq!(loaded.sections.sections.len(), plan.sections.sections.len());
    }
}
