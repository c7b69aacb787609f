//! Printable section stack
//!
//! The assembled tube is taller than the printer, so it prints as glued
//! sections. Each section loses one joint length of usable body. Sections
//! covering the sleeve carry the channel liner, and the last of those also
//! carries the feedpoint groove and hose clamp seat.

use serde::{Deserialize, Serialize};

use crate::{PlanError, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SectionRole {
    Sleeve,
    Feedpoint,
    Plain,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TubeSection {
    /// 1-based position, bottom cap upward
    pub index: usize,
    pub role: SectionRole,
    pub body_length_mm: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionPlan {
    pub section_body_mm: f64,
    pub sleeve_sections: usize,
    pub sections: Vec<TubeSection>,
}

/// Split the antenna into printable sections
pub fn plan_sections(
    total_length_mm: f64,
    sleeve_length_mm: f64,
    max_print_height_mm: f64,
    joint_length_mm: f64,
) -> Result<SectionPlan> {
    let body = max_print_height_mm - joint_length_mm;
    if !(body > 0.0) {
        return Err(PlanError::PrintHeightTooShort {
            print_height_mm: max_print_height_mm,
            joint_length_mm,
        });
    }

    let count = (total_length_mm / body).ceil() as usize;
    let sleeve_count = (sleeve_length_mm / body).ceil() as usize;

    let sections = (1..=count)
        .map(|index| {
            let role = if index == sleeve_count {
                SectionRole::Feedpoint
            } else if index < sleeve_count {
                SectionRole::Sleeve
            } else {
                SectionRole::Plain
            };
            TubeSection {
                index,
                role,
                body_length_mm: body,
            }
        })
        .collect();

    Ok(SectionPlan {
        section_body_mm: body,
        sleeve_sections: sleeve_count,
        sections,
    })
}
