/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Closed-form duration estimate for a nail service.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub const BASE_MINUTES: f64 = 60.0;
pub const DEFAULT_COMPLEXITY: u32 = 3;

#[derive(
    Clone, Copy, Debug, Display, EnumIter, EnumString, Hash, Eq, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NailLength {
    Short,
    Medium,
    Long,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    EnumIter,
    EnumString,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Technique {
    #[default]
    Classic,
    Gel,
    French,
    Ombre,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    EnumIter,
    EnumString,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ServiceType {
    #[default]
    Manicure,
    Pedicure,
    Both,
}

/// Options chosen for one prediction. Values are not range checked.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRequest {
    pub nail_length: Option<NailLength>,
    pub color_count: u32,
    pub decoration_count: u32,
    pub complexity: u32,
    pub technique: Technique,
    pub service_type: ServiceType,
}

impl Default for ServiceRequest {
    fn default() -> Self {
        Self {
            nail_length: None,
            color_count: 1,
            decoration_count: 0,
            complexity: DEFAULT_COMPLEXITY,
            technique: Technique::default(),
            service_type: ServiceType::default(),
        }
    }
}

impl ServiceRequest {
    /// A prediction is only offered once a nail length has been picked.
    /// Technique and service type are also required, but they always carry
    /// a default so the length is the only field that can be missing.
    pub fn is_complete(&self) -> bool {
        self.nail_length.is_some()
    }
}

fn length_factor(length: Option<NailLength>) -> f64 {
    match length {
        Some(NailLength::Short) => 0.8,
        Some(NailLength::Long) => 1.3,
        Some(NailLength::Medium) | None => 1.0,
    }
}

/// Estimated duration in minutes. Rounds half away from zero.
pub fn estimate(request: &ServiceRequest) -> i64 {
    let color_factor = 1.0 + (f64::from(request.color_count) - 1.0) * 0.15;
    let decoration_factor = 1.0 + f64::from(request.decoration_count) * 0.10;
    let complexity_factor = f64::from(request.complexity) / 3.0;

    let minutes = BASE_MINUTES
        * length_factor(request.nail_length)
        * color_factor
        * decoration_factor
        * complexity_factor;

    minutes.round() as i64
}
