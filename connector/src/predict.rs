/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::estimate::{NailLength, ServiceRequest, ServiceType, Technique};
use crate::*;
use serde::{Deserialize, Serialize};

pub const PREDICT_ENDPOINT: &str = "predict-time";

/// Feature row expected by the prediction model. Enums are sent as 1-based
/// codes, an unset length as 0. The backend has also been called with a
/// numeric length such as `30`; which scale the model expects is not settled,
/// so the length code stays ordinal until the backend documents it.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct PredictTimeRequest {
    pub length: u32,
    pub colors: u32,
    pub decorations: u32,
    pub technique: u32,
    pub service_type: u32,
    pub complexity: u32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PredictTimeResponse {
    pub predicted_time: f64,
}

impl From<&ServiceRequest> for PredictTimeRequest {
    fn from(req: &ServiceRequest) -> Self {
        let length = match req.nail_length {
            None => 0,
            Some(NailLength::Short) => 1,
            Some(NailLength::Medium) => 2,
            Some(NailLength::Long) => 3,
        };

        let technique = match req.technique {
            Technique::Classic => 1,
            Technique::Gel => 2,
            Technique::French => 3,
            Technique::Ombre => 4,
        };

        let service_type = match req.service_type {
            ServiceType::Manicure => 1,
            ServiceType::Pedicure => 2,
            ServiceType::Both => 3,
        };

        Self {
            length,
            colors: req.color_count,
            decorations: req.decoration_count,
            technique,
            service_type,
            complexity: req.complexity,
        }
    }
}

/// Asks the backend model for a duration in minutes.
pub async fn post_predict_time(
    config: &RequestConfig,
    service: &ServiceRequest,
) -> Result<f64, ApiError> {
    let req = PredictTimeRequest::from(service);
    tracing::debug!(?req, "requesting remote prediction");

    let res: PredictTimeResponse =
        request(get_client(config, PREDICT_ENDPOINT, RequestType::POST, None).json(&req)).await?;

    Ok(res.predicted_time)
}
