/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::Args;
use connector::RequestConfig;
use connector::estimate::*;
use connector::predict::post_predict_time;

#[derive(Args, Debug)]
pub struct EstimateArgs {
    #[arg(short, long)]
    pub length: Option<NailLength>,
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=5))]
    pub colors: u32,
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=10))]
    pub decorations: u32,
    #[arg(short = 'x', long, default_value_t = DEFAULT_COMPLEXITY, value_parser = clap::value_parser!(u32).range(1..=5))]
    pub complexity: u32,
    #[arg(short, long, default_value_t = Technique::Classic)]
    pub technique: Technique,
    #[arg(short, long, default_value_t = ServiceType::Manicure)]
    pub service: ServiceType,
    /// Ask the server's prediction model instead of the local formula
    #[arg(short, long)]
    pub remote: bool,
}

impl From<&EstimateArgs> for ServiceRequest {
    fn from(args: &EstimateArgs) -> Self {
        Self {
            nail_length: args.length,
            color_count: args.colors,
            decoration_count: args.decorations,
            complexity: args.complexity,
            technique: args.technique,
            service_type: args.service,
        }
    }
}

pub async fn handle(args: EstimateArgs, config: RequestConfig) -> Result<(), String> {
    let request = ServiceRequest::from(&args);

    if !request.is_complete() {
        return Err("Choose a nail length with `--length <short|medium|long>`.".to_string());
    }

    if args.remote {
        let minutes = post_predict_time(&config, &request)
            .await
            .map_err(|e| e.to_string())?;
        println!("Predicted time: {:.2} minutes", minutes);
    } else {
        println!("Estimated time: {} minutes", estimate(&request));
    }

    Ok(())
}
