/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod commands;
mod config;
mod input;
mod store;

use std::process::exit;

#[tokio::main]
pub async fn main() {
    if let Err(e) = commands::base::run_cli().await {
        eprintln!("{}", e);
        exit(1);
    }
}
