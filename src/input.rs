/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use rpassword::read_password;
use std::io;
use std::io::Write;

pub fn ask_for_password(prompt: &str) -> Result<String, String> {
    print!("{}: ", prompt);
    io::stdout().flush().map_err(|e| e.to_string())?;
    let inp = read_password().map_err(|e| format!("Failed to read {}: {}", prompt, e))?;

    if inp.is_empty() {
        return Err(format!("{} cannot be empty.", prompt));
    }

    Ok(inp)
}

pub fn ask_for_input(prompt: &str) -> Result<String, String> {
    print!("{}: ", prompt);
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut inp = String::new();
    io::stdin()
        .read_line(&mut inp)
        .map_err(|e| format!("Failed to read {}: {}", prompt, e))?;
    let inp = inp.trim().to_string();

    if inp.is_empty() {
        return Err(format!("{} cannot be empty.", prompt));
    }

    Ok(inp)
}

/// Returns the given value or prompts for it.
pub fn value_or_ask(value: Option<String>, prompt: &str) -> Result<String, String> {
    match value {
        Some(value) => Ok(value),
        None => ask_for_input(prompt),
    }
}
