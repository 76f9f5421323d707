/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::input::*;
use clap::Args;
use connector::ApiError;
use connector::auth::AuthClient;
use connector::session::TokenStore;
use connector::user::UserUpdate;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub email: Option<String>,
    /// Prompt for a new password
    #[arg(short, long)]
    pub password: bool,
}

pub async fn handle_update<S: TokenStore>(
    args: UpdateArgs,
    auth: &mut AuthClient<S>,
) -> Result<(), String> {
    let me = auth.verify_token().await.map_err(|e| e.to_string())?;

    let mut update = UserUpdate {
        name: args.name,
        email: args.email,
        password: None,
    };

    if args.password {
        let password = ask_for_password("New password")?;
        let repeated = ask_for_password("Repeat new password")?;

        if password != repeated {
            return Err("Passwords do not match.".to_string());
        }

        update = update.password(password);
    }

    let update = update.changes_from(&me);

    if update.is_empty() {
        return Err(ApiError::NoChanges.to_string());
    }

    let current_password = if update.changes_credentials() {
        Some(ask_for_password("Current password")?)
    } else {
        None
    };

    let user = auth
        .update_user(&me, update, current_password.as_deref())
        .await
        .map_err(|e| e.to_string())?;

    println!("Profile updated.");
    println!("Name: {}", user.name);
    println!("Email: {}", user.email);

    Ok(())
}
