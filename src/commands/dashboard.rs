/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use connector::session::SessionState;
use connector::user::{Role, User};

pub fn render(state: &SessionState) -> String {
    match state {
        SessionState::Unauthenticated => {
            "Welcome to the salon.\nUse `salon login` or `salon register` to get started.".to_string()
        }
        SessionState::Authenticated(user) => render_user(user),
    }
}

fn render_user(user: &User) -> String {
    let body = match user.role {
        Role::Client => {
            "Estimate your visit with `salon estimate --length <short|medium|long>`.\n\
             Update your profile with `salon update`."
        }
        Role::Worker => "Your schedule is managed by the salon owner.",
        Role::Owner => "You manage the salon team and its schedule.",
    };

    format!(
        "{} dashboard: {} <{}>\n{}",
        heading(user.role),
        user.name,
        user.email,
        body
    )
}

fn heading(role: Role) -> &'static str {
    match role {
        Role::Client => "Client",
        Role::Worker => "Staff",
        Role::Owner => "Owner",
    }
}
