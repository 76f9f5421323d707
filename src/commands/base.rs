/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::config::*;
use crate::input::*;
use crate::store::ConfigTokenStore;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use connector::RequestConfig;
use connector::auth::AuthClient;
use connector::session::SessionState;
use connector::user::Role;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Salon", display_name = "Salon", bin_name = "salon", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    generate_completions: Option<Shell>,
    /// Path of the configuration file
    #[arg(long, env = "SALON_CONFIG", global = true)]
    config: Option<PathBuf>,
    #[arg(long, env = "SALON_LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    Config {
        key: String,
        value: Option<String>,
    },
    Register {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        role: Option<Role>,
    },
    Login {
        #[arg(short, long)]
        email: Option<String>,
    },
    Logout,
    Info,
    Dashboard,
    Update(profile::UpdateArgs),
    Estimate(estimate::EstimateArgs),
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn auth_client(file: &ConfigFile) -> Result<AuthClient<ConfigTokenStore>, String> {
    let config = RequestConfig::new(file.server_url()?);
    Ok(AuthClient::new(config, ConfigTokenStore::new(file.clone())))
}

pub async fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        let mut app = Cli::command();
        let bin_name = app.get_name().to_string();
        generate(shell, &mut app, bin_name, &mut io::stdout());
        return Ok(());
    }

    init_logging(&cli.log_level);

    let Some(cmd) = cli.cmd else {
        return Err("No subcommand provided. Use `salon --help` to list them.".to_string());
    };

    let file = ConfigFile::locate(cli.config)?;
    tracing::debug!(path = %file.path().display(), "using configuration file");

    match cmd {
        MainCommands::Config { key, value } => {
            set_get_value(&file, &key, value, false)?;
        }

        MainCommands::Register { name, email, role } => {
            let name = value_or_ask(name, "Name")?;
            let email = value_or_ask(email, "Email")?;
            let role = match role {
                Some(role) => role,
                None => ask_for_input("Role (client, worker, owner)")?
                    .parse::<Role>()
                    .map_err(|_| "Role must be one of client, worker, owner.".to_string())?,
            };
            let password = ask_for_password("Password")?;

            let mut auth = auth_client(&file)?;
            let res = auth
                .register(&name, &email, &password, role)
                .await
                .map_err(|e| format!("Registration failed: {}", e))?;

            println!("Registration successful.");
            println!("{}", dashboard::render(&SessionState::Authenticated(res.user)));
        }

        MainCommands::Login { email } => {
            let email = value_or_ask(email, "Email")?;
            let password = ask_for_password("Password")?;

            let mut auth = auth_client(&file)?;
            let res = auth
                .login(&email, &password)
                .await
                .map_err(|e| format!("Login failed: {}", e))?;

            println!("{}", dashboard::render(&SessionState::Authenticated(res.user)));
        }

        MainCommands::Logout => {
            auth_client(&file)?.logout();
            println!("Logged out.");
        }

        MainCommands::Info => {
            let user = auth_client(&file)?
                .verify_token()
                .await
                .map_err(|e| e.to_string())?;

            println!("Name: {}", user.name);
            println!("Email: {}", user.email);
            println!("Role: {}", user.role);
        }

        MainCommands::Dashboard => {
            let state = auth_client(&file)?.session_state().await;
            println!("{}", dashboard::render(&state));
        }

        MainCommands::Update(args) => {
            profile::handle_update(args, &mut auth_client(&file)?).await?;
        }

        MainCommands::Estimate(args) => {
            let config = RequestConfig::new(file.server_url()?);
            estimate::handle(args, config).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_register_role_parses() {
        let cli = Cli::try_parse_from(["salon", "register", "-n", "Ana", "-r", "Owner"]).unwrap();

        match cli.cmd {
            Some(MainCommands::Register { name, role, .. }) => {
                assert_eq!(name.as_deref(), Some("Ana"));
                assert_eq!(role, Some(Role::Owner));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(Cli::try_parse_from(["salon", "register", "-r", "admin"]).is_err());
    }
}
