use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use userdel_core::entities::AccountId;
use userdel_webserver::{jwt::JwtState, Cfg};

use crate::{config::Config, gateways};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file
    #[arg(short, long = "config", alias = "config-file", value_name = "FILE")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve {
        /// Allow requests from any origin
        #[arg(long)]
        enable_cors: bool,
    },
    /// Print a signed bearer token for the given account id
    IssueToken {
        #[arg(value_name = "UID")]
        uid: AccountId,
    },
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    let jwt_state = JwtState::new(cfg.jwt.secret.as_deref(), cfg.jwt.token_valid_for);

    match args.command.unwrap_or(Command::Serve { enable_cors: false }) {
        Command::IssueToken { uid } => {
            if cfg.jwt.secret.is_none() {
                return Err(anyhow!(
                    "Tokens can only be issued with a configured JWT secret"
                ));
            }
            let token = jwt_state.generate_token(&uid)?;
            println!("{token}");
        }
        Command::Serve { enable_cors } => {
            let gateways = gateways::from_config(&cfg)?;
            let web_cfg = Cfg {
                enable_cors: enable_cors || cfg.webserver.enable_cors,
            };
            userdel_webserver::run(web_cfg, gateways, jwt_state, env!("CARGO_PKG_VERSION")).await;
        }
    }
    Ok(())
}
