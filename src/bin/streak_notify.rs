use std::path::PathBuf;
use std::process::ExitCode;

use bilim_dash_notify::api::ApiClient;
use bilim_dash_notify::models::Config;
use bilim_dash_notify::run::{get_watched_users, run_streak_watch};
use clap::{command, Parser};
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use lettre::{
    transport::smtp::authentication::{Credentials, Mechanism},
    SmtpTransport,
};
use log::{error, info};

/// A model for describing ARGS of the notifier.
/// Consists of:
/// 1. Path to users.json, that provides the users whose streaks are watched and their reminder addresses.
/// 2. Path to config.json, that contains the API base URL and email sender configuration parameters.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, value_name = "FILE", default_value = "users.json")]
    users_json_path: PathBuf,
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    config_json_path: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config: Config = match Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("BILIM_"))
        .extract()
    {
        Ok(config) => config,
        Err(e) => {
            error!("Could not read config: {}", e);
            return ExitCode::from(2);
        }
    };
    info!(
        "Read config.json from {}",
        args.config_json_path.display()
    );

    let client = match ApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Could not build HTTP client: {}", e);
            return ExitCode::from(2);
        }
    };

    let sender = match SmtpTransport::relay(&config.email_relay) {
        Ok(builder) => builder
            .credentials(Credentials::new(
                config.email_sender_username.to_owned(),
                config.email_sender_password.to_owned(),
            ))
            .authentication(vec![Mechanism::Plain])
            .build(),
        Err(e) => {
            error!("Could not set up SMTP relay: {}", e);
            return ExitCode::from(2);
        }
    };

    /* Get latest info about watched users */
    let users = match get_watched_users(&args.users_json_path) {
        Ok(users) => users,
        Err(e) => {
            error!("Could not read users.json: {}", e);
            return ExitCode::from(2);
        }
    };

    /* Check streaks and send reminders */
    run_streak_watch(&client, sender, users, &config).await;
    ExitCode::SUCCESS
}
