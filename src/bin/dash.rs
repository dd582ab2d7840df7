use std::path::PathBuf;
use std::process::ExitCode;

use bilim_dash_notify::api::{ApiClient, HomepageGetter};
use bilim_dash_notify::error::ApiError;
use bilim_dash_notify::leads::submit_lead;
use bilim_dash_notify::models::lead_model::Lead;
use bilim_dash_notify::models::{Config, Lang};
use bilim_dash_notify::render::{render_courses, render_dashboard, render_homepage};
use bilim_dash_notify::run::load_dashboard;
use bilim_dash_notify::session::SessionStore;
use chrono::Utc;
use clap::{command, Parser, Subcommand};
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::{error, info};

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that contains the API base URL and sender configuration.
/// 2. Path to session.json, the single local cache of token/user/assistant-session.
/// 3. Interface language for the rendered output.
/// 4. The command to run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    config_json_path: PathBuf,
    #[arg(long, value_name = "FILE", default_value = "session.json")]
    session_json_path: PathBuf,
    #[arg(long, value_enum, default_value_t = Lang::Uz)]
    lang: Lang,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Store a bearer token for the following commands
    Login { token: String },
    /// Drop the local session
    Logout,
    /// Fetch and render the student dashboard
    Dashboard,
    /// Fetch and render my enrolled courses
    Courses,
    /// Fetch and render the marketing homepage
    Homepage,
    /// Submit a sales lead
    Lead {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        telegram_username: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Get a Telegram bot deep link for this account
    LinkTelegram,
    /// Spend coins on a streak freeze
    BuyFreeze,
    /// Ask the AI assistant a question
    Ask { question: String },
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
    let client = match ApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Could not build HTTP client: {}", e);
            return ExitCode::from(2);
        }
    };
    let store = SessionStore::new(args.session_json_path.clone());

    match execute(&args, &client, &store).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(
    args: &Args,
    client: &ApiClient,
    store: &SessionStore,
) -> Result<String, Box<dyn std::error::Error>> {
    match &args.command {
        Command::Login { token } => {
            store.store_token(token, args.lang)?;
            Ok("OK".to_string())
        }
        Command::Logout => {
            store.clear()?;
            Ok("OK".to_string())
        }
        Command::Dashboard => {
            let view = load_dashboard(client, store).await?;
            Ok(render_dashboard(&view, args.lang, Utc::now()))
        }
        Command::Courses => {
            let token = store.require_token()?;
            let enrollments = client.get_my_courses(&token).await?;
            Ok(render_courses(&enrollments, args.lang, Utc::now()))
        }
        Command::Homepage => {
            let content = client.get_homepage().await;
            Ok(render_homepage(&content, args.lang))
        }
        Command::Lead {
            name,
            phone,
            telegram_username,
            note,
        } => {
            let lead = Lead::new(
                name.clone(),
                phone.clone(),
                telegram_username.clone(),
                note.clone(),
            );
            submit_lead(client, &lead).await?;
            Ok("OK".to_string())
        }
        Command::LinkTelegram => {
            let token = store.require_token()?;
            let link = client.link_telegram(&token).await?;
            match (link.success, link.bot_url) {
                (true, Some(url)) => Ok(url),
                _ => Err(Box::new(ApiError::Payload(
                    "bot link request did not return an url".to_string(),
                ))),
            }
        }
        Command::BuyFreeze => {
            let token = store.require_token()?;
            let purchase = client.buy_streak_freeze(&token).await?;
            if purchase.success {
                info!("Freezes left: {:?}", purchase.freezes_left);
                Ok(purchase.message.unwrap_or_else(|| "OK".to_string()))
            } else {
                Err(Box::new(ApiError::Payload(
                    purchase
                        .message
                        .unwrap_or_else(|| "freeze purchase refused".to_string()),
                )))
            }
        }
        Command::Ask { question } => {
            let session_id = store.ensure_ai_session_id()?;
            let reply = client.ask_assistant(&session_id, question).await?;
            Ok(reply.answer)
        }
    }
}
