use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod dashboard_model;
pub mod homepage_model;
pub mod lead_model;

/// A model for describing configuration of the tools.
/// Consists of:
/// 1. Base URL of the platform's REST API
/// 2. Per-request timeout in seconds
/// 3. SMTP server address
/// 4. Email address from which the reminder letters will be sent
/// 5. Email sender display name, that will be shown in the letter
/// 6. Password for email account from which the letters will be sent
#[derive(Deserialize)]
pub struct Config {
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    pub email_relay: String,
    pub email_sender_username: String,
    pub email_sender_fullname: String,
    pub email_sender_password: String,
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// A model for describing users of the streak notifier.
/// Consists of:
/// 1. User's name. Should be full, because it will be written in the beginning of the letter
/// 2. User's email address to which they will receive reminders
/// 3. Bearer token of the user's platform account
/// 4. Language the user wants the reminders in
#[derive(Debug, Deserialize, Serialize)]
pub struct WatchedUser {
    pub name: String,
    pub email: String,
    pub token: String,
    #[serde(default)]
    pub language: Lang,
}

/// Interface languages of the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Uz,
    Ru,
}

/// Response of `POST /bot/link-token/`.
#[derive(Debug, Deserialize)]
pub struct BotLink {
    pub success: bool,
    pub bot_url: Option<String>,
}

/// Response of `POST /streak/buy-freeze/`.
#[derive(Debug, Deserialize)]
pub struct FreezePurchase {
    pub success: bool,
    #[serde(default)]
    pub freezes_left: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `POST /ai-assistant-faq/query/`.
#[derive(Debug, Deserialize)]
pub struct AssistantReply {
    pub answer: String,
}
