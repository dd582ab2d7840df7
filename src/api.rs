//! HTTP client for the platform's REST API and the traits the binaries and
//! tests plug their transports into.

use std::time::Duration;

use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::dashboard_model::{DashboardResponse, Enrollment, MyCoursesResponse, StreakInfo};
use crate::models::homepage_model::{Banner, HomePageConfig, HomepageContent};
use crate::models::lead_model::Lead;
use crate::models::{AssistantReply, BotLink, Config, FreezePurchase};

/// A trait, necessary for every entity that will fetch the combined
/// dashboard payload.
#[allow(async_fn_in_trait)]
pub trait DashboardGetter {
    async fn get_dashboard(&self, token: &str) -> Result<DashboardResponse, ApiError>;
}

/// A trait, necessary for every entity that will fetch streak status for the
/// notifier.
#[allow(async_fn_in_trait)]
pub trait StreakStatusGetter {
    async fn get_streak_status(&self, token: &str) -> Result<StreakInfo, ApiError>;
}

/// A trait, necessary for every entity that will fetch the marketing
/// homepage content. Fail-open by contract: this never errors, it degrades
/// to an absent config and no banners.
#[allow(async_fn_in_trait)]
pub trait HomepageGetter {
    async fn get_homepage(&self) -> HomepageContent;
}

/// A trait, necessary for every entity that will deliver a validated lead.
#[allow(async_fn_in_trait)]
pub trait LeadSender {
    async fn send_lead(&self, lead: &Lead) -> Result<(), ApiError>;
}

pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(ApiClient {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        debug!("GET {}{}", self.base_url, path);
        let mut request = self.http.get(format!("{}{}", self.base_url, path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        decode(path, response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!("POST {}{}", self.base_url, path);
        let mut request = self.http.post(format!("{}{}", self.base_url, path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.json(body).send().await?;
        decode(path, response).await
    }

    pub async fn get_my_courses(&self, token: &str) -> Result<Vec<Enrollment>, ApiError> {
        let response: MyCoursesResponse = self.get_json("/courses/my_courses/", Some(token)).await?;
        let enrollments = response.into_enrollments();
        info!("Collected {} enrollment(s)", enrollments.len());
        Ok(enrollments)
    }

    pub async fn link_telegram(&self, token: &str) -> Result<BotLink, ApiError> {
        self.post_json("/bot/link-token/", Some(token), &serde_json::json!({}))
            .await
    }

    pub async fn buy_streak_freeze(&self, token: &str) -> Result<FreezePurchase, ApiError> {
        self.post_json("/streak/buy-freeze/", Some(token), &serde_json::json!({}))
            .await
    }

    pub async fn ask_assistant(
        &self,
        session_id: &str,
        question: &str,
    ) -> Result<AssistantReply, ApiError> {
        self.post_json(
            "/ai-assistant-faq/query/",
            None,
            &serde_json::json!({ "session_id": session_id, "question": question }),
        )
        .await
    }
}

impl DashboardGetter for ApiClient {
    async fn get_dashboard(&self, token: &str) -> Result<DashboardResponse, ApiError> {
        info!("Getting combined dashboard payload");
        self.get_json("/gamification/dashboard/", Some(token)).await
    }
}

impl StreakStatusGetter for ApiClient {
    async fn get_streak_status(&self, token: &str) -> Result<StreakInfo, ApiError> {
        self.get_json("/streak/status/", Some(token)).await
    }
}

impl HomepageGetter for ApiClient {
    async fn get_homepage(&self) -> HomepageContent {
        /* config and banners are independent fetches, either may fail alone */
        let (config, banners) = futures::future::join(
            self.get_json::<HomePageConfig>("/homepage/config/", None),
            self.get_json::<Vec<Banner>>("/homepage/banners/", None),
        )
        .await;

        let config = match config {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Homepage config unavailable, showing every section: {}", e);
                None
            }
        };
        let banners = match banners {
            Ok(banners) => banners,
            Err(e) => {
                warn!("Homepage banners unavailable: {}", e);
                Vec::new()
            }
        };
        HomepageContent { config, banners }
    }
}

impl LeadSender for ApiClient {
    async fn send_lead(&self, lead: &Lead) -> Result<(), ApiError> {
        let _: serde_json::Value = self.post_json("/leads/", None, lead).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    match status {
        status if status.is_success() => serde_json::from_str(&body)
            .map_err(|e| ApiError::Payload(format!("{} from {}", e, path))),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound(path.to_string())),
        status => Err(ApiError::FetchFailed {
            path: path.to_string(),
            status: status.as_u16(),
            body,
        }),
    }
}
