//! Orchestration entry points shared by the binaries and the integration
//! tests (which substitute the getter/sender traits).

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use futures::future;
use log::{debug, error, info, warn};

use crate::api::{DashboardGetter, StreakStatusGetter};
use crate::error::ApiError;
use crate::models::dashboard_model::{DashboardView, StreakInfo};
use crate::models::{Config, WatchedUser};
use crate::reminder::ReminderSender;
use crate::session::SessionStore;
use crate::streak::is_urgent;

pub fn log_all_users(users: &[WatchedUser]) {
    for user in users.iter() {
        debug!(
            "Serving {}, who gets streak reminders in {:?} at {}",
            user.name, user.language, user.email
        );
    }
}

pub fn get_watched_users(users_json_path: &Path) -> Result<Vec<WatchedUser>, Box<dyn Error>> {
    info!(
        "Reading users.json from {}",
        std::path::absolute(users_json_path)?.display()
    );
    let users_file = BufReader::new(File::open(users_json_path)?);
    let users: Vec<WatchedUser> = serde_json::from_reader(users_file)?;
    log_all_users(&users);
    Ok(users)
}

/// Loads the combined dashboard payload for the stored session and converts
/// it into the view branch. A 401/403 clears the stale session; a success
/// refreshes the cached user object.
pub async fn load_dashboard<G: DashboardGetter>(
    getter: &G,
    store: &SessionStore,
) -> Result<DashboardView, ApiError> {
    let token = store.require_token()?;

    let response = match getter.get_dashboard(&token).await {
        Ok(response) => response,
        Err(ApiError::Unauthorized) => {
            if let Err(e) = store.clear() {
                warn!("Could not clear stale session: {}", e);
            }
            return Err(ApiError::Unauthorized);
        }
        Err(e) => return Err(e),
    };

    if let Some(user) = &response.user {
        if let Err(e) = store.cache_user(user) {
            warn!("Could not cache user object: {}", e);
        }
    }

    response.into_view()
}

/// The notifier pipeline: fetch every watched user's streak status
/// concurrently, keep the endangered ones, hand them to the sender. A failed
/// fetch for one user never blocks reminders for the others.
pub async fn run_streak_watch<G: StreakStatusGetter, S: ReminderSender>(
    getter: &G,
    sender: S,
    users: Vec<WatchedUser>,
    config: &Config,
) {
    let statuses =
        future::join_all(users.iter().map(|user| getter.get_streak_status(&user.token))).await;

    let mut endangered: Vec<(WatchedUser, StreakInfo)> = Vec::new();
    for (user, status) in users.into_iter().zip(statuses) {
        match status {
            Ok(streak) if streak.is_danger || is_urgent(streak.hours_left) => {
                endangered.push((user, streak));
            }
            Ok(streak) => debug!(
                "{} is safe with a {}-day streak and {} hours left",
                user.name, streak.streak_count, streak.hours_left
            ),
            Err(e) => error!("Could not get streak status for {}: {}", user.name, e),
        }
    }
    info!("Found {} endangered streak(s)", endangered.len());

    sender.send_reminders(config, endangered);
}
