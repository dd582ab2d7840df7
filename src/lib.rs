pub mod api;
pub mod error;
pub mod gamification;
pub mod icons;
pub mod leads;
pub mod models;
pub mod reminder;
pub mod render;
pub mod run;
pub mod session;
pub mod streak;
pub mod themes;
