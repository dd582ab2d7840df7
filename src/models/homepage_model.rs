//! Models compatible with the homepage CMS endpoints.
//!
//! The visibility flags are deliberately fail-open: a flag missing from the
//! payload counts as `true`, and a wholly absent config shows every section.
//! Marketing content degrades to "always visible" during backend outages,
//! never to a blank page.

use serde::{Deserialize, Serialize};

use crate::models::Lang;

fn shown_by_default() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HomePageConfig {
    #[serde(default = "shown_by_default")]
    pub show_stats: bool,
    #[serde(default = "shown_by_default")]
    pub show_winners: bool,
    #[serde(default = "shown_by_default")]
    pub show_olympiads: bool,
    #[serde(default = "shown_by_default")]
    pub show_courses: bool,
    #[serde(default = "shown_by_default")]
    pub show_professions: bool,
    #[serde(default = "shown_by_default")]
    pub show_testimonials: bool,
    #[serde(default = "shown_by_default")]
    pub show_mentors: bool,
    #[serde(default = "shown_by_default")]
    pub show_cta: bool,

    #[serde(default)]
    pub hero_title_uz: Option<String>,
    #[serde(default)]
    pub hero_title_ru: Option<String>,
    #[serde(default)]
    pub hero_subtitle_uz: Option<String>,
    #[serde(default)]
    pub hero_subtitle_ru: Option<String>,
    #[serde(default)]
    pub cta_text_uz: Option<String>,
    #[serde(default)]
    pub cta_text_ru: Option<String>,
}

impl HomePageConfig {
    pub fn hero_title(&self, lang: Lang) -> Option<&str> {
        localized(&self.hero_title_uz, &self.hero_title_ru, lang)
    }

    pub fn hero_subtitle(&self, lang: Lang) -> Option<&str> {
        localized(&self.hero_subtitle_uz, &self.hero_subtitle_ru, lang)
    }

    pub fn cta_text(&self, lang: Lang) -> Option<&str> {
        localized(&self.cta_text_uz, &self.cta_text_ru, lang)
    }
}

/* picks the field for the requested language, falling back to the other one */
fn localized<'a>(uz: &'a Option<String>, ru: &'a Option<String>, lang: Lang) -> Option<&'a str> {
    match lang {
        Lang::Uz => uz.as_deref().or(ru.as_deref()),
        Lang::Ru => ru.as_deref().or(uz.as_deref()),
    }
}

/// Marketing sections of the homepage, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Stats,
    Winners,
    Olympiads,
    Courses,
    Professions,
    Testimonials,
    Mentors,
    Cta,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Stats,
        Section::Winners,
        Section::Olympiads,
        Section::Courses,
        Section::Professions,
        Section::Testimonials,
        Section::Mentors,
        Section::Cta,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Stats => "stats",
            Section::Winners => "winners",
            Section::Olympiads => "olympiads",
            Section::Courses => "courses",
            Section::Professions => "professions",
            Section::Testimonials => "testimonials",
            Section::Mentors => "mentors",
            Section::Cta => "cta",
        }
    }
}

/// Tri-state visibility: config present and flag true shows the section,
/// config present and flag false hides it, config absent shows it.
pub fn section_visible(config: Option<&HomePageConfig>, section: Section) -> bool {
    let Some(config) = config else {
        return true;
    };
    match section {
        Section::Stats => config.show_stats,
        Section::Winners => config.show_winners,
        Section::Olympiads => config.show_olympiads,
        Section::Courses => config.show_courses,
        Section::Professions => config.show_professions,
        Section::Testimonials => config.show_testimonials,
        Section::Mentors => config.show_mentors,
        Section::Cta => config.show_cta,
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Banner {
    pub id: u64,
    pub image_url: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// What the homepage renderer works from after the (fail-open) fetch.
#[derive(Debug, Default)]
pub struct HomepageContent {
    pub config: Option<HomePageConfig>,
    pub banners: Vec<Banner>,
}
