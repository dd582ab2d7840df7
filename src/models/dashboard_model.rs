//! Models compatible with the combined payload of `GET /gamification/dashboard/`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

/// Status of one day in the 7-day activity calendar. Anything outside these
/// three values is a payload error, the deserializer rejects it instead of
/// picking a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayState {
    Completed,
    Missed,
    Pending,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CalendarDay {
    pub day: String,
    pub date: String,
    pub status: DayState,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StreakInfo {
    pub streak_count: u32,
    pub is_danger: bool,
    pub hours_left: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Mission {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /* free-form icon identifier chosen by the content team */
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub xp_reward: u64,
    #[serde(default)]
    pub is_completed: bool,
}

/// Level block of the dashboard. `progress_percent` comes from the backend
/// and is authoritative when present; `gamification::compute_level_progress`
/// is the fallback when it is absent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelInfo {
    pub current: u32,
    pub xp_current: u64,
    pub xp_left: u64,
    #[serde(default)]
    pub progress_percent: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelegramStatus {
    #[serde(default)]
    pub linked: bool,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubjectStat {
    pub subject: String,
    #[serde(default)]
    pub completed_lessons: u32,
    #[serde(default)]
    pub total_lessons: u32,
    #[serde(default)]
    pub xp_earned: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Course {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Enrollment {
    pub course: Course,
    /* the backend sends progress either as a number or as a string */
    #[serde(deserialize_with = "progress_from_string_or_number")]
    pub progress: f64,
    #[serde(default)]
    pub xp_earned: u64,
    #[serde(default)]
    pub total_xp_available: u64,
    pub created_at: DateTime<Utc>,
}

/// Enrollment age, bucketed the way the dashboard shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeAgo {
    Today,
    Yesterday,
    Days(i64),
    Weeks(i64),
}

impl Enrollment {
    pub fn age_bucket(&self, now: DateTime<Utc>) -> TimeAgo {
        let days = (now.date_naive() - self.created_at.date_naive()).num_days();
        match days {
            d if d <= 0 => TimeAgo::Today,
            1 => TimeAgo::Yesterday,
            d if d < 7 => TimeAgo::Days(d),
            d => TimeAgo::Weeks(d / 7),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoadmapStep {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub step_type: String,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfessionData {
    pub id: u64,
    pub name: String,
    #[serde(deserialize_with = "progress_from_string_or_number")]
    pub progress: f64,
    pub steps: Vec<RoadmapStep>,
}

impl ProfessionData {
    /// Steps are ordered; the first incomplete one is the "continue here"
    /// pointer of the roadmap.
    pub fn continue_step(&self) -> Option<&RoadmapStep> {
        self.steps.iter().find(|step| !step.is_completed)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfessionSummary {
    pub id: u64,
    pub name: String,
}

/// Combined dashboard payload. The two field groups are mutually exclusive
/// response shapes keyed by `has_active_courses`; `into_view` picks the
/// branch and checks the active one is complete.
#[derive(Debug, Deserialize)]
pub struct DashboardResponse {
    pub has_active_courses: bool,
    #[serde(default)]
    pub user: Option<serde_json::Value>,

    /* full dashboard shape */
    #[serde(default)]
    pub hero: Option<StreakInfo>,
    #[serde(default)]
    pub mission: Option<Mission>,
    #[serde(default)]
    pub calendar: Option<Vec<CalendarDay>>,
    #[serde(default)]
    pub level: Option<LevelInfo>,
    #[serde(default)]
    pub telegram: Option<TelegramStatus>,
    #[serde(default)]
    pub subject_stats: Option<Vec<SubjectStat>>,
    #[serde(default)]
    pub active_profession: Option<ProfessionData>,
    #[serde(default)]
    pub enrolled_courses: Option<Vec<Enrollment>>,

    /* empty-state shape */
    #[serde(default)]
    pub recommended_courses: Option<Vec<Course>>,
    #[serde(default)]
    pub featured_subjects: Option<Vec<String>>,
    #[serde(default)]
    pub featured_professions: Option<Vec<ProfessionSummary>>,
}

#[derive(Debug)]
pub struct ActiveDashboard {
    pub hero: StreakInfo,
    pub mission: Mission,
    pub calendar: Vec<CalendarDay>,
    pub level: LevelInfo,
    pub telegram: TelegramStatus,
    pub subject_stats: Vec<SubjectStat>,
    pub active_profession: Option<ProfessionData>,
    pub enrolled_courses: Vec<Enrollment>,
}

#[derive(Debug)]
pub struct EmptyDashboard {
    pub recommended_courses: Vec<Course>,
    pub featured_subjects: Vec<String>,
    pub featured_professions: Vec<ProfessionSummary>,
}

#[derive(Debug)]
pub enum DashboardView {
    Active(ActiveDashboard),
    Empty(EmptyDashboard),
}

impl DashboardResponse {
    pub fn into_view(self) -> Result<DashboardView, ApiError> {
        if !self.has_active_courses {
            return Ok(DashboardView::Empty(EmptyDashboard {
                recommended_courses: self.recommended_courses.unwrap_or_default(),
                featured_subjects: self.featured_subjects.unwrap_or_default(),
                featured_professions: self.featured_professions.unwrap_or_default(),
            }));
        }

        Ok(DashboardView::Active(ActiveDashboard {
            hero: self.hero.ok_or_else(|| missing("hero"))?,
            mission: self.mission.ok_or_else(|| missing("mission"))?,
            calendar: self.calendar.ok_or_else(|| missing("calendar"))?,
            level: self.level.ok_or_else(|| missing("level"))?,
            telegram: self.telegram.ok_or_else(|| missing("telegram"))?,
            subject_stats: self.subject_stats.unwrap_or_default(),
            active_profession: self.active_profession,
            enrolled_courses: self.enrolled_courses.unwrap_or_default(),
        }))
    }
}

fn missing(field: &str) -> ApiError {
    ApiError::Payload(format!("active dashboard payload without `{}`", field))
}

/// `GET /courses/my_courses/` answers either with a DRF-style page or with a
/// bare array, depending on the backend version.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MyCoursesResponse {
    Paginated { results: Vec<Enrollment> },
    Plain(Vec<Enrollment>),
}

impl MyCoursesResponse {
    pub fn into_enrollments(self) -> Vec<Enrollment> {
        match self {
            MyCoursesResponse::Paginated { results } => results,
            MyCoursesResponse::Plain(enrollments) => enrollments,
        }
    }
}

fn progress_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::String(value) => value
            .trim()
            .parse::<f64>()
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrollment_progress_accepts_number_and_string() {
        let number: Enrollment = serde_json::from_str(
            r#"{"course": {"id": 1, "title": "Algebra"}, "progress": 80, "created_at": "2026-08-20T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(number.progress, 80.0);

        let string: Enrollment = serde_json::from_str(
            r#"{"course": {"id": 1, "title": "Algebra"}, "progress": "45.5", "created_at": "2026-08-20T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(string.progress, 45.5);

        let garbage = serde_json::from_str::<Enrollment>(
            r#"{"course": {"id": 1, "title": "Algebra"}, "progress": "a lot", "created_at": "2026-08-20T10:00:00Z"}"#,
        );
        assert!(garbage.is_err());
    }

    #[test]
    fn unknown_day_status_is_rejected() {
        let day = serde_json::from_str::<CalendarDay>(
            r#"{"day": "Du", "date": "2026-08-24", "status": "SKIPPED"}"#,
        );
        assert!(day.is_err());
    }

    #[test]
    fn continue_step_points_to_first_incomplete() {
        let profession: ProfessionData = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Backend developer",
                "progress": "50",
                "steps": [
                    {"id": 1, "title": "Python basics", "type": "course", "is_completed": true},
                    {"id": 2, "title": "SQL", "type": "course", "is_completed": false},
                    {"id": 3, "title": "Django", "type": "course", "is_completed": false}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(profession.continue_step().unwrap().id, 2);

        let mut done = profession;
        for step in &mut done.steps {
            step.is_completed = true;
        }
        assert!(done.continue_step().is_none());
    }

    #[test]
    fn empty_state_view_ignores_active_fields() {
        let response: DashboardResponse = serde_json::from_str(
            r#"{"has_active_courses": false, "recommended_courses": [{"id": 3, "title": "Fizika"}]}"#,
        )
        .unwrap();
        match response.into_view().unwrap() {
            DashboardView::Empty(empty) => {
                assert_eq!(empty.recommended_courses.len(), 1);
                assert!(empty.featured_subjects.is_empty());
            }
            DashboardView::Active(_) => panic!("expected the empty-state branch"),
        }
    }

    #[test]
    fn active_view_requires_all_blocks() {
        let response: DashboardResponse =
            serde_json::from_str(r#"{"has_active_courses": true}"#).unwrap();
        assert!(matches!(
            response.into_view(),
            Err(ApiError::Payload(_))
        ));
    }

    #[test]
    fn my_courses_parses_both_shapes() {
        let plain: MyCoursesResponse = serde_json::from_str(
            r#"[{"course": {"id": 1, "title": "Algebra"}, "progress": 10, "created_at": "2026-08-20T10:00:00Z"}]"#,
        )
        .unwrap();
        assert_eq!(plain.into_enrollments().len(), 1);

        let paginated: MyCoursesResponse = serde_json::from_str(
            r#"{"count": 1, "results": [{"course": {"id": 1, "title": "Algebra"}, "progress": 10, "created_at": "2026-08-20T10:00:00Z"}]}"#,
        )
        .unwrap();
        assert_eq!(paginated.into_enrollments().len(), 1);
    }

    #[test]
    fn age_bucket_boundaries() {
        let now: DateTime<Utc> = "2026-08-28T12:00:00Z".parse().unwrap();
        let enrollment = |created: &str| Enrollment {
            course: Course {
                id: 1,
                title: "Algebra".to_string(),
                thumbnail: None,
                subject: None,
            },
            progress: 0.0,
            xp_earned: 0,
            total_xp_available: 0,
            created_at: created.parse().unwrap(),
        };

        assert_eq!(enrollment("2026-08-28T01:00:00Z").age_bucket(now), TimeAgo::Today);
        assert_eq!(enrollment("2026-08-27T23:00:00Z").age_bucket(now), TimeAgo::Yesterday);
        assert_eq!(enrollment("2026-08-23T12:00:00Z").age_bucket(now), TimeAgo::Days(5));
        assert_eq!(enrollment("2026-08-21T12:00:00Z").age_bucket(now), TimeAgo::Weeks(1));
        assert_eq!(enrollment("2026-07-28T12:00:00Z").age_bucket(now), TimeAgo::Weeks(4));
    }
}
