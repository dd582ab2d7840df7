//! View derivation for the 7-day activity calendar and streak urgency.

use thiserror::Error;

use crate::icons::Icon;
use crate::models::dashboard_model::{CalendarDay, DayState};

/// The calendar always covers one week.
pub const CALENDAR_DAYS: usize = 7;

/// A streak with this many hours (or fewer) left is rendered with urgency
/// styling and triggers reminder emails.
pub const URGENT_HOURS_THRESHOLD: i64 = 6;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("activity calendar must contain exactly 7 days, got {0}")]
pub struct CalendarShapeError(pub usize);

/// One rendered cell of the calendar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub label: String,
    pub date: String,
    pub icon: Icon,
}

/// Pure derivation of the calendar row: completed days burn a flame, missed
/// days get a gray dot, pending days a dashed circle. The input must hold
/// exactly one week; the wire enum already rejects unknown statuses.
pub fn derive_calendar_view(days: &[CalendarDay]) -> Result<Vec<DayCell>, CalendarShapeError> {
    if days.len() != CALENDAR_DAYS {
        return Err(CalendarShapeError(days.len()));
    }
    Ok(days
        .iter()
        .map(|day| DayCell {
            label: day.day.clone(),
            date: day.date.clone(),
            icon: match day.status {
                DayState::Completed => Icon::Flame,
                DayState::Missed => Icon::GrayDot,
                DayState::Pending => Icon::DashedCircle,
            },
        })
        .collect())
}

/// Whether the streak is at risk purely by hours remaining. `hours_left` is
/// reported by the backend and treated as opaque, no timezone math happens
/// on the client.
pub fn is_urgent(hours_left: i64) -> bool {
    hours_left <= URGENT_HOURS_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(statuses: [DayState; 7]) -> Vec<CalendarDay> {
        let labels = ["Du", "Se", "Ch", "Pa", "Ju", "Sh", "Ya"];
        statuses
            .into_iter()
            .enumerate()
            .map(|(i, status)| CalendarDay {
                day: labels[i].to_string(),
                date: format!("2026-08-{:02}", 22 + i),
                status,
            })
            .collect()
    }

    #[test]
    fn icons_follow_statuses_exactly() {
        let days = week([
            DayState::Completed,
            DayState::Missed,
            DayState::Pending,
            DayState::Pending,
            DayState::Pending,
            DayState::Pending,
            DayState::Pending,
        ]);
        let cells = derive_calendar_view(&days).unwrap();

        let flames = cells.iter().filter(|c| c.icon == Icon::Flame).count();
        let dots = cells.iter().filter(|c| c.icon == Icon::GrayDot).count();
        let dashed = cells.iter().filter(|c| c.icon == Icon::DashedCircle).count();
        assert_eq!((flames, dots, dashed), (1, 1, 5));
        assert_eq!(cells[0].icon, Icon::Flame);
        assert_eq!(cells[1].icon, Icon::GrayDot);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let days = week([DayState::Pending; 7]);
        assert_eq!(
            derive_calendar_view(&days[..5]),
            Err(CalendarShapeError(5))
        );
        assert!(derive_calendar_view(&[]).is_err());
    }

    #[test]
    fn urgency_threshold() {
        assert!(is_urgent(0));
        assert!(is_urgent(6));
        assert!(!is_urgent(7));
        assert!(!is_urgent(24));
        // already past the deadline still counts as urgent
        assert!(is_urgent(-1));
    }
}
