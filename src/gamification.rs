//! Level/XP arithmetic and the percentile rank buckets.
//!
//! The backend sends a ready `progress_percent` with the dashboard payload
//! and that value wins when present; this module is the documented formula
//! used as the fallback and by views that only have raw XP.

use std::fmt;

/// XP span of a single level.
pub const XP_STEP: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    /// Percent into the current level, clamped to [0, 100].
    pub percent: f64,
    /// XP earned since the current level's floor.
    pub xp_in_level: u64,
    /// Total XP at which the next level starts.
    pub xp_needed: u64,
}

/// Total XP at which `level` begins.
pub fn xp_floor(level: u32) -> u64 {
    (u64::from(level.max(1)) - 1) * XP_STEP
}

/// Total XP at which `level` ends.
pub fn xp_needed(level: u32) -> u64 {
    u64::from(level.max(1)) * XP_STEP
}

/// Computes progress through the current level. `level == 0` is normalized
/// to 1; XP below the level floor reads as 0 %, XP above the ceiling as
/// 100 %, never more.
pub fn compute_level_progress(level: u32, xp: u64) -> LevelProgress {
    let level = level.max(1);
    let floor = xp_floor(level);
    let needed = xp_needed(level);
    let span = needed - floor;
    let xp_in_level = xp.saturating_sub(floor);
    let percent = (100.0 * xp_in_level as f64 / span as f64).min(100.0);
    LevelProgress {
        percent,
        xp_in_level,
        xp_needed: needed,
    }
}

/// Percentile bucket shown next to the XP counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBucket {
    Top1,
    Top5,
    Top10,
    Top25,
    Top50,
    New,
}

impl fmt::Display for RankBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RankBucket::Top1 => "Top 1%",
            RankBucket::Top5 => "Top 5%",
            RankBucket::Top10 => "Top 10%",
            RankBucket::Top25 => "Top 25%",
            RankBucket::Top50 => "Top 50%",
            RankBucket::New => "New",
        };
        f.write_str(label)
    }
}

/// Fixed XP thresholds, highest one met wins.
pub fn rank_bucket(xp: u64) -> RankBucket {
    match xp {
        xp if xp >= 5000 => RankBucket::Top1,
        xp if xp >= 3000 => RankBucket::Top5,
        xp if xp >= 2000 => RankBucket::Top10,
        xp if xp >= 1000 => RankBucket::Top25,
        xp if xp >= 500 => RankBucket::Top50,
        _ => RankBucket::New,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_reads_zero_and_ceiling_reads_full() {
        for level in 1..=20 {
            assert_eq!(compute_level_progress(level, xp_floor(level)).percent, 0.0);
            assert_eq!(compute_level_progress(level, xp_needed(level)).percent, 100.0);
        }
    }

    #[test]
    fn level_three_scenario() {
        let progress = compute_level_progress(3, 1300);
        assert_eq!(xp_floor(3), 1000);
        assert_eq!(progress.xp_needed, 1500);
        assert_eq!(progress.xp_in_level, 300);
        assert_eq!(progress.percent, 60.0);
    }

    #[test]
    fn xp_outside_the_level_clamps() {
        assert_eq!(compute_level_progress(3, 200).percent, 0.0);
        assert_eq!(compute_level_progress(3, 99_999).percent, 100.0);
    }

    #[test]
    fn level_zero_is_normalized_to_one() {
        let progress = compute_level_progress(0, 250);
        assert_eq!(progress.xp_needed, 500);
        assert_eq!(progress.percent, 50.0);
    }

    #[test]
    fn rank_thresholds() {
        assert_eq!(rank_bucket(0), RankBucket::New);
        assert_eq!(rank_bucket(499), RankBucket::New);
        assert_eq!(rank_bucket(500), RankBucket::Top50);
        assert_eq!(rank_bucket(1000), RankBucket::Top25);
        assert_eq!(rank_bucket(2999), RankBucket::Top10);
        assert_eq!(rank_bucket(3000), RankBucket::Top5);
        assert_eq!(rank_bucket(5000), RankBucket::Top1);
        assert_eq!(rank_bucket(1_000_000), RankBucket::Top1);
    }

    #[test]
    fn rank_labels() {
        assert_eq!(rank_bucket(5000).to_string(), "Top 1%");
        assert_eq!(rank_bucket(10).to_string(), "New");
    }
}
