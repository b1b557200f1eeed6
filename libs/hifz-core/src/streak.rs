//! Daily activity streaks and streak milestones.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Streak lengths that unlock an achievement.
pub const STREAK_MILESTONES: [u32; 2] = [3, 7];

/// Stored streak counters for a student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub last_activity_date: Option<NaiveDate>,
}

/// Achievement requirement reached by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "requirement_type",
    content = "requirement_value",
    rename_all = "snake_case"
)]
pub enum Milestone {
    StreakDays(u32),
}

/// New counters to persist after today's activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakUpdate {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_activity_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<Milestone>,
}

impl StreakState {
    /// Record activity on `today` (the student's local date).
    ///
    /// Returns `None` when activity was already recorded today.
    pub fn advance(&self, today: NaiveDate) -> Option<StreakUpdate> {
        if self.last_activity_date == Some(today) {
            return None;
        }

        let yesterday = today - Duration::days(1);
        let current_streak = match self.last_activity_date {
            Some(last) if last == yesterday => self.current_streak.saturating_add(1),
            Some(last) if last < yesterday => 1,
            None => 1,
            // Recorded activity after today: leave the count alone.
            Some(_) => self.current_streak,
        };
        let longest_streak = self.longest_streak.max(current_streak);

        let milestone = STREAK_MILESTONES
            .contains(&current_streak)
            .then_some(Milestone::StreakDays(current_streak));

        Some(StreakUpdate {
            current_streak,
            longest_streak,
            last_activity_date: today,
            milestone,
        })
    }
}

/// Display tier for a streak length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakTier {
    Cold,
    Hot,
    Blazing,
}

impl StreakTier {
    pub fn from_streak(streak: u32) -> Self {
        match streak {
            7.. => Self::Blazing,
            3.. => Self::Hot,
            _ => Self::Cold,
        }
    }
}
