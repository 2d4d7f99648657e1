//! Core types for Stride achievements
//!
//! The data contract shared by the registry, the display resolvers, and the
//! external persistence and trigger-evaluation collaborators.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::AchievementError;

/// Badge color vocabulary
///
/// Closed set of keys controlling the visual gradient and glow of an
/// achievement badge. Records carry the key as a string; this enum is the
/// canonical set plus the attribute tables (see [`crate::display`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    Gold,
    Orange,
    Yellow,
    Red,
    Primary,
}

impl BadgeColor {
    /// Every recognized badge color, in declaration order
    pub const ALL: [BadgeColor; 5] = [
        BadgeColor::Gold,
        BadgeColor::Orange,
        BadgeColor::Yellow,
        BadgeColor::Red,
        BadgeColor::Primary,
    ];

    /// Canonical string key for this badge color
    pub const fn key(self) -> &'static str {
        match self {
            BadgeColor::Gold => "gold",
            BadgeColor::Orange => "orange",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Red => "red",
            BadgeColor::Primary => "primary",
        }
    }

    /// Lenient lookup: `None` for keys outside the vocabulary
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }
}

impl std::fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BadgeColor {
    type Err = AchievementError;

    /// Strict parse for producers/validators. Rendering paths use
    /// [`BadgeColor::from_key`] or the resolvers, which never fail.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| AchievementError::UnknownBadgeColor(s.to_string()))
    }
}

/// Category vocabulary
///
/// Closed set of keys grouping achievements by theme. Each key maps to a
/// localized display label via [`crate::display::category_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Streak,
    Milestone,
    IntensityZone,
    Interval,
    LongRun,
    Distance,
    HighIntensity,
    Special,
}

impl Category {
    /// Every recognized category, in declaration order
    pub const ALL: [Category; 8] = [
        Category::Streak,
        Category::Milestone,
        Category::IntensityZone,
        Category::Interval,
        Category::LongRun,
        Category::Distance,
        Category::HighIntensity,
        Category::Special,
    ];

    /// Canonical string key for this category
    pub const fn key(self) -> &'static str {
        match self {
            Category::Streak => "streak",
            Category::Milestone => "milestone",
            Category::IntensityZone => "intensity_zone",
            Category::Interval => "interval",
            Category::LongRun => "long_run",
            Category::Distance => "distance",
            Category::HighIntensity => "high_intensity",
            Category::Special => "special",
        }
    }

    /// Lenient lookup: `None` for keys outside the vocabulary
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = AchievementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| AchievementError::UnknownCategory(s.to_string()))
    }
}

/// Achievement definition
///
/// Immutable record describing one unlockable accomplishment. Created and
/// updated by an external content-management process; read-only here.
///
/// `badge_color` and `category` are carried as raw string keys so records
/// with out-of-vocabulary keys still round-trip through storage untouched.
/// The display resolvers handle unknown keys with documented fallbacks, so
/// a bad key can never break rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Unique stable identifier
    pub id: String,

    /// Display name shown on the badge card
    pub name: String,

    /// Short display description
    pub description: String,

    /// How-to text shown for locked achievements
    pub how_to_earn: String,

    /// Icon identifier, resolved by the icon-asset collaborator
    pub icon: String,

    /// Badge color key (see [`BadgeColor`])
    pub badge_color: String,

    /// Category key (see [`Category`])
    pub category: String,

    /// Opaque classification of how the achievement is earned;
    /// evaluated by the external trigger engine, never here
    pub trigger_type: String,

    /// Optional numeric threshold for the trigger; `None` means no threshold
    pub trigger_value: Option<f64>,

    /// Ascending display order; ties break by `id`
    pub sort_order: i32,
}

/// Record of one user having unlocked one achievement
///
/// Created once on unlock. `shared_at` may be set exactly once afterwards;
/// it never moves earlier (the persistence layer enforces monotonicity).
/// Never deleted in normal operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAchievement {
    /// Unique identifier of the unlock event
    pub id: String,

    /// Owning user reference
    pub user_id: String,

    /// Reference to the [`Achievement`] definition
    pub achievement_id: String,

    /// Unix timestamp of first unlock; immutable once set
    pub unlocked_at: i64,

    /// Unix timestamp of first share; `None` means never shared
    pub shared_at: Option<i64>,
}

impl UserAchievement {
    /// Create a new unlock record stamped with the current time
    pub fn new(user_id: String, achievement_id: String) -> Self {
        Self {
            id: Ulid::new().to_string(),
            user_id,
            achievement_id,
            unlocked_at: chrono::Utc::now().timestamp(),
            shared_at: None,
        }
    }

    /// Record the first share action.
    ///
    /// Returns `true` if `shared_at` was set by this call, `false` if the
    /// record was already shared (the original timestamp is kept).
    pub fn mark_shared(&mut self) -> bool {
        if self.shared_at.is_some() {
            return false;
        }
        self.shared_at = Some(chrono::Utc::now().timestamp());
        true
    }

    /// Whether this unlock has ever been shared
    pub fn is_shared(&self) -> bool {
        self.shared_at.is_some()
    }
}

/// Sort achievements into stable display order.
///
/// Ascending by `sort_order`; equal orders break ties by `id` so the result
/// is deterministic regardless of input order.
pub fn sort_achievements(achievements: &mut [Achievement]) {
    achievements.sort_by(|a, b| {
        a.sort_order
            .cmp(&b.sort_order)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn achievement(id: &str, sort_order: i32) -> Achievement {
        Achievement {
            id: id.to_string(),
            name: format!("Achievement {id}"),
            description: String::new(),
            how_to_earn: String::new(),
            icon: "trophy".to_string(),
            badge_color: "gold".to_string(),
            category: "milestone".to_string(),
            trigger_type: "total_runs".to_string(),
            trigger_value: Some(1.0),
            sort_order,
        }
    }

    #[test]
    fn test_badge_color_key_roundtrip() {
        for color in BadgeColor::ALL {
            assert_eq!(BadgeColor::from_key(color.key()), Some(color));
        }
    }

    #[test]
    fn test_badge_color_strict_parse_rejects_unknown() {
        let err = "chartreuse".parse::<BadgeColor>().unwrap_err();
        assert_eq!(
            err,
            AchievementError::UnknownBadgeColor("chartreuse".to_string())
        );
    }

    #[test]
    fn test_category_key_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
    }

    #[test]
    fn test_category_strict_parse_rejects_unknown() {
        let err = "warmup".parse::<Category>().unwrap_err();
        assert_eq!(err, AchievementError::UnknownCategory("warmup".to_string()));
    }

    #[test]
    fn test_sort_ties_break_by_id() {
        let mut list = vec![achievement("b", 1), achievement("a", 1)];
        sort_achievements(&mut list);
        let ids: Vec<&str> = list.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_sort_order_dominates_id() {
        let mut list = vec![achievement("a", 2), achievement("z", 1)];
        sort_achievements(&mut list);
        let ids: Vec<&str> = list.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["z", "a"]);
    }

    #[test]
    fn test_new_unlock_record() {
        let unlock = UserAchievement::new("runner-1".to_string(), "first-run".to_string());
        assert_eq!(unlock.user_id, "runner-1");
        assert_eq!(unlock.achievement_id, "first-run");
        assert!(unlock.unlocked_at > 0);
        assert!(unlock.shared_at.is_none());
        assert!(!unlock.is_shared());
    }

    #[test]
    fn test_unlock_ids_are_unique() {
        let a = UserAchievement::new("u".to_string(), "a".to_string());
        let b = UserAchievement::new("u".to_string(), "a".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_mark_shared_is_one_shot() {
        let mut unlock = UserAchievement::new("runner-1".to_string(), "first-run".to_string());
        assert!(unlock.mark_shared());
        let first = unlock.shared_at;
        assert!(first.is_some());

        assert!(!unlock.mark_shared());
        assert_eq!(unlock.shared_at, first);
        assert!(unlock.is_shared());
    }

    #[test]
    fn test_achievement_json_roundtrip() {
        let original = achievement("weekly-warrior", 3);
        let json = serde_json::to_string(&original).expect("serialize");
        let decoded: Achievement = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_trigger_value_absent_serializes_as_null() {
        let mut record = achievement("special-one", 1);
        record.trigger_value = None;
        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains("\"trigger_value\":null"));
    }
}
