//! Display attribute resolution
//!
//! Pure lookups from classification keys to presentation attributes. The
//! tables are `'static` data compiled into the binary; nothing here ever
//! mutates, blocks, or fails, so the resolvers are safe to call from any
//! thread without synchronization.
//!
//! Fallback policy (the entire error-handling surface of this module):
//! - unknown badge color key → the `primary` mapping
//! - unknown category key → the raw key, unchanged, so a missing
//!   translation shows up on screen instead of disappearing silently

use crate::types::{BadgeColor, Category};

impl BadgeColor {
    /// Gradient class for the badge background
    pub const fn gradient_class(self) -> &'static str {
        match self {
            BadgeColor::Gold => "from-yellow-400 to-amber-600",
            BadgeColor::Orange => "from-orange-400 to-red-500",
            BadgeColor::Yellow => "from-yellow-300 to-yellow-500",
            BadgeColor::Red => "from-red-500 to-rose-600",
            BadgeColor::Primary => "from-emerald-400 to-teal-600",
        }
    }

    /// Glow class for the badge halo
    pub const fn glow_class(self) -> &'static str {
        match self {
            BadgeColor::Gold => "glow-amber",
            BadgeColor::Orange => "glow-orange",
            BadgeColor::Yellow => "glow-yellow",
            BadgeColor::Red => "glow-red",
            BadgeColor::Primary => "glow-emerald",
        }
    }
}

impl Category {
    /// Localized (Spanish) display label for this category
    pub const fn label(self) -> &'static str {
        match self {
            Category::Streak => "Racha",
            Category::Milestone => "Hito",
            Category::IntensityZone => "Zona de Intensidad",
            Category::Interval => "Intervalos",
            Category::LongRun => "Trote Largo",
            Category::Distance => "Distancia",
            Category::HighIntensity => "Alta Intensidad",
            Category::Special => "Especial",
        }
    }
}

/// Resolve a badge color key to its gradient class.
///
/// Unknown keys resolve to the `primary` gradient; rendering must never
/// break on a bad key.
pub fn badge_gradient(key: &str) -> &'static str {
    BadgeColor::from_key(key)
        .unwrap_or(BadgeColor::Primary)
        .gradient_class()
}

/// Resolve a badge color key to its glow class.
///
/// Same key set and fallback as [`badge_gradient`].
pub fn badge_glow(key: &str) -> &'static str {
    BadgeColor::from_key(key)
        .unwrap_or(BadgeColor::Primary)
        .glow_class()
}

/// Resolve a category key to its localized label.
///
/// Unknown keys come back unchanged so an untranslated category is
/// diagnosable in the UI.
pub fn category_label(key: &str) -> &str {
    match Category::from_key(key) {
        Some(category) => category.label(),
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gold_gradient() {
        assert_eq!(badge_gradient("gold"), "from-yellow-400 to-amber-600");
    }

    #[test]
    fn test_unknown_badge_color_falls_back_to_primary() {
        assert_eq!(
            badge_gradient("nonexistent"),
            BadgeColor::Primary.gradient_class()
        );
        assert_eq!(badge_glow("nonexistent"), BadgeColor::Primary.glow_class());
    }

    #[test]
    fn test_long_run_label() {
        assert_eq!(category_label("long_run"), "Trote Largo");
    }

    #[test]
    fn test_unknown_category_returns_raw_key() {
        assert_eq!(category_label("nonexistent"), "nonexistent");
    }
}
