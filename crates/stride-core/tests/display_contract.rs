//! Display attribute contract tests
//!
//! Verifies the rendering contract that badge/card components rely on:
//! every vocabulary key resolves to a usable attribute, unknown keys hit
//! the documented fallbacks, and the two badge tables stay in lockstep.

use std::collections::HashSet;

use stride_core::{
    badge_glow, badge_gradient, category_label, sort_achievements, Achievement, BadgeColor,
    Category,
};

#[test]
fn every_badge_color_has_nonempty_distinct_gradient() {
    let gradients: HashSet<&str> = BadgeColor::ALL
        .iter()
        .map(|c| {
            let gradient = badge_gradient(c.key());
            assert!(!gradient.is_empty(), "empty gradient for {}", c.key());
            gradient
        })
        .collect();
    assert_eq!(gradients.len(), BadgeColor::ALL.len());
}

#[test]
fn every_badge_color_has_nonempty_distinct_glow() {
    let glows: HashSet<&str> = BadgeColor::ALL
        .iter()
        .map(|c| {
            let glow = badge_glow(c.key());
            assert!(!glow.is_empty(), "empty glow for {}", c.key());
            glow
        })
        .collect();
    assert_eq!(glows.len(), BadgeColor::ALL.len());
}

// The gradient and glow tables are keyed by the same enum, so key-set
// equality holds structurally; this pins it against a refactor that
// splits the tables apart again.
#[test]
fn gradient_and_glow_tables_share_one_key_set() {
    for color in BadgeColor::ALL {
        assert!(!color.gradient_class().is_empty());
        assert!(!color.glow_class().is_empty());
    }
    let gradient_keys: HashSet<&str> = BadgeColor::ALL.iter().map(|c| c.key()).collect();
    let glow_keys: HashSet<&str> = BadgeColor::ALL.iter().map(|c| c.key()).collect();
    assert_eq!(gradient_keys, glow_keys);
}

#[test]
fn every_category_has_a_real_translation() {
    for category in Category::ALL {
        let label = category_label(category.key());
        assert!(!label.is_empty(), "empty label for {}", category.key());
        assert_ne!(
            label,
            category.key(),
            "label for {} is the raw key",
            category.key()
        );
    }
}

#[test]
fn unknown_badge_color_resolves_to_primary_mapping() {
    assert_eq!(badge_gradient("nonexistent"), badge_gradient("primary"));
    assert_eq!(badge_glow("nonexistent"), badge_glow("primary"));
}

#[test]
fn unknown_category_label_is_the_raw_key() {
    assert_eq!(category_label("nonexistent"), "nonexistent");
}

#[test]
fn pinned_table_values() {
    assert_eq!(badge_gradient("gold"), "from-yellow-400 to-amber-600");
    assert_eq!(category_label("long_run"), "Trote Largo");
}

#[test]
fn equal_sort_orders_break_ties_by_id() {
    let record = |id: &str| Achievement {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        how_to_earn: String::new(),
        icon: "trophy".to_string(),
        badge_color: "gold".to_string(),
        category: "milestone".to_string(),
        trigger_type: "total_runs".to_string(),
        trigger_value: None,
        sort_order: 1,
    };

    let mut list = vec![record("b"), record("a")];
    sort_achievements(&mut list);
    let ids: Vec<&str> = list.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}
