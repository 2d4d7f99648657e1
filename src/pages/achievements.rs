//! Achievements page - the badge gallery.
//!
//! One bordered panel per category, cards in display order inside each.

use dioxus::prelude::*;
use stride_core::{category_label, AchievementRegistry, Category, UserAchievement};

use crate::components::{AchievementCard, BorderedPanel};

/// Achievement gallery grouped by category.
#[component]
pub fn Achievements() -> Element {
    let registry = use_hook(AchievementRegistry::builtin);

    // Unlock records belong to the external store; until it is wired in,
    // the gallery starts locked unless --demo-unlocks is set.
    let mut unlocks: Signal<Vec<UserAchievement>> = use_signal(|| {
        if crate::demo_unlocks() {
            AchievementRegistry::builtin()
                .all()
                .iter()
                .map(|a| UserAchievement::new("demo-runner".to_string(), a.id.clone()))
                .collect()
        } else {
            Vec::new()
        }
    });

    let unlocked_at = move |achievement_id: &str| -> Option<i64> {
        unlocks
            .read()
            .iter()
            .find(|u| u.achievement_id == achievement_id)
            .map(|u| u.unlocked_at)
    };

    rsx! {
        main { class: "achievements-page",
            header { class: "achievements-header",
                h1 { class: "page-title", "Logros" }
                span { class: "tagline", "{unlocks.read().len()} / {registry.len()}" }
            }

            for category in Category::ALL {
                if !registry.by_category(category.key()).is_empty() {
                    BorderedPanel {
                        title: Some(category_label(category.key()).to_string()),

                        div { class: "achievements-grid",
                            for achievement in registry.by_category(category.key()) {
                                AchievementCard {
                                    key: "{achievement.id}",
                                    achievement: achievement.clone(),
                                    unlocked_at: unlocked_at(&achievement.id),
                                    // First click on an unlocked badge records the share
                                    on_click: move |id: String| {
                                        let mut records = unlocks.write();
                                        if let Some(record) =
                                            records.iter_mut().find(|u| u.achievement_id == id)
                                        {
                                            if record.mark_shared() {
                                                tracing::info!("Shared achievement {}", id);
                                            }
                                        }
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
