//! Achievement Card Component
//!
//! Feature card for one achievement: gradient badge, name, category chip,
//! and locked/unlocked treatment.

use dioxus::prelude::*;
use stride_core::{badge_glow, badge_gradient, category_label, Achievement};

/// Achievement badge card
///
/// Display attributes come from the core resolvers, so an achievement with
/// an out-of-vocabulary badge color still renders (with the primary badge
/// styling) instead of breaking the page.
///
/// # Examples
///
/// ```rust
/// rsx! {
///     AchievementCard {
///         achievement: achievement,
///         unlocked_at: Some(1735689600),
///     }
/// }
/// ```
#[component]
pub fn AchievementCard(
    /// Achievement definition
    achievement: Achievement,
    /// Unix timestamp of the user's unlock, `None` while still locked
    #[props(default = None)]
    unlocked_at: Option<i64>,
    /// Optional click handler, called with the achievement id
    #[props(default = None)]
    on_click: Option<EventHandler<String>>,
) -> Element {
    let gradient = badge_gradient(&achievement.badge_color);
    let glow = badge_glow(&achievement.badge_color);
    let label = category_label(&achievement.category).to_string();

    let locked_class = if unlocked_at.is_none() {
        "achievement-card--locked"
    } else {
        ""
    };
    let interactive_class = if on_click.is_some() { "interactive" } else { "" };

    let handle_click = move |_| {
        if let Some(handler) = &on_click {
            handler.call(achievement.id.clone());
        }
    };

    rsx! {
        div {
            class: "achievement-card {locked_class} {interactive_class}",
            onclick: handle_click,

            div { class: "achievement-badge {gradient} {glow}",
                img {
                    class: "achievement-badge__icon",
                    src: "assets/icons/{achievement.icon}.svg",
                    alt: "{achievement.name}",
                }
            }

            div { class: "achievement-card__name", "{achievement.name}" }

            span { class: "achievement-card__chip", "{label}" }

            if let Some(timestamp) = unlocked_at {
                div { class: "achievement-card__date",
                    {format_unlock_date(timestamp)}
                }
            } else {
                div { class: "achievement-card__hint", "{achievement.how_to_earn}" }
            }
        }
    }
}

/// Format an unlock timestamp for the card footer
fn format_unlock_date(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_default()
}
