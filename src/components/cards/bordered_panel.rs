//! Bordered Panel Primitive
//!
//! Decorative framed container with accent corners, used to group cards.

use dioxus::prelude::*;

/// Decorative bordered container
///
/// # Examples
///
/// ```rust
/// rsx! {
///     BorderedPanel {
///         title: Some("Racha".to_string()),
///         div { "panel content" }
///     }
/// }
/// ```
#[component]
pub fn BorderedPanel(
    /// Optional uppercase section title
    #[props(default = None)]
    title: Option<String>,
    /// Panel contents
    children: Element,
) -> Element {
    rsx! {
        section { class: "bordered-panel",
            span { class: "bordered-panel__corner bordered-panel__corner--tl" }
            span { class: "bordered-panel__corner bordered-panel__corner--tr" }
            span { class: "bordered-panel__corner bordered-panel__corner--bl" }
            span { class: "bordered-panel__corner bordered-panel__corner--br" }

            if let Some(text) = title {
                h2 { class: "bordered-panel__title", "{text}" }
            }

            {children}
        }
    }
}
