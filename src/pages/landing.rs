//! Landing page - entry point to Stride.

use dioxus::prelude::*;

use crate::app::Route;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();

    let view_achievements = move |_| {
        navigator.push(Route::Achievements {});
    };

    rsx! {
        main { class: "landing",
            header {
                h1 { class: "page-title", "Stride" }
                p { class: "tagline", "cada kilómetro cuenta" }
            }

            button {
                class: "btn-enter",
                onclick: view_achievements,
                "Ver Logros"
            }
        }
    }
}
