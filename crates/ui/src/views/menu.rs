use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::load_menu;

#[component]
pub fn MenuView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let drill = ctx.drill();

    let resource = use_resource(move || {
        let drill = drill.clone();
        async move { Ok::<_, ViewError>(load_menu(&drill).await) }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page menu-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(menu) => rsx! {
                    header { class: "menu-header",
                        div {
                            h1 { class: "menu-title", "Shabda" }
                            p { class: "menu-subtitle",
                                "Learn 11 levels of Sanskrit words. Pass with ≥80% to unlock the next."
                            }
                        }
                        span { class: "badge badge--ok", "Unlocked up to: L{menu.unlocked_max}" }
                    }
                    div { class: "level-grid",
                        for row in menu.levels {
                            button {
                                key: "{row.index}",
                                class: "level-button",
                                r#type: "button",
                                disabled: !row.unlocked,
                                title: "{row.title}",
                                onclick: move |_| {
                                    let _ = navigator.push(Route::Play { level: row.index });
                                },
                                div { class: "level-button__index", "Level {row.index}" }
                                div { class: "level-button__title", "{row.title}" }
                                div { class: "level-button__count", "{row.word_count} words" }
                            }
                        }
                    }
                },
            }
        }
    }
}
