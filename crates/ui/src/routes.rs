use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{MenuView, SessionView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", MenuView)] Menu {},
        #[route("/play/:level", SessionView)] Play { level: u32 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
