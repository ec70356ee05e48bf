use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Title { "Page Not Found | Talya Hotel" }
        Page { class: "flex flex-col items-center justify-center gap-4 py-24 text-center",
            h1 { class: "text-4xl font-bold text-slate-800", "Page Not Found" }
            p { class: "text-slate-500", "We couldn't find anything at {path}." }
            Link {
                to: Route::Home {},
                class: "btn bg-amber-500 hover:bg-amber-600 text-white border-none rounded-full px-8",
                "Back to Home"
            }
        }
    )
}
