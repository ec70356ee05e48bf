use dioxus::prelude::*;

use crate::client::{
    components::{Footer, Navbar},
    router::Route,
};

#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        Navbar {}
        main { class: "bg-white text-slate-800",
            Outlet::<Route> {}
        }
        Footer {}
    }
}
