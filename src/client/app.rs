use dioxus::prelude::*;

use crate::client::{router::Route, store::hotel::HotelState};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let hotel_store = use_context_provider(|| Signal::new(HotelState::default()));

    // Retrieve hotel profile on app load
    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::{client::util::api::get_json, model::hotel::HotelProfile};

        let mut hotel_store = hotel_store;

        use_future(move || async move {
            let profile = match get_json::<HotelProfile>("/api/hotel").await {
                Ok(profile) => profile,
                Err(err) => {
                    tracing::error!("Failed to load hotel profile, using built-in profile: {}", err);
                    HotelProfile::default()
                }
            };

            hotel_store.write().profile = Some(profile);
        });
    }

    #[cfg(not(feature = "web"))]
    let _ = hotel_store;

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
