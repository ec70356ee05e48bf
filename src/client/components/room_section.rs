use dioxus::prelude::*;

use crate::{
    client::{components::RoomCard, router::Route},
    model::hotel::FeaturedRoom,
};

/// Featured rooms on the home page, priced from the hotel profile rather than live offers.
#[component]
pub fn RoomSection(rooms: Vec<FeaturedRoom>) -> Element {
    rsx! {
        section { id: "rooms", class: "py-20 bg-white",
            div { class: "container mx-auto px-6 text-center",
                p { class: "text-amber-600 font-semibold tracking-widest mb-2", "ACCOMMODATION" }
                h2 { class: "text-4xl font-bold text-slate-800 mb-4", "Our Favorite Rooms" }
                p { class: "text-slate-500 max-w-2xl mx-auto mb-12",
                    "Each of our rooms is designed with your comfort in mind, blending modern amenities with elegant style. Find your perfect sanctuary with us."
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for room in rooms {
                        RoomCard {
                            key: "{room.id}",
                            name: room.name.clone(),
                            image_url: room.image.clone(),
                            nightly_price: room.price,
                            description: room.description.clone(),
                        }
                    }
                }
                Link {
                    to: Route::Rooms {},
                    class: "btn bg-amber-500 hover:bg-amber-600 text-white border-none rounded-full px-8 mt-12",
                    "View All Rooms"
                }
            }
        }
    }
}
