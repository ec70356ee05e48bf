use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{
        components::{CardSkeletons, ErrorPanel, Page, RoomCard},
        util::api::{use_api, Loadable},
    },
    model::room::RoomDto,
};

#[component]
pub fn Rooms() -> Element {
    let rooms = use_api::<Vec<RoomDto>>("/api/rooms".to_string());

    rsx!(
        Title { "Our Rooms | Talya Hotel" }
        Meta {
            name: "description",
            content: "Discover the rooms of Talya Hotel."
        }
        Page {
            div { class: "text-center mb-12",
                h1 { class: "text-4xl md:text-5xl font-bold text-slate-800", "Our Rooms" }
                p { class: "mt-4 text-lg text-slate-500 max-w-2xl mx-auto",
                    "Discover your perfect space. Each of our rooms offers a unique blend of comfort, style, and modern amenities."
                }
            }
            {match rooms {
                Loadable::Loading => rsx!(CardSkeletons { count: 3 }),
                Loadable::Failed(_) => rsx!(
                    ErrorPanel {
                        title: "Something went wrong".to_string(),
                        message: "Could not load room information at this time.".to_string(),
                    }
                ),
                Loadable::Ready(rooms) if rooms.is_empty() => rsx!(
                    p { class: "text-center text-slate-500 py-16", "No rooms are listed at this time." }
                ),
                Loadable::Ready(rooms) => rsx!(
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                        for room in rooms {
                            RoomCard {
                                key: "{room.id}",
                                name: room.name.clone(),
                                image_url: room.image_url.clone(),
                                room_id: room.id,
                                area: room.area,
                                capacity: room.capacity,
                            }
                        }
                    }
                ),
            }}
        }
    )
}
