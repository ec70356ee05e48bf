use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaRulerCombined, FaUserGroup, FaWifi};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{ErrorPanel, Page},
        router::Route,
        util::api::{use_api, Loadable},
    },
    model::room::{room_description, RoomDetailDto},
};

fn check_prices_route(room_id: i64) -> Route {
    Route::BookingSearch {
        checkIn: String::new(),
        checkOut: String::new(),
        adults: String::new(),
        children: String::new(),
        roomId: room_id.to_string(),
    }
}

#[component]
pub fn RoomDetail(room_id: i64) -> Element {
    let detail = use_api::<RoomDetailDto>(format!("/api/rooms/{}", room_id));

    rsx!(
        Title { "Room Details | Talya Hotel" }
        Meta {
            name: "description",
            content: "Room details and amenities at Talya Hotel."
        }
        Page {
            {match detail {
                Loadable::Loading => rsx!(
                    div { class: "animate-pulse flex flex-col gap-6",
                        div { class: "bg-gray-200 h-96 w-full rounded-2xl" }
                        div { class: "bg-gray-200 h-8 w-1/3 rounded" }
                        div { class: "bg-gray-200 h-4 w-2/3 rounded" }
                    }
                ),
                Loadable::Failed(err) if err.is_not_found() => rsx!(
                    ErrorPanel {
                        title: "Room not found".to_string(),
                        message: "The room you are looking for does not exist.".to_string(),
                    }
                ),
                Loadable::Failed(_) => rsx!(
                    ErrorPanel {
                        title: "Something went wrong".to_string(),
                        message: "Could not load room information at this time.".to_string(),
                    }
                ),
                Loadable::Ready(detail) => rsx!(RoomDetailView { detail }),
            }}
        }
    )
}

#[component]
fn RoomDetailView(detail: RoomDetailDto) -> Element {
    let room = detail.room;
    let description = room_description(&room.name);

    rsx!(
        div { class: "grid lg:grid-cols-3 gap-12",
            div { class: "lg:col-span-2",
                img {
                    src: "{room.image_url}",
                    alt: "Photo of {room.name}",
                    class: "w-full h-96 object-cover rounded-2xl shadow-lg mb-8",
                }
                p { class: "text-amber-600 font-semibold tracking-widest uppercase mb-2", "Room Details" }
                h1 { class: "text-4xl font-bold text-slate-800 mb-4", "{room.name}" }
                div { class: "flex flex-wrap gap-6 text-slate-600 mb-6",
                    if let Some(area) = room.area {
                        span { class: "flex items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaRulerCombined }
                            "{area} m²"
                        }
                    }
                    if let Some(capacity) = room.capacity {
                        span { class: "flex items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaUserGroup }
                            "Up to {capacity} guests"
                        }
                    }
                    if room.has_wifi == Some(true) {
                        span { class: "flex items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaWifi }
                            "Free Wi-Fi"
                        }
                    }
                    if room.has_balcony == Some(true) {
                        span { "Balcony" }
                    }
                }
                p { class: "text-slate-600 leading-relaxed mb-8", "{description}" }
                if !detail.features.is_empty() {
                    h2 { class: "text-2xl font-semibold text-slate-800 mb-4", "What this room offers" }
                    ul { class: "grid grid-cols-1 md:grid-cols-2 gap-3",
                        for feature in detail.features {
                            li { key: "{feature}", class: "flex items-center gap-3 text-slate-700",
                                span { class: "text-amber-600",
                                    Icon { width: 14, height: 14, icon: FaCheck }
                                }
                                "{feature}"
                            }
                        }
                    }
                }
            }
            aside { class: "lg:col-span-1",
                div { class: "sticky top-32 bg-white rounded-2xl shadow-lg border border-slate-200 p-6 flex flex-col gap-4",
                    h2 { class: "text-2xl font-bold text-slate-800", "Ready to Book?" }
                    p { class: "text-slate-500", "Choose your dates to see available offers for this room." }
                    Link {
                        to: check_prices_route(room.id),
                        class: "btn bg-amber-500 hover:bg-amber-600 text-white border-none rounded-xl",
                        "Check Prices"
                    }
                }
            }
        }
    )
}
