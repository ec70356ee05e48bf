use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowRight, FaCircleCheck, FaCircleXmark, FaRulerCombined, FaStar, FaUserGroup,
};
use dioxus_free_icons::Icon;

use crate::{
    client::router::Route,
    model::room::{room_description, PLACEHOLDER_IMAGE},
};

/// Card for a room type, or for a priced offer when `select_offer` is set.
///
/// Offer cards show the meal plan and cancellation policy, plain room cards fall back to
/// `description` or a curated blurb for the room name.
#[component]
pub fn RoomCard(
    name: String,
    image_url: String,
    room_id: Option<i64>,
    nightly_price: Option<i64>,
    board_type: Option<String>,
    description: Option<String>,
    area: Option<f64>,
    capacity: Option<u32>,
    is_refundable: Option<bool>,
    select_offer: Option<Route>,
    #[props(default)] highlighted: bool,
) -> Element {
    let image_url = if image_url.trim().is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        image_url
    };
    let description =
        description.unwrap_or_else(|| room_description(&name).to_string());
    let border = if highlighted {
        "border-2 border-amber-500"
    } else {
        "border border-slate-200"
    };

    let image = rsx!(
        img {
            src: "{image_url}",
            alt: "Photo of {name}",
            class: "w-full h-56 object-cover transition-transform duration-300 group-hover:scale-105",
        }
    );

    rsx! {
        div { class: "relative bg-white {border} rounded-2xl overflow-hidden shadow-lg h-full flex flex-col group",
            if let Some(room_id) = room_id {
                Link { to: Route::RoomDetail { room_id }, class: "block overflow-hidden", {image} }
            } else {
                div { class: "overflow-hidden", {image} }
            }
            if let Some(price) = nightly_price {
                div { class: "absolute top-4 right-4 bg-amber-500 text-white text-xs font-bold px-3 py-1.5 rounded-full shadow-lg flex items-center gap-1",
                    Icon { width: 12, height: 12, icon: FaStar }
                    span { "€{price} / night" }
                }
            }
            div { class: "p-5 text-left flex-grow flex flex-col",
                h3 { class: "text-xl font-bold text-slate-800 mb-2 truncate", "{name}" }
                div { class: "flex-grow min-h-[40px]",
                    if let Some(board_type) = board_type {
                        p { class: "text-amber-700 text-sm font-semibold", "{board_type}" }
                    } else {
                        p { class: "text-slate-500 text-sm leading-relaxed", "{description}" }
                    }
                    if area.is_some() || capacity.is_some() {
                        div { class: "flex gap-4 mt-3 text-xs text-slate-500",
                            if let Some(area) = area {
                                span { class: "flex items-center gap-1",
                                    Icon { width: 12, height: 12, icon: FaRulerCombined }
                                    "{area} m²"
                                }
                            }
                            if let Some(capacity) = capacity {
                                span { class: "flex items-center gap-1",
                                    Icon { width: 12, height: 12, icon: FaUserGroup }
                                    "Up to {capacity} guests"
                                }
                            }
                        }
                    }
                }
                if let Some(route) = select_offer {
                    div { class: "mt-auto pt-4 border-t border-slate-100",
                        if let Some(refundable) = is_refundable {
                            if refundable {
                                div { class: "flex items-center gap-2 text-xs mb-3 text-green-600",
                                    Icon { width: 16, height: 16, icon: FaCircleCheck }
                                    span { class: "font-medium", "Free Cancellation" }
                                }
                            } else {
                                div { class: "flex items-center gap-2 text-xs mb-3 text-red-600",
                                    Icon { width: 16, height: 16, icon: FaCircleXmark }
                                    span { class: "font-medium", "Non-refundable" }
                                }
                            }
                        }
                        Link {
                            to: route,
                            class: "btn btn-outline w-full border-2 border-amber-500 text-amber-600 hover:bg-amber-500 hover:text-white font-semibold rounded-xl",
                            "Select Offer"
                            Icon { width: 14, height: 14, icon: FaArrowRight }
                        }
                    }
                }
            }
        }
    }
}
