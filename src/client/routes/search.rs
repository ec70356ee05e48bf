use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{
        components::{BookingForm, CardSkeletons, ErrorPanel, Page, RoomCard},
        router::Route,
        util::api::{use_api, Loadable},
    },
    model::booking::{SearchCriteria, SearchForm, SearchResultsDto},
};

pub(crate) fn checkout_route(criteria: &SearchCriteria, offer_id: &str) -> Route {
    Route::Checkout {
        offerId: offer_id.to_string(),
        checkIn: criteria.check_in_param(),
        checkOut: criteria.check_out_param(),
        adults: criteria.adults.to_string(),
        children: criteria.children.to_string(),
    }
}

/// Search page, showing only the booking form until both dates are in the URL.
#[component]
pub fn BookingSearch(
    checkIn: String,
    checkOut: String,
    adults: String,
    r#children: String,
    roomId: String,
) -> Element {
    let form = SearchForm::from_params(&checkIn, &checkOut, &adults, &children, &roomId);

    rsx!(
        Title { "Book Your Stay | Talya Hotel" }
        Meta {
            name: "description",
            content: "Search available rooms and prices at Talya Hotel."
        }
        Page {
            div { class: "text-center mb-10",
                h1 { class: "text-4xl md:text-5xl font-bold text-slate-800", "Book Your Stay" }
                p { class: "mt-4 text-lg text-slate-500",
                    "Select your dates and preferences to find the perfect room."
                }
            }
            div { class: "mb-12",
                BookingForm { key: "{checkIn}-{checkOut}-{adults}-{children}", initial: form.clone() }
            }
            if form.has_dates() {
                {match form.validate() {
                    Ok(criteria) => rsx!(SearchResults { criteria }),
                    Err(err) => rsx!(
                        ErrorPanel {
                            title: "Invalid search".to_string(),
                            message: err.to_string(),
                        }
                    ),
                }}
            }
        }
    )
}

#[component]
fn SearchResults(criteria: SearchCriteria) -> Element {
    let results = use_api::<SearchResultsDto>(format!(
        "/api/booking/search?{}",
        criteria.to_query_string()
    ));

    rsx!(
        h2 { class: "text-3xl font-bold text-slate-800 mb-8", "Available Rooms" }
        {match results {
            Loadable::Loading => rsx!(CardSkeletons { count: 3 }),
            Loadable::Failed(err) => rsx!(
                ErrorPanel {
                    title: "Something went wrong".to_string(),
                    message: err.message,
                }
            ),
            Loadable::Ready(results) if results.rooms.is_empty() => rsx!(
                p { class: "text-center text-slate-500 py-16",
                    "No offers found for the selected dates."
                }
            ),
            Loadable::Ready(results) => rsx!(
                p { class: "text-slate-500 mb-6",
                    if results.nights == 1 {
                        "Prices for 1 night, {results.check_in} to {results.check_out}."
                    } else {
                        "Prices for {results.nights} nights, {results.check_in} to {results.check_out}."
                    }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for room in results.rooms {
                        RoomCard {
                            key: "{room.offer_id}",
                            name: room.name.clone(),
                            image_url: room.image_url.clone(),
                            room_id: room.room_id,
                            nightly_price: room.nightly_price,
                            board_type: room.board_type.clone(),
                            is_refundable: room.is_refundable,
                            select_offer: checkout_route(&criteria, &room.offer_id),
                            highlighted: room.room_id.is_some() && room.room_id == criteria.room_id,
                        }
                    }
                }
            ),
        }}
    )
}
