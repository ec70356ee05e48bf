use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaCircleXmark};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{ErrorPanel, Page},
        router::Route,
        util::api::{use_api, Loadable},
    },
    model::booking::{CheckoutDto, ReservationRequest, SearchCriteria, SearchForm},
};

#[component]
pub fn Checkout(
    offerId: String,
    checkIn: String,
    checkOut: String,
    adults: String,
    r#children: String,
) -> Element {
    let offer_id = offerId.trim().to_string();

    if offer_id.is_empty() {
        return rsx!(
            Title { "Checkout | Talya Hotel" }
            Page { class: "flex items-center justify-center",
                div { class: "text-center py-24",
                    h1 { class: "text-2xl font-bold text-red-500", "Error: Offer ID is missing." }
                    p { class: "mt-2 text-slate-500", "Please go back and select an offer again." }
                    Link {
                        to: Route::book_now(),
                        class: "btn btn-outline mt-6",
                        "Back to Search"
                    }
                }
            }
        );
    }

    let form = SearchForm::from_params(&checkIn, &checkOut, &adults, &children, "");

    rsx!(
        Title { "Checkout | Talya Hotel" }
        Meta {
            name: "description",
            content: "Finalize your reservation at Talya Hotel."
        }
        Page {
            div { class: "text-center mb-12",
                h1 { class: "text-4xl md:text-5xl font-bold text-slate-800", "Finalize Your Reservation" }
                p { class: "mt-4 text-lg text-slate-500",
                    "Just a few more details to complete your booking."
                }
            }
            {match form.validate() {
                Ok(criteria) => rsx!(CheckoutDetails { offer_id, criteria }),
                Err(err) => rsx!(
                    ErrorPanel {
                        title: "Invalid stay".to_string(),
                        message: err.to_string(),
                    }
                ),
            }}
        }
    )
}

#[component]
fn CheckoutDetails(offer_id: String, criteria: SearchCriteria) -> Element {
    let summary = use_api::<CheckoutDto>(format!(
        "/api/booking/checkout?{}",
        criteria.to_checkout_query_string(&offer_id)
    ));

    rsx!(
        div { class: "grid lg:grid-cols-3 gap-12",
            div { class: "lg:col-span-2",
                GuestForm { offer_id: offer_id.clone() }
            }
            aside { class: "lg:col-span-1",
                {match summary {
                    Loadable::Loading => rsx!(
                        div { class: "animate-pulse bg-gray-200 rounded-2xl h-96 w-full" }
                    ),
                    Loadable::Failed(err) => rsx!(
                        ErrorPanel {
                            title: "Booking Summary".to_string(),
                            message: err.message,
                        }
                    ),
                    Loadable::Ready(summary) => rsx!(BookingSummary { summary }),
                }}
            }
        }
    )
}

#[component]
fn BookingSummary(summary: CheckoutDto) -> Element {
    let guests = if summary.children > 0 {
        format!("{} adults, {} children", summary.adults, summary.children)
    } else {
        format!("{} adults", summary.adults)
    };
    let nights = if summary.nights == 1 {
        "1 night".to_string()
    } else {
        format!("{} nights", summary.nights)
    };

    rsx!(
        div { class: "bg-white rounded-2xl shadow-lg border border-slate-200 overflow-hidden sticky top-32",
            img {
                src: "{summary.image_url}",
                alt: "Photo of {summary.room_name}",
                class: "w-full h-48 object-cover",
            }
            div { class: "p-6 flex flex-col gap-3",
                h2 { class: "text-2xl font-bold text-slate-800", "Booking Summary" }
                h3 { class: "text-lg font-semibold text-slate-700", "{summary.room_name}" }
                if let Some(board_type) = summary.board_type.clone() {
                    p { class: "text-amber-700 text-sm font-semibold", "{board_type}" }
                }
                dl { class: "grid grid-cols-2 gap-y-2 text-sm text-slate-600",
                    dt { "Check-in" }
                    dd { class: "text-right", "{summary.check_in}" }
                    dt { "Check-out" }
                    dd { class: "text-right", "{summary.check_out}" }
                    dt { "Guests" }
                    dd { class: "text-right", "{guests}" }
                    dt { "Stay" }
                    dd { class: "text-right", "{nights}" }
                    dt { "Per night" }
                    dd { class: "text-right", "€{summary.nightly_price}" }
                }
                {match summary.is_refundable {
                    Some(true) => rsx!(
                        div { class: "flex items-center gap-2 text-xs text-green-600",
                            Icon { width: 16, height: 16, icon: FaCircleCheck }
                            "Free Cancellation"
                        }
                    ),
                    Some(false) => rsx!(
                        div { class: "flex items-center gap-2 text-xs text-red-600",
                            Icon { width: 16, height: 16, icon: FaCircleXmark }
                            "Non-refundable"
                        }
                    ),
                    None => rsx!(),
                }}
                div { class: "border-t border-slate-100 pt-3 flex justify-between items-center",
                    span { class: "font-semibold text-slate-800", "Total" }
                    span { class: "text-2xl font-bold text-amber-600", "€{summary.total_price}" }
                }
            }
        }
    )
}

/// Guest information form. Submissions are validated here and again by the server.
#[component]
fn GuestForm(offer_id: String) -> Element {
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut outcome = use_signal(|| None::<String>);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        let request = ReservationRequest {
            offer_id: offer_id.clone(),
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            phone: phone(),
        };

        if let Err(err) = request.validate() {
            outcome.set(Some(err.to_string()));
            return;
        }

        #[cfg(feature = "web")]
        {
            use crate::client::util::api::post_reservation;

            submitting.set(true);
            spawn(async move {
                let err = post_reservation(&request).await;
                outcome.set(Some(err.message));
                submitting.set(false);
            });
        }

        #[cfg(not(feature = "web"))]
        let _ = request;
    };

    rsx!(
        form {
            class: "bg-white rounded-2xl shadow-lg border border-slate-200 p-8 flex flex-col gap-4",
            onsubmit: on_submit,
            h2 { class: "text-2xl font-bold text-slate-800 mb-2", "Guest Information" }
            div { class: "grid md:grid-cols-2 gap-4",
                label { class: "flex flex-col gap-1 text-sm text-slate-600",
                    "First Name"
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        value: "{first_name}",
                        oninput: move |e| first_name.set(e.value()),
                    }
                }
                label { class: "flex flex-col gap-1 text-sm text-slate-600",
                    "Last Name"
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        value: "{last_name}",
                        oninput: move |e| last_name.set(e.value()),
                    }
                }
                label { class: "flex flex-col gap-1 text-sm text-slate-600",
                    "Email Address"
                    input {
                        class: "input input-bordered w-full",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                label { class: "flex flex-col gap-1 text-sm text-slate-600",
                    "Phone Number"
                    input {
                        class: "input input-bordered w-full",
                        r#type: "tel",
                        value: "{phone}",
                        oninput: move |e| phone.set(e.value()),
                    }
                }
            }
            if let Some(message) = outcome() {
                p { class: "text-red-600", "{message}" }
            }
            button {
                r#type: "submit",
                class: "btn bg-amber-500 hover:bg-amber-600 text-white border-none rounded-xl",
                disabled: submitting(),
                if submitting() { "Submitting..." } else { "Complete Reservation" }
            }
        }
    )
}
