use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaUser, FaUserGroup};
use dioxus_free_icons::Icon;

use crate::{
    client::router::Route,
    model::booking::{SearchCriteria, SearchForm, MAX_ADULTS, MAX_CHILDREN},
};

fn search_route(criteria: &SearchCriteria) -> Route {
    Route::BookingSearch {
        checkIn: criteria.check_in_param(),
        checkOut: criteria.check_out_param(),
        adults: criteria.adults.to_string(),
        children: criteria.children.to_string(),
        roomId: criteria
            .room_id
            .map(|room_id| room_id.to_string())
            .unwrap_or_default(),
    }
}

/// Shows a blocking browser alert.
fn alert(message: &str) {
    let message = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    document::eval(&format!("alert({});", message));
}

/// Date and guest selection that navigates to the search results.
///
/// `initial` pre-fills the form, a room id in it is carried over to the new search.
#[component]
pub fn BookingForm(initial: Option<SearchForm>) -> Element {
    let initial = initial.unwrap_or_default();
    let room_id = initial.room_id;

    let mut check_in = use_signal(|| initial.check_in.clone());
    let mut check_out = use_signal(|| initial.check_out.clone());
    let mut adults = use_signal(|| initial.adults.clamp(1, MAX_ADULTS));
    let mut children = use_signal(|| initial.children.min(MAX_CHILDREN));

    let on_search = move |event: FormEvent| {
        event.prevent_default();

        let form = SearchForm {
            check_in: check_in(),
            check_out: check_out(),
            adults: adults(),
            children: children(),
            room_id,
        };

        match form.validate() {
            Ok(criteria) => {
                navigator().push(search_route(&criteria));
            }
            Err(err) => alert(&err.to_string()),
        }
    };

    rsx! {
        form {
            class: "bg-white/90 p-4 rounded-xl shadow-2xl w-full max-w-5xl text-slate-800 mx-auto",
            onsubmit: on_search,
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-4 items-end",
                label { class: "flex flex-col gap-1",
                    span { class: "font-semibold text-xs ml-1", "Check-in" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "date",
                        value: "{check_in}",
                        oninput: move |event| check_in.set(event.value()),
                    }
                }
                label { class: "flex flex-col gap-1",
                    span { class: "font-semibold text-xs ml-1", "Check-out" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "date",
                        min: "{check_in}",
                        value: "{check_out}",
                        oninput: move |event| check_out.set(event.value()),
                    }
                }
                label { class: "flex flex-col gap-1",
                    span { class: "flex items-center gap-1 font-semibold text-xs ml-1",
                        Icon { width: 12, height: 12, icon: FaUser }
                        "Adults"
                    }
                    select {
                        class: "select select-bordered w-full",
                        value: "{adults}",
                        onchange: move |event| {
                            if let Ok(value) = event.value().parse() {
                                adults.set(value);
                            }
                        },
                        for count in 1..=MAX_ADULTS {
                            option {
                                key: "{count}",
                                value: "{count}",
                                selected: count == adults(),
                                if count == 1 { "1 Adult" } else { "{count} Adults" }
                            }
                        }
                    }
                }
                label { class: "flex flex-col gap-1",
                    span { class: "flex items-center gap-1 font-semibold text-xs ml-1",
                        Icon { width: 12, height: 12, icon: FaUserGroup }
                        "Children"
                    }
                    select {
                        class: "select select-bordered w-full",
                        value: "{children}",
                        onchange: move |event| {
                            if let Ok(value) = event.value().parse() {
                                children.set(value);
                            }
                        },
                        for count in 0..=MAX_CHILDREN {
                            option {
                                key: "{count}",
                                value: "{count}",
                                selected: count == children(),
                                if count == 1 { "1 Child" } else { "{count} Children" }
                            }
                        }
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn w-full bg-amber-500 hover:bg-amber-600 text-white font-bold border-none md:col-span-2 lg:col-span-1",
                    Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                    "Search"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_route_carries_room_id() {
        let criteria = SearchForm {
            check_in: "2025-08-10".to_string(),
            check_out: "2025-08-15".to_string(),
            room_id: Some(12),
            ..Default::default()
        }
        .validate()
        .unwrap();

        let url = search_route(&criteria).to_string();

        assert!(url.starts_with("/booking/search?"));
        assert!(url.contains("checkIn=2025-08-10"));
        assert!(url.contains("roomId=12"));
    }
}
