use dioxus::prelude::*;

/// Placeholder cards shown while results load.
#[component]
pub fn CardSkeletons(count: usize) -> Element {
    rsx!(
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
            for i in 0..count {
                div {
                    key: "{i}",
                    class: "animate-pulse bg-gray-200 rounded-lg h-64 w-full flex flex-col p-4 shadow-md",
                    div { class: "bg-gray-300 h-32 w-full rounded mb-4" }
                    div { class: "h-6 bg-gray-300 rounded w-2/3 mb-2" }
                    div { class: "h-4 bg-gray-300 rounded w-1/2 mb-2" }
                    div { class: "h-4 bg-gray-300 rounded w-1/3" }
                }
            }
        }
    )
}

#[component]
pub fn ErrorPanel(title: String, message: String) -> Element {
    rsx!(
        div { class: "col-span-full text-center py-16",
            h2 { class: "text-2xl text-red-500", "{title}" }
            p { class: "mt-2 text-slate-500", "{message}" }
        }
    )
}
