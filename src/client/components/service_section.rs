use dioxus::prelude::*;

use crate::{client::components::AmenityIconView, model::hotel::Service};

#[component]
pub fn ServiceSection(services: Vec<Service>) -> Element {
    rsx! {
        section { id: "services", class: "py-20 bg-slate-50",
            div { class: "container mx-auto px-6 text-center",
                p { class: "text-amber-600 font-semibold tracking-widest mb-2", "OUR SERVICES" }
                h2 { class: "text-4xl font-bold text-slate-800 mb-12", "Exceeding Your Expectations" }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                    for service in services {
                        div {
                            key: "{service.title}",
                            class: "bg-white rounded-2xl shadow-md p-8 flex flex-col items-center gap-4",
                            div { class: "bg-amber-100 text-amber-600 rounded-full p-4",
                                AmenityIconView { icon: service.icon, size: 28 }
                            }
                            h3 { class: "text-xl font-semibold text-slate-800", "{service.title}" }
                            p { class: "text-slate-500", "{service.description}" }
                        }
                    }
                }
            }
        }
    }
}
