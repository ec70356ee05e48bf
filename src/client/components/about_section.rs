use dioxus::prelude::*;

use crate::{
    client::components::AmenityIconView,
    model::hotel::{AboutContent, Feature},
};

#[component]
pub fn AboutSection(about: AboutContent, features: Vec<Feature>) -> Element {
    rsx! {
        section { id: "about", class: "py-20 bg-white",
            div { class: "container mx-auto px-6 grid md:grid-cols-2 gap-12 items-center",
                div {
                    img {
                        src: "{about.image}",
                        alt: "{about.title}",
                        class: "rounded-2xl shadow-xl w-full h-[28rem] object-cover",
                    }
                }
                div {
                    p { class: "text-amber-600 font-semibold tracking-widest uppercase mb-2",
                        "{about.tagline}"
                    }
                    h2 { class: "text-4xl font-bold text-slate-800 mb-6", "{about.title}" }
                    p { class: "text-slate-600 leading-relaxed mb-8", "{about.description}" }
                    ul { class: "flex flex-col gap-6",
                        for feature in features {
                            li { key: "{feature.id}", class: "flex items-start gap-4",
                                div { class: "flex-shrink-0 bg-amber-100 text-amber-600 rounded-full p-3",
                                    AmenityIconView { icon: feature.icon, size: 20 }
                                }
                                div {
                                    h3 { class: "font-semibold text-slate-800", "{feature.title}" }
                                    p { class: "text-slate-500 text-sm", "{feature.description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
