use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorPanel, Page},
        util::api::{use_api, Loadable},
    },
    model::gallery::GalleryImageDto,
};

#[component]
pub fn Gallery() -> Element {
    let images = use_api::<Vec<GalleryImageDto>>("/api/gallery".to_string());
    let mut selected = use_signal(|| None::<GalleryImageDto>);

    rsx!(
        Title { "Gallery | Talya Hotel" }
        Meta {
            name: "description",
            content: "Photos of Talya Hotel, its rooms and its surroundings."
        }
        Page {
            div { class: "text-center mb-12",
                h1 { class: "text-4xl md:text-5xl font-bold text-slate-800", "Our Gallery" }
                p { class: "mt-4 text-lg text-slate-500 max-w-2xl mx-auto",
                    "Explore the stunning visuals of our resort, from elegant rooms to breathtaking views."
                }
            }
            {match images {
                Loadable::Loading => rsx!(
                    div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4",
                        for i in 0..8 {
                            div { key: "{i}", class: "animate-pulse bg-gray-200 rounded-lg h-48" }
                        }
                    }
                ),
                Loadable::Failed(_) => rsx!(
                    ErrorPanel {
                        title: "Something went wrong".to_string(),
                        message: "We couldn't load the gallery right now, please try again later.".to_string(),
                    }
                ),
                Loadable::Ready(images) if images.is_empty() => rsx!(
                    p { class: "text-center text-slate-500 py-16", "No gallery images available at this time." }
                ),
                Loadable::Ready(images) => rsx!(
                    div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4",
                        for image in images {
                            button {
                                key: "{image.id}",
                                class: "overflow-hidden rounded-lg shadow-md group",
                                onclick: {
                                    let image = image.clone();
                                    move |_| selected.set(Some(image.clone()))
                                },
                                img {
                                    src: "{image.url}",
                                    alt: "{image.caption}",
                                    loading: "lazy",
                                    class: "w-full h-48 object-cover transition-transform duration-300 group-hover:scale-110",
                                }
                            }
                        }
                    }
                ),
            }}
            if let Some(image) = selected() {
                div {
                    class: "fixed inset-0 z-50 bg-black/80 flex items-center justify-center p-6",
                    onclick: move |_| selected.set(None),
                    figure { class: "max-w-5xl w-full",
                        img { src: "{image.url}", alt: "{image.caption}", class: "w-full max-h-[80vh] object-contain rounded-lg" }
                        figcaption { class: "text-center text-white mt-4", "{image.caption}" }
                    }
                }
            }
        }
    )
}
