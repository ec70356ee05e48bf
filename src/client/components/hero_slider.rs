use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

use crate::{client::components::BookingForm, model::hotel::HeroSlide};

const AUTO_ADVANCE_MS: u32 = 6000;

fn next_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

fn previous_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

/// Full screen slider with the booking form on top, advancing every six seconds.
#[component]
pub fn HeroSlider(slides: Vec<HeroSlide>) -> Element {
    let mut current = use_signal(|| 0usize);
    let len = slides.len();

    // Restarts whenever the slide changes so a manual step gets a full interval.
    use_effect(move || {
        let index = current();
        if len <= 1 {
            return;
        }

        spawn(async move {
            let timer = document::eval(&format!(
                "await new Promise((resolve) => setTimeout(resolve, {})); return true;",
                AUTO_ADVANCE_MS
            ));

            if timer.await.is_ok() && current() == index {
                current.set(next_index(index, len));
            }
        });
    });

    if slides.is_empty() {
        return rsx!();
    }

    let title = slides
        .get(current())
        .map(|slide| slide.title.clone())
        .unwrap_or_default();

    rsx! {
        section { class: "relative h-screen w-full overflow-hidden",
            div { class: "absolute inset-0 w-full h-full",
                for (index, slide) in slides.iter().enumerate() {
                    div {
                        key: "{slide.src}",
                        class: if index == current() {
                            "absolute inset-0 bg-cover bg-center transition-opacity duration-1000 opacity-100"
                        } else {
                            "absolute inset-0 bg-cover bg-center transition-opacity duration-1000 opacity-0"
                        },
                        style: "background-image: url({slide.src})",
                    }
                }
            }
            div { class: "absolute inset-0 bg-gradient-to-t from-black/80 via-black/40 to-transparent" }
            if len > 1 {
                div { class: "absolute top-1/2 left-4 right-4 z-20 flex -translate-y-1/2 justify-between",
                    button {
                        class: "p-3 text-white bg-black/20 rounded-full border border-white/20 hover:bg-black/40",
                        aria_label: "Previous slide",
                        onclick: move |_| current.set(previous_index(current(), len)),
                        Icon { width: 32, height: 32, icon: FaChevronLeft }
                    }
                    button {
                        class: "p-3 text-white bg-black/20 rounded-full border border-white/20 hover:bg-black/40",
                        aria_label: "Next slide",
                        onclick: move |_| current.set(next_index(current(), len)),
                        Icon { width: 32, height: 32, icon: FaChevronRight }
                    }
                }
            }
            div { class: "relative z-10 h-full flex flex-col justify-end items-center p-4 sm:p-8 md:p-12",
                h1 { class: "text-4xl md:text-5xl lg:text-6xl font-extrabold text-white mb-6 text-center drop-shadow-lg",
                    "{title}"
                }
                div { class: "w-full mt-2 flex justify-center",
                    BookingForm {}
                }
            }
        }
    }
}
