use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaInstagram, FaLinkedin, FaTwitter};
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaEnvelope, FaPhone, FaXmark};
use dioxus_free_icons::Icon;

use crate::client::{router::Route, store::hotel::use_hotel_profile};

#[component]
pub fn Navbar() -> Element {
    let profile = use_hotel_profile();
    let mut menu_open = use_signal(|| false);

    let Some(profile) = profile else {
        return rsx!(
            header { class: "fixed top-0 left-0 w-full z-50 bg-white shadow-md",
                nav { class: "container mx-auto flex items-center justify-between p-4",
                    div { class: "skeleton h-8 w-40" }
                }
            }
        );
    };

    rsx! {
        header { class: "fixed top-0 left-0 w-full z-50 bg-white shadow-md",
            div { class: "hidden md:block border-b border-slate-200",
                div { class: "container mx-auto flex justify-between items-center h-10 px-6",
                    div { class: "flex items-center gap-4 text-slate-600 text-xs",
                        a {
                            href: "tel:{profile.contact.phone}",
                            class: "flex items-center gap-1.5 hover:text-amber-600",
                            Icon { width: 12, height: 12, icon: FaPhone }
                            "{profile.contact.phone}"
                        }
                        a {
                            href: "mailto:{profile.contact.email}",
                            class: "flex items-center gap-1.5 hover:text-amber-600",
                            Icon { width: 12, height: 12, icon: FaEnvelope }
                            "{profile.contact.email}"
                        }
                    }
                    div { class: "flex items-center gap-4 text-slate-500",
                        a { href: "{profile.social_links.instagram}", aria_label: "Instagram", class: "hover:text-slate-900",
                            Icon { width: 14, height: 14, icon: FaInstagram }
                        }
                        a { href: "{profile.social_links.twitter}", aria_label: "Twitter", class: "hover:text-slate-900",
                            Icon { width: 14, height: 14, icon: FaTwitter }
                        }
                        a { href: "{profile.social_links.linkedin}", aria_label: "LinkedIn", class: "hover:text-slate-900",
                            Icon { width: 14, height: 14, icon: FaLinkedin }
                        }
                    }
                }
            }
            nav { class: "container mx-auto flex items-center justify-between p-4",
                Link {
                    to: Route::Home {},
                    class: "text-3xl font-bold tracking-wider text-slate-900",
                    "{profile.name}"
                }
                div { class: "hidden md:flex items-center gap-8",
                    for link in profile.nav_links.iter() {
                        Link {
                            key: "{link.label}",
                            to: link.href.clone(),
                            class: "text-lg text-slate-600 hover:text-slate-900",
                            "{link.label}"
                        }
                    }
                }
                div { class: "flex items-center gap-2",
                    Link {
                        to: Route::book_now(),
                        class: "btn bg-amber-500 hover:bg-amber-600 text-white font-semibold px-6 rounded-full border-none",
                        "Book Now"
                    }
                    button {
                        class: "btn btn-ghost md:hidden",
                        aria_label: "Toggle menu",
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() {
                            Icon { width: 20, height: 20, icon: FaXmark }
                        } else {
                            Icon { width: 20, height: 20, icon: FaBars }
                        }
                    }
                }
            }
            if menu_open() {
                ul { class: "md:hidden flex flex-col gap-2 px-6 pb-4",
                    for link in profile.nav_links.iter() {
                        li { key: "{link.label}",
                            Link {
                                to: link.href.clone(),
                                class: "block py-2 text-slate-700",
                                onclick: move |_| menu_open.set(false),
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
