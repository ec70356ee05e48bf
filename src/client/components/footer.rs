use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaInstagram, FaLinkedin, FaTwitter};
use dioxus_free_icons::icons::fa_solid_icons::{FaEnvelope, FaPhone};
use dioxus_free_icons::Icon;

use crate::client::store::hotel::use_hotel_profile;

#[component]
pub fn Footer() -> Element {
    let Some(profile) = use_hotel_profile() else {
        return rsx!(footer { class: "bg-slate-800 h-48" });
    };

    rsx! {
        footer { class: "bg-slate-800 text-slate-300",
            div { class: "container mx-auto px-6 py-12",
                div { class: "grid grid-cols-1 md:grid-cols-4 gap-8",
                    div {
                        h3 { class: "text-2xl font-bold text-white mb-4", "{profile.name}" }
                        p { class: "text-sm text-slate-400",
                            "Providing a luxurious experience with world-class amenities and exceptional service. Your perfect getaway awaits."
                        }
                        div { class: "flex gap-4 mt-6 text-slate-400",
                            a { href: "{profile.social_links.instagram}", aria_label: "Instagram", class: "hover:text-white",
                                Icon { width: 20, height: 20, icon: FaInstagram }
                            }
                            a { href: "{profile.social_links.twitter}", aria_label: "Twitter", class: "hover:text-white",
                                Icon { width: 20, height: 20, icon: FaTwitter }
                            }
                            a { href: "{profile.social_links.linkedin}", aria_label: "LinkedIn", class: "hover:text-white",
                                Icon { width: 20, height: 20, icon: FaLinkedin }
                            }
                        }
                    }
                    div {
                        h4 { class: "text-lg font-semibold text-white mb-4", "Quick Links" }
                        ul { class: "space-y-2",
                            for link in profile.nav_links.iter() {
                                li { key: "{link.label}",
                                    Link {
                                        to: link.href.clone(),
                                        class: "text-sm text-slate-400 hover:text-white hover:underline",
                                        "{link.label}"
                                    }
                                }
                            }
                        }
                    }
                    div {
                        h4 { class: "text-lg font-semibold text-white mb-4", "Legal" }
                        ul { class: "space-y-2",
                            li { a { href: "#", class: "text-sm text-slate-400 hover:text-white hover:underline", "Privacy Policy" } }
                            li { a { href: "#", class: "text-sm text-slate-400 hover:text-white hover:underline", "Terms of Service" } }
                        }
                    }
                    div {
                        h4 { class: "text-lg font-semibold text-white mb-4", "Contact Us" }
                        ul { class: "space-y-3 text-sm text-slate-400",
                            li { class: "flex items-center gap-3",
                                span { class: "text-amber-400", Icon { width: 16, height: 16, icon: FaPhone } }
                                a { href: "tel:{profile.contact.phone}", class: "hover:text-white", "{profile.contact.phone}" }
                            }
                            li { class: "flex items-center gap-3",
                                span { class: "text-amber-400", Icon { width: 16, height: 16, icon: FaEnvelope } }
                                a { href: "mailto:{profile.contact.email}", class: "hover:text-white", "{profile.contact.email}" }
                            }
                        }
                    }
                }
            }
            div { class: "bg-slate-900 py-4",
                div { class: "container mx-auto px-6 text-center text-xs text-slate-500",
                    "© {profile.name}. All Rights Reserved."
                }
            }
        }
    }
}
