use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{
        AboutSection, BookingForm, ContactSection, HeroSlider, RoomSection, ServiceSection,
    },
    store::hotel::use_hotel_profile,
};

#[component]
pub fn Home() -> Element {
    let profile = use_hotel_profile();

    rsx!(
        Title { "Talya Hotel | Resort & Spa" }
        Meta {
            name: "description",
            content: "Book your stay at Talya Hotel, modern rooms, gourmet dining and unmatched hospitality."
        }
        if let Some(profile) = profile {
            if profile.hero_slides.is_empty() {
                div { class: "pt-40 pb-12 container mx-auto px-6",
                    BookingForm { }
                }
            } else {
                HeroSlider { slides: profile.hero_slides.clone() }
            }
            AboutSection { about: profile.about.clone(), features: profile.features.clone() }
            RoomSection { rooms: profile.featured_rooms.clone() }
            ServiceSection { services: profile.services.clone() }
            ContactSection { contact: profile.contact.clone() }
        } else {
            div { class: "h-screen w-full skeleton rounded-none" }
        }
    )
}
