use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaAward, FaClock, FaHeart, FaPersonSwimming, FaSpa, FaUtensils, FaWifi,
};
use dioxus_free_icons::Icon;

use crate::model::hotel::AmenityIcon;

#[component]
pub fn AmenityIconView(icon: AmenityIcon, size: u32) -> Element {
    match icon {
        AmenityIcon::Award => rsx!(Icon { width: size, height: size, icon: FaAward }),
        AmenityIcon::Dining => rsx!(Icon { width: size, height: size, icon: FaUtensils }),
        AmenityIcon::Wifi => rsx!(Icon { width: size, height: size, icon: FaWifi }),
        AmenityIcon::Pool => rsx!(Icon { width: size, height: size, icon: FaPersonSwimming }),
        AmenityIcon::Spa => rsx!(Icon { width: size, height: size, icon: FaSpa }),
        AmenityIcon::Clock => rsx!(Icon { width: size, height: size, icon: FaClock }),
        AmenityIcon::Heart => rsx!(Icon { width: size, height: size, icon: FaHeart }),
    }
}
