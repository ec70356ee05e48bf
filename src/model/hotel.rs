//! Site content for a single hotel.
//!
//! [`HotelProfile`] is loaded once when the server starts and served to the client, so
//! re-branding the site for another hotel only requires a different profile file.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HotelProfile {
    pub name: String,
    pub contact: ContactInfo,
    pub social_links: SocialLinks,
    pub nav_links: Vec<NavLink>,
    pub hero_slides: Vec<HeroSlide>,
    pub about: AboutContent,
    pub features: Vec<Feature>,
    pub services: Vec<Service>,
    /// Rooms highlighted on the home page with a "from" price
    pub featured_rooms: Vec<FeaturedRoom>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SocialLinks {
    pub instagram: String,
    pub twitter: String,
    pub linkedin: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HeroSlide {
    pub src: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AboutContent {
    pub tagline: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Icon shown next to a feature or service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum AmenityIcon {
    Award,
    Dining,
    Wifi,
    Pool,
    Spa,
    Clock,
    Heart,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Feature {
    pub id: String,
    pub icon: AmenityIcon,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct Service {
    pub icon: AmenityIcon,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FeaturedRoom {
    pub id: String,
    pub name: String,
    /// Starting nightly price in euros
    pub price: i64,
    pub image: String,
    pub description: String,
}

fn text(value: &str) -> String {
    value.to_string()
}

impl Default for HotelProfile {
    fn default() -> Self {
        Self {
            name: text("Talya Hotel"),
            contact: ContactInfo {
                phone: text("1-888-123-4567"),
                email: text("contact@talya.com"),
            },
            social_links: SocialLinks {
                instagram: text("#"),
                twitter: text("#"),
                linkedin: text("#"),
            },
            nav_links: [
                ("About", "/#about"),
                ("Rooms", "/rooms"),
                ("Services", "/#services"),
                ("Gallery", "/gallery"),
                ("Contact", "/#contact"),
            ]
            .into_iter()
            .map(|(label, href)| NavLink {
                label: text(label),
                href: text(href),
            })
            .collect(),
            hero_slides: [
                ("/hero-1.jpg", "Unforgettable Stays, Unbeatable Prices"),
                ("/hero-2.jpg", "Your Private Paradise Awaits"),
                ("/hero-3.jpg", "Experience Culinary Excellence"),
            ]
            .into_iter()
            .map(|(src, title)| HeroSlide {
                src: text(src),
                title: text(title),
            })
            .collect(),
            about: AboutContent {
                tagline: text("A Legacy of Luxury"),
                title: text("Welcome to Talya Hotel Resort & Spa"),
                description: text(
                    "Discover a world where modern luxury and blissful comfort converge. \
                     Located in a prime spot, Talya Hotel offers an unparalleled experience with \
                     its sophisticated design, world-class amenities, and a deep commitment to \
                     guest satisfaction.",
                ),
                image: text("/about-image.jpg"),
            },
            features: vec![
                Feature {
                    id: text("service"),
                    icon: AmenityIcon::Award,
                    title: text("Award-Winning Service"),
                    description: text(
                        "Recognized for our exceptional hospitality and attention to detail.",
                    ),
                },
                Feature {
                    id: text("dining"),
                    icon: AmenityIcon::Dining,
                    title: text("Gourmet Dining"),
                    description: text(
                        "Savor exquisite flavors crafted by our world-renowned chefs.",
                    ),
                },
                Feature {
                    id: text("wifi"),
                    icon: AmenityIcon::Wifi,
                    title: text("Complimentary Wi-Fi"),
                    description: text(
                        "Stay connected with high-speed internet access throughout the resort.",
                    ),
                },
            ],
            services: vec![
                Service {
                    icon: AmenityIcon::Award,
                    title: text("Luxury Amenities"),
                    description: text(
                        "Experience top-tier comfort with our exclusive range of amenities.",
                    ),
                },
                Service {
                    icon: AmenityIcon::Clock,
                    title: text("24/7 Front Desk"),
                    description: text(
                        "Our dedicated team is always available to assist you with any request.",
                    ),
                },
                Service {
                    icon: AmenityIcon::Heart,
                    title: text("Unmatched Hospitality"),
                    description: text(
                        "We pride ourselves on creating a memorable and welcoming stay for all our guests.",
                    ),
                },
            ],
            featured_rooms: vec![
                FeaturedRoom {
                    id: text("single"),
                    name: text("Single Room"),
                    price: 89,
                    image: text("/rooms/single.jpg"),
                    description: text(
                        "Perfect for the solo traveler, offering comfort and style in a compact space.",
                    ),
                },
                FeaturedRoom {
                    id: text("double"),
                    name: text("Double Room"),
                    price: 129,
                    image: text("/rooms/double.jpg"),
                    description: text(
                        "Spacious and elegant, ideal for couples seeking a memorable getaway.",
                    ),
                },
                FeaturedRoom {
                    id: text("deluxe"),
                    name: text("Deluxe Suite"),
                    price: 189,
                    image: text("/rooms/deluxe.jpg"),
                    description: text(
                        "The pinnacle of luxury with stunning views and premium amenities for an exclusive stay.",
                    ),
                },
            ],
        }
    }
}
