pub mod about_section;
pub mod amenity_icon;
pub mod booking_form;
pub mod contact_section;
pub mod footer;
pub mod hero_slider;
pub mod layout;
pub mod navbar;
pub mod page;
pub mod room_card;
pub mod room_section;
pub mod service_section;
pub mod status;

pub use about_section::AboutSection;
pub use amenity_icon::AmenityIconView;
pub use booking_form::BookingForm;
pub use contact_section::ContactSection;
pub use footer::Footer;
pub use hero_slider::HeroSlider;
pub use layout::SiteLayout;
pub use navbar::Navbar;
pub use page::Page;
pub use room_card::RoomCard;
pub use room_section::RoomSection;
pub use service_section::ServiceSection;
pub use status::{CardSkeletons, ErrorPanel};
