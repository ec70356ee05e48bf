pub mod checkout;
pub mod gallery;
pub mod home;
pub mod not_found;
pub mod room_detail;
pub mod rooms;
pub mod search;

pub use checkout::Checkout;
pub use gallery::Gallery;
pub use home::Home;
pub use not_found::NotFound;
pub use room_detail::RoomDetail;
pub use rooms::Rooms;
pub use search::BookingSearch;
