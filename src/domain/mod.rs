pub mod booking;
pub mod facility;
pub mod room;
pub mod user;

pub use booking::{Booking, NewBooking};
pub use facility::Facility;
pub use room::{NewRoom, Room};
pub use user::{NewUser, User};
