pub mod bookings;
pub mod facilities;
pub mod rooms;
pub mod users;
