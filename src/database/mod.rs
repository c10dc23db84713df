use crate::domain::{Booking, Facility, NewBooking, NewRoom, NewUser, Room, User};
use anyhow::Result;
use async_trait::async_trait;

pub mod sqlite;

// one repository per table, each method maps to a single sql statement
// sqlx::Pool is thread safe, so implementations can be shared between handlers behind an Arc
// db specific implementations live in "sqlite.rs"

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>>;
    async fn create_user(&self, user: &NewUser) -> Result<i64>;
}

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn list_rooms(&self) -> Result<Vec<Room>>;
    async fn create_room(&self, room: &NewRoom) -> Result<i64>;

    // the bool reports whether a row with that id existed
    async fn update_room_price(&self, id: i64, price: i64) -> Result<bool>;
    async fn get_room_image_url(&self, id: i64) -> Result<Option<String>>;
    async fn delete_room(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Every booking joined with its room's name, newest first.
    async fn list_bookings(&self) -> Result<Vec<Booking>>;
    async fn create_booking(&self, booking: &NewBooking) -> Result<i64>;
    async fn delete_booking(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait FacilityRepository: Send + Sync {
    async fn list_facilities(&self) -> Result<Vec<Facility>>;
}
