use chrono::{NaiveDate, NaiveDateTime};
use derive_more::derive::Display;

/// A reservation as read back from storage, joined with the booked room's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub room_id: i64,
    pub room_name: String,
    pub guests: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{} in room {} from {} to {}", email, room_id, check_in, check_out)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub room_id: i64,
    pub guests: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}
