use crate::domain::{Booking, NewBooking};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct DbBooking {
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

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonBooking {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub room_id: i64,
    pub room_name: String,
    pub guests: i64,
    pub check_in: String,
    pub check_out: String,
    pub created_at: String,
}

// check_in/check_out arrive as "YYYY-MM-DD" from the booking form's date inputs
#[derive(Deserialize, Debug)]
pub struct NewBookingPayload {
    pub name: String,
    pub email: String,
    pub room_id: i64,
    pub guests: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl From<DbBooking> for Booking {
    fn from(db_booking: DbBooking) -> Self {
        Booking {
            id: db_booking.id,
            name: db_booking.name,
            email: db_booking.email,
            room_id: db_booking.room_id,
            room_name: db_booking.room_name,
            guests: db_booking.guests,
            check_in: db_booking.check_in,
            check_out: db_booking.check_out,
            created_at: db_booking.created_at,
        }
    }
}

impl From<Booking> for JsonBooking {
    fn from(booking: Booking) -> Self {
        JsonBooking {
            id: booking.id,
            name: booking.name,
            email: booking.email,
            room_id: booking.room_id,
            room_name: booking.room_name,
            guests: booking.guests,
            check_in: booking.check_in.format(DATE_FORMAT).to_string(),
            check_out: booking.check_out.format(DATE_FORMAT).to_string(),
            created_at: booking.created_at.format(CREATED_AT_FORMAT).to_string(),
        }
    }
}

impl From<NewBookingPayload> for NewBooking {
    fn from(payload: NewBookingPayload) -> Self {
        NewBooking {
            name: payload.name,
            email: payload.email,
            room_id: payload.room_id,
            guests: payload.guests,
            check_in: payload.check_in,
            check_out: payload.check_out,
        }
    }
}
