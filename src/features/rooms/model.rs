use crate::domain::Room;
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct DbRoom {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonRoom {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: i64,
}

#[derive(Deserialize, Debug)]
pub struct RoomPricePayload {
    pub price: i64,
}

// the text fields of the multipart room form, plus the uploaded image if one was sent
#[derive(Debug, Default)]
pub struct RoomForm {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image: Option<UploadedImage>,
}

#[derive(Debug)]
pub struct UploadedImage {
    pub filename: String,
    pub bytes: Vec<u8>,
}

// how the stored image is referenced from the rooms table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageUrlStyle {
    // "/images/<file>", resolved by the client against this server
    Relative,
    // "<public base url>/images/<file>"
    Absolute,
}

impl From<DbRoom> for Room {
    fn from(db_room: DbRoom) -> Self {
        Room {
            id: db_room.id,
            name: db_room.name,
            description: db_room.description,
            image_url: db_room.image_url,
            price: db_room.price,
        }
    }
}

impl From<Room> for JsonRoom {
    fn from(room: Room) -> Self {
        JsonRoom {
            id: room.id,
            name: room.name,
            description: room.description,
            image_url: room.image_url,
            price: room.price,
        }
    }
}

/// Coerces a form value into a price. Anything that isn't an integer becomes 0.
pub fn parse_price(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

pub fn image_url_for(style: ImageUrlStyle, public_base_url: &str, filename: &str) -> String {
    match style {
        ImageUrlStyle::Relative => format!("/images/{}", filename),
        ImageUrlStyle::Absolute => format!(
            "{}/images/{}",
            public_base_url.trim_end_matches('/'),
            filename
        ),
    }
}
