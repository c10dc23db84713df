use derive_more::derive::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub description: String,
    // either a path relative to the server ("/images/..") or an absolute url
    pub image_url: String,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{} at {} with image {}", name, price, image_url)]
pub struct NewRoom {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: i64,
}
