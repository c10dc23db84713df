use crate::database::{BookingRepository, FacilityRepository, RoomRepository, UserRepository};
use crate::domain::{Booking, Facility, NewBooking, NewRoom, NewUser, Room, User};
use crate::features::bookings::model::DbBooking;
use crate::features::facilities::model::DbFacility;
use crate::features::rooms::model::DbRoom;
use crate::features::users::model::DbUser;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

#[derive(Clone)]
pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn list_users(&self) -> Result<Vec<User>> {
        let db_users = sqlx::query_as::<_, DbUser>("SELECT id, name FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to query users")?;

        Ok(db_users.into_iter().map(User::from).collect())
    }

    async fn create_user(&self, user: &NewUser) -> Result<i64> {
        let result = sqlx::query("INSERT INTO users (name) VALUES (?)")
            .bind(&user.name)
            .execute(&self.pool)
            .await
            .context(format!("Failed to insert user {}", user.name))?;

        Ok(result.last_insert_rowid())
    }
}

#[async_trait]
impl RoomRepository for SqliteRepository {
    async fn list_rooms(&self) -> Result<Vec<Room>> {
        let db_rooms = sqlx::query_as::<_, DbRoom>(
            "SELECT id, name, description, image_url, price FROM rooms ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to query rooms")?;

        Ok(db_rooms.into_iter().map(Room::from).collect())
    }

    async fn create_room(&self, room: &NewRoom) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO rooms (name, description, image_url, price)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&room.name)
        .bind(&room.description)
        .bind(&room.image_url)
        .bind(room.price)
        .execute(&self.pool)
        .await
        .context(format!("Failed to insert room {}", room.name))?;

        Ok(result.last_insert_rowid())
    }

    async fn update_room_price(&self, id: i64, price: i64) -> Result<bool> {
        let result = sqlx::query("UPDATE rooms SET price = ? WHERE id = ?")
            .bind(price)
            .bind(id)
            .execute(&self.pool)
            .await
            .context(format!("Failed to update price of room {}", id))?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_room_image_url(&self, id: i64) -> Result<Option<String>> {
        let image_url = sqlx::query_scalar::<_, String>("SELECT image_url FROM rooms WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context(format!("Failed to query image of room {}", id))?;

        Ok(image_url)
    }

    async fn delete_room(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context(format!("Failed to delete room {}", id))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl BookingRepository for SqliteRepository {
    async fn list_bookings(&self) -> Result<Vec<Booking>> {
        let db_bookings = sqlx::query_as::<_, DbBooking>(
            r#"
            SELECT
                b.id, b.name, b.email, b.room_id, r.name AS room_name,
                b.guests, b.check_in, b.check_out, b.created_at
            FROM bookings b
            JOIN rooms r ON b.room_id = r.id
            ORDER BY b.created_at DESC, b.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to query bookings")?;

        Ok(db_bookings.into_iter().map(Booking::from).collect())
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO bookings (name, email, room_id, guests, check_in, check_out)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(booking.room_id)
        .bind(booking.guests)
        .bind(booking.check_in)
        .bind(booking.check_out)
        .execute(&self.pool)
        .await
        .context(format!(
            "Failed to insert booking for {} in room {}",
            booking.email, booking.room_id
        ))?;

        Ok(result.last_insert_rowid())
    }

    async fn delete_booking(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context(format!("Failed to delete booking {}", id))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl FacilityRepository for SqliteRepository {
    async fn list_facilities(&self) -> Result<Vec<Facility>> {
        let db_facilities = sqlx::query_as::<_, DbFacility>(
            "SELECT id, name, description, image FROM facilities ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to query facilities")?;

        Ok(db_facilities.into_iter().map(Facility::from).collect())
    }
}
