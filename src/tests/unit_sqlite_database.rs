use crate::database::sqlite::SqliteRepository;
use crate::database::{BookingRepository, FacilityRepository, RoomRepository, UserRepository};
use crate::domain::{NewBooking, NewRoom, NewUser};
use crate::tests::mocks::setup_test_pool;
use chrono::NaiveDate;

async fn setup_test_db() -> SqliteRepository {
    SqliteRepository::new(setup_test_pool().await)
}

fn create_mock_room(name: &str) -> NewRoom {
    NewRoom {
        name: name.to_string(),
        description: "Sea view".to_string(),
        image_url: format!("/images/{}.jpg", name),
        price: 750_000,
    }
}

fn create_mock_booking(room_id: i64, email: &str) -> NewBooking {
    NewBooking {
        name: "Guest".to_string(),
        email: email.to_string(),
        room_id,
        guests: 2,
        check_in: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        check_out: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
    }
}

// test that users go in and come back out in insertion order
#[tokio::test]
async fn test_sqlite_create_and_list_users() {
    let repo = setup_test_db().await;

    let first = repo
        .create_user(&NewUser { name: "Ayu".into() })
        .await
        .expect("Should insert user");
    let second = repo
        .create_user(&NewUser { name: "Budi".into() })
        .await
        .expect("Should insert user");

    let users = repo.list_users().await.expect("Should query users");

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, first);
    assert_eq!(users[0].name, "Ayu");
    assert_eq!(users[1].id, second);
}

// test the database's ability to save and retrieve rooms
#[tokio::test]
async fn test_sqlite_create_and_list_rooms() {
    let repo = setup_test_db().await;

    let id = repo.create_room(&create_mock_room("deluxe")).await.unwrap();
    let rooms = repo.list_rooms().await.unwrap();

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, id);
    assert_eq!(rooms[0].image_url, "/images/deluxe.jpg");
    assert_eq!(rooms[0].price, 750_000);
}

// test that only the price column changes and that unknown rooms are reported
#[tokio::test]
async fn test_sqlite_update_room_price() {
    let repo = setup_test_db().await;
    let id = repo.create_room(&create_mock_room("suite")).await.unwrap();

    assert!(repo.update_room_price(id, 900_000).await.unwrap());
    // nothing to update here
    assert!(!repo.update_room_price(id + 100, 1).await.unwrap());

    let rooms = repo.list_rooms().await.unwrap();
    assert_eq!(rooms[0].price, 900_000);
    assert_eq!(rooms[0].name, "suite");
}

// test reading a room's image path before deleting it
#[tokio::test]
async fn test_sqlite_room_image_and_delete() {
    let repo = setup_test_db().await;
    let id = repo.create_room(&create_mock_room("single")).await.unwrap();

    let image = repo.get_room_image_url(id).await.unwrap();
    assert_eq!(image.as_deref(), Some("/images/single.jpg"));

    assert!(repo.delete_room(id).await.unwrap());
    // the second delete finds nothing
    assert!(!repo.delete_room(id).await.unwrap());
    assert!(repo.get_room_image_url(id).await.unwrap().is_none());
}

// test that bookings carry their room's name and come back newest first
#[tokio::test]
async fn test_sqlite_bookings_join_room_name_newest_first() {
    let repo = setup_test_db().await;
    let room_id = repo.create_room(&create_mock_room("family")).await.unwrap();

    let older = repo
        .create_booking(&create_mock_booking(room_id, "first@example.com"))
        .await
        .unwrap();
    let newer = repo
        .create_booking(&create_mock_booking(room_id, "second@example.com"))
        .await
        .unwrap();

    let bookings = repo.list_bookings().await.unwrap();

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, newer);
    assert_eq!(bookings[1].id, older);
    assert_eq!(bookings[0].room_name, "family");
    assert_eq!(
        bookings[0].check_in,
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    );
}

// test that a booking cannot point at a room that doesn't exist
#[tokio::test]
async fn test_sqlite_booking_requires_existing_room() {
    let repo = setup_test_db().await;

    let result = repo
        .create_booking(&create_mock_booking(42, "ghost@example.com"))
        .await;

    assert!(
        result.is_err(),
        "Should fail due to the room foreign key"
    );
}

// test that deleting a room takes its bookings with it
#[tokio::test]
async fn test_sqlite_delete_room_cascades_to_bookings() {
    let repo = setup_test_db().await;
    let room_id = repo.create_room(&create_mock_room("twin")).await.unwrap();
    repo.create_booking(&create_mock_booking(room_id, "guest@example.com"))
        .await
        .unwrap();

    assert!(repo.delete_room(room_id).await.unwrap());

    assert!(repo.list_bookings().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sqlite_delete_booking() {
    let repo = setup_test_db().await;
    let room_id = repo.create_room(&create_mock_room("twin")).await.unwrap();
    let id = repo
        .create_booking(&create_mock_booking(room_id, "guest@example.com"))
        .await
        .unwrap();

    assert!(repo.delete_booking(id).await.unwrap());
    assert!(!repo.delete_booking(id).await.unwrap());
    assert!(repo.list_bookings().await.unwrap().is_empty());
}

// facilities have no insert operation, so seed them straight through the pool
#[tokio::test]
async fn test_sqlite_list_facilities() {
    let pool = setup_test_pool().await;
    sqlx::query(
        "INSERT INTO facilities (name, description, image) VALUES ('Pool', 'Rooftop pool', '/images/pool.jpg'), ('Spa', 'Massage', '/images/spa.jpg')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let repo = SqliteRepository::new(pool);
    let facilities = repo.list_facilities().await.unwrap();

    assert_eq!(facilities.len(), 2);
    assert_eq!(facilities[0].name, "Pool");
    assert_eq!(facilities[1].image, "/images/spa.jpg");
}
