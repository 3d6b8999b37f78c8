//! Fixtures shared by the data-access tests.

use chrono::NaiveDate;
use common::{HotelCreate, RoomTypeCreate, SeasonCreate};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr};

use crate::auth::AuthConfig;
use crate::error::Result;
use crate::{hotels, room_types, seasons};

/// Fresh in-memory database with all migrations applied.
pub async fn setup_db() -> std::result::Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Cheapest bcrypt cost so tests stay fast.
pub fn test_auth() -> AuthConfig {
    AuthConfig::new("test-secret", "HS256", 30, 4).expect("valid test auth config")
}

pub fn hotel_input(name: &str) -> HotelCreate {
    HotelCreate {
        name: name.to_string(),
        location: "Dahab".to_string(),
        description: None,
        contact_info: None,
        amenities: None,
        policies: None,
        is_active: None,
    }
}

/// Creates a hotel with one room type and one season, returning their ids.
pub async fn room_and_season(db: &DatabaseConnection) -> Result<(i32, i32)> {
    let hotel = hotels::create_hotel(db, hotel_input("Fixture Hotel")).await?;
    let room = room_types::create_room_type(
        db,
        hotel.id,
        RoomTypeCreate {
            name: "Standard".to_string(),
            number_of_rooms: Some(10),
            description: None,
        },
    )
    .await?;
    let season = seasons::create_season(
        db,
        hotel.id,
        SeasonCreate {
            name: "Low".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
            hotel_foc_slots: None,
            diving_foc_slots: None,
        },
    )
    .await?;
    Ok((room.id, season.id))
}
