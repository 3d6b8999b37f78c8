//! Root of all SeaORM entity modules.
//! A hotel owns its room types, meal options, offers, policies, seasons and
//! group contracts; seasons scope occupancy rates and diving packages.
//! Users carry exactly one profile and one preferences row.

pub mod booking_policy;
pub mod diving_package;
pub mod group_contract;
pub mod hotel;
pub mod meal_option;
pub mod occupancy_rate;
pub mod room_type;
pub mod season;
pub mod special_offer;
pub mod user;
pub mod user_preferences;
pub mod user_profile;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::booking_policy::Entity as BookingPolicy;
    pub use super::diving_package::Entity as DivingPackage;
    pub use super::group_contract::Entity as GroupContract;
    pub use super::hotel::Entity as Hotel;
    pub use super::meal_option::Entity as MealOption;
    pub use super::occupancy_rate::Entity as OccupancyRate;
    pub use super::room_type::Entity as RoomType;
    pub use super::season::Entity as Season;
    pub use super::special_offer::Entity as SpecialOffer;
    pub use super::user::Entity as User;
    pub use super::user_preferences::Entity as UserPreferences;
    pub use super::user_profile::Entity as UserProfile;
}

#[cfg(test)]
mod test {
    use chrono::{NaiveDate, Utc};
    use migration::{Migrator, MigratorTrait};
    use rust_decimal::Decimal;
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, LoaderTrait, ModelTrait, QueryFilter, Set,
    };

    use super::*;
    use occupancy_rate::OccupancyType;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    async fn new_hotel(db: &DatabaseConnection, name: &str) -> Result<hotel::Model, DbErr> {
        hotel::ActiveModel {
            name: Set(name.to_string()),
            location: Set("Dahab".to_string()),
            description: Set(None),
            contact_info: Set(None),
            amenities: Set(Some(serde_json::json!(["pool", "dive center"]))),
            policies: Set(None),
            is_active: Set(true),
            is_deleted: Set(false),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let reef = new_hotel(&db, "Reef House").await?;

        let bungalow = room_type::ActiveModel {
            hotel_id: Set(reef.id),
            name: Set("Garden Bungalow".to_string()),
            number_of_rooms: Set(Some(12)),
            description: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let high = season::ActiveModel {
            hotel_id: Set(reef.id),
            name: Set("High season".to_string()),
            start_date: Set(NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()),
            end_date: Set(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()),
            hotel_foc_slots: Set(Some("1 per 15".to_string())),
            diving_foc_slots: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        for (kind, rate) in [
            (OccupancyType::Single, 9000),
            (OccupancyType::Double, 12000),
        ] {
            occupancy_rate::ActiveModel {
                room_type_id: Set(bungalow.id),
                season_id: Set(high.id),
                occupancy_type: Set(kind),
                rate: Set(Decimal::new(rate, 2)),
                ..Default::default()
            }
            .insert(&db)
            .await?;
        }

        let package = diving_package::ActiveModel {
            season_id: Set(high.id),
            name: Set("10 boat dives".to_string()),
            price: Set(Decimal::new(45000, 2)),
            foc_slots: Set(0),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        group_contract::ActiveModel {
            hotel_id: Set(reef.id),
            diving_package_id: Set(Some(package.id)),
            group_name: Set("Berlin Divers".to_string()),
            customer: Set("Smith GmbH".to_string()),
            start_date: Set(NaiveDate::from_ymd_opt(2024, 12, 22).unwrap()),
            end_date: Set(NaiveDate::from_ymd_opt(2024, 12, 29).unwrap()),
            travel_agent: Set(None),
            contract: Set("GC-2024-001".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Read back through relations
        let room_types = reef.find_related(RoomType).all(&db).await?;
        assert_eq!(room_types.len(), 1);

        let rates = room_types.load_many(OccupancyRate, &db).await?;
        assert_eq!(rates[0].len(), 2);
        assert!(rates[0].iter().any(|r| r.occupancy_type == OccupancyType::Double
            && r.rate == Decimal::new(12000, 2)));

        let packages = high.find_related(DivingPackage).all(&db).await?;
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "10 boat dives");

        let contracts = GroupContract::find()
            .filter(group_contract::Column::DivingPackageId.eq(package.id))
            .all(&db)
            .await?;
        assert_eq!(contracts.len(), 1);
        assert_eq!(contracts[0].hotel_id, reef.id);

        let stored = Hotel::find_by_id(reef.id).one(&db).await?.unwrap();
        assert_eq!(stored.amenities, Some(serde_json::json!(["pool", "dive center"])));

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_occupancy_category_rejected() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let hotel = new_hotel(&db, "Lagoon Lodge").await?;

        let room = room_type::ActiveModel {
            hotel_id: Set(hotel.id),
            name: Set("Standard".to_string()),
            number_of_rooms: Set(None),
            description: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let low = season::ActiveModel {
            hotel_id: Set(hotel.id),
            name: Set("Low".to_string()),
            start_date: Set(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            end_date: Set(NaiveDate::from_ymd_opt(2024, 8, 31).unwrap()),
            hotel_foc_slots: Set(None),
            diving_foc_slots: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let rate = || occupancy_rate::ActiveModel {
            room_type_id: Set(room.id),
            season_id: Set(low.id),
            occupancy_type: Set(OccupancyType::Triple),
            rate: Set(Decimal::new(15000, 2)),
            ..Default::default()
        };

        rate().insert(&db).await?;
        assert!(rate().insert(&db).await.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_user_delete_cascades_to_profile_and_preferences() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let diver = user::ActiveModel {
            username: Set("diver1".to_string()),
            email: Set("diver1@example.com".to_string()),
            hashed_password: Set("not-a-real-hash".to_string()),
            is_active: Set(false),
            is_admin: Set(false),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        user_profile::ActiveModel {
            user_id: Set(diver.id),
            first_name: Set(String::new()),
            last_name: Set(String::new()),
            phone_number: Set(String::new()),
            company_name: Set(String::new()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        user_preferences::ActiveModel {
            user_id: Set(diver.id),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        assert!(diver.find_related(UserProfile).one(&db).await?.is_some());

        User::delete_by_id(diver.id).exec(&db).await?;

        assert_eq!(UserProfile::find().all(&db).await?.len(), 0);
        assert_eq!(UserPreferences::find().all(&db).await?.len(), 0);

        Ok(())
    }
}
