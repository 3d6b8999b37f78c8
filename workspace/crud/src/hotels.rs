use chrono::Utc;
use common::{
    BookingPolicyResponse, GroupContractResponse, HotelCreate, HotelDetail, HotelListQuery,
    HotelResponse, HotelUpdate, MealOptionResponse, RoomTypeResponse, SeasonResponse,
    SpecialOfferResponse,
};
use model::entities::{
    booking_policy, group_contract, hotel, meal_option, prelude::*, room_type, season,
    special_offer,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, LoaderTrait,
    ModelTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::{debug, info, instrument, trace, warn};

use crate::error::{CrudError, Result, conflict_on_unique};
use crate::patch::ApplyPatch;

pub const NAME_TAKEN: &str = "Hotel name already exists";

/// Loads a hotel row or fails with "Hotel not found". Soft-deleted hotels
/// are still returned.
pub async fn find_hotel(db: &DatabaseConnection, hotel_id: i32) -> Result<hotel::Model> {
    Hotel::find_by_id(hotel_id).one(db).await?.ok_or_else(|| {
        warn!(hotel_id, "Hotel not found");
        CrudError::not_found("Hotel")
    })
}

async fn name_taken(db: &DatabaseConnection, name: &str, except: Option<i32>) -> Result<bool> {
    let mut query = Hotel::find().filter(hotel::Column::Name.eq(name));
    if let Some(id) = except {
        query = query.filter(hotel::Column::Id.ne(id));
    }
    Ok(query.one(db).await?.is_some())
}

/// Returns the hotel with every owned collection. Each relation is loaded
/// with a single query.
#[instrument(skip(db))]
pub async fn get_hotel(db: &DatabaseConnection, hotel_id: i32) -> Result<HotelDetail> {
    trace!("Fetching hotel with children");
    let hotel = find_hotel(db, hotel_id).await?;

    let room_types = hotel
        .find_related(RoomType)
        .order_by_asc(room_type::Column::Id)
        .all(db)
        .await?;
    let rates = room_types.load_many(OccupancyRate, db).await?;

    let seasons = hotel
        .find_related(Season)
        .order_by_asc(season::Column::Id)
        .all(db)
        .await?;
    let packages = seasons.load_many(DivingPackage, db).await?;

    let meal_options = hotel
        .find_related(MealOption)
        .order_by_asc(meal_option::Column::Id)
        .all(db)
        .await?;
    let special_offers = hotel
        .find_related(SpecialOffer)
        .order_by_asc(special_offer::Column::Id)
        .all(db)
        .await?;
    let booking_policies = hotel
        .find_related(BookingPolicy)
        .order_by_asc(booking_policy::Column::Id)
        .all(db)
        .await?;
    let group_contracts = hotel
        .find_related(GroupContract)
        .order_by_asc(group_contract::Column::Id)
        .all(db)
        .await?;

    debug!(
        room_types = room_types.len(),
        seasons = seasons.len(),
        group_contracts = group_contracts.len(),
        "Loaded hotel children"
    );

    Ok(HotelDetail {
        hotel: HotelResponse::from(hotel),
        room_types: room_types
            .into_iter()
            .zip(rates)
            .map(RoomTypeResponse::from)
            .collect(),
        meal_options: meal_options.into_iter().map(MealOptionResponse::from).collect(),
        special_offers: special_offers
            .into_iter()
            .map(SpecialOfferResponse::from)
            .collect(),
        booking_policies: booking_policies
            .into_iter()
            .map(BookingPolicyResponse::from)
            .collect(),
        group_contracts: group_contracts
            .into_iter()
            .map(GroupContractResponse::from)
            .collect(),
        seasons: seasons.into_iter().zip(packages).map(SeasonResponse::from).collect(),
    })
}

/// Lists hotels ordered by id. Soft-deleted hotels are skipped unless
/// `include_deleted` is set.
#[instrument(skip(db))]
pub async fn list_hotels(db: &DatabaseConnection, query: HotelListQuery) -> Result<Vec<HotelResponse>> {
    let page = query.page();
    let mut select = Hotel::find();
    if !query.include_deleted.unwrap_or(false) {
        select = select.filter(hotel::Column::IsDeleted.eq(false));
    }
    let hotels = select
        .order_by_asc(hotel::Column::Id)
        .offset(page.offset())
        .limit(page.limit_or(common::Pagination::DEFAULT_LIMIT))
        .all(db)
        .await?;
    debug!(count = hotels.len(), "Loaded hotels");
    Ok(hotels.into_iter().map(HotelResponse::from).collect())
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_hotel(db: &DatabaseConnection, input: HotelCreate) -> Result<HotelResponse> {
    trace!("Creating hotel");
    if name_taken(db, &input.name, None).await? {
        warn!("{}", NAME_TAKEN);
        return Err(CrudError::Conflict(NAME_TAKEN.to_string()));
    }

    let now = Utc::now();
    let hotel = hotel::ActiveModel {
        name: Set(input.name),
        location: Set(input.location),
        description: Set(input.description),
        contact_info: Set(input.contact_info),
        amenities: Set(input.amenities),
        policies: Set(input.policies),
        is_active: Set(input.is_active.unwrap_or(true)),
        is_deleted: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|err| conflict_on_unique(err, NAME_TAKEN))?;

    info!(hotel_id = hotel.id, "Hotel created");
    Ok(HotelResponse::from(hotel))
}

/// Applies a partial update and refreshes `updated_at`.
#[instrument(skip(db, input))]
pub async fn update_hotel(
    db: &DatabaseConnection,
    hotel_id: i32,
    input: HotelUpdate,
) -> Result<HotelResponse> {
    let hotel = find_hotel(db, hotel_id).await?;

    if let Some(name) = input.name.as_deref() {
        if name_taken(db, name, Some(hotel_id)).await? {
            warn!("{}", NAME_TAKEN);
            return Err(CrudError::Conflict(NAME_TAKEN.to_string()));
        }
    }

    let mut active = hotel.into_active_model();
    let changed = input.apply(&mut active);
    active.updated_at = Set(Utc::now());
    let hotel = active
        .update(db)
        .await
        .map_err(|err| conflict_on_unique(err, NAME_TAKEN))?;

    info!(?changed, "Hotel updated");
    Ok(HotelResponse::from(hotel))
}

/// Flags the hotel as deleted. The row and its children are kept.
#[instrument(skip(db))]
pub async fn soft_delete_hotel(db: &DatabaseConnection, hotel_id: i32) -> Result<HotelResponse> {
    update_hotel(
        db,
        hotel_id,
        HotelUpdate {
            is_deleted: Some(true),
            ..Default::default()
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{hotel_input, setup_db};
    use crate::{booking_policies, group_contracts, room_types, seasons};
    use common::{
        BookingPolicyCreate, DivingPackageCreate, GroupContractCreate, OccupancyRateInput,
        Pagination, RoomTypeCreate, SeasonCreate,
    };
    use chrono::NaiveDate;
    use model::entities::occupancy_rate::OccupancyType;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_duplicate_name_rejected() -> Result<()> {
        let db = setup_db().await?;
        create_hotel(&db, hotel_input("Reef House")).await?;

        match create_hotel(&db, hotel_input("Reef House")).await {
            Err(CrudError::Conflict(msg)) => assert_eq!(msg, NAME_TAKEN),
            other => panic!("expected conflict, got {:?}", other),
        }

        let second = create_hotel(&db, hotel_input("Lagoon Lodge")).await?;
        let renamed = update_hotel(
            &db,
            second.id,
            HotelUpdate {
                name: Some("Reef House".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(renamed, Err(CrudError::Conflict(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_merges_and_clears() -> Result<()> {
        let db = setup_db().await?;
        let mut input = hotel_input("Reef House");
        input.description = Some("Beachfront".to_string());
        input.contact_info = Some("+20 69 000".to_string());
        let created = create_hotel(&db, input).await?;

        let updated = update_hotel(
            &db,
            created.id,
            HotelUpdate {
                location: Some("Marsa Alam".to_string()),
                description: Some(None),
                ..Default::default()
            },
        )
        .await?;

        assert_eq!(updated.name, "Reef House");
        assert_eq!(updated.location, "Marsa Alam");
        assert_eq!(updated.description, None);
        assert_eq!(updated.contact_info.as_deref(), Some("+20 69 000"));
        assert!(updated.updated_at >= created.updated_at);

        assert!(matches!(
            update_hotel(&db, 999, HotelUpdate::default()).await,
            Err(CrudError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_soft_deleted_hotels_hidden_from_listing() -> Result<()> {
        let db = setup_db().await?;
        let kept = create_hotel(&db, hotel_input("Reef House")).await?;
        let gone = create_hotel(&db, hotel_input("Lagoon Lodge")).await?;

        let deleted = soft_delete_hotel(&db, gone.id).await?;
        assert!(deleted.is_deleted);

        let visible = list_hotels(&db, HotelListQuery::default()).await?;
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, kept.id);

        let all = list_hotels(
            &db,
            HotelListQuery {
                include_deleted: Some(true),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(all.len(), 2);

        // still readable by id
        assert!(get_hotel(&db, gone.id).await?.hotel.is_deleted);
        Ok(())
    }

    #[tokio::test]
    async fn test_listing_pages() -> Result<()> {
        let db = setup_db().await?;
        for name in ["A", "B", "C"] {
            create_hotel(&db, hotel_input(name)).await?;
        }
        let page = |skip, limit| HotelListQuery {
            skip: Some(skip),
            limit: Some(limit),
            include_deleted: None,
        };

        let second = list_hotels(&db, page(1, 1)).await?;
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].name, "B");
        assert!(list_hotels(&db, page(0, 0)).await?.is_empty());
        assert!(list_hotels(&db, page(3, 10)).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_hotel_nests_children() -> Result<()> {
        let db = setup_db().await?;
        let hotel = create_hotel(&db, hotel_input("Reef House")).await?;

        let room = room_types::create_room_type(
            &db,
            hotel.id,
            RoomTypeCreate {
                name: "Garden Bungalow".to_string(),
                number_of_rooms: Some(12),
                description: None,
            },
        )
        .await?;
        let season = seasons::create_season(
            &db,
            hotel.id,
            SeasonCreate {
                name: "High".to_string(),
                start_date: NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                hotel_foc_slots: None,
                diving_foc_slots: None,
            },
        )
        .await?;
        crate::occupancy_rates::create_for_room_and_season(
            &db,
            room.id,
            season.id,
            OccupancyRateInput {
                occupancy_type: OccupancyType::Double,
                rate: Decimal::new(12000, 2),
            },
        )
        .await?;
        crate::diving_packages::create_diving_package(
            &db,
            season.id,
            DivingPackageCreate {
                name: "10 boat dives".to_string(),
                price: Decimal::new(45000, 2),
                foc_slots: None,
            },
        )
        .await?;
        booking_policies::create_booking_policy(
            &db,
            hotel.id,
            BookingPolicyCreate {
                name: "Cancellation".to_string(),
                policy_text: Some("Free until 30 days before arrival".to_string()),
            },
        )
        .await?;
        group_contracts::create_group_contract(
            &db,
            hotel.id,
            GroupContractCreate {
                group_name: "Berlin Divers".to_string(),
                customer: "Smith GmbH".to_string(),
                start_date: NaiveDate::from_ymd_opt(2024, 12, 22).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 12, 29).unwrap(),
                travel_agent: None,
                contract: "GC-1".to_string(),
                diving_package_id: None,
            },
        )
        .await?;

        let detail = get_hotel(&db, hotel.id).await?;
        assert_eq!(detail.hotel.name, "Reef House");
        assert_eq!(detail.room_types.len(), 1);
        assert_eq!(detail.room_types[0].occupancy_rates.len(), 1);
        assert_eq!(detail.seasons.len(), 1);
        assert_eq!(detail.seasons[0].diving_packages.len(), 1);
        assert_eq!(detail.seasons[0].diving_packages[0].foc_slots, 0);
        assert_eq!(detail.booking_policies.len(), 1);
        assert_eq!(detail.group_contracts.len(), 1);
        assert!(detail.meal_options.is_empty());
        assert!(detail.special_offers.is_empty());

        let listed = room_types::list_room_types(&db, hotel.id, Pagination::default()).await?;
        assert_eq!(listed, detail.room_types);
        Ok(())
    }
}
