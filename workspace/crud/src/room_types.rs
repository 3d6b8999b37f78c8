use common::{Pagination, RoomTypeCreate, RoomTypeResponse};
use model::entities::{occupancy_rate, prelude::*, room_type};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::{info, instrument, warn};

use crate::error::{CrudError, Result};
use crate::hotels::find_hotel;

pub(crate) async fn find_room_type(
    db: &DatabaseConnection,
    room_type_id: i32,
) -> Result<room_type::Model> {
    RoomType::find_by_id(room_type_id).one(db).await?.ok_or_else(|| {
        warn!(room_type_id, "Room type not found");
        CrudError::not_found("Room type")
    })
}

#[instrument(skip(db))]
pub async fn get_room_type(db: &DatabaseConnection, room_type_id: i32) -> Result<RoomTypeResponse> {
    let room = find_room_type(db, room_type_id).await?;
    let rates = room
        .find_related(OccupancyRate)
        .order_by_asc(occupancy_rate::Column::Id)
        .all(db)
        .await?;
    Ok(RoomTypeResponse::from((room, rates)))
}

/// Room types of a hotel with their occupancy rates.
#[instrument(skip(db))]
pub async fn list_room_types(
    db: &DatabaseConnection,
    hotel_id: i32,
    page: Pagination,
) -> Result<Vec<RoomTypeResponse>> {
    let rooms = RoomType::find()
        .filter(room_type::Column::HotelId.eq(hotel_id))
        .order_by_asc(room_type::Column::Id)
        .offset(page.offset())
        .limit(page.limit_or(Pagination::DEFAULT_LIMIT))
        .all(db)
        .await?;
    let rates = rooms.load_many(OccupancyRate, db).await?;
    Ok(rooms.into_iter().zip(rates).map(RoomTypeResponse::from).collect())
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_room_type(
    db: &DatabaseConnection,
    hotel_id: i32,
    input: RoomTypeCreate,
) -> Result<RoomTypeResponse> {
    find_hotel(db, hotel_id).await?;

    let room = room_type::ActiveModel {
        hotel_id: Set(hotel_id),
        name: Set(input.name),
        number_of_rooms: Set(input.number_of_rooms),
        description: Set(input.description),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(room_type_id = room.id, "Room type created");
    Ok(RoomTypeResponse::from((room, Vec::new())))
}
