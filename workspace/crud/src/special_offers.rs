use common::{Pagination, SpecialOfferCreate, SpecialOfferResponse};
use model::entities::{prelude::*, special_offer};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::{info, instrument, warn};

use crate::error::{CrudError, Result};
use crate::hotels::find_hotel;

#[instrument(skip(db))]
pub async fn get_special_offer(db: &DatabaseConnection, offer_id: i32) -> Result<SpecialOfferResponse> {
    SpecialOffer::find_by_id(offer_id)
        .one(db)
        .await?
        .map(SpecialOfferResponse::from)
        .ok_or_else(|| {
            warn!("Special offer not found");
            CrudError::not_found("Special offer")
        })
}

#[instrument(skip(db))]
pub async fn list_special_offers(
    db: &DatabaseConnection,
    hotel_id: i32,
    page: Pagination,
) -> Result<Vec<SpecialOfferResponse>> {
    let offers = SpecialOffer::find()
        .filter(special_offer::Column::HotelId.eq(hotel_id))
        .order_by_asc(special_offer::Column::Id)
        .offset(page.offset())
        .limit(page.limit_or(Pagination::DEFAULT_LIMIT))
        .all(db)
        .await?;
    Ok(offers.into_iter().map(SpecialOfferResponse::from).collect())
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_special_offer(
    db: &DatabaseConnection,
    hotel_id: i32,
    input: SpecialOfferCreate,
) -> Result<SpecialOfferResponse> {
    find_hotel(db, hotel_id).await?;

    let offer = special_offer::ActiveModel {
        hotel_id: Set(hotel_id),
        name: Set(input.name),
        description: Set(input.description),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(offer_id = offer.id, "Special offer created");
    Ok(SpecialOfferResponse::from(offer))
}
