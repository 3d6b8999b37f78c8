use common::{MealOptionCreate, MealOptionResponse, Pagination};
use model::entities::{meal_option, prelude::*};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::{info, instrument, warn};

use crate::error::{CrudError, Result};
use crate::hotels::find_hotel;

#[instrument(skip(db))]
pub async fn get_meal_option(db: &DatabaseConnection, meal_option_id: i32) -> Result<MealOptionResponse> {
    MealOption::find_by_id(meal_option_id)
        .one(db)
        .await?
        .map(MealOptionResponse::from)
        .ok_or_else(|| {
            warn!("Meal option not found");
            CrudError::not_found("Meal option")
        })
}

#[instrument(skip(db))]
pub async fn list_meal_options(
    db: &DatabaseConnection,
    hotel_id: i32,
    page: Pagination,
) -> Result<Vec<MealOptionResponse>> {
    let options = MealOption::find()
        .filter(meal_option::Column::HotelId.eq(hotel_id))
        .order_by_asc(meal_option::Column::Id)
        .offset(page.offset())
        .limit(page.limit_or(Pagination::DEFAULT_LIMIT))
        .all(db)
        .await?;
    Ok(options.into_iter().map(MealOptionResponse::from).collect())
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_meal_option(
    db: &DatabaseConnection,
    hotel_id: i32,
    input: MealOptionCreate,
) -> Result<MealOptionResponse> {
    find_hotel(db, hotel_id).await?;

    let option = meal_option::ActiveModel {
        hotel_id: Set(hotel_id),
        name: Set(input.name),
        description: Set(input.description),
        price: Set(input.price),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(meal_option_id = option.id, "Meal option created");
    Ok(MealOptionResponse::from(option))
}
