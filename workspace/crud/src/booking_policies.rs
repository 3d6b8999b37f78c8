use common::{BookingPolicyCreate, BookingPolicyResponse, BookingPolicyUpdate, Pagination};
use model::entities::{booking_policy, prelude::*};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::{info, instrument, warn};

use crate::error::{CrudError, Result};
use crate::hotels::find_hotel;
use crate::patch::ApplyPatch;

async fn find_policy(db: &DatabaseConnection, policy_id: i32) -> Result<booking_policy::Model> {
    BookingPolicy::find_by_id(policy_id).one(db).await?.ok_or_else(|| {
        warn!(policy_id, "Booking policy not found");
        CrudError::not_found("Booking policy")
    })
}

#[instrument(skip(db))]
pub async fn get_booking_policy(db: &DatabaseConnection, policy_id: i32) -> Result<BookingPolicyResponse> {
    Ok(BookingPolicyResponse::from(find_policy(db, policy_id).await?))
}

#[instrument(skip(db))]
pub async fn list_booking_policies(
    db: &DatabaseConnection,
    hotel_id: i32,
    page: Pagination,
) -> Result<Vec<BookingPolicyResponse>> {
    let policies = BookingPolicy::find()
        .filter(booking_policy::Column::HotelId.eq(hotel_id))
        .order_by_asc(booking_policy::Column::Id)
        .offset(page.offset())
        .limit(page.limit_or(Pagination::DEFAULT_LIMIT))
        .all(db)
        .await?;
    Ok(policies.into_iter().map(BookingPolicyResponse::from).collect())
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_booking_policy(
    db: &DatabaseConnection,
    hotel_id: i32,
    input: BookingPolicyCreate,
) -> Result<BookingPolicyResponse> {
    find_hotel(db, hotel_id).await?;

    let policy = booking_policy::ActiveModel {
        hotel_id: Set(hotel_id),
        name: Set(input.name),
        policy_text: Set(input.policy_text),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(policy_id = policy.id, "Booking policy created");
    Ok(BookingPolicyResponse::from(policy))
}

#[instrument(skip(db, input))]
pub async fn update_booking_policy(
    db: &DatabaseConnection,
    policy_id: i32,
    input: BookingPolicyUpdate,
) -> Result<BookingPolicyResponse> {
    let mut active = find_policy(db, policy_id).await?.into_active_model();
    let changed = input.apply(&mut active);
    let policy = active.update(db).await?;
    info!(?changed, "Booking policy updated");
    Ok(BookingPolicyResponse::from(policy))
}

/// Deletes the policy and returns the removed record.
#[instrument(skip(db))]
pub async fn delete_booking_policy(
    db: &DatabaseConnection,
    policy_id: i32,
) -> Result<BookingPolicyResponse> {
    let policy = find_policy(db, policy_id).await?;
    let removed = BookingPolicyResponse::from(policy.clone());
    policy.delete(db).await?;
    info!("Booking policy deleted");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotels::create_hotel;
    use crate::testing::{hotel_input, setup_db};

    #[tokio::test]
    async fn test_policy_lifecycle() -> Result<()> {
        let db = setup_db().await?;
        let hotel = create_hotel(&db, hotel_input("Reef House")).await?;

        let policy = create_booking_policy(
            &db,
            hotel.id,
            BookingPolicyCreate {
                name: "Cancellation".to_string(),
                policy_text: Some("Free until 30 days before arrival".to_string()),
            },
        )
        .await?;

        let renamed = update_booking_policy(
            &db,
            policy.id,
            BookingPolicyUpdate {
                name: Some("Cancellation terms".to_string()),
                policy_text: None,
            },
        )
        .await?;
        assert_eq!(renamed.name, "Cancellation terms");
        assert_eq!(renamed.policy_text, policy.policy_text);

        let cleared = update_booking_policy(
            &db,
            policy.id,
            BookingPolicyUpdate {
                name: None,
                policy_text: Some(None),
            },
        )
        .await?;
        assert_eq!(cleared.policy_text, None);

        let removed = delete_booking_policy(&db, policy.id).await?;
        assert_eq!(removed.id, policy.id);
        assert!(matches!(
            get_booking_policy(&db, policy.id).await,
            Err(CrudError::NotFound(_))
        ));
        assert!(list_booking_policies(&db, hotel.id, Pagination::default()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_under_missing_hotel() -> Result<()> {
        let db = setup_db().await?;
        let result = create_booking_policy(
            &db,
            42,
            BookingPolicyCreate {
                name: "Deposit".to_string(),
                policy_text: None,
            },
        )
        .await;
        match result {
            Err(CrudError::NotFound(msg)) => assert_eq!(msg, "Hotel not found"),
            other => panic!("expected not found, got {:?}", other),
        }
        Ok(())
    }
}
