//! Group contracts and their search.
//!
//! Text filters are case-insensitive substring matches. ASCII needles are
//! matched in SQL with `LOWER()` on both sides. SQLite only folds ASCII, so
//! needles with other characters are matched after loading, with Unicode
//! lowercasing, and the page is cut in memory.

use common::group_contract::CONTRACT_DEFAULT_LIMIT;
use common::{GroupContractCreate, GroupContractFilter, GroupContractResponse, GroupContractUpdate};
use model::entities::{group_contract, prelude::*};
use sea_orm::sea_query::{BinOper, Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::{debug, info, instrument, trace, warn};

use crate::diving_packages::find_diving_package;
use crate::error::{CrudError, Result};
use crate::hotels::find_hotel;
use crate::patch::ApplyPatch;

async fn find_contract(db: &DatabaseConnection, contract_id: i32) -> Result<group_contract::Model> {
    GroupContract::find_by_id(contract_id).one(db).await?.ok_or_else(|| {
        warn!(contract_id, "Group contract not found");
        CrudError::not_found("Group contract")
    })
}

fn contains_ignore_case(column: group_contract::Column, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).binary(
        BinOper::Like,
        Func::lower(Expr::val(format!("%{}%", needle))),
    )
}

fn text_value(contract: &group_contract::Model, column: group_contract::Column) -> Option<&str> {
    match column {
        group_contract::Column::GroupName => Some(&contract.group_name),
        group_contract::Column::Customer => Some(&contract.customer),
        group_contract::Column::TravelAgent => contract.travel_agent.as_deref(),
        _ => None,
    }
}

fn matches_folded(contract: &group_contract::Model, needles: &[(group_contract::Column, String)]) -> bool {
    needles.iter().all(|(column, needle)| {
        text_value(contract, *column).is_some_and(|value| value.to_lowercase().contains(needle))
    })
}

#[instrument(skip(db))]
pub async fn get_group_contract(db: &DatabaseConnection, contract_id: i32) -> Result<GroupContractResponse> {
    Ok(GroupContractResponse::from(find_contract(db, contract_id).await?))
}

/// Returns contracts matching every filter that is set, ordered by id.
#[instrument(skip(db))]
pub async fn search_group_contracts(
    db: &DatabaseConnection,
    filter: &GroupContractFilter,
) -> Result<Vec<GroupContractResponse>> {
    trace!("Searching group contracts");
    let mut query = GroupContract::find();

    if let Some(hotel_id) = filter.hotel_id {
        query = query.filter(group_contract::Column::HotelId.eq(hotel_id));
    }
    let text_filters = [
        (group_contract::Column::GroupName, filter.group_name.as_deref()),
        (group_contract::Column::Customer, filter.customer.as_deref()),
        (group_contract::Column::TravelAgent, filter.travel_agent.as_deref()),
    ];
    let mut folded = Vec::new();
    for (column, needle) in text_filters {
        match needle {
            Some(needle) if needle.is_ascii() => {
                query = query.filter(contains_ignore_case(column, needle));
            }
            Some(needle) => folded.push((column, needle.to_lowercase())),
            None => {}
        }
    }
    if let Some(start_date) = filter.start_date() {
        query = query.filter(group_contract::Column::StartDate.eq(start_date));
    }

    let page = filter.page();
    let limit = page.limit_or(CONTRACT_DEFAULT_LIMIT);
    let query = query.order_by_asc(group_contract::Column::Id);
    let contracts = if folded.is_empty() {
        query.offset(page.offset()).limit(limit).all(db).await?
    } else {
        query
            .all(db)
            .await?
            .into_iter()
            .filter(|contract| matches_folded(contract, &folded))
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect()
    };

    debug!(count = contracts.len(), "Loaded group contracts");
    Ok(contracts.into_iter().map(GroupContractResponse::from).collect())
}

#[instrument(skip(db, input), fields(group_name = %input.group_name))]
pub async fn create_group_contract(
    db: &DatabaseConnection,
    hotel_id: i32,
    input: GroupContractCreate,
) -> Result<GroupContractResponse> {
    find_hotel(db, hotel_id).await?;
    if let Some(package_id) = input.diving_package_id {
        find_diving_package(db, package_id).await?;
    }

    let contract = group_contract::ActiveModel {
        hotel_id: Set(hotel_id),
        diving_package_id: Set(input.diving_package_id),
        group_name: Set(input.group_name),
        customer: Set(input.customer),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        travel_agent: Set(input.travel_agent),
        contract: Set(input.contract),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(contract_id = contract.id, "Group contract created");
    Ok(GroupContractResponse::from(contract))
}

/// Partial update. The merged dates must still form a valid range.
#[instrument(skip(db, input))]
pub async fn update_group_contract(
    db: &DatabaseConnection,
    contract_id: i32,
    input: GroupContractUpdate,
) -> Result<GroupContractResponse> {
    let contract = find_contract(db, contract_id).await?;

    let start = input.start_date.unwrap_or(contract.start_date);
    let end = input.end_date.unwrap_or(contract.end_date);
    if start > end {
        warn!(%start, %end, "Inverted contract dates");
        return Err(CrudError::Validation(
            "start_date must not be after end_date".to_string(),
        ));
    }
    if let Some(Some(package_id)) = input.diving_package_id {
        find_diving_package(db, package_id).await?;
    }

    let mut active = contract.into_active_model();
    let changed = input.apply(&mut active);
    let contract = active.update(db).await?;

    info!(?changed, "Group contract updated");
    Ok(GroupContractResponse::from(contract))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotels::create_hotel;
    use crate::testing::{hotel_input, setup_db};
    use chrono::NaiveDate;

    fn contract(group_name: &str, customer: &str, agent: Option<&str>, day: u32) -> GroupContractCreate {
        GroupContractCreate {
            group_name: group_name.to_string(),
            customer: customer.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 12, day).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, day + 7).unwrap(),
            travel_agent: agent.map(str::to_string),
            contract: format!("GC-{}", day),
            diving_package_id: None,
        }
    }

    #[tokio::test]
    async fn test_filters_are_case_insensitive_and_anded() -> Result<()> {
        let db = setup_db().await?;
        let reef = create_hotel(&db, hotel_input("Reef House")).await?;
        let lagoon = create_hotel(&db, hotel_input("Lagoon Lodge")).await?;

        create_group_contract(&db, reef.id, contract("Berlin Divers", "Smith GmbH", Some("Sub Tours"), 1)).await?;
        create_group_contract(&db, reef.id, contract("Hamburg Club", "SMITHSON Ltd", None, 8)).await?;
        create_group_contract(&db, reef.id, contract("Munich Reefers", "Jones AG", Some("sub tours"), 15)).await?;
        create_group_contract(&db, lagoon.id, contract("Lagoon Group", "Smith GmbH", None, 1)).await?;

        let by_customer = search_group_contracts(
            &db,
            &GroupContractFilter {
                hotel_id: Some(reef.id),
                customer: Some("smith".to_string()),
                ..Default::default()
            },
        )
        .await?;
        let names: Vec<_> = by_customer.iter().map(|c| c.group_name.as_str()).collect();
        assert_eq!(names, vec!["Berlin Divers", "Hamburg Club"]);

        let anded = search_group_contracts(
            &db,
            &GroupContractFilter {
                customer: Some("Smith".to_string()),
                travel_agent: Some("SUB".to_string()),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(anded.len(), 1);
        assert_eq!(anded[0].group_name, "Berlin Divers");

        let by_date = search_group_contracts(
            &db,
            &GroupContractFilter {
                start_date: Some("2024-12-01".to_string()),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(by_date.len(), 2);

        // malformed date disables the filter
        let ignored = search_group_contracts(
            &db,
            &GroupContractFilter {
                hotel_id: Some(reef.id),
                start_date: Some("first of december".to_string()),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(ignored.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_non_ascii_needles_match_any_case() -> Result<()> {
        let db = setup_db().await?;
        let hotel = create_hotel(&db, hotel_input("Reef House")).await?;
        create_group_contract(&db, hotel.id, contract("Tauchclub", "MÜLLER Reisen", Some("Über Tours"), 1)).await?;
        create_group_contract(&db, hotel.id, contract("Berlin Divers", "Mueller", None, 8)).await?;

        for needle in ["MÜLLER", "müller", "Müller Rei"] {
            let found = search_group_contracts(
                &db,
                &GroupContractFilter {
                    customer: Some(needle.to_string()),
                    ..Default::default()
                },
            )
            .await?;
            assert_eq!(found.len(), 1, "needle {needle}");
            assert_eq!(found[0].group_name, "Tauchclub");
        }

        let mixed = search_group_contracts(
            &db,
            &GroupContractFilter {
                group_name: Some("TAUCH".to_string()),
                travel_agent: Some("über".to_string()),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(mixed.len(), 1);

        let skipped = search_group_contracts(
            &db,
            &GroupContractFilter {
                customer: Some("müller".to_string()),
                skip: Some(1),
                ..Default::default()
            },
        )
        .await?;
        assert!(skipped.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_default_page_size_is_ten() -> Result<()> {
        let db = setup_db().await?;
        let hotel = create_hotel(&db, hotel_input("Reef House")).await?;
        for day in 1..=12 {
            create_group_contract(&db, hotel.id, contract(&format!("Group {}", day), "Smith", None, day)).await?;
        }

        let first = search_group_contracts(&db, &GroupContractFilter::default()).await?;
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].group_name, "Group 1");

        let rest = search_group_contracts(
            &db,
            &GroupContractFilter {
                skip: Some(10),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(rest.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_validates_merged_dates_and_package() -> Result<()> {
        let db = setup_db().await?;
        let hotel = create_hotel(&db, hotel_input("Reef House")).await?;
        let created = create_group_contract(&db, hotel.id, contract("Berlin Divers", "Smith", Some("Sub Tours"), 1)).await?;

        let inverted = update_group_contract(
            &db,
            created.id,
            GroupContractUpdate {
                start_date: NaiveDate::from_ymd_opt(2024, 12, 20),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(inverted, Err(CrudError::Validation(_))));

        let missing_package = update_group_contract(
            &db,
            created.id,
            GroupContractUpdate {
                diving_package_id: Some(Some(77)),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(missing_package, Err(CrudError::NotFound(_))));

        let updated = update_group_contract(
            &db,
            created.id,
            GroupContractUpdate {
                customer: Some("Smith & Sons".to_string()),
                travel_agent: Some(None),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(updated.customer, "Smith & Sons");
        assert_eq!(updated.travel_agent, None);
        assert_eq!(updated.group_name, "Berlin Divers");
        Ok(())
    }
}
