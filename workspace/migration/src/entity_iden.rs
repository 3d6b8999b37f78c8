use model::entities::prelude::*;
use sea_orm::entity::prelude::*;
use sea_orm_migration::prelude::Alias;

/// Table and column names taken from the model crate, so migrations written
/// after the initial schema cannot drift from the entity definitions.
pub trait EntityIden: EntityTrait {
    fn table() -> Alias {
        Alias::new(Self::default().table_name())
    }

    fn column(column: Self::Column) -> Alias {
        Alias::new(column.as_str())
    }
}

impl EntityIden for Hotel {}
impl EntityIden for RoomType {}
impl EntityIden for Season {}
impl EntityIden for OccupancyRate {}
impl EntityIden for GroupContract {}

#[cfg(test)]
mod tests {
    use super::*;
    use model::entities::occupancy_rate;
    use sea_orm_migration::prelude::Iden;

    #[test]
    fn test_names_follow_entities() {
        assert_eq!(OccupancyRate::table().to_string(), "occupancy_rates");
        assert_eq!(
            OccupancyRate::column(occupancy_rate::Column::RoomTypeId).to_string(),
            "room_type_id"
        );
    }
}
