use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create hotels table
        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(pk_auto(Hotels::Id))
                    .col(string(Hotels::Name))
                    .col(string(Hotels::Location))
                    .col(string_null(Hotels::Description))
                    .col(string_null(Hotels::ContactInfo))
                    .col(json_binary_null(Hotels::Amenities))
                    .col(string_null(Hotels::Policies))
                    .col(boolean(Hotels::IsActive).default(true))
                    .col(boolean(Hotels::IsDeleted).default(false))
                    .col(timestamp_with_time_zone(Hotels::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Hotels::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_hotels_name")
                    .table(Hotels::Table)
                    .col(Hotels::Name)
                    .to_owned(),
            )
            .await?;

        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Username).unique_key())
                    .col(string(Users::Email).unique_key())
                    .col(string(Users::HashedPassword))
                    .col(boolean(Users::IsActive).default(false))
                    .col(boolean(Users::IsAdmin).default(false))
                    .to_owned(),
            )
            .await?;

        // Create user_profiles table
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(pk_auto(UserProfiles::Id))
                    .col(integer(UserProfiles::UserId).unique_key())
                    .col(string(UserProfiles::FirstName).default(""))
                    .col(string(UserProfiles::LastName).default(""))
                    .col(string(UserProfiles::PhoneNumber).default(""))
                    .col(string(UserProfiles::CompanyName).default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profiles_user")
                            .from(UserProfiles::Table, UserProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create user_preferences table
        manager
            .create_table(
                Table::create()
                    .table(UserPreferences::Table)
                    .if_not_exists()
                    .col(pk_auto(UserPreferences::Id))
                    .col(integer(UserPreferences::UserId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_preferences_user")
                            .from(UserPreferences::Table, UserPreferences::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create booking_policies table
        manager
            .create_table(
                Table::create()
                    .table(BookingPolicies::Table)
                    .if_not_exists()
                    .col(pk_auto(BookingPolicies::Id))
                    .col(integer(BookingPolicies::HotelId))
                    .col(string(BookingPolicies::Name))
                    .col(string_null(BookingPolicies::PolicyText))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_policies_hotel")
                            .from(BookingPolicies::Table, BookingPolicies::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create meal_options table
        manager
            .create_table(
                Table::create()
                    .table(MealOptions::Table)
                    .if_not_exists()
                    .col(pk_auto(MealOptions::Id))
                    .col(integer(MealOptions::HotelId))
                    .col(string(MealOptions::Name))
                    .col(string_null(MealOptions::Description))
                    .col(decimal(MealOptions::Price).decimal_len(12, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_options_hotel")
                            .from(MealOptions::Table, MealOptions::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create room_types table
        manager
            .create_table(
                Table::create()
                    .table(RoomTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomTypes::Id))
                    .col(integer(RoomTypes::HotelId))
                    .col(string(RoomTypes::Name))
                    .col(integer_null(RoomTypes::NumberOfRooms))
                    .col(string_null(RoomTypes::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_types_hotel")
                            .from(RoomTypes::Table, RoomTypes::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create seasons table
        manager
            .create_table(
                Table::create()
                    .table(Seasons::Table)
                    .if_not_exists()
                    .col(pk_auto(Seasons::Id))
                    .col(integer(Seasons::HotelId))
                    .col(string(Seasons::Name))
                    .col(date(Seasons::StartDate))
                    .col(date(Seasons::EndDate))
                    .col(string_null(Seasons::HotelFocSlots))
                    .col(string_null(Seasons::DivingFocSlots))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seasons_hotel")
                            .from(Seasons::Table, Seasons::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create special_offers table
        manager
            .create_table(
                Table::create()
                    .table(SpecialOffers::Table)
                    .if_not_exists()
                    .col(pk_auto(SpecialOffers::Id))
                    .col(integer(SpecialOffers::HotelId))
                    .col(string(SpecialOffers::Name))
                    .col(string_null(SpecialOffers::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_special_offers_hotel")
                            .from(SpecialOffers::Table, SpecialOffers::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create diving_packages table
        manager
            .create_table(
                Table::create()
                    .table(DivingPackages::Table)
                    .if_not_exists()
                    .col(pk_auto(DivingPackages::Id))
                    .col(integer(DivingPackages::SeasonId))
                    .col(string(DivingPackages::Name))
                    .col(decimal(DivingPackages::Price).decimal_len(12, 2))
                    .col(integer(DivingPackages::FocSlots).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_diving_packages_season")
                            .from(DivingPackages::Table, DivingPackages::SeasonId)
                            .to(Seasons::Table, Seasons::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create occupancy_rates table
        manager
            .create_table(
                Table::create()
                    .table(OccupancyRates::Table)
                    .if_not_exists()
                    .col(pk_auto(OccupancyRates::Id))
                    .col(integer(OccupancyRates::RoomTypeId))
                    .col(integer(OccupancyRates::SeasonId))
                    .col(string_len(OccupancyRates::OccupancyType, 16))
                    .col(decimal(OccupancyRates::Rate).decimal_len(12, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_occupancy_rates_room_type")
                            .from(OccupancyRates::Table, OccupancyRates::RoomTypeId)
                            .to(RoomTypes::Table, RoomTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_occupancy_rates_season")
                            .from(OccupancyRates::Table, OccupancyRates::SeasonId)
                            .to(Seasons::Table, Seasons::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create group_contracts table
        manager
            .create_table(
                Table::create()
                    .table(GroupContracts::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupContracts::Id))
                    .col(integer(GroupContracts::HotelId))
                    .col(integer_null(GroupContracts::DivingPackageId))
                    .col(string(GroupContracts::GroupName))
                    .col(string(GroupContracts::Customer))
                    .col(date(GroupContracts::StartDate))
                    .col(date(GroupContracts::EndDate))
                    .col(string_null(GroupContracts::TravelAgent))
                    .col(string(GroupContracts::Contract))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_contracts_hotel")
                            .from(GroupContracts::Table, GroupContracts::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_contracts_diving_package")
                            .from(GroupContracts::Table, GroupContracts::DivingPackageId)
                            .to(DivingPackages::Table, DivingPackages::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_group_contracts_group_name")
                    .table(GroupContracts::Table)
                    .col(GroupContracts::GroupName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(GroupContracts::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(OccupancyRates::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DivingPackages::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SpecialOffers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Seasons::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(RoomTypes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MealOptions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(BookingPolicies::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserPreferences::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Define identifiers for all tables

#[derive(DeriveIden)]
enum Hotels {
    Table,
    Id,
    Name,
    Location,
    Description,
    ContactInfo,
    Amenities,
    Policies,
    IsActive,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    HashedPassword,
    IsActive,
    IsAdmin,
}

#[derive(DeriveIden)]
enum UserProfiles {
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    PhoneNumber,
    CompanyName,
}

#[derive(DeriveIden)]
enum UserPreferences {
    Table,
    Id,
    UserId,
}

#[derive(DeriveIden)]
enum BookingPolicies {
    Table,
    Id,
    HotelId,
    Name,
    PolicyText,
}

#[derive(DeriveIden)]
enum MealOptions {
    Table,
    Id,
    HotelId,
    Name,
    Description,
    Price,
}

#[derive(DeriveIden)]
enum RoomTypes {
    Table,
    Id,
    HotelId,
    Name,
    NumberOfRooms,
    Description,
}

#[derive(DeriveIden)]
enum Seasons {
    Table,
    Id,
    HotelId,
    Name,
    StartDate,
    EndDate,
    HotelFocSlots,
    DivingFocSlots,
}

#[derive(DeriveIden)]
enum SpecialOffers {
    Table,
    Id,
    HotelId,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum DivingPackages {
    Table,
    Id,
    SeasonId,
    Name,
    Price,
    FocSlots,
}

#[derive(DeriveIden)]
enum OccupancyRates {
    Table,
    Id,
    RoomTypeId,
    SeasonId,
    OccupancyType,
    Rate,
}

#[derive(DeriveIden)]
enum GroupContracts {
    Table,
    Id,
    HotelId,
    DivingPackageId,
    GroupName,
    Customer,
    StartDate,
    EndDate,
    TravelAgent,
    Contract,
}
