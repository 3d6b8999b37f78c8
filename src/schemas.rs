use std::sync::Arc;

use common::{
    BookingPolicyCreate, BookingPolicyResponse, BookingPolicyUpdate, DivingPackageCreate,
    DivingPackageResponse, GroupContractCreate, GroupContractResponse, GroupContractUpdate,
    HotelCreate, HotelDetail, HotelResponse, HotelUpdate, LoginRequest, MealOptionCreate,
    MealOptionResponse, OccupancyRateCreate, OccupancyRateInput, OccupancyRateResponse,
    RoomTypeCreate, RoomTypeResponse, SeasonCreate, SeasonResponse, SpecialOfferCreate,
    SpecialOfferResponse, TokenResponse, UserCreate, UserPreferencesResponse,
    UserPreferencesUpdate, UserProfileResponse, UserProfileUpdate, UserResponse,
    UserStatusUpdate, UserUpdate,
};
use crud::AuthConfig;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Token signing and password hashing settings
    pub auth: Arc<AuthConfig>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::hotels::list_hotels,
        crate::handlers::hotels::get_hotel,
        crate::handlers::hotels::create_hotel,
        crate::handlers::hotels::update_hotel,
        crate::handlers::hotels::delete_hotel,
        crate::handlers::room_types::list_room_types,
        crate::handlers::room_types::create_room_type,
        crate::handlers::room_types::get_room_type,
        crate::handlers::meal_options::list_meal_options,
        crate::handlers::meal_options::create_meal_option,
        crate::handlers::meal_options::get_meal_option,
        crate::handlers::special_offers::list_special_offers,
        crate::handlers::special_offers::create_special_offer,
        crate::handlers::special_offers::get_special_offer,
        crate::handlers::booking_policies::list_booking_policies,
        crate::handlers::booking_policies::create_booking_policy,
        crate::handlers::booking_policies::get_booking_policy,
        crate::handlers::booking_policies::update_booking_policy,
        crate::handlers::booking_policies::delete_booking_policy,
        crate::handlers::seasons::list_seasons,
        crate::handlers::seasons::create_season,
        crate::handlers::seasons::get_season,
        crate::handlers::occupancy_rates::list_occupancy_rates,
        crate::handlers::occupancy_rates::create_nested_occupancy_rate,
        crate::handlers::occupancy_rates::create_occupancy_rate,
        crate::handlers::occupancy_rates::get_occupancy_rate,
        crate::handlers::diving_packages::list_diving_packages,
        crate::handlers::diving_packages::list_season_packages,
        crate::handlers::diving_packages::create_diving_package,
        crate::handlers::diving_packages::get_diving_package,
        crate::handlers::group_contracts::search_group_contracts,
        crate::handlers::group_contracts::list_hotel_group_contracts,
        crate::handlers::group_contracts::create_group_contract,
        crate::handlers::group_contracts::get_group_contract,
        crate::handlers::group_contracts::update_group_contract,
        crate::handlers::auth::login,
        crate::handlers::auth::token,
        crate::handlers::users::create_user,
        crate::handlers::users::list_users,
        crate::handlers::users::read_current_user,
        crate::handlers::users::get_user,
        crate::handlers::users::get_user_by_email,
        crate::handlers::users::get_user_by_username,
        crate::handlers::users::update_user,
        crate::handlers::users::update_user_profile,
        crate::handlers::users::update_user_preferences,
        crate::handlers::users::approve_user,
        crate::handlers::users::disapprove_user,
        crate::handlers::users::promote_user,
        crate::handlers::users::demote_user,
        crate::handlers::users::delete_user,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            HotelCreate,
            HotelUpdate,
            HotelResponse,
            HotelDetail,
            RoomTypeCreate,
            RoomTypeResponse,
            MealOptionCreate,
            MealOptionResponse,
            SpecialOfferCreate,
            SpecialOfferResponse,
            BookingPolicyCreate,
            BookingPolicyUpdate,
            BookingPolicyResponse,
            SeasonCreate,
            SeasonResponse,
            OccupancyRateCreate,
            OccupancyRateInput,
            OccupancyRateResponse,
            DivingPackageCreate,
            DivingPackageResponse,
            GroupContractCreate,
            GroupContractUpdate,
            GroupContractResponse,
            UserCreate,
            UserUpdate,
            UserStatusUpdate,
            UserProfileUpdate,
            UserPreferencesUpdate,
            UserProfileResponse,
            UserPreferencesResponse,
            UserResponse,
            LoginRequest,
            TokenResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "hotels", description = "Hotels and their owned resources"),
        (name = "pricing", description = "Room types, seasons, occupancy rates and diving packages"),
        (name = "group_contracts", description = "Group contract management and search"),
        (name = "auth", description = "Login and token issuance"),
        (name = "users", description = "Account management"),
    ),
    info(
        title = "SeaSaba API",
        description = "Booking administration API for hotels and dive resorts",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
