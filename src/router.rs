use crate::handlers::{
    auth::{login, token},
    booking_policies::{
        create_booking_policy, delete_booking_policy, get_booking_policy, list_booking_policies,
        update_booking_policy,
    },
    diving_packages::{
        create_diving_package, get_diving_package, list_diving_packages, list_season_packages,
    },
    group_contracts::{
        create_group_contract, get_group_contract, list_hotel_group_contracts,
        search_group_contracts, update_group_contract,
    },
    health::health_check,
    hotels::{create_hotel, delete_hotel, get_hotel, list_hotels, update_hotel},
    meal_options::{create_meal_option, get_meal_option, list_meal_options},
    occupancy_rates::{
        create_nested_occupancy_rate, create_occupancy_rate, get_occupancy_rate,
        list_occupancy_rates,
    },
    room_types::{create_room_type, get_room_type, list_room_types},
    seasons::{create_season, get_season, list_seasons},
    special_offers::{create_special_offer, get_special_offer, list_special_offers},
    users::{
        approve_user, create_user, delete_user, demote_user, disapprove_user, get_user,
        get_user_by_email, get_user_by_username, list_users, promote_user, read_current_user,
        update_user, update_user_preferences, update_user_profile,
    },
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Hotels and everything hanging off a hotel
        .route("/hotels", get(list_hotels).post(create_hotel))
        .route(
            "/hotels/:hotel_id",
            get(get_hotel).put(update_hotel).delete(delete_hotel),
        )
        .route(
            "/hotels/:hotel_id/room_types",
            get(list_room_types).post(create_room_type),
        )
        .route(
            "/hotels/:hotel_id/meal_options",
            get(list_meal_options).post(create_meal_option),
        )
        .route(
            "/hotels/:hotel_id/special_offers",
            get(list_special_offers).post(create_special_offer),
        )
        .route(
            "/hotels/:hotel_id/booking_policies",
            get(list_booking_policies).post(create_booking_policy),
        )
        .route(
            "/hotels/:hotel_id/seasons",
            get(list_seasons).post(create_season),
        )
        .route(
            "/hotels/:hotel_id/group_contracts",
            get(list_hotel_group_contracts).post(create_group_contract),
        )
        .route("/room_types/:room_type_id", get(get_room_type))
        .route("/meal_options/:meal_option_id", get(get_meal_option))
        .route("/special_offers/:offer_id", get(get_special_offer))
        .route(
            "/booking_policies/:policy_id",
            get(get_booking_policy)
                .put(update_booking_policy)
                .delete(delete_booking_policy),
        )
        // Pricing
        .route("/seasons/:season_id", get(get_season))
        .route(
            "/room_types/:room_type_id/seasons/:season_id/occupancy_rates",
            get(list_occupancy_rates).post(create_nested_occupancy_rate),
        )
        .route("/occupancy_rates", post(create_occupancy_rate))
        .route("/occupancy_rates/:rate_id", get(get_occupancy_rate))
        .route(
            "/seasons/:season_id/diving_packages",
            get(list_season_packages).post(create_diving_package),
        )
        .route("/diving_packages", get(list_diving_packages))
        .route("/diving_packages/:package_id", get(get_diving_package))
        // Group contracts
        .route("/group_contracts", get(search_group_contracts))
        .route(
            "/group_contracts/:contract_id",
            get(get_group_contract).put(update_group_contract),
        )
        // Authentication
        .route("/login", post(login))
        .route("/token", post(token))
        // Users
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route("/users/me", get(read_current_user))
        .route("/users/me/", get(read_current_user))
        .route(
            "/users/:user_id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/email/:email", get(get_user_by_email))
        .route("/users/username/:username", get(get_user_by_username))
        .route("/users/profile/:user_id", put(update_user_profile))
        .route("/users/preferences/:user_id", put(update_user_preferences))
        .route("/users/approve/:user_id", put(approve_user))
        .route("/users/disapprove/:user_id", put(disapprove_user))
        .route("/users/promote-admin/:user_id", put(promote_user))
        .route("/users/promote/:user_id", put(promote_user))
        .route("/users/demote-admin/:user_id", put(demote_user))
        .route("/users/demote/:user_id", put(demote_user))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
