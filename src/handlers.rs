pub mod auth;
pub mod booking_policies;
pub mod diving_packages;
pub mod group_contracts;
pub mod health;
pub mod hotels;
pub mod meal_options;
pub mod occupancy_rates;
pub mod room_types;
pub mod seasons;
pub mod special_offers;
pub mod users;
