//! Data access for the booking admin backend.
//!
//! One function per entity and operation. Functions take the pooled
//! connection, perform their existence and uniqueness checks, then run the
//! mutation or query and return transfer shapes from `common`.

pub mod auth;
pub mod booking_policies;
pub mod diving_packages;
pub mod error;
pub mod group_contracts;
pub mod hotels;
pub mod meal_options;
pub mod occupancy_rates;
pub mod patch;
pub mod room_types;
pub mod seasons;
pub mod special_offers;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthConfig;
pub use error::{CrudError, Result};
