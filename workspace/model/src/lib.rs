//! SeaORM entities for hotels, pricing, group contracts and user accounts.

pub mod entities;
