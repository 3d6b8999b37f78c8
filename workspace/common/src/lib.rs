//! Transport-layer types for the booking admin API.
//! Every resource has a create shape, a response shape with its nested
//! children and, where the resource can be edited, an update shape whose
//! fields are all optional.

pub mod booking_policy;
pub mod group_contract;
pub mod hotel;
pub mod meal_option;
pub mod pagination;
pub mod patch;
pub mod room_type;
pub mod season;
pub mod special_offer;
pub mod user;
pub mod validation;

pub use booking_policy::{BookingPolicyCreate, BookingPolicyResponse, BookingPolicyUpdate};
pub use group_contract::{
    GroupContractCreate, GroupContractFilter, GroupContractResponse, GroupContractUpdate,
};
pub use hotel::{HotelCreate, HotelDetail, HotelListQuery, HotelResponse, HotelUpdate};
pub use meal_option::{MealOptionCreate, MealOptionResponse};
pub use pagination::Pagination;
pub use room_type::{
    OccupancyRateCreate, OccupancyRateInput, OccupancyRateResponse, RoomTypeCreate,
    RoomTypeResponse,
};
pub use season::{DivingPackageCreate, DivingPackageResponse, SeasonCreate, SeasonResponse};
pub use special_offer::{SpecialOfferCreate, SpecialOfferResponse};
pub use user::{
    LoginRequest, TokenResponse, UserCreate, UserPreferencesResponse, UserPreferencesUpdate,
    UserProfileResponse, UserProfileUpdate, UserResponse, UserStatusUpdate, UserUpdate,
};
