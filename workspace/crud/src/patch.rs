//! Typed partial updates.
//!
//! Every update shape implements [`ApplyPatch`] for the active model it
//! edits. Fields the caller left out stay `Unchanged`, so the generated
//! `UPDATE` only touches what was sent. The returned names are used for
//! logging.

use common::{BookingPolicyUpdate, GroupContractUpdate, HotelUpdate, UserProfileUpdate, UserStatusUpdate, UserUpdate};
use model::entities::{booking_policy, group_contract, hotel, user, user_profile};
use sea_orm::{ActiveModelTrait, ActiveValue, Set, Value};

pub trait ApplyPatch {
    type Target: ActiveModelTrait;

    /// Copies the present fields onto `target` and returns their names.
    fn apply(self, target: &mut Self::Target) -> Vec<&'static str>;
}

/// Overwrites a non-nullable column when a value is present.
pub fn set_if_present<V>(
    field: &mut ActiveValue<V>,
    value: Option<V>,
    name: &'static str,
    changed: &mut Vec<&'static str>,
) where
    V: Into<Value>,
{
    if let Some(value) = value {
        *field = Set(value);
        changed.push(name);
    }
}

/// Overwrites or clears a nullable column. `None` keeps the stored value,
/// `Some(None)` writes NULL.
pub fn set_or_clear<V>(
    field: &mut ActiveValue<Option<V>>,
    value: Option<Option<V>>,
    name: &'static str,
    changed: &mut Vec<&'static str>,
) where
    Option<V>: Into<Value>,
{
    if let Some(value) = value {
        *field = Set(value);
        changed.push(name);
    }
}

impl ApplyPatch for HotelUpdate {
    type Target = hotel::ActiveModel;

    fn apply(self, target: &mut hotel::ActiveModel) -> Vec<&'static str> {
        let mut changed = Vec::new();
        set_if_present(&mut target.name, self.name, "name", &mut changed);
        set_if_present(&mut target.location, self.location, "location", &mut changed);
        set_or_clear(&mut target.description, self.description, "description", &mut changed);
        set_or_clear(&mut target.contact_info, self.contact_info, "contact_info", &mut changed);
        set_or_clear(&mut target.amenities, self.amenities, "amenities", &mut changed);
        set_or_clear(&mut target.policies, self.policies, "policies", &mut changed);
        set_if_present(&mut target.is_active, self.is_active, "is_active", &mut changed);
        set_if_present(&mut target.is_deleted, self.is_deleted, "is_deleted", &mut changed);
        changed
    }
}

impl ApplyPatch for BookingPolicyUpdate {
    type Target = booking_policy::ActiveModel;

    fn apply(self, target: &mut booking_policy::ActiveModel) -> Vec<&'static str> {
        let mut changed = Vec::new();
        set_if_present(&mut target.name, self.name, "name", &mut changed);
        set_or_clear(&mut target.policy_text, self.policy_text, "policy_text", &mut changed);
        changed
    }
}

impl ApplyPatch for GroupContractUpdate {
    type Target = group_contract::ActiveModel;

    fn apply(self, target: &mut group_contract::ActiveModel) -> Vec<&'static str> {
        let mut changed = Vec::new();
        set_if_present(&mut target.group_name, self.group_name, "group_name", &mut changed);
        set_if_present(&mut target.customer, self.customer, "customer", &mut changed);
        set_if_present(&mut target.start_date, self.start_date, "start_date", &mut changed);
        set_if_present(&mut target.end_date, self.end_date, "end_date", &mut changed);
        set_or_clear(&mut target.travel_agent, self.travel_agent, "travel_agent", &mut changed);
        set_if_present(&mut target.contract, self.contract, "contract", &mut changed);
        set_or_clear(
            &mut target.diving_package_id,
            self.diving_package_id,
            "diving_package_id",
            &mut changed,
        );
        changed
    }
}

/// Username and email only. The password needs hashing and is handled by
/// [`crate::users::update_user`].
impl ApplyPatch for UserUpdate {
    type Target = user::ActiveModel;

    fn apply(self, target: &mut user::ActiveModel) -> Vec<&'static str> {
        let mut changed = Vec::new();
        set_if_present(&mut target.username, self.username, "username", &mut changed);
        set_if_present(&mut target.email, self.email, "email", &mut changed);
        changed
    }
}

impl ApplyPatch for UserStatusUpdate {
    type Target = user::ActiveModel;

    fn apply(self, target: &mut user::ActiveModel) -> Vec<&'static str> {
        let mut changed = Vec::new();
        set_if_present(&mut target.is_active, self.is_active, "is_active", &mut changed);
        set_if_present(&mut target.is_admin, self.is_admin, "is_admin", &mut changed);
        changed
    }
}

impl ApplyPatch for UserProfileUpdate {
    type Target = user_profile::ActiveModel;

    fn apply(self, target: &mut user_profile::ActiveModel) -> Vec<&'static str> {
        let mut changed = Vec::new();
        set_if_present(&mut target.first_name, self.first_name, "first_name", &mut changed);
        set_if_present(&mut target.last_name, self.last_name, "last_name", &mut changed);
        set_if_present(&mut target.phone_number, self.phone_number, "phone_number", &mut changed);
        set_if_present(&mut target.company_name, self.company_name, "company_name", &mut changed);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use sea_orm::IntoActiveModel;

    fn stored_hotel() -> hotel::Model {
        hotel::Model {
            id: 1,
            name: "Reef House".to_string(),
            location: "Dahab".to_string(),
            description: Some("Beachfront".to_string()),
            contact_info: Some("+20 69 000".to_string()),
            amenities: None,
            policies: None,
            is_active: true,
            is_deleted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_absent_fields_stay_unchanged() {
        let mut active = stored_hotel().into_active_model();
        let changed = HotelUpdate {
            location: Some("Marsa Alam".to_string()),
            ..Default::default()
        }
        .apply(&mut active);

        assert_eq!(changed, vec!["location"]);
        assert_eq!(active.location, Set("Marsa Alam".to_string()));
        assert!(active.name.is_unchanged());
        assert!(active.description.is_unchanged());
        assert!(active.is_deleted.is_unchanged());
    }

    #[test]
    fn test_explicit_null_clears_nullable_column() {
        let mut active = stored_hotel().into_active_model();
        let changed = HotelUpdate {
            description: Some(None),
            contact_info: Some(Some("reception@reef.example".to_string())),
            ..Default::default()
        }
        .apply(&mut active);

        assert_eq!(changed, vec!["description", "contact_info"]);
        assert_eq!(active.description, Set(None));
        assert_eq!(
            active.contact_info,
            Set(Some("reception@reef.example".to_string()))
        );
    }

    #[test]
    fn test_status_update_touches_single_flag() {
        let stored = user::Model {
            id: 3,
            username: "diver1".to_string(),
            email: "a@b.com".to_string(),
            hashed_password: "hash".to_string(),
            is_active: false,
            is_admin: false,
        };
        let mut active = stored.into_active_model();
        let changed = UserStatusUpdate::admin(true).apply(&mut active);

        assert_eq!(changed, vec!["is_admin"]);
        assert_eq!(active.is_admin, Set(true));
        assert!(active.is_active.is_unchanged());
    }

    #[test]
    fn test_contract_package_can_be_detached() {
        let stored = group_contract::Model {
            id: 1,
            hotel_id: 1,
            diving_package_id: Some(4),
            group_name: "Berlin Divers".to_string(),
            customer: "Smith GmbH".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 12, 22).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 29).unwrap(),
            travel_agent: None,
            contract: "GC-1".to_string(),
        };
        let mut active = stored.into_active_model();
        let changed = GroupContractUpdate {
            diving_package_id: Some(None),
            ..Default::default()
        }
        .apply(&mut active);

        assert_eq!(changed, vec!["diving_package_id"]);
        assert_eq!(active.diving_package_id, Set(None));
        assert!(active.travel_agent.is_unchanged());
    }
}
