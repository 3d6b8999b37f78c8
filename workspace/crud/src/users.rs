//! Account lifecycle: registration, lookup, edits, role flags, removal.

use std::collections::HashMap;

use common::{
    Pagination, UserCreate, UserPreferencesUpdate, UserProfileUpdate, UserResponse,
    UserStatusUpdate, UserUpdate,
};
use model::entities::{prelude::*, user, user_preferences, user_profile};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{debug, info, instrument, trace, warn};

use crate::auth::AuthConfig;
use crate::error::{CrudError, Result, conflict_on_unique};
use crate::patch::ApplyPatch;

pub const EMAIL_TAKEN: &str = "Email already registered";
pub const USERNAME_TAKEN: &str = "Username already registered";

async fn find_user(db: &DatabaseConnection, user_id: i32) -> Result<user::Model> {
    User::find_by_id(user_id).one(db).await?.ok_or_else(|| {
        warn!(user_id, "User not found");
        CrudError::not_found("User")
    })
}

async fn email_taken(db: &DatabaseConnection, email: &str, except: Option<i32>) -> Result<bool> {
    let mut query = User::find().filter(user::Column::Email.eq(email));
    if let Some(id) = except {
        query = query.filter(user::Column::Id.ne(id));
    }
    Ok(query.one(db).await?.is_some())
}

async fn username_taken(
    db: &DatabaseConnection,
    username: &str,
    except: Option<i32>,
) -> Result<bool> {
    let mut query = User::find().filter(user::Column::Username.eq(username));
    if let Some(id) = except {
        query = query.filter(user::Column::Id.ne(id));
    }
    Ok(query.one(db).await?.is_some())
}

/// Attaches profile and preferences to a user.
async fn with_details(db: &DatabaseConnection, user: user::Model) -> Result<UserResponse> {
    let profile = user.find_related(UserProfile).one(db).await?;
    let preferences = user.find_related(UserPreferences).one(db).await?;
    Ok(UserResponse::from((user, profile, preferences)))
}

/// Registers an account together with its empty profile and preferences.
///
/// The three rows are written in one transaction; nothing is left behind if
/// any insert fails.
#[instrument(skip(db, auth, input), fields(username = %input.username))]
pub async fn create_user(
    db: &DatabaseConnection,
    auth: &AuthConfig,
    input: UserCreate,
) -> Result<UserResponse> {
    trace!("Creating account");

    if email_taken(db, &input.email, None).await? {
        warn!(email = %input.email, "{}", EMAIL_TAKEN);
        return Err(CrudError::Conflict(EMAIL_TAKEN.to_string()));
    }
    if username_taken(db, &input.username, None).await? {
        warn!("{}", USERNAME_TAKEN);
        return Err(CrudError::Conflict(USERNAME_TAKEN.to_string()));
    }

    let hashed_password = auth.hash_password(&input.password)?;

    let txn = db.begin().await?;

    let user = user::ActiveModel {
        username: Set(input.username),
        email: Set(input.email),
        hashed_password: Set(hashed_password),
        is_active: Set(false),
        is_admin: Set(false),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|err| conflict_on_unique(err, "Username or email already registered"))?;

    let profile = user_profile::ActiveModel {
        user_id: Set(user.id),
        first_name: Set(String::new()),
        last_name: Set(String::new()),
        phone_number: Set(String::new()),
        company_name: Set(String::new()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let preferences = user_preferences::ActiveModel {
        user_id: Set(user.id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(user_id = user.id, "Account created");
    Ok(UserResponse::from((user, Some(profile), Some(preferences))))
}

/// Registers an account and marks it active and admin in one go. Used to
/// bootstrap the first operator.
#[instrument(skip(db, auth, input), fields(username = %input.username))]
pub async fn create_admin(
    db: &DatabaseConnection,
    auth: &AuthConfig,
    input: UserCreate,
) -> Result<UserResponse> {
    let created = create_user(db, auth, input).await?;
    update_user_status(
        db,
        created.id,
        UserStatusUpdate {
            is_active: Some(true),
            is_admin: Some(true),
        },
    )
    .await
}

#[instrument(skip(db))]
pub async fn get_user(db: &DatabaseConnection, user_id: i32) -> Result<UserResponse> {
    trace!("Fetching user");
    let user = find_user(db, user_id).await?;
    with_details(db, user).await
}

#[instrument(skip(db))]
pub async fn get_user_by_email(db: &DatabaseConnection, email: &str) -> Result<UserResponse> {
    let user = User::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?
        .ok_or_else(|| {
            warn!("User not found");
            CrudError::not_found("User")
        })?;
    with_details(db, user).await
}

#[instrument(skip(db))]
pub async fn get_user_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<UserResponse> {
    let user = User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?
        .ok_or_else(|| {
            warn!("User not found");
            CrudError::not_found("User")
        })?;
    with_details(db, user).await
}

/// Lists users ordered by id, loading profiles and preferences in two
/// extra queries for the whole page.
#[instrument(skip(db))]
pub async fn list_users(db: &DatabaseConnection, page: Pagination) -> Result<Vec<UserResponse>> {
    let users = User::find()
        .order_by_asc(user::Column::Id)
        .offset(page.offset())
        .limit(page.limit_or(Pagination::DEFAULT_LIMIT))
        .all(db)
        .await?;
    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();

    let mut profiles: HashMap<i32, user_profile::Model> = UserProfile::find()
        .filter(user_profile::Column::UserId.is_in(ids.clone()))
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.user_id, p))
        .collect();
    let mut preferences: HashMap<i32, user_preferences::Model> = UserPreferences::find()
        .filter(user_preferences::Column::UserId.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.user_id, p))
        .collect();

    debug!(count = users.len(), "Loaded users");
    Ok(users
        .into_iter()
        .map(|u| {
            let profile = profiles.remove(&u.id);
            let prefs = preferences.remove(&u.id);
            UserResponse::from((u, profile, prefs))
        })
        .collect())
}

/// Changes username, email or password. New username and email must not
/// belong to another account.
#[instrument(skip(db, auth, input))]
pub async fn update_user(
    db: &DatabaseConnection,
    auth: &AuthConfig,
    user_id: i32,
    mut input: UserUpdate,
) -> Result<UserResponse> {
    let user = find_user(db, user_id).await?;

    if let Some(email) = input.email.as_deref() {
        if email_taken(db, email, Some(user_id)).await? {
            warn!("{}", EMAIL_TAKEN);
            return Err(CrudError::Conflict(EMAIL_TAKEN.to_string()));
        }
    }
    if let Some(username) = input.username.as_deref() {
        if username_taken(db, username, Some(user_id)).await? {
            warn!("{}", USERNAME_TAKEN);
            return Err(CrudError::Conflict(USERNAME_TAKEN.to_string()));
        }
    }

    let password = input.password.take();
    let mut active = user.into_active_model();
    let mut changed = input.apply(&mut active);
    if let Some(password) = password {
        active.hashed_password = Set(auth.hash_password(&password)?);
        changed.push("password");
    }

    let user = active
        .update(db)
        .await
        .map_err(|err| conflict_on_unique(err, "Username or email already registered"))?;
    info!(?changed, "User updated");
    with_details(db, user).await
}

#[instrument(skip(db))]
pub async fn update_user_profile(
    db: &DatabaseConnection,
    user_id: i32,
    input: UserProfileUpdate,
) -> Result<UserResponse> {
    let user = find_user(db, user_id).await?;
    let profile = user.find_related(UserProfile).one(db).await?.ok_or_else(|| {
        warn!("Profile not found");
        CrudError::not_found("Profile")
    })?;

    let mut active = profile.into_active_model();
    let changed = input.apply(&mut active);
    let profile = active.update(db).await?;
    info!(?changed, "Profile updated");

    let preferences = user.find_related(UserPreferences).one(db).await?;
    Ok(UserResponse::from((user, Some(profile), preferences)))
}

/// Preferences hold no settings yet, so this only checks the row exists.
#[instrument(skip(db))]
pub async fn update_user_preferences(
    db: &DatabaseConnection,
    user_id: i32,
    _input: UserPreferencesUpdate,
) -> Result<UserResponse> {
    let user = find_user(db, user_id).await?;
    if user.find_related(UserPreferences).one(db).await?.is_none() {
        warn!("Preferences not found");
        return Err(CrudError::not_found("Preferences"));
    }
    info!("Preferences updated");
    with_details(db, user).await
}

/// Sets whichever of `is_active` / `is_admin` are present.
#[instrument(skip(db))]
pub async fn update_user_status(
    db: &DatabaseConnection,
    user_id: i32,
    status: UserStatusUpdate,
) -> Result<UserResponse> {
    let user = find_user(db, user_id).await?;
    let mut active = user.into_active_model();
    let changed = status.apply(&mut active);
    let user = active.update(db).await?;
    info!(?changed, is_active = user.is_active, is_admin = user.is_admin, "User status updated");
    with_details(db, user).await
}

pub async fn approve_user(db: &DatabaseConnection, user_id: i32) -> Result<UserResponse> {
    update_user_status(db, user_id, UserStatusUpdate::active(true)).await
}

pub async fn disapprove_user(db: &DatabaseConnection, user_id: i32) -> Result<UserResponse> {
    update_user_status(db, user_id, UserStatusUpdate::active(false)).await
}

pub async fn promote_user(db: &DatabaseConnection, user_id: i32) -> Result<UserResponse> {
    update_user_status(db, user_id, UserStatusUpdate::admin(true)).await
}

pub async fn demote_user(db: &DatabaseConnection, user_id: i32) -> Result<UserResponse> {
    update_user_status(db, user_id, UserStatusUpdate::admin(false)).await
}

/// Deletes the account with its profile and preferences.
#[instrument(skip(db))]
pub async fn delete_user(db: &DatabaseConnection, user_id: i32) -> Result<()> {
    let txn = db.begin().await?;

    UserProfile::delete_many()
        .filter(user_profile::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;
    UserPreferences::delete_many()
        .filter(user_preferences::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;
    let res = User::delete_by_id(user_id).exec(&txn).await?;

    if res.rows_affected == 0 {
        txn.rollback().await?;
        warn!("User not found");
        return Err(CrudError::not_found("User"));
    }

    txn.commit().await?;
    info!("User deleted");
    Ok(())
}
