use anyhow::{Context, Result};
use common::UserCreate;
use tracing::{error, info, trace};
use validator::Validate;

use crate::config::{initialize_app_state, Settings};

pub async fn create_admin(username: String, email: String, password: String) -> Result<()> {
    trace!("Entering create_admin function");

    let input = UserCreate {
        username,
        email,
        password,
    };
    input.validate().context("Invalid administrator account")?;

    let settings = Settings::load()?;
    let state = initialize_app_state(&settings).await?;

    match crud::users::create_admin(&state.db, &state.auth, input).await {
        Ok(user) => {
            info!(
                "Administrator '{}' created with ID {}",
                user.username, user.id
            );
            Ok(())
        }
        Err(e) => {
            error!("Failed to create administrator: {}", e);
            Err(e.into())
        }
    }
}
