use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use super::initdb::apply_migrations;
use crate::config::{initialize_app_state, Settings};
use crate::router::create_router;

pub async fn serve(
    database_url: Option<String>,
    bind_address: Option<String>,
    migrate: bool,
) -> Result<()> {
    trace!("Entering serve function");
    info!("SeaSaba application starting up");

    let mut settings = Settings::load()?;
    if let Some(url) = database_url {
        settings.database_url = url;
    }
    if let Some(address) = bind_address {
        settings.bind_address = address;
    }
    debug!("Database URL: {}", settings.database_url);
    debug!("Bind address: {}", settings.bind_address);

    let state = match initialize_app_state(&settings).await {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    if migrate {
        apply_migrations(&state.db).await?;
    }

    let app = create_router(state);
    debug!("Router created successfully");

    let bind_address = settings.bind_address;
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("SeaSaba API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
