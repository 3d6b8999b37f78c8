#[cfg(test)]
pub mod test_utils {
    use std::sync::Arc;

    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use axum_test::TestServer;
    use crud::AuthConfig;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const TEST_SECRET: &str = "test-secret";

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        db.execute_unprepared("PRAGMA foreign_keys = ON;")
            .await
            .expect("Failed to enable foreign keys");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Signing settings shared by the test app and tests that mint tokens.
    /// Cost 4 keeps bcrypt fast.
    pub fn test_auth_config() -> AuthConfig {
        AuthConfig::new(TEST_SECRET, "HS256", 30, 4).expect("Invalid test auth config")
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        AppState {
            db: setup_test_db().await,
            auth: Arc::new(test_auth_config()),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from `RUST_LOG`, defaulting to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let _ = init_test_tracing();

        let state = setup_test_app_state().await;
        create_router(state)
    }

    /// Test server over a fresh database
    pub async fn setup_test_server() -> TestServer {
        TestServer::new(setup_test_app().await).expect("Failed to start test server")
    }
}
