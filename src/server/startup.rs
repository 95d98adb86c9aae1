use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
    service::user::UserService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by a Sqlite session table.
///
/// Sessions only carry the Dropbox OAuth state, so they expire after a short period of
/// inactivity. The store lives in `SESSION_DB_URL`, which defaults to the main database.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer with the session table migrated
/// - `Err(AppError)` - Failed to connect to or migrate the session store
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    use sea_orm::Database;

    let db = Database::connect(&config.session_database_url).await?;
    let pool = db.get_sqlite_connection_pool();
    let store = SqliteStore::new(pool.clone());

    store
        .migrate()
        .await
        .map_err(|e| InternalError::SessionStore(e.to_string()))?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(30))))
}

/// Builds the shared outbound HTTP client.
///
/// Redirects are disabled so integration calls cannot be bounced to other hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Creates the configured administrator when the database has none.
pub async fn ensure_default_admin(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    let Some(admin) = &config.default_admin else {
        tracing::info!("ADMIN_PASSWORD not set, skipping default admin bootstrap");
        return Ok(());
    };

    if UserService::new(db).ensure_default_admin(admin).await?.is_none() {
        tracing::debug!("Admin account already present");
    }

    Ok(())
}
