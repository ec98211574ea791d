use crate::admin;
use crate::config::Settings;
use crate::infrastructure::PostgresOrderStore;
use crate::Result;
use sqlx::PgPool;
use tracing::{info, instrument};

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
    db_pool: PgPool,
}

impl Application {
    #[instrument]
    pub async fn new() -> Result<Self> {
        let settings = Settings::new()?;

        info!("Connecting to database at {}", settings.database.host);
        let db_pool = PgPool::connect(&settings.database_url()).await?;

        sqlx::migrate!("./migrations").run(&db_pool).await?;

        Ok(Self { settings, db_pool })
    }

    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        let address = format!(
            "{}:{}",
            self.settings.application.host, self.settings.application.port
        );
        info!("Starting Beleya Orders server on {address}");

        let store = PostgresOrderStore::new(self.db_pool.clone());
        let state = admin::AdminState::new(store, self.settings.write_delay());
        let router = admin::router(state);

        let listener = tokio::net::TcpListener::bind(&address).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn db_pool(&self) -> &PgPool {
        &self.db_pool
    }
}
