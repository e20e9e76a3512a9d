//! Module declaration and lifecycle: migrate, build services, register routes

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::CatalogApi;
use crate::domain::{AlbumRules, AlbumService, ArtistService, UnitOfWorkFactory};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::SeaOrmUnitOfWorkFactory;
use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Catalog service module
///
/// Owns the wired services for the lifetime of the process. Each request
/// opens its own unit of work through the shared factory.
pub struct CatalogServiceModule {
    config: Config,
    albums: Arc<AlbumService>,
    artists: Arc<ArtistService>,
}

impl CatalogServiceModule {
    /// Run migrations, build the services and seed the starter artists
    pub async fn init(db: DatabaseConnection, config: Config) -> Result<Self> {
        Self::migrate(&db).await?;

        let uow: Arc<dyn UnitOfWorkFactory> = Arc::new(SeaOrmUnitOfWorkFactory::new(db));
        let module = Self::with_unit_of_work(uow, config)?;

        if module.config.seed_default_artists {
            module
                .artists
                .seed_defaults()
                .await
                .context("seeding default artists")?;
        }

        tracing::info!("Catalog service initialized");
        Ok(module)
    }

    /// Build the services over any unit of work implementation
    pub fn with_unit_of_work(uow: Arc<dyn UnitOfWorkFactory>, config: Config) -> Result<Self> {
        let rules = AlbumRules::from_config(&config).context("building album rules")?;
        let albums = Arc::new(AlbumService::new(uow.clone(), rules));
        let artists = Arc::new(ArtistService::new(uow));
        Ok(Self {
            config,
            albums,
            artists,
        })
    }

    /// Apply pending database migrations
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None)
            .await
            .context("running catalog migrations")?;
        tracing::info!("Catalog service migrations completed");
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn album_service(&self) -> Arc<AlbumService> {
        self.albums.clone()
    }

    pub fn artist_service(&self) -> Arc<ArtistService> {
        self.artists.clone()
    }

    /// In-process client over the module's services
    pub fn client(&self) -> Arc<dyn CatalogApi> {
        Arc::new(NativeClient::new(self.albums.clone(), self.artists.clone()))
    }

    /// Register the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        tracing::info!("Registering catalog service REST routes");
        crate::api::rest::routes::register_routes(router, self.albums.clone(), self.artists.clone())
    }
}
