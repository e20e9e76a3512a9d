//! SeaORM unit of work: one database transaction per request

use crate::contract::{Album, Artist};
use crate::domain::repository::Repository;
use crate::domain::unit_of_work::{UnitOfWork, UnitOfWorkFactory};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use super::repositories::{SeaOrmAlbumRepository, SeaOrmArtistRepository};

/// Unit of work backed by a single [`DatabaseTransaction`]
///
/// Repositories are built on first access and cached. Dropping the unit of
/// work without calling `save` rolls the transaction back.
pub struct SeaOrmUnitOfWork {
    txn: Arc<DatabaseTransaction>,
    writes: Arc<AtomicU64>,
    albums: OnceLock<SeaOrmAlbumRepository>,
    artists: OnceLock<SeaOrmArtistRepository>,
}

impl SeaOrmUnitOfWork {
    pub async fn begin(db: &DatabaseConnection) -> Result<Self> {
        let txn = db.begin().await.context("opening persistence session")?;
        Ok(Self {
            txn: Arc::new(txn),
            writes: Arc::new(AtomicU64::new(0)),
            albums: OnceLock::new(),
            artists: OnceLock::new(),
        })
    }

    /// Rows staged so far
    pub fn pending_writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UnitOfWork for SeaOrmUnitOfWork {
    fn albums(&self) -> &dyn Repository<Album> {
        self.albums
            .get_or_init(|| SeaOrmAlbumRepository::new(self.txn.clone(), self.writes.clone()))
    }

    fn artists(&self) -> &dyn Repository<Artist> {
        self.artists
            .get_or_init(|| SeaOrmArtistRepository::new(self.txn.clone(), self.writes.clone()))
    }

    async fn save(self: Box<Self>) -> Result<u64> {
        let Self {
            txn,
            writes,
            albums,
            artists,
        } = *self;
        // Repositories hold the other references to the transaction.
        drop(albums);
        drop(artists);

        let txn = Arc::try_unwrap(txn)
            .map_err(|_| anyhow::anyhow!("persistence session is still shared"))?;
        txn.commit().await.context("committing persistence session")?;

        let count = writes.load(Ordering::SeqCst);
        tracing::debug!(rows = count, "unit of work saved");
        Ok(count)
    }
}

/// Opens [`SeaOrmUnitOfWork`]s on a shared connection pool
#[derive(Clone)]
pub struct SeaOrmUnitOfWorkFactory {
    db: DatabaseConnection,
}

impl SeaOrmUnitOfWorkFactory {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWorkFactory for SeaOrmUnitOfWorkFactory {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>> {
        let uow = SeaOrmUnitOfWork::begin(&self.db).await?;
        Ok(Box::new(uow))
    }
}
