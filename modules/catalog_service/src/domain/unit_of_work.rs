//! Unit of work: one persistence session shared by every repository

use super::repository::Repository;
use crate::contract::{Album, Artist};
use anyhow::Result;
use async_trait::async_trait;

/// Coordinates the writes of one logical request.
///
/// Repositories handed out by a unit of work share its session. Nothing they
/// stage is durable until [`save`](UnitOfWork::save); dropping the unit of
/// work without saving discards the staged changes and releases the session.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn albums(&self) -> &dyn Repository<Album>;

    fn artists(&self) -> &dyn Repository<Artist>;

    /// Commit all staged changes atomically, returning the affected row count
    async fn save(self: Box<Self>) -> Result<u64>;
}

/// Opens a fresh [`UnitOfWork`] per request
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>>;
}
