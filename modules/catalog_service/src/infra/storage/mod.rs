//! Storage layer - database entities, repositories and the unit of work

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;
pub mod unit_of_work;

pub use unit_of_work::{SeaOrmUnitOfWork, SeaOrmUnitOfWorkFactory};
