//! API layer - REST controllers and the in-process client

pub mod native;
pub mod rest;
