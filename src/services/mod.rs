// Service exports
pub mod auth;
pub mod client;
pub mod dogs;
pub mod locations;

pub use client::{ApiClient, ApiError};
