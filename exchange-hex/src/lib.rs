//! # Exchange Hex
//!
//! Application service layer and HTTP adapter for the exchange service.
//!
//! ## Architecture
//!
//! - `service/` - Conversion service (daily rate cache, listing, conversion)
//! - `cache/` - Per-date rate cache with fetch coalescing
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `P: RateProvider`, allowing
//! different provider implementations to be injected.

pub mod cache;
pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use cache::RateCache;
pub use service::ConversionService;
