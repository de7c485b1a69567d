//! # Exchange Types
//!
//! Domain types and port traits for the currency exchange service.
//! This crate has ZERO external IO dependencies - only data structures,
//! conversion rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (ExchangeRate, DailyRateSet, ConversionRequest)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Fetch, conversion and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{BASE_CURRENCY, ConversionRequest, DailyRateSet, ExchangeRate};
pub use dto::*;
pub use error::{AppError, ConversionError, FetchError};
pub use ports::{Clock, RateProvider, SystemClock};
