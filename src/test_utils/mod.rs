//! Test utilities for unit and HTTP-level testing.
//!
//! This module provides:
//! - Test data factories for creating valid waitlist entries
//! - In-memory repository implementations for mocking persistence
//! - A builder for constructing `AppState` with test dependencies

mod app_state_builder;
mod factories;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use waitlist_mocks::*;
