//! Server-side dashboard: an explicit state machine, a driver that runs its fetches, and a
//! pure HTML renderer.

pub mod controller;
pub mod render;
pub mod state;
pub mod table;

pub use controller::DashboardController;
pub use render::{RenderOptions, render};
pub use state::{Command, DashboardState, Effect, FetchState};
