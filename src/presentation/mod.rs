// Presentation layer - HTTP handlers, shared state and routing
pub mod app_state;
pub mod cargo_handlers;
pub mod comms_handlers;
pub mod error;
pub mod extract;
pub mod fleet_handlers;
pub mod handlers;
pub mod router;
