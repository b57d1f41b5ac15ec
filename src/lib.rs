//! Storefront: a catalog browser driven entirely by its location.
//!
//! The location's query parameters select one of five views. The
//! [`router::Router`] tears the previous view down, runs the matching
//! controller against the remote catalog, and keeps history in step with
//! what is shown.

pub mod api;
pub mod config;
pub mod controllers;
pub mod history;
pub mod logging;
pub mod mvi;
pub mod route;
pub mod router;
pub mod shell;
pub mod view;
