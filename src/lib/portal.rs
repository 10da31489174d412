//! Client for the academic-management portal REST API: session handling,
//! form validation, role-aware screens and the services behind them.
pub mod helpers;
pub mod modals;
pub mod models;
pub mod notifier;
pub mod portal_api;
pub mod run_tool;
pub mod screens;
pub mod session;
pub mod validation;
