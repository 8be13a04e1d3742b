//! Board use-case services.
//!
//! # Responsibility
//! - Compose stores and view models into one host-facing board API.
//! - Keep UI/FFI layers decoupled from store details.

pub mod board_service;
