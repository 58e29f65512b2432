//! API Routes
//!
//! Route handlers organized by functionality.

pub mod countries;
pub mod dashboard;
pub mod export;
pub mod health;
pub mod view;
pub mod years;
