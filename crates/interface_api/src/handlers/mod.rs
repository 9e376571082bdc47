//! Request handlers

pub mod cars;
pub mod claims;
pub mod health;
pub mod policies;
