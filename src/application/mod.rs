//! Application layer orchestrating domain operations.

pub mod handlers;
