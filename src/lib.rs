//! Decision Compass - Decision Analysis Service
//!
//! This crate compares a set of named choices, each described by weighted
//! possible outcomes, and computes expected value, risk, and sensitivity
//! statistics to rank them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
