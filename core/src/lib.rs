//! Synthetic fleet-maintenance ticket data.
//!
//! Entity factories build the customer, asset and technician tables;
//! the ticket engine walks the configured months and produces tickets;
//! report and export summarize and persist the result.

pub mod calendar;
pub mod config;
pub mod engine;
pub mod entity;
pub mod error;
pub mod export;
pub mod factory;
pub mod report;
pub mod rng;
pub mod sampling;
pub mod seasonal;
pub mod ticket;
pub mod types;
