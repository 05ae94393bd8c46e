//! Module for core business logic services.
//!
//! This module encapsulates services that sit behind the handlers: connecting
//! the configured credential verifier and assembling the data the dashboards
//! display.

pub mod dashboard_data;
pub mod verifier;
