//! Goal Wizard - Strategic goal definition backend
//!
//! Employees walk through an eight-step wizard; the system composes a
//! natural-language goal statement with a derived priority, persists the
//! submission, and serves an admin dashboard with aggregate analytics.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
