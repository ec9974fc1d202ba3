#![allow(non_snake_case)]
//! Two ways to share a counter.
//!
//! [`local`] keeps the count in the component that owns it and passes the
//! value and the increment operation down as arguments. [`global`] keeps it
//! in a process-wide atom that any component can read and bump directly.

pub mod app;
pub mod config;
pub mod global;
pub mod local;

pub use app::app;
pub use config::DemoConfig;
