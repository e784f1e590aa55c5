//! Core types and zone-file rendering for tailzone.
//!
//! This crate provides the pieces shared across the tailzone workspace:
//!
//! - **Types**: [`Device`] records from the inventory API, [`ZoneConfig`] and [`Serial`]
//! - **Rendering**: [`render`] turns a device list into BIND master-file text
//! - **Sources**: the [`DeviceSource`] trait implemented by inventory clients
//! - **Errors**: [`TailzoneError`] and the per-record [`ValidationError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use tailzone_core::{render, Device};
//!
//! let devices = vec![Device::new("laptop", ["100.64.0.1"])];
//! let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//!
//! let zone = render(&devices, "example.ts.net", today)?;
//! assert!(zone.text().contains("laptop.example.ts.net. 3600 A 100.64.0.1"));
//! ```

#![doc(html_root_url = "https://docs.rs/tailzone-core/0.1.0")]

mod error;
pub mod policy;
pub mod render;
mod source;
pub mod types;

pub use error::{Result, TailzoneError, ValidationError};
pub use render::{render, render_with_serial, Zone};
pub use source::{DeviceSource, StaticSource};
pub use types::*;
