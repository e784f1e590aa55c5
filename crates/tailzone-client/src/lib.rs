//! HTTP client for the Tailscale device inventory API.
//!
//! This crate provides [`TailscaleClient`], which lists the devices of a
//! tailnet and implements [`tailzone_core::DeviceSource`].

#![doc(html_root_url = "https://docs.rs/tailzone-client/0.1.0")]

mod client;
pub mod api;

pub use client::{TailscaleClient, TailscaleClientBuilder};
pub use tailzone_core::{Result, TailzoneError};
