//! # tailzone-cli
//!
//! Command-line front end that turns a Tailscale device inventory into a
//! BIND-style zone file.
//!
//! ## Features
//!
//! - **Zone generation**: one `A`/`AAAA` record per device, SOA and NS header
//! - **Serial management**: bumps the same-day revision of an existing zone
//! - **Layered settings**: flags, then environment, then a TOML config file
//! - **Stdout mode**: print the zone instead of writing `db.<domain>`

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
