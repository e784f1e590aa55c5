//! API endpoint modules.

mod devices;

pub use devices::DevicesApi;
