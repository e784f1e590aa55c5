//! Timing constants written into every generated zone.
//!
//! These are fixed policy values; nothing about the device inventory
//! changes them.

/// Default TTL for the zone (`$TTL`).
pub const ZONE_TTL: u32 = 86400;

/// TTL on each device address record.
/// Tailnet addresses are stable, but devices come and go within a day.
pub const ADDRESS_TTL: u32 = 3600;

/// SOA refresh interval for secondaries.
pub const SOA_REFRESH: u32 = 3600;

/// SOA retry interval after a failed refresh.
pub const SOA_RETRY: u32 = 1800;

/// SOA expire: secondaries stop answering after a week without contact.
pub const SOA_EXPIRE: u32 = 604_800;

/// SOA minimum TTL (negative caching).
pub const SOA_MINIMUM_TTL: u32 = 86400;

/// Label of the authoritative name server under the zone apex.
pub const NAME_SERVER_LABEL: &str = "ns1";

/// Label of the responsible mailbox under the zone apex.
pub const ADMIN_LABEL: &str = "admin";
