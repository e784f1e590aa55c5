//! Zone renderer: converts a device inventory into BIND master-file text.
//!
//! Rendering is a pure function of the device list, the zone apex and the
//! serial. The same inputs always produce byte-identical output, so a zone
//! can be regenerated at any time and diffed against the previous one.

use chrono::NaiveDate;
use std::net::IpAddr;

use crate::policy::{
    ADDRESS_TTL, ADMIN_LABEL, NAME_SERVER_LABEL, SOA_EXPIRE, SOA_MINIMUM_TTL, SOA_REFRESH,
    SOA_RETRY, ZONE_TTL,
};
use crate::types::zone::normalize_domain;
use crate::{Device, Result, Serial, ValidationError};

/// A rendered zone file plus what was left out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    text: String,
    serial: Serial,
    records: usize,
    skipped: Vec<ValidationError>,
}

impl Zone {
    /// The complete zone-file text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the zone, returning its text
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// The serial written into the SOA record
    #[must_use]
    pub const fn serial(&self) -> Serial {
        self.serial
    }

    /// Number of address records emitted
    #[must_use]
    pub const fn record_count(&self) -> usize {
        self.records
    }

    /// Device records that were skipped, with the reason for each
    #[must_use]
    pub fn skipped(&self) -> &[ValidationError] {
        &self.skipped
    }
}

/// Render a zone for `domain` using the first serial of `today`.
///
/// Fails only when `domain` is empty. Malformed devices are skipped and
/// reported through [`Zone::skipped`].
pub fn render(devices: &[Device], domain: &str, today: NaiveDate) -> Result<Zone> {
    render_with_serial(devices, domain, Serial::first_of(today))
}

/// Render a zone for `domain` with an explicit SOA serial.
pub fn render_with_serial(devices: &[Device], domain: &str, serial: Serial) -> Result<Zone> {
    let domain = normalize_domain(domain)?;

    let mut text = header(domain, serial);
    let mut records = 0;
    let mut skipped = Vec::new();

    for (index, device) in devices.iter().enumerate() {
        match address_record(index, device, domain) {
            Ok(line) => {
                text.push_str(&line);
                records += 1;
            }
            Err(reason) => skipped.push(reason),
        }
    }

    Ok(Zone {
        text,
        serial,
        records,
        skipped,
    })
}

/// `$TTL`, SOA and NS block.
fn header(domain: &str, serial: Serial) -> String {
    let ns = format!("{NAME_SERVER_LABEL}.{domain}.");
    let admin = format!("{ADMIN_LABEL}.{domain}.");

    format!(
        "$TTL {ZONE_TTL}\n\
         @ IN SOA {ns} {admin} (\n    \
         {serial} ; Serial\n    \
         {SOA_REFRESH:<10} ; Refresh\n    \
         {SOA_RETRY:<10} ; Retry\n    \
         {SOA_EXPIRE:<10} ; Expire\n    \
         {SOA_MINIMUM_TTL:<10} ; Minimum TTL\n\
         )\n\
         \n\
         @ IN NS {ns}\n\
         \n"
    )
}

/// One address record line for a device, using only its first address.
fn address_record(
    index: usize,
    device: &Device,
    domain: &str,
) -> std::result::Result<String, ValidationError> {
    let hostname = device.hostname.trim();
    if hostname.is_empty() {
        return Err(ValidationError::MissingHostname { index });
    }
    if !is_owner_token(hostname) {
        return Err(ValidationError::InvalidHostname {
            hostname: hostname.to_string(),
        });
    }

    let address = device
        .primary_address()
        .ok_or_else(|| ValidationError::NoAddresses {
            hostname: hostname.to_string(),
        })?;

    let rtype = match address.trim().parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => "A",
        Ok(IpAddr::V6(_)) => "AAAA",
        Err(_) => {
            return Err(ValidationError::InvalidAddress {
                hostname: hostname.to_string(),
                address: address.to_string(),
            })
        }
    };

    Ok(format!(
        "{hostname}.{domain}. {ADDRESS_TTL} {rtype} {}\n",
        address.trim()
    ))
}

/// Whether `name` reads back as one owner-name token in a master file.
fn is_owner_token(name: &str) -> bool {
    !name
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || matches!(c, ';' | '(' | ')' | '"'))
}
