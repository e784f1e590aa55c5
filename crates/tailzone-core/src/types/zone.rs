use chrono::{DateTime, NaiveDate, TimeZone};

use crate::{Result, Serial, TailzoneError};

/// Zone origin and the day the zone is generated for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneConfig {
    domain: String,
    refreshed: NaiveDate,
}

impl ZoneConfig {
    /// Create a zone configuration.
    ///
    /// The domain is used as given apart from surrounding whitespace and a
    /// trailing root dot; beyond being non-empty it is not validated.
    pub fn new(domain: &str, refreshed: NaiveDate) -> Result<Self> {
        let domain = normalize_domain(domain)?;
        Ok(Self {
            domain: domain.to_string(),
            refreshed,
        })
    }

    /// Create a zone configuration from a wall-clock timestamp
    pub fn at<Tz: TimeZone>(domain: &str, now: &DateTime<Tz>) -> Result<Self> {
        Self::new(domain, now.date_naive())
    }

    /// Zone apex without the trailing dot
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The generation date used for the serial
    #[must_use]
    pub const fn refreshed(&self) -> NaiveDate {
        self.refreshed
    }

    /// The first serial for the generation date
    #[must_use]
    pub const fn serial(&self) -> Serial {
        Serial::first_of(self.refreshed)
    }

    /// Conventional file name for this zone, `db.<domain>`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("db.{}", self.domain)
    }
}

/// Strip whitespace and the root dot, rejecting empty names.
pub(crate) fn normalize_domain(domain: &str) -> Result<&str> {
    let domain = domain.trim();
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain.is_empty() {
        return Err(TailzoneError::Config("domain name must not be empty".into()));
    }
    Ok(domain)
}
