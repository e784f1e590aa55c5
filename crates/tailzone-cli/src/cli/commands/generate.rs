//! `tailzone generate` - fetch the device inventory and write the zone file.

use anyhow::{Context as _, Result};
use chrono::Local;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;
use tailzone_client::TailscaleClient;
use tailzone_core::{render_with_serial, Device, DeviceSource, Serial, Zone, ZoneConfig};
use tracing::{info, warn};

use super::Context;
use crate::cli::args::GenerateArgs;
use crate::output;

/// A rendered zone and whether the target needs rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// The rendered zone
    pub zone: Zone,
    /// False when the target file already holds exactly this zone
    pub changed: bool,
}

/// Where the rendered zone goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Write to a zone file
    File(PathBuf),
    /// Print to standard output
    Stdout,
}

pub async fn execute(ctx: Context, args: GenerateArgs) -> Result<()> {
    // Settle every required value before touching the network.
    let api_key = ctx.require_api_key()?;
    let tailnet = ctx.require_tailnet()?;
    let domain = ctx.require_domain()?;

    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let zone_config = ZoneConfig::new(domain, today)?;

    let target = if args.stdout {
        Target::Stdout
    } else {
        Target::File(
            args.output
                .clone()
                .unwrap_or_else(|| ctx.output_dir().join(zone_config.file_name())),
        )
    };

    let mut builder = TailscaleClient::builder(api_key, tailnet)
        .timeout(Duration::from_secs(args.timeout));
    if let Some(url) = &args.api_url {
        builder = builder.base_url(url);
    }
    let client = builder.build()?;

    info!(tailnet, "Retrieving devices from Tailscale API...");
    let Generated { zone, changed } =
        generate(&client, &zone_config, &target, args.fixed_serial).await?;

    match &target {
        Target::Stdout => print!("{}", zone.text()),
        Target::File(path) if !changed => {
            info!(path = %path.display(), "Zone file already up to date.");
            println!(
                "{} {} unchanged (serial {}, {} records)",
                "Up to date:".yellow().bold(),
                path.display().to_string().cyan(),
                zone.serial(),
                zone.record_count()
            );
        }
        Target::File(path) => {
            output::write_zone(path, zone.text())?;
            info!(path = %path.display(), "Zone file created successfully.");
            println!(
                "{} wrote {} (serial {}, {} records)",
                "Success:".green().bold(),
                path.display().to_string().cyan(),
                zone.serial(),
                zone.record_count()
            );
        }
    }

    Ok(())
}

/// Fetch devices from `source` and render the zone described by `config`.
///
/// When the target is a file and `fixed_serial` is off, the serial continues
/// from the zone already at that path, or is kept when the zone is unchanged.
pub async fn generate<S>(
    source: &S,
    config: &ZoneConfig,
    target: &Target,
    fixed_serial: bool,
) -> Result<Generated>
where
    S: DeviceSource + ?Sized,
{
    let devices = source
        .fetch_devices()
        .await
        .context("failed to retrieve the list of devices")?;

    let (zone, changed) = match target {
        Target::File(path) if !fixed_serial => {
            let previous = output::previous_zone(path)?;
            render_for_file(&devices, config, previous.as_deref())?
        }
        _ => (
            render_with_serial(&devices, config.domain(), config.serial())?,
            true,
        ),
    };

    for reason in zone.skipped() {
        warn!(%reason, "skipping device");
    }
    if !zone.skipped().is_empty() {
        warn!(
            skipped = zone.skipped().len(),
            rendered = zone.record_count(),
            "some devices were left out of the zone"
        );
    }
    info!(
        serial = %zone.serial(),
        records = zone.record_count(),
        changed,
        "zone rendered"
    );

    Ok(Generated { zone, changed })
}

/// Render against the zone text already in the target file.
///
/// A zone from today (or later) whose records are unchanged keeps its
/// serial and is reported as unchanged. Anything else gets the next serial.
fn render_for_file(
    devices: &[Device],
    config: &ZoneConfig,
    previous: Option<&str>,
) -> Result<(Zone, bool)> {
    let previous_serial = previous.and_then(Serial::from_zone_text);

    if let (Some(text), Some(serial)) = (previous, previous_serial) {
        if serial >= config.serial() {
            let zone = render_with_serial(devices, config.domain(), serial)?;
            if zone.text() == text {
                return Ok((zone, false));
            }
        }
    }

    let serial = Serial::next(previous_serial, config.refreshed())?;
    let zone = render_with_serial(devices, config.domain(), serial)?;
    Ok((zone, true))
}
