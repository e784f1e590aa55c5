//! tailzone - Tailscale device inventory to BIND zone file
//!
//! Fetches the devices of a tailnet and writes `db.<domain>` for a private
//! DNS server.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match tailzone_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
