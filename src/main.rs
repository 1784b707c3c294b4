//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dnsdigger` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Cancellation on Ctrl-C and on the overall deadline
//! - Report output
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, warn};
use tokio_util::sync::CancellationToken;

use dnsdigger::dns::HickoryResolver;
use dnsdigger::domain::normalize_domain;
use dnsdigger::export::write_report;
use dnsdigger::initialization::{init_logger_with, init_resolver};
use dnsdigger::{query, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. RUST_LOG
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(&opt).await {
        eprintln!("dnsdigger error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(opt: &Opt) -> Result<()> {
    let domain = normalize_domain(&opt.domain)?;

    let resolver = init_resolver(&opt.resolver_settings())
        .map(HickoryResolver::new)
        .context("Failed to initialize DNS resolver")?;

    let cancel = CancellationToken::new();
    let watchdog = spawn_cancel_watchdog(cancel.clone(), opt.query_timeout());

    let result = query(&resolver, &cancel, &domain).await;
    watchdog.abort();

    match result {
        Ok(zone) => {
            let mut stdout = io::stdout().lock();
            write_report(&zone, opt.format, &mut stdout)
        }
        Err(e) => {
            if e.is_cancelled() {
                error!("Query for {domain} was cancelled before it completed");
            }
            Err(e.into())
        }
    }
}

/// Cancels `cancel` on Ctrl-C or once `deadline` has passed.
fn spawn_cancel_watchdog(
    cancel: CancellationToken,
    deadline: std::time::Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted, cancelling outstanding lookups");
            }
            _ = tokio::time::sleep(deadline) => {
                warn!("Query exceeded {}s, cancelling outstanding lookups", deadline.as_secs());
            }
        }
        cancel.cancel();
    })
}
