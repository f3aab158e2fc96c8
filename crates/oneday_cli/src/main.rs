//! CLI smoke entry point.
//!
//! # Responsibility
//! - Render widget plans without a Flutter/FFI host.
//! - Print plans as JSON for quick local inspection.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use oneday_core::{
    InstanceId, LocalDateHeader, MemorySnapshotReader, RefreshReport, Snapshot, SnapshotReader,
    SqliteSnapshotReader, WidgetKind, WidgetRefresher,
};
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oneday_cli", version, about = "Render OneDay home widgets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print core linkage information.
    Ping,
    /// Render plans for the given widget kind and instances.
    Render {
        /// Widget kind: balance or tasks.
        #[arg(long)]
        kind: WidgetKind,
        /// Instance ids to refresh.
        #[arg(long = "instance", default_value = "0")]
        instances: Vec<InstanceId>,
        /// Read the snapshot from this existing SQLite store (opened read-only).
        #[arg(long, conflicts_with = "set")]
        db: Option<PathBuf>,
        /// Inline snapshot entry as KEY=VALUE; repeatable.
        #[arg(long, value_parser = parse_entry)]
        set: Vec<(String, String)>,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Ping => {
            println!("oneday_core ping={}", oneday_core::ping());
            println!("oneday_core version={}", oneday_core::core_version());
            Ok(())
        }
        Command::Render {
            kind,
            instances,
            db,
            set,
        } => {
            let instance_ids = instances.into_iter().collect::<BTreeSet<_>>();
            let report = match db {
                Some(path) => {
                    let reader = SqliteSnapshotReader::open(&path)
                        .with_context(|| format!("failed to open store `{}`", path.display()))?;
                    refresh(reader, kind, &instance_ids)
                }
                None => refresh(
                    MemorySnapshotReader::new(set.into_iter().collect::<Snapshot>()),
                    kind,
                    &instance_ids,
                ),
            };
            print_report(&report)
        }
    }
}

fn refresh(
    reader: impl SnapshotReader,
    kind: WidgetKind,
    instance_ids: &BTreeSet<InstanceId>,
) -> RefreshReport {
    WidgetRefresher::new(reader, LocalDateHeader).refresh(kind, instance_ids)
}

fn print_report(report: &RefreshReport) -> Result<()> {
    for update in &report.updates {
        println!("# instance {}", update.instance_id);
        println!("{}", serde_json::to_string_pretty(&update.plan)?);
    }
    for failure in &report.skipped {
        eprintln!("skipped: {failure}");
    }
    if report.updates.is_empty() && !report.skipped.is_empty() {
        bail!("no widget instance could be rendered");
    }
    Ok(())
}

fn parse_entry(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))
}
