//! Systems listing command handler.

use anyhow::{Context, Result};
use chrono::Utc;
use sitrep_core::catalog::ServiceRecord;
use sitrep_core::config::Config;
use sitrep_core::rollup::{Rollup, count_with_status};
use sitrep_core::status::Status;
use sitrep_core::timefmt;
use unicode_width::UnicodeWidthStr;

pub fn run(config: &Config, status_filter: Option<&str>, json: bool) -> Result<()> {
    let now = Utc::now();
    let all = config.records(now);

    // Unrecognized names fall into the Unknown bucket rather than failing.
    let filter = status_filter.map(Status::from_name);
    let records: Vec<&ServiceRecord> = match filter {
        Some(status) => all.iter().filter(|r| r.status == status).collect(),
        None => all.iter().collect(),
    };

    if json {
        let out = serde_json::to_string_pretty(&records).context("serialize systems")?;
        println!("{out}");
        return Ok(());
    }

    if records.is_empty() {
        println!("No systems found.");
        return Ok(());
    }

    // Name column is padded by terminal columns, not bytes; config names
    // can contain wide characters.
    let name_width = records.iter().map(|r| r.name.width()).max().unwrap_or(0);
    for record in &records {
        let pad = " ".repeat(name_width - record.name.width());
        println!(
            "{}{pad}  {:<12}  up {:>6}  resp {:>6}  checked {}",
            record.name,
            record.status.label(),
            record.uptime,
            record.response_time,
            timefmt::relative_time(record.last_checked, now),
        );
    }

    println!();
    if let Some(status) = filter {
        // Echoes the normalized bucket the filter was counted against.
        println!(
            "{} of {} systems {}",
            count_with_status(&all, status),
            all.len(),
            status.name()
        );
    } else {
        let rollup = Rollup::tally(&all);
        println!(
            "{} systems: {} operational, {} degraded, {} down, {} maintenance",
            all.len(),
            rollup.operational,
            rollup.degraded,
            rollup.down,
            rollup.maintenance
        );
    }

    Ok(())
}
