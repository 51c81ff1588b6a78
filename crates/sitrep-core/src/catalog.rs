//! The monitored-systems catalog.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::status::Status;

/// One monitored system as displayed on the status page.
///
/// Records are assembled once at startup and never mutated afterwards.
/// Everything the dashboard derives from them (relative ages, rollups) is
/// recomputed against the current clock value on each render.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub status: Status,
    /// Display text, e.g. `"99.9%"`.
    pub uptime: String,
    /// Display text, e.g. `"45ms"`, or `"N/A"` when nothing answered.
    pub response_time: String,
    pub last_checked: DateTime<Utc>,
}

impl ServiceRecord {
    pub fn new(
        id: u32,
        name: &str,
        description: &str,
        status: Status,
        uptime: &str,
        response_time: &str,
        last_checked: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            status,
            uptime: uptime.to_string(),
            response_time: response_time.to_string(),
            last_checked,
        }
    }
}

/// Built-in demo catalog, used until a config file defines systems.
///
/// Check times are offsets from the supplied startup instant so the
/// dashboard has plausible ages to count up from.
pub fn builtin(now: DateTime<Utc>) -> Vec<ServiceRecord> {
    vec![
        ServiceRecord::new(
            1,
            "API Gateway",
            "Main API routing service",
            Status::Operational,
            "99.9%",
            "45ms",
            now - Duration::minutes(2),
        ),
        ServiceRecord::new(
            2,
            "Database Cluster",
            "Primary PostgreSQL cluster",
            Status::Operational,
            "99.8%",
            "12ms",
            now - Duration::minutes(1),
        ),
        ServiceRecord::new(
            3,
            "Authentication Service",
            "User authentication & authorization",
            Status::Degraded,
            "98.2%",
            "120ms",
            now - Duration::seconds(30),
        ),
        ServiceRecord::new(
            4,
            "CDN Network",
            "Global content delivery network",
            Status::Operational,
            "99.9%",
            "8ms",
            now - Duration::minutes(5),
        ),
        ServiceRecord::new(
            5,
            "Payment Gateway",
            "Payment processing service",
            Status::Down,
            "95.1%",
            "N/A",
            now - Duration::minutes(10),
        ),
        ServiceRecord::new(
            6,
            "Email Service",
            "Transactional email delivery",
            Status::Maintenance,
            "99.5%",
            "N/A",
            now - Duration::hours(1),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_builtin_has_six_records_with_sequential_ids() {
        let records = builtin(Utc::now());
        assert_eq!(records.len(), 6);
        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_builtin_status_mix() {
        let records = builtin(Utc::now());
        let operational = records
            .iter()
            .filter(|r| r.status == Status::Operational)
            .count();
        assert_eq!(operational, 3);
        assert!(records.iter().any(|r| r.status == Status::Degraded));
        assert!(records.iter().any(|r| r.status == Status::Down));
        assert!(records.iter().any(|r| r.status == Status::Maintenance));
    }

    /// Check times are offsets from the supplied instant, not wall time.
    #[test]
    fn test_builtin_check_times_are_offsets_from_now() {
        let now = Utc::now();
        let records = builtin(now);
        assert_eq!(now - records[0].last_checked, Duration::minutes(2));
        assert_eq!(now - records[2].last_checked, Duration::seconds(30));
        assert_eq!(now - records[5].last_checked, Duration::hours(1));
    }

    #[test]
    fn test_unmeasured_services_show_na_response() {
        let records = builtin(Utc::now());
        assert_eq!(records[4].response_time, "N/A");
        assert_eq!(records[5].response_time, "N/A");
    }
}
