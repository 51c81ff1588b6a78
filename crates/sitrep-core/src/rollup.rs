//! Per-status counts for the dashboard summary row.

use crate::catalog::ServiceRecord;
use crate::status::Status;

/// Number of records currently carrying the given status.
pub fn count_with_status(records: &[ServiceRecord], status: Status) -> usize {
    records.iter().filter(|r| r.status == status).count()
}

/// The four headline counts shown under the card grid.
///
/// Derived data: tallied from the record list on demand, never stored
/// alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rollup {
    pub operational: usize,
    pub degraded: usize,
    pub down: usize,
    pub maintenance: usize,
}

impl Rollup {
    /// Counts every record into its headline bucket in one pass.
    ///
    /// `Unknown` records belong to no bucket; they still render as cards
    /// but the summary row only shows the four real states.
    pub fn tally(records: &[ServiceRecord]) -> Self {
        let mut rollup = Rollup::default();
        for record in records {
            match record.status {
                Status::Operational => rollup.operational += 1,
                Status::Degraded => rollup.degraded += 1,
                Status::Down => rollup.down += 1,
                Status::Maintenance => rollup.maintenance += 1,
                Status::Unknown => {}
            }
        }
        rollup
    }

    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Operational => self.operational,
            Status::Degraded => self.degraded,
            Status::Down => self.down,
            Status::Maintenance => self.maintenance,
            Status::Unknown => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.operational + self.degraded + self.down + self.maintenance
    }
}
