use crate::codec::{parse_csv, ParsedCsv};
use chrono::{DateTime, Utc};
use leadboard_store::LeadStore;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ImportReport {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
    pub warnings: Vec<String>,
}

/// Parses `text` and creates one lead per valid row.
pub fn import_csv(store: &LeadStore, now: DateTime<Utc>, text: &str) -> ImportReport {
    import_leads(store, now, parse_csv(text))
}

/// Submits each parsed row to the store in order. A row the store rejects is
/// counted as failed and the batch carries on.
pub fn import_leads(store: &LeadStore, now: DateTime<Utc>, parsed: ParsedCsv) -> ImportReport {
    let mut report = ImportReport {
        created: 0,
        skipped: parsed.skipped,
        failed: 0,
        warnings: parsed.warnings,
    };

    for lead in parsed.leads {
        let name = lead.name.clone();
        match store.create(now, lead) {
            Ok(_) => report.created += 1,
            Err(err) => {
                warn!(name = %name, error = %err, "csv row not imported");
                report.failed += 1;
                report.warnings.push(format!("{name}: {err}"));
            }
        }
    }

    report
}
