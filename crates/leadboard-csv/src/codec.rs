use chrono::{DateTime, Utc};
use leadboard_core::time::{format_local_date, EXPORT_DATE_FORMAT};
use leadboard_core::{Lead, LeadNew, LeadStatus};

/// Prepended to exported files so spreadsheet tools pick UTF-8.
pub const UTF8_BOM: &str = "\u{feff}";

pub const HEADERS: [&str; 7] = [
    "Name",
    "Email",
    "Phone",
    "Status",
    "RegisteredDate",
    "Notes",
    "InteractionCount",
];

const MIN_FIELDS: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    pub leads: Vec<LeadNew>,
    pub skipped: usize,
    pub warnings: Vec<String>,
}

/// One header row plus one row per lead; every cell is quoted. Interaction
/// history is reduced to its length.
pub fn to_csv(leads: &[Lead]) -> String {
    let mut rows = Vec::with_capacity(leads.len() + 1);
    rows.push(join_row(HEADERS.iter().map(|header| header.to_string())));
    for lead in leads {
        rows.push(join_row(
            [
                lead.name.clone(),
                lead.email.clone(),
                lead.phone.clone(),
                lead.status.label().to_string(),
                format_local_date(lead.registered_at, EXPORT_DATE_FORMAT),
                lead.notes.clone(),
                lead.interaction_history.len().to_string(),
            ]
            .into_iter(),
        ));
    }
    rows.join("\n")
}

pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("leads_{}.csv", now.format("%Y-%m-%d"))
}

/// Parses exported (or hand-made) CSV into lead inputs. The first non-blank
/// line is taken as the header and ignored. Bad rows are skipped and described
/// in `warnings`; this never fails.
pub fn parse_csv(text: &str) -> ParsedCsv {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line))
        .collect();

    let mut parsed = ParsedCsv::default();
    if lines.len() < 2 {
        return parsed;
    }

    for (line_no, line) in lines.into_iter().skip(1) {
        match parse_row(line) {
            Ok(lead) => parsed.leads.push(lead),
            Err(reason) => {
                parsed.skipped += 1;
                parsed.warnings.push(format!("line {line_no}: {reason}"));
            }
        }
    }

    parsed
}

fn parse_row(line: &str) -> Result<LeadNew, String> {
    let fields = split_fields(line);
    if fields.len() < MIN_FIELDS {
        return Err(format!(
            "expected at least {MIN_FIELDS} fields, found {}",
            fields.len()
        ));
    }

    let mut fields = fields.into_iter();
    let name = fields.next().unwrap_or_default();
    let email = fields.next().unwrap_or_default();
    let phone = fields.next().unwrap_or_default();
    let status_raw = fields.next().unwrap_or_default();
    let _registered = fields.next();
    let notes = fields.next().unwrap_or_default();

    if name.is_empty() {
        return Err("missing name".to_string());
    }

    let status = if status_raw.is_empty() {
        LeadStatus::New
    } else {
        status_raw.parse().map_err(|err| format!("{err}"))?
    };

    Ok(LeadNew {
        name,
        email,
        phone,
        status,
        notes,
        interaction_history: Vec::new(),
    })
}

/// Quote-aware field scanner. Outside quotes `"` opens a quoted run and `,`
/// ends the field; inside quotes `""` is a literal quote and a lone `"`
/// closes the run. Fields are trimmed.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

fn join_row(cells: impl Iterator<Item = String>) -> String {
    cells
        .map(|cell| quote_cell(&cell))
        .collect::<Vec<_>>()
        .join(",")
}

// Rows are line-oriented on import, so line breaks cannot survive a cell.
fn quote_cell(value: &str) -> String {
    let flat = value.replace("\r\n", " ").replace(['\n', '\r'], " ");
    format!("\"{}\"", flat.replace('"', "\"\""))
}
