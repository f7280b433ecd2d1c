use crate::error::invalid_input;
use anyhow::Result;
use leadboard_core::{InteractionKind, LeadId, LeadStatus};
use std::str::FromStr;

pub fn parse_lead_id(raw: &str) -> Result<LeadId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("lead id cannot be empty"));
    }
    LeadId::from_str(trimmed).map_err(|_| invalid_input("invalid lead id"))
}

pub fn parse_status(raw: &str) -> Result<LeadStatus> {
    Ok(LeadStatus::from_str(raw)?)
}

pub fn parse_interaction_kind(raw: &str) -> Result<InteractionKind> {
    Ok(InteractionKind::from_str(raw)?)
}

pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::{parse_interaction_kind, parse_lead_id, parse_status, truncate};
    use crate::error::CliError;
    use leadboard_core::{InteractionKind, LeadStatus};

    #[test]
    fn parse_status_accepts_labels() {
        assert_eq!(parse_status("in contact").unwrap(), LeadStatus::InContact);
        assert!(parse_status("pending").is_err());
    }

    #[test]
    fn parse_interaction_kind_accepts_labels() {
        assert_eq!(
            parse_interaction_kind("Meeting").unwrap(),
            InteractionKind::Meeting
        );
    }

    #[test]
    fn parse_lead_id_rejects_blank_as_invalid_input() {
        for raw in ["  ", "1"] {
            let err = parse_lead_id(raw).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<CliError>(),
                Some(CliError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("João da Silva", 6), "João …");
    }
}
