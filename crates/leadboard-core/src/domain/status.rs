use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pipeline stage of a lead, in board column order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum LeadStatus {
    #[default]
    New,
    InContact,
    Negotiation,
    Closed,
    Lost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::InContact,
        LeadStatus::Negotiation,
        LeadStatus::Closed,
        LeadStatus::Lost,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::InContact => "in_contact",
            LeadStatus::Negotiation => "negotiation",
            LeadStatus::Closed => "closed",
            LeadStatus::Lost => "lost",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::InContact => "In Contact",
            LeadStatus::Negotiation => "Negotiation",
            LeadStatus::Closed => "Closed",
            LeadStatus::Lost => "Lost",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Portuguese labels are what older exports carry.
        match normalize_label(s).as_str() {
            "new" | "novo" => Ok(LeadStatus::New),
            "in_contact" | "incontact" | "contacted" | "em_contato" => Ok(LeadStatus::InContact),
            "negotiation" | "negotiating" | "negociação" | "negociacao" => {
                Ok(LeadStatus::Negotiation)
            }
            "closed" | "won" | "fechado" => Ok(LeadStatus::Closed),
            "lost" | "perdido" => Ok(LeadStatus::Lost),
            _ => Err(CoreError::InvalidStatus(s.trim().to_string())),
        }
    }
}

impl TryFrom<String> for LeadStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

pub(crate) fn normalize_label(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|ch| if ch == ' ' || ch == '-' { '_' } else { ch })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::LeadStatus;
    use crate::error::CoreError;
    use std::str::FromStr;

    #[test]
    fn parses_canonical_and_display_labels() {
        for status in LeadStatus::ALL {
            assert_eq!(LeadStatus::from_str(status.as_str()).unwrap(), status);
            assert_eq!(LeadStatus::from_str(status.label()).unwrap(), status);
        }
    }

    #[test]
    fn parses_legacy_portuguese_labels() {
        assert_eq!(LeadStatus::from_str("Novo").unwrap(), LeadStatus::New);
        assert_eq!(
            LeadStatus::from_str("Em Contato").unwrap(),
            LeadStatus::InContact
        );
        assert_eq!(
            LeadStatus::from_str("Negociação").unwrap(),
            LeadStatus::Negotiation
        );
        assert_eq!(LeadStatus::from_str("FECHADO").unwrap(), LeadStatus::Closed);
        assert_eq!(LeadStatus::from_str("perdido").unwrap(), LeadStatus::Lost);
    }

    #[test]
    fn rejects_unknown_status() {
        let err = LeadStatus::from_str("Maybe").unwrap_err();
        assert_eq!(err, CoreError::InvalidStatus("Maybe".to_string()));
    }

    #[test]
    fn serde_uses_snake_case_and_validates() {
        let json = serde_json::to_string(&LeadStatus::InContact).unwrap();
        assert_eq!(json, "\"in_contact\"");
        let parsed: LeadStatus = serde_json::from_str("\"Negociação\"").unwrap();
        assert_eq!(parsed, LeadStatus::Negotiation);
        assert!(serde_json::from_str::<LeadStatus>("\"bogus\"").is_err());
    }
}
