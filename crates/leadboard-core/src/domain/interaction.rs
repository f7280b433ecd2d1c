use crate::domain::status::normalize_label;
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum InteractionKind {
    Call,
    Email,
    #[serde(rename = "whatsapp")]
    WhatsApp,
    Meeting,
    Other,
}

impl InteractionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionKind::Call => "call",
            InteractionKind::Email => "email",
            InteractionKind::WhatsApp => "whatsapp",
            InteractionKind::Meeting => "meeting",
            InteractionKind::Other => "other",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "call" | "phone" | "ligação" | "ligacao" => Ok(InteractionKind::Call),
            "email" | "e_mail" => Ok(InteractionKind::Email),
            "whatsapp" | "whats_app" => Ok(InteractionKind::WhatsApp),
            "meeting" | "reunião" | "reuniao" => Ok(InteractionKind::Meeting),
            "other" | "outro" => Ok(InteractionKind::Other),
            _ => Err(CoreError::InvalidInteractionKind(s.trim().to_string())),
        }
    }
}

impl TryFrom<String> for InteractionKind {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One contact event in a lead's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub timestamp: DateTime<Utc>,
    pub kind: InteractionKind,
    pub description: String,
}

impl Interaction {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.description.trim().is_empty() {
            return Err(CoreError::EmptyInteractionDescription);
        }
        Ok(())
    }
}

/// Input for appending an interaction; `timestamp` defaults to the time of the call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InteractionNew {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub kind: InteractionKind,
    pub description: String,
}

impl InteractionNew {
    pub fn into_interaction(self, now: DateTime<Utc>) -> Interaction {
        Interaction {
            timestamp: self.timestamp.unwrap_or(now),
            kind: self.kind,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Interaction, InteractionKind, InteractionNew};
    use crate::error::CoreError;
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;

    #[test]
    fn kind_accepts_legacy_labels() {
        assert_eq!(
            InteractionKind::from_str("Ligação").unwrap(),
            InteractionKind::Call
        );
        assert_eq!(
            InteractionKind::from_str("WhatsApp").unwrap(),
            InteractionKind::WhatsApp
        );
        assert_eq!(
            InteractionKind::from_str("Reunião").unwrap(),
            InteractionKind::Meeting
        );
        assert!(InteractionKind::from_str("fax").is_err());
    }

    #[test]
    fn validate_rejects_blank_description() {
        let interaction = Interaction {
            timestamp: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            kind: InteractionKind::Call,
            description: "   ".to_string(),
        };
        assert_eq!(
            interaction.validate(),
            Err(CoreError::EmptyInteractionDescription)
        );
    }

    #[test]
    fn into_interaction_defaults_timestamp() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let input = InteractionNew {
            timestamp: None,
            kind: InteractionKind::Meeting,
            description: "Site visit".to_string(),
        };
        let interaction = input.into_interaction(now);
        assert_eq!(interaction.timestamp, now);
        assert_eq!(interaction.kind, InteractionKind::Meeting);
    }
}
