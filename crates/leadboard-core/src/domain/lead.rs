use crate::domain::ids::LeadId;
use crate::domain::interaction::Interaction;
use crate::domain::status::LeadStatus;
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub interaction_history: Vec<Interaction>,
    pub registered_at: DateTime<Utc>,
}

impl Lead {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        for interaction in &self.interaction_history {
            interaction.validate()?;
        }
        Ok(())
    }

    /// Shallow merge: every field present in `update` replaces the stored one.
    /// `id` and `registered_at` are not part of `LeadUpdate` and never change.
    pub fn apply(&mut self, update: LeadUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
        if let Some(history) = update.interaction_history {
            self.interaction_history = history;
        }
    }
}

/// Fields supplied when creating a lead. The store assigns `id` and `registered_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadNew {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub interaction_history: Vec<Interaction>,
}

impl LeadNew {
    pub fn into_lead(self, id: LeadId, registered_at: DateTime<Utc>) -> Lead {
        Lead {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            status: self.status,
            notes: self.notes,
            interaction_history: self.interaction_history,
            registered_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction_history: Option<Vec<Interaction>>,
}

impl LeadUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.status.is_none()
            && self.notes.is_none()
            && self.interaction_history.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{Lead, LeadNew, LeadUpdate};
    use crate::domain::{Interaction, InteractionKind, LeadId, LeadStatus};
    use crate::error::CoreError;
    use chrono::{TimeZone, Utc};

    fn sample() -> Lead {
        LeadNew {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0101".to_string(),
            status: LeadStatus::New,
            notes: String::new(),
            interaction_history: Vec::new(),
        }
        .into_lead(LeadId::new(), Utc.timestamp_opt(1_700_000_000, 0).unwrap())
    }

    #[test]
    fn apply_changes_only_supplied_fields() {
        let mut lead = sample();
        let before = lead.clone();
        lead.apply(LeadUpdate {
            status: Some(LeadStatus::Negotiation),
            ..Default::default()
        });
        assert_eq!(lead.status, LeadStatus::Negotiation);
        assert_eq!(lead.id, before.id);
        assert_eq!(lead.name, before.name);
        assert_eq!(lead.registered_at, before.registered_at);
    }

    #[test]
    fn validate_requires_name() {
        let mut lead = sample();
        lead.name = "  ".to_string();
        assert_eq!(lead.validate(), Err(CoreError::EmptyName));
    }

    #[test]
    fn validate_checks_history() {
        let mut lead = sample();
        lead.interaction_history.push(Interaction {
            timestamp: lead.registered_at,
            kind: InteractionKind::Email,
            description: String::new(),
        });
        assert_eq!(lead.validate(), Err(CoreError::EmptyInteractionDescription));
    }

    #[test]
    fn update_body_ignores_identity_fields() {
        let update: LeadUpdate = serde_json::from_str(
            r#"{"id":"not-a-uuid","registeredAt":"2020-01-01T00:00:00Z","notes":"hi"}"#,
        )
        .expect("parse update");
        assert_eq!(update.notes.as_deref(), Some("hi"));
        assert!(update.name.is_none());
        assert!(!update.is_empty());
    }

    #[test]
    fn lead_json_uses_camel_case() {
        let lead = sample();
        let value = serde_json::to_value(&lead).expect("serialize");
        assert!(value.get("interactionHistory").is_some());
        assert_eq!(value["registeredAt"], "2023-11-14T22:13:20Z");
        assert_eq!(value["status"], "new");
    }
}
