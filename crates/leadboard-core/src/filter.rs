use crate::domain::{Lead, LeadStatus};

/// Narrows a lead listing. An unset field matches every lead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    pub status: Option<LeadStatus>,
    query: Option<String>,
}

impl LeadFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: LeadStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Case-insensitive substring search over name, email and phone.
    /// Blank text is ignored.
    pub fn with_query(mut self, text: &str) -> Self {
        let text = text.trim();
        self.query = if text.is_empty() {
            None
        } else {
            Some(text.to_lowercase())
        };
        self
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.query.is_none()
    }

    pub fn matches(&self, lead: &Lead) -> bool {
        if let Some(status) = self.status {
            if lead.status != status {
                return false;
            }
        }
        match &self.query {
            Some(needle) => [&lead.name, &lead.email, &lead.phone]
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
            None => true,
        }
    }

    /// Keeps matching leads in their original order.
    pub fn apply(&self, leads: Vec<Lead>) -> Vec<Lead> {
        if self.is_empty() {
            return leads;
        }
        leads.into_iter().filter(|lead| self.matches(lead)).collect()
    }
}
