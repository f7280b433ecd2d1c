use chrono::{DateTime, Utc};
use leadboard_core::{Interaction, InteractionKind, Lead, LeadId, LeadStatus};

/// Sample collection written to a medium the first time it is read.
pub fn sample_leads(now: DateTime<Utc>) -> Vec<Lead> {
    vec![
        sample(
            now,
            "João da Silva",
            "joao.silva@email.com",
            "(11) 98765-4321",
            LeadStatus::New,
            "Looking for property in the south zone of São Paulo. Family of three.",
            InteractionKind::Call,
            "First contact. Talked through the ideal property profile.",
        ),
        sample(
            now,
            "Maria Santos",
            "maria.santos@email.com",
            "(11) 91234-5678",
            LeadStatus::Negotiation,
            "Liked the apartment on Rua X. Waiting for feedback on the offer.",
            InteractionKind::Email,
            "Sent the proposal for apartment Y.",
        ),
        sample(
            now,
            "Carlos Oliveira",
            "carlos.oliveira@email.com",
            "(11) 99876-5432",
            LeadStatus::InContact,
            "Wants a two-bedroom apartment. Budget up to R$ 500.000.",
            InteractionKind::WhatsApp,
            "Shared photos of available listings.",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    now: DateTime<Utc>,
    name: &str,
    email: &str,
    phone: &str,
    status: LeadStatus,
    notes: &str,
    kind: InteractionKind,
    description: &str,
) -> Lead {
    Lead {
        id: LeadId::new(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        status,
        notes: notes.to_string(),
        interaction_history: vec![Interaction {
            timestamp: now,
            kind,
            description: description.to_string(),
        }],
        registered_at: now,
    }
}
