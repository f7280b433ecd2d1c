pub mod ids;
pub mod interaction;
pub mod lead;
pub mod status;

pub use ids::LeadId;
pub use interaction::{Interaction, InteractionKind, InteractionNew};
pub use lead::{Lead, LeadNew, LeadUpdate};
pub use status::LeadStatus;
