use crate::backend::LeadBackend;
use crate::error::Result;
use leadboard_core::Lead;

/// Process-lifetime collection; starts unwritten so the first access seeds it.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    leads: Option<Vec<Lead>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_leads(leads: Vec<Lead>) -> Self {
        Self { leads: Some(leads) }
    }
}

impl LeadBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn load(&mut self) -> Result<Option<Vec<Lead>>> {
        Ok(self.leads.clone())
    }

    fn save(&mut self, leads: &[Lead]) -> Result<()> {
        self.leads = Some(leads.to_vec());
        Ok(())
    }
}
