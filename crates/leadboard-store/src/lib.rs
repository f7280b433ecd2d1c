pub mod backend;
pub mod error;
pub mod paths;
pub mod seed;

use crate::backend::{LeadBackend, MemoryBackend, SqliteBackend};
use crate::error::{Result, StoreError};
use chrono::{DateTime, Utc};
use leadboard_core::{InteractionNew, Lead, LeadFilter, LeadId, LeadNew, LeadUpdate};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// What to do when the storage medium fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultPolicy {
    /// Propagate every backend error to the caller.
    #[default]
    Strict,
    /// Log medium faults and carry on: a failed read yields an empty
    /// collection and a failed write is dropped.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    pub seed: bool,
    pub faults: FaultPolicy,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            seed: true,
            faults: FaultPolicy::Strict,
        }
    }
}

/// The lead collection behind a single lock. Each operation loads the
/// collection, applies one change and persists it before the lock is released.
pub struct LeadStore {
    backend: Mutex<Box<dyn LeadBackend>>,
    options: StoreOptions,
}

impl LeadStore {
    pub fn new<B: LeadBackend + 'static>(backend: B, options: StoreOptions) -> Self {
        Self {
            backend: Mutex::new(Box::new(backend)),
            options,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new(), StoreOptions::default())
    }

    pub fn open(path: &Path, options: StoreOptions) -> Result<Self> {
        let backend = SqliteBackend::open(path)?;
        Ok(Self::new(backend, options))
    }

    pub fn backend_name(&self) -> Result<&'static str> {
        Ok(self.lock()?.name())
    }

    pub fn list(&self) -> Result<Vec<Lead>> {
        let mut backend = self.lock()?;
        self.load(&mut **backend)
    }

    /// Leads matching `filter`, in storage order.
    pub fn search(&self, filter: &LeadFilter) -> Result<Vec<Lead>> {
        Ok(filter.apply(self.list()?))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn get(&self, id: LeadId) -> Result<Option<Lead>> {
        let leads = self.list()?;
        Ok(leads.into_iter().find(|lead| lead.id == id))
    }

    pub fn create(&self, now: DateTime<Utc>, input: LeadNew) -> Result<Lead> {
        let lead = input.into_lead(LeadId::new(), now);
        lead.validate()?;

        let mut backend = self.lock()?;
        let mut leads = self.load(&mut **backend)?;
        leads.push(lead.clone());
        self.persist(&mut **backend, &leads)?;
        debug!(id = %lead.id, "lead created");
        Ok(lead)
    }

    pub fn update(&self, id: LeadId, update: LeadUpdate) -> Result<Option<Lead>> {
        let mut backend = self.lock()?;
        let mut leads = self.load(&mut **backend)?;
        let Some(index) = leads.iter().position(|lead| lead.id == id) else {
            return Ok(None);
        };

        let mut merged = leads[index].clone();
        merged.apply(update);
        merged.validate()?;
        leads[index] = merged.clone();

        self.persist(&mut **backend, &leads)?;
        debug!(id = %id, "lead updated");
        Ok(Some(merged))
    }

    pub fn add_interaction(
        &self,
        now: DateTime<Utc>,
        id: LeadId,
        input: InteractionNew,
    ) -> Result<Option<Lead>> {
        let interaction = input.into_interaction(now);
        interaction.validate()?;

        let mut backend = self.lock()?;
        let mut leads = self.load(&mut **backend)?;
        let Some(lead) = leads.iter_mut().find(|lead| lead.id == id) else {
            return Ok(None);
        };
        lead.interaction_history.push(interaction);
        let updated = lead.clone();

        self.persist(&mut **backend, &leads)?;
        debug!(id = %id, "interaction added");
        Ok(Some(updated))
    }

    pub fn delete(&self, id: LeadId) -> Result<bool> {
        let mut backend = self.lock()?;
        let mut leads = self.load(&mut **backend)?;
        let before = leads.len();
        leads.retain(|lead| lead.id != id);
        if leads.len() == before {
            return Ok(false);
        }

        self.persist(&mut **backend, &leads)?;
        debug!(id = %id, "lead deleted");
        Ok(true)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Box<dyn LeadBackend>>> {
        self.backend.lock().map_err(|_| StoreError::Poisoned)
    }

    fn load(&self, backend: &mut dyn LeadBackend) -> Result<Vec<Lead>> {
        match backend.load() {
            Ok(Some(leads)) => Ok(leads),
            Ok(None) => {
                let initial = if self.options.seed {
                    seed::sample_leads(Utc::now())
                } else {
                    Vec::new()
                };
                debug!(backend = backend.name(), count = initial.len(), "seeding lead collection");
                self.persist(backend, &initial)?;
                Ok(initial)
            }
            Err(err) => self.on_fault(backend.name(), "read", err).map(|()| Vec::new()),
        }
    }

    fn persist(&self, backend: &mut dyn LeadBackend, leads: &[Lead]) -> Result<()> {
        match backend.save(leads) {
            Ok(()) => Ok(()),
            Err(err) => self.on_fault(backend.name(), "write", err),
        }
    }

    fn on_fault(&self, backend: &'static str, op: &'static str, err: StoreError) -> Result<()> {
        match self.options.faults {
            FaultPolicy::Strict => Err(err),
            FaultPolicy::Lenient if !err.is_persistence_fault() => Err(err),
            FaultPolicy::Lenient => {
                warn!(backend, op, error = %err, "lead storage fault ignored");
                Ok(())
            }
        }
    }
}
