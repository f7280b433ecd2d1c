//! Storage media for the lead collection.
//!
//! A backend persists the whole collection as one unit; the store never asks
//! it for individual records.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use crate::error::Result;
use leadboard_core::Lead;

pub trait LeadBackend: Send {
    fn name(&self) -> &'static str;

    /// `Ok(None)` means the medium has never been written.
    fn load(&mut self) -> Result<Option<Vec<Lead>>>;

    fn save(&mut self, leads: &[Lead]) -> Result<()>;
}
