pub mod domain;
pub mod error;
pub mod filter;
pub mod time;

pub use domain::*;
pub use error::CoreError;
pub use filter::LeadFilter;
