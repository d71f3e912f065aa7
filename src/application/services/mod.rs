//! Application services orchestrating the domain.

mod creation_service;
mod redirect_engine;
mod uniqueness;

pub use creation_service::{CreationOutcome, CreationService};
pub use redirect_engine::{RedirectEngine, RedirectResult};
pub use uniqueness::UniquenessResolver;
