//! Persona domain model and registry.
//!
//! Personas are fixed role lenses (e.g. Sales Executive) that parameterize
//! prompts, charts, and tables. The set is closed and defined at process
//! start; exactly one persona is active per session.

pub mod model;
pub mod preset;
pub mod registry;

pub use model::{Persona, PersonaKey};
pub use registry::{all, get, resolve};
