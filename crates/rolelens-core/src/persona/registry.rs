//! Persona lookup.
//!
//! The registry is read-only: the persona set is fixed at compile time and
//! there are no mutation operations.

use std::str::FromStr;

use super::model::{Persona, PersonaKey};
use super::preset::PERSONAS;
use crate::error::{Result, RolelensError};

/// Returns the persona for a typed key.
///
/// Total: every [`PersonaKey`] has exactly one entry in the preset table.
pub fn get(key: PersonaKey) -> &'static Persona {
    &PERSONAS[key as usize]
}

/// Resolves a string key (e.g. `"sales_executive"`) to its persona.
///
/// # Errors
///
/// Returns [`RolelensError::UnknownPersona`] if the key is not in the
/// fixed set. Callers should propagate this rather than mask it.
pub fn resolve(key: &str) -> Result<&'static Persona> {
    let key = PersonaKey::from_str(key).map_err(|_| RolelensError::unknown_persona(key))?;
    Ok(get(key))
}

/// Returns all personas in selector display order.
pub fn all() -> &'static [Persona] {
    &PERSONAS
}
