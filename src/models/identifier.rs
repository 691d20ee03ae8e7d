//! Lookup identifier for pokemon endpoints.

use std::fmt;

/// The name or numeric id used to look up a pokemon.
///
/// PokeAPI accepts either form in the same path segment
/// (`/pokemon/pikachu` and `/pokemon/25` address the same record).
/// Names are case-sensitive as the API defines them; the client performs
/// no local validation beyond what these conversions enforce.
///
/// # Example
///
/// ```
/// use pokedex::Identifier;
///
/// let by_name: Identifier = "pikachu".into();
/// let by_id: Identifier = 25.into();
/// assert_eq!(by_name.to_string(), "pikachu");
/// assert_eq!(by_id.to_string(), "25");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// Species name.
    Name(String),
    /// Numeric species id.
    Id(u32),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Name(name) => f.write_str(name),
            Identifier::Id(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::Name(name.to_string())
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::Name(name)
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Identifier::Id(id)
    }
}
