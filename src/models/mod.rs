//! PokeAPI model types.

mod identifier;
mod pokemon;

pub use identifier::*;
pub use pokemon::*;
