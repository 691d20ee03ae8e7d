//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::PokeApiClient;
use crate::error::Result;

/// Fetch a single entity by identifier.
///
/// Implement this trait for entity types that can be fetched individually
/// by a unique identifier (a name or numeric id).
///
/// # Example
///
/// ```no_run
/// use pokedex::{Get, PokeApiClient, Pokemon};
///
/// # async fn example() -> pokedex::Result<()> {
/// let client = PokeApiClient::new()?;
/// let pikachu = Pokemon::get(&client, "pikachu".into()).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The identifier type for this entity.
    type Id;

    /// Fetch the entity by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &PokeApiClient, id: Self::Id) -> Result<Self>;
}
