//! Pokemon model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::PokeApiClient;
use crate::error::Result;
use crate::models::Identifier;
use crate::traits::Get;

/// A pokemon record fetched from the API.
///
/// An immutable value with no identity beyond field equality; a fresh
/// instance is produced per successful call. Only the fields below are
/// extracted from the response; everything else the API returns is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPokemon")]
pub struct Pokemon {
    /// The numeric species id.
    pub id: u32,

    /// The species name.
    pub name: String,

    /// Type names in the order the API lists them. Empty when the
    /// response carries no `types` field.
    pub types: Vec<String>,
}

/// The response shape of `GET /pokemon/{identifier}`, reduced to the
/// fields we extract. Type names live under a nested `types[].type.name`
/// structure that [`Pokemon`] flattens away.
#[derive(Deserialize)]
struct RawPokemon {
    id: u32,
    name: String,
    #[serde(default)]
    types: Vec<TypeSlot>,
}

#[derive(Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    type_ref: NamedResource,
}

/// `{name, url}` reference object used throughout PokeAPI responses.
#[derive(Deserialize)]
struct NamedResource {
    name: String,
}

impl From<RawPokemon> for Pokemon {
    fn from(raw: RawPokemon) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            types: raw.types.into_iter().map(|t| t.type_ref.name).collect(),
        }
    }
}

#[async_trait]
impl Get for Pokemon {
    type Id = Identifier;

    #[tracing::instrument(skip(client))]
    async fn get(client: &PokeApiClient, identifier: Identifier) -> Result<Self> {
        client.get_pokemon(identifier).await
    }
}
