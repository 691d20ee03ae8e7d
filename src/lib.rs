//! PokeAPI client library.
//!
//! A Rust library for looking up pokemon through the public
//! [PokeAPI](https://pokeapi.co) REST endpoint. One operation is exposed:
//! fetch a pokemon by name or numeric id and map the response into a typed
//! [`Pokemon`] record.
//!
//! # Quick Start
//!
//! ```no_run
//! use pokedex::{PokeApiClient, Pokemon, Get};
//!
//! #[tokio::main]
//! async fn main() -> pokedex::Result<()> {
//!     let client = PokeApiClient::new()?;
//!
//!     // Fetch by name
//!     let pikachu = client.get_pokemon("pikachu").await?;
//!     println!("#{} {} {:?}", pikachu.id, pikachu.name, pikachu.types);
//!
//!     // Or by numeric id, through the Get trait
//!     let ditto = Pokemon::get(&client, 132.into()).await?;
//!     println!("#{} {}", ditto.id, ditto.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Every failure surfaces as a [`PokeApiError`]: timeouts, transport
//! failures, and HTTP failure statuses each map to their own variant, so
//! callers can match narrowly (say, on [`PokeApiError::NotFound`]) or
//! handle the enum as a whole. The client never retries and never logs in
//! place of returning an error; retry policy belongs to the caller.
//!
//! # Configuration
//!
//! The base URL is fixed to the production API; the request timeout
//! defaults to 5 seconds and can be overridden at construction with
//! [`PokeApiClient::with_timeout`].

pub mod cli;
mod client;
mod error;
mod models;
mod output;
mod traits;

// Re-export core types
pub use client::PokeApiClient;
pub use error::{PokeApiError, Result};

// Re-export traits
pub use output::PrettyPrint;
pub use traits::Get;

// Re-export models
pub use models::{Identifier, Pokemon};
