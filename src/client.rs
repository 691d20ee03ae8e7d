//! PokeAPI client.
//!
//! Low-level HTTP client that owns the connection pool and normalizes
//! transport and HTTP failures into the [`PokeApiError`] taxonomy.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use url::Url;

use crate::error::{PokeApiError, Result};
use crate::models::{Identifier, Pokemon};

const BASE_URL: &str = "https://pokeapi.co/api/v2";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));

/// PokeAPI client.
///
/// Owns the underlying connection pool, which is acquired at construction
/// and released when the last clone is dropped. This struct is cheaply
/// cloneable; clones reference the same pool. It holds no mutable state,
/// so sequential reuse across calls is the supported pattern; callers
/// wanting concurrent fetches should use independent instances.
///
/// Exactly one network attempt is made per call. Retry, backoff, and
/// caching are the caller's responsibility.
///
/// # Example
///
/// ```no_run
/// use pokedex::PokeApiClient;
///
/// # async fn example() -> pokedex::Result<()> {
/// let client = PokeApiClient::new()?;
/// let pikachu = client.get_pokemon("pikachu").await?;
/// println!("{} has types {:?}", pikachu.name, pikachu.types);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: Arc<Url>,
}

impl std::fmt::Debug for PokeApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokeApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PokeApiClient {
    /// Create a client against the production API with the default
    /// 5-second timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client against the production API with a custom request
    /// timeout (applies to the whole request, connect and read included).
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::with_base_url(BASE_URL, timeout)
    }

    /// Create a client against an arbitrary base URL.
    ///
    /// Intended for tests and self-hosted PokeAPI instances.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        // Ensure base URL ends with / so path joins append rather than replace
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(timeout)
            .build()
            .map_err(PokeApiError::Network)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch a pokemon by name or numeric id.
    ///
    /// Issues a single `GET {base}/pokemon/{identifier}` request and maps
    /// the response into a [`Pokemon`].
    ///
    /// # Errors
    ///
    /// * [`PokeApiError::Timeout`] when the request exceeds the configured timeout
    /// * [`PokeApiError::Network`] on any other transport failure
    /// * [`PokeApiError::NotFound`] on HTTP 404
    /// * [`PokeApiError::RateLimited`] on HTTP 429
    /// * [`PokeApiError::Server`] on HTTP 5xx
    /// * [`PokeApiError::Api`] on any other failure status
    /// * [`PokeApiError::Decode`] when the body is not the expected JSON shape
    pub async fn get_pokemon(&self, identifier: impl Into<Identifier>) -> Result<Pokemon> {
        self.fetch(identifier.into()).await
    }

    #[tracing::instrument(skip(self))]
    async fn fetch(&self, identifier: Identifier) -> Result<Pokemon> {
        let segment = urlencoding::encode(&identifier.to_string()).into_owned();
        let url = self.base_url.join(&format!("pokemon/{segment}"))?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let response = Self::check_status(response, &identifier)?;

        let body = response.text().await.map_err(Self::map_transport_error)?;
        let pokemon: Pokemon = serde_json::from_str(&body)?;
        Ok(pokemon)
    }

    /// Distinguish timeouts from other transport failures.
    fn map_transport_error(err: reqwest::Error) -> PokeApiError {
        if err.is_timeout() {
            PokeApiError::Timeout
        } else {
            PokeApiError::Network(err)
        }
    }

    /// Map failure statuses to error kinds; checked in taxonomy order.
    fn check_status(response: Response, identifier: &Identifier) -> Result<Response> {
        let status = response.status().as_u16();

        if status == 404 {
            return Err(PokeApiError::NotFound {
                identifier: identifier.to_string(),
            });
        }
        if status == 429 {
            return Err(PokeApiError::RateLimited);
        }
        if (500..600).contains(&status) {
            return Err(PokeApiError::Server);
        }
        if status >= 400 {
            return Err(PokeApiError::Api { status });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug() {
        let client = PokeApiClient::new().unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("PokeApiClient"));
        assert!(debug.contains("pokeapi.co"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 =
            PokeApiClient::with_base_url("https://pokeapi.co/api/v2", DEFAULT_TIMEOUT).unwrap();
        let client2 =
            PokeApiClient::with_base_url("https://pokeapi.co/api/v2/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = PokeApiClient::with_base_url("not a url", DEFAULT_TIMEOUT);
        assert!(matches!(result, Err(PokeApiError::Url(_))));
    }
}
