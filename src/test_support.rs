//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::types::{NamedResource, PageResponse, PokemonResponse};
use crate::api::{ApiError, PokeApi};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// A stub API that serves canned responses without any I/O.
pub struct StubApi {
    pub page: Option<PageResponse>,
    pub profile: Option<PokemonResponse>,
}

#[async_trait]
impl PokeApi for StubApi {
    async fn fetch_page(&self, _url: &str) -> Result<PageResponse, ApiError> {
        self.page
            .clone()
            .ok_or_else(|| ApiError::Network("stub: no page configured".to_string()))
    }

    async fn fetch_profile(&self, _url: &str) -> Result<PokemonResponse, ApiError> {
        self.profile
            .clone()
            .ok_or_else(|| ApiError::Network("stub: no profile configured".to_string()))
    }
}

/// Creates a test App backed by a stub with no canned responses.
pub fn test_app() -> App {
    let api = Arc::new(StubApi {
        page: None,
        profile: None,
    });
    let config = ResolvedConfig {
        base_url: "https://pokeapi.test/api/v2".to_string(),
        page_limit: 2,
    };
    App::new(api, &config)
}

/// Builds a page envelope whose entry URLs follow the PokeAPI shape.
pub fn page(names: &[&str], next: Option<&str>) -> PageResponse {
    PageResponse {
        count: names.len() as u32,
        next: next.map(|s| s.to_string()),
        previous: None,
        results: names
            .iter()
            .map(|name| NamedResource {
                name: name.to_string(),
                url: format!("https://pokeapi.test/api/v2/pokemon/{name}/"),
            })
            .collect(),
    }
}
