//! Wire types for the PokeAPI REST endpoints.
//!
//! These mirror the JSON bodies exactly; the domain layer maps them into
//! its own types (`core::model`) before anything renders.

use serde::Deserialize;

/// One `{name, url}` reference inside a paginated list envelope.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Envelope for `GET {base}/pokemon?offset={o}&limit={l}`.
///
/// `next`/`previous` are absolute URLs supplied by the server, or null at
/// either end of the collection.
#[derive(Deserialize, Debug, Clone)]
pub struct PageResponse {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Detail resource body. Only the fields the profile screen shows.
#[derive(Deserialize, Debug, Clone)]
pub struct PokemonResponse {
    pub name: String,
    /// Null for some species (e.g. forms without experience data).
    pub base_experience: Option<u32>,
    pub height: u32,
    pub stats: Vec<StatSlot>,
}

/// One element of the `stats` array: a base value plus a nested name.
#[derive(Deserialize, Debug, Clone)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: StatRef,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StatRef {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Contract test against the list envelope shape PokeAPI actually serves.
    #[test]
    fn test_page_response_deserializes() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=100&limit=100",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;

        let page: PageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1302);
        assert_eq!(
            page.next.as_deref(),
            Some("https://pokeapi.co/api/v2/pokemon?offset=100&limit=100")
        );
        assert_eq!(page.previous, None);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "bulbasaur");
        assert_eq!(page.results[1].url, "https://pokeapi.co/api/v2/pokemon/2/");
    }

    #[test]
    fn test_page_response_last_page_has_null_next() {
        let json = r#"{"count": 2, "next": null, "previous": "u", "results": []}"#;
        let page: PageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.next, None);
        assert_eq!(page.previous.as_deref(), Some("u"));
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_pokemon_response_deserializes_with_stats() {
        let json = r#"{
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
                {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/"}}
            ]
        }"#;

        let body: PokemonResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.name, "pikachu");
        assert_eq!(body.base_experience, Some(112));
        assert_eq!(body.height, 4);
        assert_eq!(body.stats.len(), 2);
        assert_eq!(body.stats[0].stat.name, "hp");
        assert_eq!(body.stats[0].base_stat, 35);
        assert_eq!(body.stats[1].stat.name, "speed");
    }

    /// PokeAPI serves `base_experience: null` for some species; decoding
    /// must not fail on it.
    #[test]
    fn test_pokemon_response_null_base_experience() {
        let json = r#"{"name": "koraidon", "base_experience": null, "height": 25, "stats": []}"#;
        let body: PokemonResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.base_experience, None);
    }
}
