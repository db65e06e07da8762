pub mod client;
pub mod types;

pub use client::{ApiError, PokeApi, PokeApiClient, page_url};
pub use types::{NamedResource, PageResponse, PokemonResponse, StatRef, StatSlot};
