//! Domain types for the list and detail screens.
//!
//! Wire types (`api::types`) are mapped into these before anything else
//! touches them; the rest of the application never sees raw JSON shapes.

use crate::api::types::{NamedResource, PokemonResponse};

/// Lightweight reference to a detail resource. Immutable once received;
/// the entry list only ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub name: String,
    pub url: String,
}

impl From<NamedResource> for ListEntry {
    fn from(r: NamedResource) -> Self {
        Self {
            name: r.name,
            url: r.url,
        }
    }
}

/// Pagination bookkeeping.
///
/// `offset` advances by `limit` after every successful page fetch; the
/// link fields come from the server envelope, taken verbatim. `None`
/// means the collection has no page in that direction.
#[derive(Debug, Clone, PartialEq)]
pub struct PageCursor {
    pub offset: u32,
    pub limit: u32,
    pub next_url: Option<String>,
    pub prev_url: Option<String>,
}

impl PageCursor {
    pub fn new(limit: u32) -> Self {
        Self {
            offset: 0,
            limit,
            next_url: None,
            prev_url: None,
        }
    }

    /// Advances past a fetched page, adopting the server's links.
    pub fn advance(&mut self, next: Option<String>, previous: Option<String>) {
        self.offset += self.limit;
        self.next_url = next;
        self.prev_url = previous;
    }
}

/// A named base stat shown on the profile screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

/// Fully hydrated detail record for one selected entry.
///
/// Built fresh on every overlay visit and dropped when the overlay
/// closes; nothing is cached across visits.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub base_experience: u32,
    pub height: u32,
    pub stats: Vec<Stat>,
}

impl From<PokemonResponse> for Profile {
    fn from(body: PokemonResponse) -> Self {
        Self {
            name: body.name,
            base_experience: body.base_experience.unwrap_or(0),
            height: body.height,
            stats: body
                .stats
                .into_iter()
                .map(|slot| Stat {
                    name: slot.stat.name,
                    value: slot.base_stat,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{StatRef, StatSlot};

    fn slot(name: &str, value: u32) -> StatSlot {
        StatSlot {
            base_stat: value,
            stat: StatRef {
                name: name.to_string(),
            },
        }
    }

    #[test]
    fn test_profile_mapping_flattens_stats_in_order() {
        let body = PokemonResponse {
            name: "pikachu".to_string(),
            base_experience: Some(112),
            height: 4,
            stats: vec![slot("hp", 35), slot("attack", 55), slot("speed", 90)],
        };

        let profile = Profile::from(body);
        assert_eq!(profile.name, "pikachu");
        assert_eq!(profile.base_experience, 112);
        assert_eq!(profile.height, 4);
        assert_eq!(
            profile.stats,
            vec![
                Stat {
                    name: "hp".to_string(),
                    value: 35
                },
                Stat {
                    name: "attack".to_string(),
                    value: 55
                },
                Stat {
                    name: "speed".to_string(),
                    value: 90
                },
            ]
        );
    }

    #[test]
    fn test_profile_mapping_missing_base_experience_is_zero() {
        let body = PokemonResponse {
            name: "koraidon".to_string(),
            base_experience: None,
            height: 25,
            stats: vec![],
        };
        assert_eq!(Profile::from(body).base_experience, 0);
    }

    #[test]
    fn test_cursor_advance_adds_limit_and_adopts_links() {
        let mut cursor = PageCursor::new(100);
        assert_eq!(cursor.offset, 0);

        cursor.advance(Some("next-1".to_string()), None);
        assert_eq!(cursor.offset, 100);
        assert_eq!(cursor.next_url.as_deref(), Some("next-1"));
        assert_eq!(cursor.prev_url, None);

        cursor.advance(None, Some("prev-1".to_string()));
        assert_eq!(cursor.offset, 200);
        assert_eq!(cursor.next_url, None);
        assert_eq!(cursor.prev_url.as_deref(), Some("prev-1"));
    }
}
