//! Country reference registry
//!
//! Maps canonical country names to a representative coordinate (the
//! capital city) for distance-based scoring. The registry is static for
//! the process lifetime; lookups are case-insensitive and exact, with
//! no fuzzy or partial matching.

mod data;

use std::collections::HashMap;

use crate::coord::Coordinate;

/// One registry entry: a country and its capital's coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryRef {
    /// Canonical country name, as stored
    pub name: &'static str,
    /// Reference coordinate used for distance scoring
    pub capital: Coordinate,
}

/// Case-insensitive country name registry.
///
/// Built once from the static capital table and shared read-only
/// thereafter.
#[derive(Debug)]
pub struct CountryRegistry {
    by_key: HashMap<String, CountryRef>,
}

impl CountryRegistry {
    /// Builds the registry from the static capital table.
    pub fn new() -> Self {
        let by_key = data::COUNTRY_CAPITALS
            .iter()
            .map(|&(name, lat, lon)| {
                let entry = CountryRef {
                    name,
                    capital: Coordinate { lat, lon },
                };
                (normalize(name), entry)
            })
            .collect();
        Self { by_key }
    }

    /// Looks up a country by name, case-insensitively.
    ///
    /// The input is trimmed and lower-cased before comparison. Only an
    /// exact match against a canonical name counts; "united" does not
    /// match "United States".
    pub fn lookup(&self, name: &str) -> Option<&CountryRef> {
        self.by_key.get(&normalize(name))
    }

    /// Returns the number of registered countries.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Returns true if the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl Default for CountryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes a country name or guess for comparison: trimmed and
/// lower-cased. Shared by the registry and the guess evaluator so both
/// sides of every comparison use the same form.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
