use thiserror::Error;

/// Country-to-cities entries, in display order.
pub type LookupEntries = &'static [(&'static str, &'static [&'static str])];

const BUILTIN_ENTRIES: LookupEntries = &[
    ("India", &["Delhi", "Mumbai", "Bangalore"]),
    ("USA", &["New York", "San Francisco", "Chicago"]),
    ("Canada", &["Toronto", "Vancouver", "Montreal"]),
];

/// Supported international dialing prefixes.
pub static PHONE_CODES: &[&str] = &["+91", "+1", "+44"];

/// Dialing prefix a fresh record starts with.
pub const DEFAULT_PHONE_CODE: &str = "+91";

/// Errors building a [`LookupTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("country {0} has no cities")]
    NoCities(&'static str),
    #[error("country {0} is listed more than once")]
    DuplicateCountry(&'static str),
}

/// Immutable country → city list reference data.
///
/// Every country maps to a non-empty, ordered list of cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTable {
    entries: LookupEntries,
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LookupTable {
    /// The table shipped with the application: India, USA and Canada.
    pub const fn builtin() -> Self {
        Self {
            entries: BUILTIN_ENTRIES,
        }
    }

    /// Builds a table from the given entries, rejecting empty city lists
    /// and repeated countries.
    pub fn new(entries: LookupEntries) -> Result<Self, LookupError> {
        for (i, &(country, cities)) in entries.iter().enumerate() {
            if cities.is_empty() {
                return Err(LookupError::NoCities(country));
            }
            if entries[..i].iter().any(|(c, _)| *c == country) {
                return Err(LookupError::DuplicateCountry(country));
            }
        }
        Ok(Self { entries })
    }

    /// Returns the country names in table order.
    pub fn countries(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(country, _)| *country)
    }

    /// Returns the cities of `country`, or `None` if it is not in the table.
    pub fn cities(&self, country: &str) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(c, _)| *c == country)
            .map(|(_, cities)| *cities)
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.cities(country).is_some()
    }

    /// Returns `true` if `city` belongs to the city list of `country`.
    pub fn has_city(&self, country: &str, city: &str) -> bool {
        self.cities(country)
            .is_some_and(|cities| cities.iter().any(|c| *c == city))
    }
}
