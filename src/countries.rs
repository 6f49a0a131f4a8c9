//! Country suggestions for the `country` field
//!
//! The list only feeds autocomplete. The validator does not check
//! membership; any non-empty text is a valid country.

const DEFAULT_COUNTRIES: [&str; 11] = [
    "Australia",
    "Brazil",
    "Canada",
    "China",
    "India",
    "Germany",
    "France",
    "Japan",
    "Russia",
    "United Kingdom",
    "United States",
];

/// Ordered list of suggestions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryList {
    countries: Vec<String>,
}

impl CountryList {
    pub fn new(countries: Vec<String>) -> Self {
        Self { countries }
    }

    pub fn all(&self) -> &[String] {
        &self.countries
    }

    /// Entries containing `query`, ignoring case, in list order.
    /// An empty query returns the whole list.
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.countries
            .iter()
            .filter(|c| c.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}

impl Default for CountryList {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect())
    }
}
