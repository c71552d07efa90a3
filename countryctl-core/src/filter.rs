//! Name filtering for the country list
//!
//! Case-insensitive substring match on the display name. Pure: the input
//! slice is never touched and the result keeps the original order.

use crate::country::Country;

/// Countries whose name contains `query` (case-insensitive), in input order
pub fn filter_countries<'a>(countries: &'a [Country], query: &str) -> Vec<&'a Country> {
    if query.is_empty() {
        return countries.iter().collect();
    }

    let query_lower = query.to_lowercase();
    countries
        .iter()
        .filter(|country| name_matches(&country.name, &query_lower))
        .collect()
}

/// `query_lower` must already be lowercased
fn name_matches(name: &str, query_lower: &str) -> bool {
    name.to_lowercase().contains(query_lower)
}
