//! Country record and the upstream wire schema it is decoded from.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One country as shown in the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    /// ISO 3166-1 alpha-3 code (`cca3`), unique per country
    pub code: String,
    /// Common display name (`name.common`)
    pub name: String,
    /// Region label (`region`)
    pub region: String,
    /// Population count
    pub population: u64,
    /// Flag image reference (`flags.svg`)
    pub flag_url: String,
}

/// Raw record as returned by the REST Countries API.
///
/// Only the fields we need are declared; everything else is ignored.
#[derive(Debug, Deserialize)]
struct WireCountry {
    cca3: String,
    name: WireName,
    region: String,
    population: u64,
    flags: WireFlags,
}

#[derive(Debug, Deserialize)]
struct WireName {
    common: String,
}

#[derive(Debug, Deserialize)]
struct WireFlags {
    svg: String,
}

impl From<WireCountry> for Country {
    fn from(wire: WireCountry) -> Self {
        Country {
            code: wire.cca3,
            name: wire.name.common,
            region: wire.region,
            population: wire.population,
            flag_url: wire.flags.svg,
        }
    }
}

/// Decode a JSON array of countries, preserving upstream order.
///
/// Any record missing a required field fails the whole list.
pub fn decode_countries(body: &[u8]) -> Result<Vec<Country>> {
    let wire: Vec<WireCountry> = serde_json::from_slice(body)?;
    Ok(wire.into_iter().map(Country::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CountryError;

    const FRANCE: &str = r#"[{
        "cca3": "FRA",
        "name": {"common": "France", "official": "French Republic"},
        "region": "Europe",
        "population": 67000000,
        "flags": {"svg": "fr.svg", "png": "fr.png"},
        "capital": ["Paris"]
    }]"#;

    #[test]
    fn test_decode_ignores_extra_fields() {
        let countries = decode_countries(FRANCE.as_bytes()).unwrap();
        assert_eq!(
            countries,
            vec![Country {
                code: "FRA".to_string(),
                name: "France".to_string(),
                region: "Europe".to_string(),
                population: 67_000_000,
                flag_url: "fr.svg".to_string(),
            }]
        );
    }

    #[test]
    fn test_decode_preserves_order() {
        let body = r#"[
            {"cca3":"PER","name":{"common":"Peru"},"region":"Americas","population":1,"flags":{"svg":"p"}},
            {"cca3":"ALB","name":{"common":"Albania"},"region":"Europe","population":2,"flags":{"svg":"a"}}
        ]"#;
        let codes: Vec<String> = decode_countries(body.as_bytes())
            .unwrap()
            .into_iter()
            .map(|c| c.code)
            .collect();
        assert_eq!(codes, vec!["PER", "ALB"]);
    }

    #[test]
    fn test_decode_missing_name_fails() {
        let body = r#"[{"cca3":"XXX","region":"Nowhere","population":0,"flags":{"svg":"x"}}]"#;
        let err = decode_countries(body.as_bytes()).unwrap_err();
        assert!(matches!(err, CountryError::Decode { .. }));
        assert!(err.is_retrieval());
    }

    #[test]
    fn test_decode_negative_population_fails() {
        let body = r#"[{"cca3":"XXX","name":{"common":"X"},"region":"R","population":-5,"flags":{"svg":"x"}}]"#;
        assert!(decode_countries(body.as_bytes()).is_err());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(decode_countries(br#"{"status":404,"message":"Not Found"}"#).is_err());
        assert!(decode_countries(b"<html>").is_err());
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_countries(b"[]").unwrap().is_empty());
    }
}
