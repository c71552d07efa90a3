//! Non-interactive listing: fetch once, filter, print

use anyhow::Result;
use clap::Parser;
use countryctl_core::{filter_countries, group_digits, Country, CountrySource};
use tracing::warn;

use crate::progress::FetchProgress;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only countries whose name contains this text (case-insensitive)
    #[arg(long, short, default_value = "")]
    pub search: String,

    /// Print matching countries as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run_list(args: ListArgs, source: &dyn CountrySource, separator: char) -> Result<()> {
    let progress = FetchProgress::start("Fetching countries...");
    let countries = match source.fetch_all().await {
        Ok(countries) => {
            progress.success(format!("Fetched {} countries", countries.len()));
            countries
        }
        Err(err) => {
            progress.failure("Fetch failed");
            warn!(error = %err, source = %source.describe(), "Country list fetch failed");
            anyhow::bail!(err.user_message());
        }
    };

    let filtered = filter_countries(&countries, &args.search);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    if filtered.is_empty() {
        println!("No countries found matching \"{}\"", args.search);
        return Ok(());
    }

    print!("{}", format_table(&filtered, separator));
    Ok(())
}

/// Aligned `code  name  region  population` table
pub fn format_table(countries: &[&Country], separator: char) -> String {
    let name_width = countries
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    let region_width = countries
        .iter()
        .map(|c| c.region.chars().count())
        .max()
        .unwrap_or(0)
        .max("REGION".len());

    let mut out = format!(
        "{:<4} {:<name_width$} {:<region_width$} {:>15}\n",
        "CODE", "NAME", "REGION", "POPULATION"
    );
    for country in countries {
        out.push_str(&format!(
            "{:<4} {:<name_width$} {:<region_width$} {:>15}\n",
            country.code,
            country.name,
            country.region,
            group_digits(country.population, separator)
        ));
    }
    out
}
