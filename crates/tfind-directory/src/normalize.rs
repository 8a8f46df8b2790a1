//! Lenient conversion from the directory's raw JSON to [`TheaterRecord`]s.
//!
//! Every field is read independently. A missing or mistyped field becomes
//! `""` or `0.0` and is reported as a [`FieldSubstitution`]; it never drops
//! the entry or fails the batch.

use serde_json::Value;
use tfind_core::{detail_url, Coordinate, TheaterRecord};

use crate::filter::within_radius;
use crate::types::{FieldSubstitution, ParsedCatalog};

/// Parses a directory response body, keeping entries that pass
/// [`within_radius`] in response order.
///
/// A body that is not JSON, or that has no `data` array, yields an empty
/// catalog.
#[must_use]
pub fn parse_catalog(body: &str, vendor_base_url: &str, radius_meters: f64) -> ParsedCatalog {
    let root = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "directory body is not JSON; treating as zero theatres");
            return ParsedCatalog::default();
        }
    };

    let Some(entries) = root.get("data").and_then(Value::as_array) else {
        tracing::warn!("directory body has no `data` array; treating as zero theatres");
        return ParsedCatalog::default();
    };

    let mut catalog = ParsedCatalog {
        total_entries: entries.len(),
        ..ParsedCatalog::default()
    };

    for (index, entry) in entries.iter().enumerate() {
        let mut fields = FieldReader::new(entry, index);
        let distance = fields.number("distance");
        if !within_radius(distance, radius_meters) {
            continue;
        }
        let record = normalize_theater(&mut fields, distance, vendor_base_url);
        catalog.substitutions.append(&mut fields.substitutions);
        catalog.theaters.push(record);
    }

    catalog
}

fn normalize_theater(
    fields: &mut FieldReader<'_>,
    distance: f64,
    vendor_base_url: &str,
) -> TheaterRecord {
    let name = fields.string("name");
    let url_slug = fields.string("urlSlug");
    let street = fields.string("address1");
    let city = fields.string("city");
    let province = fields.string("provinceCode");
    let postal = fields.string("postalCode");
    let address = format!("{street}, {city}, {province} {postal}");
    let coordinate = Coordinate::new(fields.number("latitude"), fields.number("longitude"));
    let url = detail_url(vendor_base_url, &url_slug);

    TheaterRecord {
        name,
        address,
        coordinate,
        url_slug,
        distance,
        url,
    }
}

/// Reads fields from one `data` entry, remembering which ones were defaulted.
struct FieldReader<'a> {
    entry: &'a Value,
    index: usize,
    substitutions: Vec<FieldSubstitution>,
}

impl<'a> FieldReader<'a> {
    fn new(entry: &'a Value, index: usize) -> Self {
        Self {
            entry,
            index,
            substitutions: Vec::new(),
        }
    }

    /// Strings pass through; numbers and booleans are stringified.
    fn string(&mut self, field: &'static str) -> String {
        let entry = self.entry;
        match entry.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => {
                self.substitute(field);
                String::new()
            }
        }
    }

    /// Numbers pass through; numeric strings are parsed.
    fn number(&mut self, field: &'static str) -> f64 {
        let entry = self.entry;
        let parsed = match entry.get(field) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.unwrap_or_else(|| {
            self.substitute(field);
            0.0
        })
    }

    fn substitute(&mut self, field: &'static str) {
        tracing::debug!(index = self.index, field, "directory field missing; using default");
        self.substitutions.push(FieldSubstitution {
            index: self.index,
            field,
        });
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
