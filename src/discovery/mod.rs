//! Schema discovery for InfluxDB measurements.
//!
//! Each explorer issues one `SHOW` query through an injected
//! [`ShowQueryExecutor`] and maps the flattened rows into IDRF types.

mod fields;
mod measures;
mod schema;
mod tags;

pub use fields::FieldExplorer;
pub use measures::MeasureExplorer;
pub use schema::{SchemaExplorer, TIME_COLUMN};
pub use tags::TagExplorer;

use crate::error::{DiscoveryError, Result};
use crate::influx::InfluxShowResult;

/// Quotes a measurement name as an InfluxQL identifier.
pub fn quote_identifier(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for c in name.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Checks that every row has exactly `expected` columns, before any row is
/// mapped.
fn check_row_width(result: &InfluxShowResult, expected: usize) -> Result<()> {
    for row in &result.values {
        if row.len() > expected {
            return Err(DiscoveryError::shape(format!(
                "too many columns: expected {expected}, got {}",
                row.len()
            )));
        }
        if row.len() < expected {
            return Err(DiscoveryError::shape(format!(
                "too few columns: expected {expected}, got {}",
                row.len()
            )));
        }
    }
    Ok(())
}
