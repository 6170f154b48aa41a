//! Tagged-entry extraction - pull raw payload strings out of a JSON array
//!
//! Log exports often wrap each event in an envelope object whose
//! `@rawstring` field carries the original payload text. This module pulls
//! those payloads back out, in order, skipping envelopes that lack a usable
//! value.

use crate::error::{json_type_name, Error};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The object key whose value is treated as one logical payload
pub const TAG_FIELD: &str = "@rawstring";

/// The result of one extraction pass over a JSON array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    /// Extracted payload strings, in original array order
    pub strings: Vec<String>,

    /// Number of array elements examined, including skipped ones
    pub total_seen: usize,
}

impl Extraction {
    pub fn extracted_count(&self) -> usize {
        self.strings.len()
    }
}

/// Extract the tag field's value from each entry of a JSON array.
///
/// The root must be an array. Elements that are not objects, lack the tag
/// key, or carry a blank/non-string value are skipped silently; the gap
/// between `total_seen` and the extracted count is the only trace they
/// leave.
pub fn extract_tagged(root: &Value) -> Result<Extraction, Error> {
    let entries = root.as_array().ok_or(Error::NotAnArray {
        found: json_type_name(root),
    })?;

    let mut strings = Vec::new();
    for entry in entries {
        if let Some(Value::String(raw)) = entry.get(TAG_FIELD) {
            if !raw.trim().is_empty() {
                strings.push(raw.clone());
            }
        }
    }

    Ok(Extraction {
        strings,
        total_seen: entries.len(),
    })
}
