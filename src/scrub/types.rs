use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Configuration for the scrubbing process
#[derive(Debug, Clone, Copy)]
pub struct ScrubConfig {
    /// Replace identifier-like strings with consistent pseudonyms
    /// instead of the generic string substitute
    pub preserve_ids: bool,

    /// Replace unclassified strings with a same-length run of 'X'
    /// instead of the "[STRING]" tag
    pub preserve_lengths: bool,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        ScrubConfig {
            preserve_ids: false,
            preserve_lengths: true,
        }
    }
}

/// Counts of primitive leaves visited during transformation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafCounts {
    pub strings: u64,
    pub numbers: u64,
    pub booleans: u64,
    pub nulls: u64,
}

/// Mutable state scoped to one batch transformation run.
///
/// Owns the identifier pseudonym table and the leaf counters. A session is
/// created once per batch, passed by mutable reference into every transform
/// call, and discarded after the batch's statistics are reported. There is
/// no cross-batch persistence.
#[derive(Debug, Default)]
pub struct Session {
    id_map: HashMap<String, String>,
    pub counts: LeafCounts,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Look up or assign the pseudonym for an identifier-like string.
    ///
    /// The first occurrence of an original string gets the next sequential
    /// pseudonym (`ID_1`, `ID_2`, ...); later occurrences of the same
    /// original always get the same pseudonym back.
    pub fn pseudonym_for(&mut self, original: &str) -> String {
        if let Some(existing) = self.id_map.get(original) {
            return existing.clone();
        }
        let pseudonym = format!("ID_{}", self.id_map.len() + 1);
        self.id_map.insert(original.to_string(), pseudonym.clone());
        pseudonym
    }

    /// Tally the leaf composition of a value into the counters.
    ///
    /// Runs over the original input, so the counters reflect what was fed
    /// in regardless of which policy renders the output.
    pub fn tally(&mut self, value: &Value) {
        match value {
            Value::Null => self.counts.nulls += 1,
            Value::Bool(_) => self.counts.booleans += 1,
            Value::Number(_) => self.counts.numbers += 1,
            Value::String(_) => self.counts.strings += 1,
            Value::Array(items) => {
                for item in items {
                    self.tally(item);
                }
            }
            Value::Object(map) => {
                for value in map.values() {
                    self.tally(value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pseudonyms_are_sequential_and_stable() {
        let mut session = Session::new();

        assert_eq!(session.pseudonym_for("user_id_42"), "ID_1");
        assert_eq!(session.pseudonym_for("other_uuid"), "ID_2");
        assert_eq!(session.pseudonym_for("user_id_42"), "ID_1");
        assert_eq!(session.pseudonym_for("other_uuid"), "ID_2");
    }

    #[test]
    fn test_tally_counts_nested_leaves() {
        let mut session = Session::new();
        session.tally(&json!({
            "a": 1,
            "b": ["x", "y", null],
            "c": {"d": true, "e": 2.5}
        }));

        assert_eq!(
            session.counts,
            LeafCounts {
                strings: 2,
                numbers: 2,
                booleans: 1,
                nulls: 1,
            }
        );
    }
}
