//! Parsing of `flatpak override --show` output.
//!
//! Override listings contain one directive per line; environment overrides
//! look like `--env=NAME=VALUE`. Only registry variables are extracted —
//! anything else in the listing is ignored.

use std::collections::HashMap;

use crate::domain::registry::SCALING_VARIABLES;

/// The override state of one application at one point in time.
///
/// `raw` is the store's listing verbatim (or an explanatory error string when
/// the query failed); `mapping` holds only the managed variables found in it.
/// Snapshots are rebuilt on every selection change, never cached.
#[derive(Debug, Clone, Default)]
pub struct OverrideSnapshot {
    pub raw: String,
    pub mapping: HashMap<&'static str, String>,
}

impl OverrideSnapshot {
    /// Build a snapshot from a successful override query.
    #[must_use]
    pub fn from_raw(raw: String) -> Self {
        let mapping = parse_overrides(&raw);
        Self { raw, mapping }
    }

    /// Build a snapshot whose raw text is an error explanation.
    ///
    /// Used when the override query fails: the user still gets an editable
    /// (blank) buffer rather than being blocked.
    #[must_use]
    pub fn from_error(message: String) -> Self {
        Self {
            raw: message,
            mapping: HashMap::new(),
        }
    }
}

/// Extract managed-variable values from an override listing.
///
/// For each registry variable, lines are scanned for the literal
/// `--env=<name>=` marker; the first matching line wins and everything after
/// the marker, trimmed, is the value. Variables without a matching line get
/// no entry. Empty input yields an empty mapping.
///
/// The match is a plain substring search on the full marker. It is not
/// hardened against one variable name embedding another inside an unrelated
/// token; the marker's `--env=` prefix and trailing `=` make collisions
/// unlikely for the fixed registry, and hardening would change observable
/// behavior on such input.
#[must_use]
pub fn parse_overrides(text: &str) -> HashMap<&'static str, String> {
    let mut mapping = HashMap::new();
    for var in &SCALING_VARIABLES {
        let marker = format!("--env={}=", var.name);
        for line in text.lines() {
            if let Some(pos) = line.find(&marker) {
                let value = line[pos + marker.len()..].trim().to_string();
                mapping.insert(var.name, value);
                break;
            }
        }
    }
    mapping
}
