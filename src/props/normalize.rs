//! Prop table row normalization

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Names produced by header or placeholder rows rather than real args
pub const HEADER_ARTIFACT_NAMES: &[&str] = &["propertyname", "name"];

/// Extra placeholder names dropped under [`PropFilter::Strict`]
pub const STRICT_ARTIFACT_NAMES: &[&str] = &["args", "unknown", "arguments"];

/// Default value Storybook renders for args tables built from placeholders
pub const PLACEHOLDER_DEFAULT: &str = "defaultValue";

/// One normalized prop table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropRow {
    pub name: String,
    pub description: String,
    pub default_value: String,
}

/// Row filtering policy
///
/// `Lenient` keeps every row that has a real name, across all tables of the
/// page. `Strict` also drops placeholder rows and repeated names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropFilter {
    #[default]
    Lenient,
    Strict,
}

impl FromStr for PropFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(PropFilter::Lenient),
            "strict" => Ok(PropFilter::Strict),
            other => Err(format!("unknown prop filter '{other}', expected 'lenient' or 'strict'")),
        }
    }
}

impl fmt::Display for PropFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropFilter::Lenient => f.write_str("lenient"),
            PropFilter::Strict => f.write_str("strict"),
        }
    }
}

/// Strip `*` markers (required-arg emphasis) and surrounding whitespace
#[must_use]
pub fn clean_prop_name(raw: &str) -> String {
    raw.replace('*', "").trim().to_string()
}

fn is_artifact(name: &str, filter: PropFilter) -> bool {
    let lower = name.to_lowercase();
    HEADER_ARTIFACT_NAMES.contains(&lower.as_str())
        || (filter == PropFilter::Strict && STRICT_ARTIFACT_NAMES.contains(&lower.as_str()))
}

/// Normalize raw table rows into `PropRow`s
///
/// Rows with fewer than three cells are ignored. Row order is preserved.
#[must_use]
pub fn normalize_rows(rows: &[Vec<String>], filter: PropFilter) -> Vec<PropRow> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut props = Vec::with_capacity(rows.len());

    for (index, cells) in rows.iter().enumerate() {
        let [first, second, third, ..] = cells.as_slice() else {
            continue;
        };

        let name = clean_prop_name(first);
        if name.is_empty() {
            continue;
        }
        if is_artifact(&name, filter) {
            debug!("Row {}: dropped header artifact '{}'", index + 1, name);
            continue;
        }

        let description = second.trim().to_string();
        let default_value = third.trim().to_string();

        if filter == PropFilter::Strict {
            if default_value == PLACEHOLDER_DEFAULT {
                debug!("Row {}: dropped placeholder default for '{}'", index + 1, name);
                continue;
            }
            if !seen.insert(name.to_lowercase()) {
                debug!("Row {}: dropped duplicate '{}'", index + 1, name);
                continue;
            }
        }

        props.push(PropRow {
            name,
            description,
            default_value,
        });
    }

    props
}
