//! Per-tier design tokens.
//!
//! A token table holds one value per semantic name (`padding`,
//! `font_size.body`, `icon_size.md`, ...) for every device tier. Tables are
//! validated when built: every tier present, every tier carrying the same
//! names, finite non-negative values, and no value shrinking as the tier
//! grows. Lookups after construction cannot fail on the tier.
//!
//! Embedded tables ship with the crate; user tables are discovered from
//! `~/.config/haba/tokens/`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::HabaError;
use crate::tier::DeviceTier;

/// Embedded default token table.
pub const DEFAULT_TOKENS_TOML: &str = include_str!("../assets/tokens/default.toml");

/// Embedded compact table for dense, information-heavy screens.
pub const COMPACT_TOKENS_TOML: &str = include_str!("../assets/tokens/compact.toml");

/// Token values for a single tier, keyed by dotted name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSet(BTreeMap<String, f32>);

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f32) -> Option<f32> {
        self.0.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flat JSON object, e.g. `{"font_size.body":14.0,"padding":12.0}`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl<K: Into<String>> FromIterator<(K, f32)> for TokenSet {
    fn from_iter<I: IntoIterator<Item = (K, f32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A validated table with one `TokenSet` per `DeviceTier`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenTable {
    name: String,
    /// Indexed by `DeviceTier::index()`; always `DeviceTier::COUNT` long.
    sets: Vec<TokenSet>,
}

impl TokenTable {
    /// Build and validate a table. Fails on the first problem found.
    pub fn new(
        name: impl Into<String>,
        mut tiers: BTreeMap<DeviceTier, TokenSet>,
    ) -> Result<Self, HabaError> {
        let mut sets = Vec::with_capacity(DeviceTier::COUNT);
        for tier in DeviceTier::ALL {
            let set = tiers.remove(&tier).ok_or(HabaError::MissingTier(tier))?;
            sets.push(set);
        }

        let all_names: BTreeSet<String> = sets
            .iter()
            .flat_map(TokenSet::names)
            .map(str::to_string)
            .collect();
        for (tier, set) in DeviceTier::ALL.into_iter().zip(&sets) {
            if let Some(missing) = all_names.iter().find(|n| !set.contains(n)) {
                return Err(HabaError::MissingToken {
                    tier,
                    token: missing.clone(),
                });
            }
            if let Some((token, value)) = set.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
                return Err(HabaError::InvalidToken {
                    tier,
                    token: token.to_string(),
                    value,
                });
            }
        }

        for pair in DeviceTier::ALL.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            let (lo_set, up_set) = (&sets[lower.index()], &sets[upper.index()]);
            for (token, lower_value) in lo_set.iter() {
                // Presence was checked above.
                let upper_value = up_set.get(token).unwrap_or(lower_value);
                if upper_value < lower_value {
                    return Err(HabaError::NonMonotonic {
                        token: token.to_string(),
                        lower,
                        lower_value,
                        upper,
                        upper_value,
                    });
                }
            }
        }

        Ok(Self {
            name: name.into(),
            sets,
        })
    }

    /// Parse a TOML token file.
    ///
    /// Tier tables may use either naming scheme (`small` or `xs`), and
    /// nested tables flatten into dotted names:
    ///
    /// ```toml
    /// [meta]
    /// name = "default"
    ///
    /// [tiers.small]
    /// padding = 12
    ///
    /// [tiers.small.font_size]
    /// body = 14
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self, HabaError> {
        let file: TokenFile = toml::from_str(toml_str)?;
        let mut tiers = BTreeMap::new();
        for (key, table) in &file.tiers {
            let tier: DeviceTier = key.parse()?;
            let mut set = TokenSet::new();
            flatten_into(&mut set, "", table)?;
            if tiers.insert(tier, set).is_some() {
                return Err(HabaError::Config(format!(
                    "tier `{tier}` is defined more than once in `{}`",
                    file.meta.name
                )));
            }
        }
        Self::new(file.meta.name, tiers)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tokens for `tier`. Every tier is present by construction.
    pub fn tokens(&self, tier: DeviceTier) -> &TokenSet {
        &self.sets[tier.index()]
    }

    pub fn value(&self, tier: DeviceTier, name: &str) -> Result<f32, HabaError> {
        self.tokens(tier)
            .get(name)
            .ok_or_else(|| HabaError::UnknownToken(name.to_string()))
    }

    /// Token names, sorted. Identical for every tier.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets[0].names()
    }

    /// One row per token: the name and its value in every tier, smallest first.
    pub fn rows(&self) -> Vec<(&str, [f32; DeviceTier::COUNT])> {
        self.names()
            .map(|name| {
                let values = DeviceTier::ALL.map(|t| self.tokens(t).get(name).unwrap_or_default());
                (name, values)
            })
            .collect()
    }

    /// Load the embedded default table.
    pub fn default_table() -> Self {
        Self::from_toml(DEFAULT_TOKENS_TOML).expect("embedded default tokens are valid")
    }
}

// ── TOML file shape ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TokenFile {
    meta: TokenMeta,
    tiers: BTreeMap<String, toml::Table>,
}

#[derive(Debug, Deserialize)]
struct TokenMeta {
    name: String,
}

fn flatten_into(set: &mut TokenSet, prefix: &str, table: &toml::Table) -> Result<(), HabaError> {
    for (key, value) in table {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::Table(nested) => flatten_into(set, &name, nested)?,
            toml::Value::Integer(i) => {
                set.insert(name, *i as f32);
            }
            toml::Value::Float(f) => {
                set.insert(name, *f as f32);
            }
            other => {
                return Err(HabaError::Config(format!(
                    "token `{name}` must be a number, got {}",
                    other.type_str()
                )));
            }
        }
    }
    Ok(())
}

// ── Catalog ──────────────────────────────────────────────────────

/// Tables shipped with the crate, parsed once per process.
pub fn embedded_token_tables() -> &'static [TokenTable] {
    static EMBEDDED: OnceLock<Vec<TokenTable>> = OnceLock::new();
    EMBEDDED.get_or_init(|| {
        vec![
            TokenTable::default_table(),
            TokenTable::from_toml(COMPACT_TOKENS_TOML).expect("embedded compact tokens are valid"),
        ]
    })
}

/// Find an embedded table by name without touching the filesystem.
pub fn find_embedded_token_table(name: &str) -> Option<&'static TokenTable> {
    embedded_token_tables().iter().find(|t| t.name == name)
}

/// Embedded tables followed by valid user tables from the config dir.
pub fn available_token_tables() -> Vec<TokenTable> {
    let mut tables = embedded_token_tables().to_vec();
    if let Some(dir) = AppConfig::tokens_dir() {
        tables.extend(load_dir(&dir));
    }
    tables
}

/// Find a table by name among the available ones.
pub fn find_token_table(name: &str) -> Option<TokenTable> {
    available_token_tables()
        .into_iter()
        .find(|t| t.name == name)
}

/// Read every `*.toml` table in `dir`. Unreadable or invalid files are skipped.
pub fn load_dir(dir: &Path) -> Vec<TokenTable> {
    let mut tables = Vec::new();
    let Ok(entries) = std::fs::read_dir(dir) else {
        return tables;
    };
    let mut paths: Vec<_> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "toml"))
        .collect();
    paths.sort();

    for path in paths {
        match std::fs::read_to_string(&path) {
            Ok(content) => match TokenTable::from_toml(&content) {
                Ok(table) => tables.push(table),
                Err(e) => tracing::warn!("Skipping token table {}: {e}", path.display()),
            },
            Err(e) => tracing::warn!("Cannot read {}: {e}", path.display()),
        }
    }
    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(values: [f32; 5]) -> BTreeMap<DeviceTier, TokenSet> {
        DeviceTier::ALL
            .into_iter()
            .zip(values)
            .map(|(tier, v)| (tier, TokenSet::from_iter([("padding", v)])))
            .collect()
    }

    #[test]
    fn test_embedded_tables_are_valid() {
        let default = TokenTable::default_table();
        assert_eq!(default.name(), "default");
        assert!(default.tokens(DeviceTier::Small).get("font_size.body").is_some());

        let compact = TokenTable::from_toml(COMPACT_TOKENS_TOML).unwrap();
        assert_eq!(compact.name(), "compact");
        assert_eq!(
            compact.names().collect::<Vec<_>>(),
            default.names().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_embedded_tables_are_monotonic() {
        for table in [
            TokenTable::default_table(),
            TokenTable::from_toml(COMPACT_TOKENS_TOML).unwrap(),
        ] {
            for (name, values) in table.rows() {
                assert!(
                    values.windows(2).all(|w| w[0] <= w[1]),
                    "{name} decreases in {}",
                    table.name()
                );
            }
        }
    }

    #[test]
    fn test_missing_tier_fails_at_construction() {
        let mut tiers = uniform([8.0, 10.0, 12.0, 14.0, 16.0]);
        tiers.remove(&DeviceTier::XLarge);
        let err = TokenTable::new("broken", tiers).unwrap_err();
        assert!(matches!(err, HabaError::MissingTier(DeviceTier::XLarge)));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_missing_token_in_one_tier() {
        let mut tiers = uniform([8.0, 10.0, 12.0, 14.0, 16.0]);
        tiers
            .get_mut(&DeviceTier::Tablet)
            .unwrap()
            .insert("spacing.sm", 8.0);
        let err = TokenTable::new("broken", tiers).unwrap_err();
        assert!(matches!(
            err,
            HabaError::MissingToken { tier: DeviceTier::Small, ref token } if token == "spacing.sm"
        ));
    }

    #[test]
    fn test_shrinking_token_is_rejected() {
        let err = TokenTable::new("broken", uniform([8.0, 10.0, 9.0, 14.0, 16.0])).unwrap_err();
        match err {
            HabaError::NonMonotonic {
                token,
                lower,
                upper,
                ..
            } => {
                assert_eq!(token, "padding");
                assert_eq!(lower, DeviceTier::Medium);
                assert_eq!(upper, DeviceTier::Large);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_equal_values_across_tiers_are_allowed() {
        assert!(TokenTable::new("flat", uniform([12.0; 5])).is_ok());
    }

    #[test]
    fn test_negative_and_nan_values_rejected() {
        assert!(matches!(
            TokenTable::new("neg", uniform([-1.0, 10.0, 12.0, 14.0, 16.0])),
            Err(HabaError::InvalidToken { .. })
        ));
        assert!(matches!(
            TokenTable::new("nan", uniform([f32::NAN, 10.0, 12.0, 14.0, 16.0])),
            Err(HabaError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_nested_tables_flatten_and_aliases_resolve() {
        let doc = r#"
[meta]
name = "tiny"

[tiers.xs]
padding = 8
[tiers.xs.font_size]
body = 13.5

[tiers.sm]
padding = 8
[tiers.sm.font_size]
body = 14

[tiers.md]
padding = 10
[tiers.md.font_size]
body = 15

[tiers.lg]
padding = 12
[tiers.lg.font_size]
body = 16

[tiers.xl]
padding = 16
[tiers.xl.font_size]
body = 18
"#;
        let table = TokenTable::from_toml(doc).unwrap();
        assert_eq!(table.value(DeviceTier::Small, "font_size.body").unwrap(), 13.5);
        assert_eq!(table.value(DeviceTier::Tablet, "padding").unwrap(), 16.0);
        assert!(matches!(
            table.value(DeviceTier::Small, "font_size.huge"),
            Err(HabaError::UnknownToken(_))
        ));
    }

    #[test]
    fn test_duplicate_tier_alias_rejected() {
        let doc = "[meta]\nname = \"dup\"\n[tiers.small]\npadding = 1\n[tiers.xs]\npadding = 1\n";
        assert!(matches!(TokenTable::from_toml(doc), Err(HabaError::Config(_))));
    }

    #[test]
    fn test_non_numeric_token_rejected() {
        let doc = "[meta]\nname = \"str\"\n[tiers.small]\npadding = \"12px\"\n";
        assert!(matches!(TokenTable::from_toml(doc), Err(HabaError::Config(_))));
    }

    #[test]
    fn test_token_set_json() {
        let set = TokenSet::from_iter([("padding", 12.0), ("font_size.body", 14.5)]);
        assert_eq!(set.to_json(), r#"{"font_size.body":14.5,"padding":12.0}"#);
    }

    #[test]
    fn test_load_dir_skips_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.toml"), COMPACT_TOKENS_TOML).unwrap();
        std::fs::write(dir.path().join("b.toml"), "[meta]\nname = \"bad\"\n[tiers]\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let tables = load_dir(dir.path());
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name(), "compact");
    }

    #[test]
    fn test_embedded_tables_parse_once() {
        let first = embedded_token_tables();
        let second = embedded_token_tables();
        assert!(std::ptr::eq(first, second));
        assert_eq!(
            first.iter().map(TokenTable::name).collect::<Vec<_>>(),
            ["default", "compact"]
        );
        assert_eq!(find_embedded_token_table("compact").unwrap().name(), "compact");
        assert!(find_embedded_token_table("missing").is_none());
        assert_eq!(find_token_table("default").unwrap().name(), "default");
    }

    #[test]
    fn test_load_dir_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dir(&dir.path().join("nope")).is_empty());
    }
}
