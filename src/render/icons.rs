//! Mapping `{icon}` placeholders to whatever the front-end displays.
//!
//! Rendered card text only ever contains placeholders. A front-end picks
//! an `IconResolver` and calls `resolve_icons` as the last step.

use std::borrow::Cow;

use once_cell::sync::{Lazy, OnceCell};
use regex::{Captures, Regex};
use rustc_hash::FxHashMap;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z0-9]+)\}").expect("placeholder pattern compiles"));

/// Card data names for icons the glyph set knows under another name.
const ALIASES: [(&str, &str); 3] = [
    ("criticalhit", "crit"),
    ("force", "purpleforcecharge"),
    ("koiogranturn", "kturn"),
];

/// Icons with no artwork. They render as a bracketed name.
const NO_ART: [&str; 7] = [
    "victory",
    "energy",
    "ordnance",
    "hyperdrive",
    "hugebase",
    "magentaenergy",
    "remote",
];

/// Turns an icon name into display text.
pub trait IconResolver {
    /// Display text for `name`, or `None` to leave the placeholder as is.
    fn resolve(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// Replace every `{name}` placeholder the resolver knows.
#[must_use]
pub fn resolve_icons(text: &str, resolver: &dyn IconResolver) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| match resolver.resolve(&caps[1]) {
            Some(glyph) => glyph.into_owned(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Name → glyph table.
#[derive(Debug, Default)]
pub struct IconTable {
    glyphs: FxHashMap<String, String>,
    bracket_unknown: bool,
    aliases: OnceCell<FxHashMap<&'static str, String>>,
}

impl Clone for IconTable {
    fn clone(&self) -> Self {
        Self {
            glyphs: self.glyphs.clone(),
            bracket_unknown: self.bracket_unknown,
            aliases: OnceCell::new(),
        }
    }
}

impl IconTable {
    /// A table with only the no-art fallbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a JSON object of `name: glyph` pairs.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let glyphs: FxHashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self {
            glyphs,
            ..Self::default()
        })
    }

    /// Add a glyph (builder pattern).
    #[must_use]
    pub fn with_glyph(mut self, name: impl Into<String>, glyph: impl Into<String>) -> Self {
        self.glyphs.insert(name.into(), glyph.into());
        self.aliases = OnceCell::new();
        self
    }

    /// Render unknown icons as `[name]` instead of leaving them alone.
    #[must_use]
    pub fn with_bracket_fallback(mut self) -> Self {
        self.bracket_unknown = true;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    fn aliases(&self) -> &FxHashMap<&'static str, String> {
        self.aliases.get_or_init(|| {
            ALIASES
                .iter()
                .filter_map(|&(alias, target)| {
                    self.glyphs.get(target).map(|glyph| (alias, glyph.clone()))
                })
                .collect()
        })
    }
}

impl IconResolver for IconTable {
    fn resolve(&self, name: &str) -> Option<Cow<'_, str>> {
        if let Some(glyph) = self.glyphs.get(name) {
            return Some(Cow::Borrowed(glyph));
        }
        if let Some(glyph) = self.aliases().get(name) {
            return Some(Cow::Borrowed(glyph));
        }
        if self.bracket_unknown || NO_ART.contains(&name) {
            return Some(Cow::Owned(format!("[{name}]")));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_and_alias() {
        let table = IconTable::new()
            .with_glyph("crit", "<crit>")
            .with_glyph("focus", "<focus>");
        assert_eq!(
            resolve_icons("{focus} then {criticalhit} and {crit}", &table),
            "<focus> then <crit> and <crit>"
        );
    }

    #[test]
    fn test_no_art_and_unknown() {
        let table = IconTable::new();
        assert_eq!(resolve_icons("{energy} {mystery}", &table), "[energy] {mystery}");
        let table = table.with_bracket_fallback();
        assert_eq!(resolve_icons("{mystery}", &table), "[mystery]");
    }

    #[test]
    fn test_alias_without_target_is_unknown() {
        let table = IconTable::new();
        assert_eq!(resolve_icons("{koiogranturn}", &table), "{koiogranturn}");
    }

    #[test]
    fn test_from_json() {
        let table = IconTable::from_json(r#"{"hit": "H", "kturn": "K"}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(resolve_icons("{hit}{koiogranturn}", &table), "HK");
    }

    #[test]
    fn test_non_placeholders_untouched() {
        let table = IconTable::new().with_bracket_fallback();
        assert_eq!(resolve_icons("[2 {Straight}] {}", &table), "[2 {Straight}] {}");
    }
}
