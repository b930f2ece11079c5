//! Card text transforms: icon placeholders, ability formatting, wiki links.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::markup::{bold, link};

/// `[3 [Straight]]`: a maneuver nested inside brackets.
static MANEUVER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[(\d+)\s+\[([a-zA-Z0-9 ]+)\]\]").expect("maneuver pattern compiles")
});

/// `[Barrel Roll]`: an icon reference.
static ICON_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([a-zA-Z0-9 ]+)\]").expect("icon pattern compiles"));

/// `(-1)` / `(+1)` suffixes the wiki leaves off page names.
static ADJUSTMENT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_\([-+]1\)").expect("adjustment pattern compiles"));

/// Keywords that start a new, bolded paragraph in ability text.
const PARAGRAPH_KEYWORDS: [&str; 2] = ["Setup:", "Action:"];

fn icon_slug(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if slug == "stationary" {
        "stop".to_string()
    } else {
        slug
    }
}

/// Replace bracketed icon names with `{icon}` placeholders.
///
/// Maneuvers keep their outer brackets: `[2 [Bank Left]]` becomes
/// `[2 {bankleft}]`.
#[must_use]
pub fn icon_format(text: &str) -> String {
    let text = MANEUVER_PATTERN.replace_all(text, |caps: &Captures<'_>| {
        format!("[{} {{{}}}]", &caps[1], icon_slug(&caps[2]))
    });
    ICON_PATTERN
        .replace_all(&text, |caps: &Captures<'_>| format!("{{{}}}", icon_slug(&caps[1])))
        .into_owned()
}

/// Ability text with icon placeholders and bolded paragraph keywords.
#[must_use]
pub fn format_ability(text: &str) -> String {
    let mut out = icon_format(text);
    for keyword in PARAGRAPH_KEYWORDS {
        if out.contains(keyword) {
            out = out.replace(keyword, &format!("\n{}", bold(keyword)));
        }
    }
    out
}

/// Page name of a card on the wiki, percent-encoded.
#[must_use]
pub fn wiki_slug(name: &str) -> String {
    let mut slug = name.replace(' ', "_");
    if name.contains("Core Set") {
        slug.insert_str(0, "X-Wing_");
    }
    slug = slug
        .replace("-wing", "-Wing")
        .replace("/V", "/v")
        .replace("/X", "/x");
    slug = ADJUSTMENT_SUFFIX.replace_all(&slug, "").into_owned();

    if slug == "Nien_Nunb" {
        slug.push_str("_(T-70_X-Wing)");
    } else if slug == "Hera_Syndulla" {
        slug.push_str("_(VCX-100)");
    } else if slug.starts_with("\"Heavy_Scyk\"_Interceptor") {
        slug = "\"Heavy_Scyk\"_Interceptor".to_string();
    }

    let slug = slug.replace(['“', '”'], "");
    urlencoding::encode(&slug).replace("%2F", "/")
}

/// `[name](<base><slug> "tooltip")`.
#[must_use]
pub fn wiki_link(base: &str, name: &str, tooltip: Option<&str>) -> String {
    link(&format!("{base}{}", wiki_slug(name)), name, tooltip)
}
