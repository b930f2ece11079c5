//! Markdown-ish markup and `{icon}` placeholder helpers.

/// `**text**`, or nothing for empty text.
#[must_use]
pub fn bold(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("**{text}**")
    }
}

/// `*text*`, or nothing for empty text.
#[must_use]
pub fn italics(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("*{text}*")
    }
}

/// `[name](url "tooltip")`. The tooltip is dropped when absent or empty.
#[must_use]
pub fn link(url: &str, name: &str, tooltip: Option<&str>) -> String {
    match tooltip {
        Some(tip) if !tip.is_empty() => format!("[{name}]({url} \"{tip}\")"),
        _ => format!("[{name}]({url})"),
    }
}

/// Turn a name into an icon placeholder.
///
/// Lowercases, spells `+` as `plus`, then drops everything that is not an
/// ASCII letter or digit: `"Barrel Roll"` becomes `{barrelroll}`.
#[must_use]
pub fn iconify(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .replace('+', "plus")
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    format!("{{{slug}}}")
}

/// One bullet per allowed copy.
#[must_use]
pub fn bullets(count: u8) -> String {
    "•".repeat(usize::from(count))
}
