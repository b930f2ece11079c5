//! List builder links.
//!
//! Players share squads as builder URLs. Each supported builder exposes an
//! XWS export of the same squad at a different endpoint.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use super::document::SquadDocument;
use crate::catalog::DocumentFetcher;
use crate::core::error::ListError;

/// A list builder we know how to export from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Builder {
    XwingLegacy,
    Yasb,
    LaunchBayNext,
}

static XWING_LEGACY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://xwing-legacy\.com/(?:[^?/]*/)?\?(.*)$").expect("legacy pattern compiles")
});

static YASB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://yasb\.app/(?:[^?/]*/)?\?(.*)$").expect("yasb pattern compiles")
});

/// Also matches the retired herokuapp host.
static LAUNCH_BAY_NEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https://(?:launchbaynext\.app|launch-bay-next\.herokuapp\.com)/[a-z]*\?lbx=([^&]+)(?:&mode=[a-z]+)?",
    )
    .expect("launch bay pattern compiles")
});

/// A recognised builder link and where its XWS export lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListLink {
    pub builder: Builder,
    pub endpoint: String,
}

/// Undo chat client wrapping: surrounding `<...>` and escaped `&`.
#[must_use]
pub fn clean_link(url: &str) -> String {
    url.trim()
        .trim_start_matches('<')
        .trim_end_matches('>')
        .replace("&amp;", "&")
}

/// Recognise a builder URL and return its XWS export endpoint.
///
/// The URL goes through `clean_link` first.
#[must_use]
pub fn xws_endpoint(url: &str) -> Option<ListLink> {
    let url = clean_link(url);

    let link = if XWING_LEGACY.is_match(&url) {
        ListLink {
            builder: Builder::XwingLegacy,
            endpoint: format!("https://rollbetter-linux.azurewebsites.net/lists/xwing-legacy?{url}"),
        }
    } else if let Some(caps) = YASB.captures(&url) {
        ListLink {
            builder: Builder::Yasb,
            endpoint: format!("https://pattern-analyzer.app/api/yasb/xws?{}", &caps[1]),
        }
    } else if let Some(caps) = LAUNCH_BAY_NEXT.captures(&url) {
        ListLink {
            builder: Builder::LaunchBayNext,
            endpoint: format!("https://launchbaynext.app/api/xws?lbx={}", &caps[1]),
        }
    } else {
        debug!(%url, "not a list builder link");
        return None;
    };
    Some(link)
}

/// Canonical link to show for a squad: print views point at the editor.
#[must_use]
pub fn display_link(url: &str) -> String {
    url.replace("launchbaynext.app/print", "launchbaynext.app/")
}

/// Fetch the XWS export behind a builder link.
///
/// Builders report problems as `{"message": ...}` with a success status.
pub fn fetch_squad(url: &str, fetcher: &dyn DocumentFetcher) -> Result<SquadDocument, ListError> {
    let link = xws_endpoint(url).ok_or_else(|| ListError::UnrecognizedLink(url.to_string()))?;
    info!(endpoint = %link.endpoint, "requesting squad export");
    let body = fetcher.fetch(&link.endpoint)?;
    let value: serde_json::Value = serde_json::from_str(&body)?;
    if let Some(message) = value.get("message").and_then(serde_json::Value::as_str) {
        return Err(ListError::Vendor(message.to_string()));
    }
    Ok(serde_json::from_value(value)?)
}
