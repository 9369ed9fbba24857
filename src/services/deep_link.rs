//! Back links from the macro editor to the key being edited.
//!
//! When the user jumps from a key binding to the macro editor, the editor
//! needs a way back: the keymap route with the edited key preselected, and
//! a label naming the keymap.

use crate::models::{Keymap, RemapInfo, SelectedKey};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
///
/// Everything else, including `/`, `?`, `&` and `%`, is percent-encoded.
pub const URI_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value for use as a single path segment or query value.
///
/// # Examples
///
/// ```
/// use macro_tab::services::deep_link::encode_uri_component;
///
/// assert_eq!(encode_uri_component("default"), "default");
/// assert_eq!(encode_uri_component("a/b c"), "a%2Fb%20c");
/// ```
#[must_use]
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT_ENCODE_SET).to_string()
}

/// Navigation target pointing back at the key being edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeepLinkTarget {
    /// Route path including the encoded keymap abbreviation
    pub path: String,
    /// Query parameters in rendering order
    pub query: Vec<(String, String)>,
    /// Human-readable label (e.g., `"QWERTY" keymap`)
    pub label: String,
}

impl DeepLinkTarget {
    /// Renders the query string without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Renders `path?query`.
    #[must_use]
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }

    /// Query parameters handed to the macro editor route.
    ///
    /// `backUrl` is the rendered back link, `backText` its label. Values are
    /// raw; the router encodes them when building the final link.
    #[must_use]
    pub fn jump_query_params(&self) -> Vec<(&'static str, String)> {
        vec![("backUrl", self.url()), ("backText", self.label.clone())]
    }
}

/// Composes the back link for the key being edited.
///
/// The remap flags are only added when a remap scope is given.
///
/// # Examples
///
/// ```
/// use macro_tab::models::{Keymap, SelectedKey};
/// use macro_tab::services::deep_link::compose_deep_link;
///
/// let target = compose_deep_link(
///     "/keymap",
///     &Keymap::new("default", "Default"),
///     &SelectedKey::new(1, 2, 3),
///     None,
/// );
/// assert_eq!(target.url(), "/keymap/default?layer=1&module=2&key=3");
/// assert_eq!(target.label, "\"Default\" keymap");
/// ```
#[must_use]
pub fn compose_deep_link(
    route: &str,
    keymap: &Keymap,
    selected_key: &SelectedKey,
    remap: Option<&RemapInfo>,
) -> DeepLinkTarget {
    let path = format!(
        "{}/{}",
        route.trim_end_matches('/'),
        encode_uri_component(&keymap.abbreviation)
    );

    let mut query = vec![
        ("layer".to_string(), selected_key.layer_id.to_string()),
        ("module".to_string(), selected_key.module_id.to_string()),
        ("key".to_string(), selected_key.key_id.to_string()),
    ];

    if let Some(remap) = remap {
        query.push((
            "remapOnAllKeymap".to_string(),
            remap.remap_on_all_keymap.to_string(),
        ));
        query.push((
            "remapOnAllLayer".to_string(),
            remap.remap_on_all_layer.to_string(),
        ));
    }

    DeepLinkTarget {
        path,
        query,
        label: format!("\"{}\" keymap", keymap.name),
    }
}
