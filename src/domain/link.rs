//! Subscription link composition.
//!
//! Turns the backend's subscription URL plus the user's regional selection
//! into the URL that gets copied and into one deep link per supported client
//! application. Everything here is a pure string transformation: the base URL
//! is never parsed or validated, and every function is total.
//!
//! # Example
//!
//! ```ignore
//! use crate::domain::{ClientTarget, SelectionSet, compose_filtered};
//!
//! let filtered = compose_filtered("https://sub.example.com/abc", &SelectionSet::new());
//! let link = ClientTarget::Surge.deep_link(&filtered);
//! ```

use base64::{Engine as _, engine::general_purpose::STANDARD};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::SelectionSet;

// ============================================================================
// Constants
// ============================================================================

/// Parameter appended to the base URL when a selection exists.
///
/// Always joined with a bare `&`, whether or not the base already carries
/// a query string.
pub const FILTER_PARAM: &str = "&filter=";

/// Separator between region tags in the filter value.
pub const FILTER_DELIMITER: &str = "|";

/// Characters escaped when a URL is embedded as a query value.
///
/// Matches `encodeURIComponent`: only `A-Z a-z 0-9 - _ . ! ~ * ' ( )` pass
/// through unescaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ============================================================================
// Filter Composition
// ============================================================================

/// Builds the filtered subscription URL for a selection.
///
/// Region tags are joined with `|` in selection order. Only an empty
/// selection omits the parameter; any chosen node, even one with a blank id,
/// produces `&filter=`.
#[must_use]
pub fn compose_filtered(base: &str, selection: &SelectionSet) -> String {
    if selection.is_empty() {
        return base.to_string();
    }
    let filter = selection.ids().collect::<Vec<_>>().join(FILTER_DELIMITER);
    format!("{base}{FILTER_PARAM}{filter}")
}

/// Percent-encodes `value` for use as a single URI component.
#[must_use]
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

// ============================================================================
// Client Targets
// ============================================================================

/// How a target embeds the filtered URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEncoding {
    /// `encodeURIComponent`-style escaping inside a query parameter.
    Percent,
    /// Standard padded base64 embedded in the path.
    Base64,
}

impl LinkEncoding {
    /// Encodes `url` according to this rule.
    #[must_use]
    pub fn apply(self, url: &str) -> String {
        match self {
            Self::Percent => encode_uri_component(url),
            Self::Base64 => STANDARD.encode(url.as_bytes()),
        }
    }
}

/// Client applications a subscription can be imported into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientTarget {
    Clash,
    Surge,
    Shadowrocket,
    Surfboard,
    QuantumultX,
}

impl ClientTarget {
    /// All targets in display order; `1`-`5` in the TUI follow this order.
    pub const ALL: [Self; 5] = [
        Self::Clash,
        Self::Surge,
        Self::Shadowrocket,
        Self::Surfboard,
        Self::QuantumultX,
    ];

    /// Display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clash => "Clash",
            Self::Surge => "Surge",
            Self::Shadowrocket => "Shadowrocket",
            Self::Surfboard => "Surfboard",
            Self::QuantumultX => "Quantumult X",
        }
    }

    /// Link prefix the encoded URL is appended to.
    #[must_use]
    pub const fn template_prefix(self) -> &'static str {
        match self {
            Self::Clash => "clash://install-config?url=",
            Self::Surge => "surge:///install-config?url=",
            Self::Shadowrocket => "shadowrocket://add/sub://",
            Self::Surfboard => "surfboard:///install-config?url=",
            Self::QuantumultX => "quantumult-x:///update-configuration?remote-resource=",
        }
    }

    #[must_use]
    pub const fn encoding(self) -> LinkEncoding {
        match self {
            Self::Shadowrocket => LinkEncoding::Base64,
            _ => LinkEncoding::Percent,
        }
    }

    /// Builds this target's deep link for an already filtered URL.
    #[must_use]
    pub fn deep_link(self, filtered_url: &str) -> String {
        format!(
            "{}{}",
            self.template_prefix(),
            self.encoding().apply(filtered_url)
        )
    }

    /// Target bound to the 1-based shortcut `index`.
    #[must_use]
    pub fn from_shortcut(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

// ============================================================================
// Link Set
// ============================================================================

/// Every link derived from one subscription URL and one selection.
///
/// Built fresh for each render or action; holds no hidden state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionLinks {
    /// The filtered URL used by "Copy URL".
    pub copy: String,
    /// One deep link per target, in [`ClientTarget::ALL`] order.
    pub clients: Vec<(ClientTarget, String)>,
}

impl SubscriptionLinks {
    #[must_use]
    pub fn compose(base: &str, selection: &SelectionSet) -> Self {
        let copy = compose_filtered(base, selection);
        let clients = ClientTarget::ALL
            .iter()
            .map(|target| (*target, target.deep_link(&copy)))
            .collect();
        Self { copy, clients }
    }

    #[must_use]
    pub fn for_target(&self, target: ClientTarget) -> Option<&str> {
        self.clients
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, link)| link.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RegionalNode;
    use insta::assert_snapshot;
    use percent_encoding::percent_decode_str;
    use rstest::rstest;

    const BASE: &str = "https://sub.example.com/abc";

    fn selection(ids: &[&str]) -> SelectionSet {
        SelectionSet::from(
            ids.iter()
                .map(|id| RegionalNode::new(*id, format!("{id} entrance")))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_empty_selection_leaves_base_unchanged() {
        assert_eq!(compose_filtered(BASE, &SelectionSet::new()), BASE);
        assert!(!compose_filtered(BASE, &SelectionSet::new()).contains("filter"));
    }

    #[test]
    fn test_selection_appends_pipe_joined_filter() {
        assert_eq!(
            compose_filtered(BASE, &selection(&["S1", "E1"])),
            "https://sub.example.com/abc&filter=S1|E1"
        );
    }

    #[rstest]
    #[case::single(&["W1"], "&filter=W1")]
    #[case::pick_order_kept(&["E1", "S1"], "&filter=E1|S1")]
    #[case::reversed(&["S1", "E1"], "&filter=S1|E1")]
    #[case::three(&["N2", "E2", "W1"], "&filter=N2|E2|W1")]
    fn test_filter_follows_selection_order(#[case] ids: &[&str], #[case] suffix: &str) {
        assert_eq!(compose_filtered(BASE, &selection(ids)), format!("{BASE}{suffix}"));
    }

    #[test]
    fn test_blank_node_id_still_sends_filter() {
        let blank = SelectionSet::from(vec![RegionalNode::new("", "blank")]);
        assert_eq!(
            compose_filtered(BASE, &blank),
            "https://sub.example.com/abc&filter="
        );
    }

    #[test]
    fn test_composition_is_idempotent() {
        let sel = selection(&["N1", "S1"]);
        assert_eq!(compose_filtered(BASE, &sel), compose_filtered(BASE, &sel));
        assert_eq!(
            SubscriptionLinks::compose(BASE, &sel),
            SubscriptionLinks::compose(BASE, &sel)
        );
    }

    #[test]
    fn test_existing_query_still_uses_bare_ampersand() {
        assert_eq!(
            compose_filtered("https://x.test/s?token=1", &selection(&["S1"])),
            "https://x.test/s?token=1&filter=S1"
        );
        assert_eq!(
            compose_filtered("https://x.test/s", &selection(&["S1"])),
            "https://x.test/s&filter=S1"
        );
    }

    #[test]
    fn test_malformed_base_passes_through() {
        assert_eq!(compose_filtered("", &selection(&["S1"])), "&filter=S1");
        assert_eq!(compose_filtered("not a url", &SelectionSet::new()), "not a url");
    }

    #[test]
    fn test_empty_selection_client_links() {
        let links = SubscriptionLinks::compose(BASE, &SelectionSet::new());
        assert_eq!(links.copy, BASE);
        assert_snapshot!(
            links.for_target(ClientTarget::Clash).unwrap(),
            @"clash://install-config?url=https%3A%2F%2Fsub.example.com%2Fabc"
        );
        assert_snapshot!(
            links.for_target(ClientTarget::Shadowrocket).unwrap(),
            @"shadowrocket://add/sub://aHR0cHM6Ly9zdWIuZXhhbXBsZS5jb20vYWJj"
        );
    }

    #[test]
    fn test_filtered_client_links() {
        let links = SubscriptionLinks::compose(BASE, &selection(&["S1", "E1"]));
        assert_snapshot!(
            links.for_target(ClientTarget::Surge).unwrap(),
            @"surge:///install-config?url=https%3A%2F%2Fsub.example.com%2Fabc%26filter%3DS1%7CE1"
        );
        assert_snapshot!(
            links.for_target(ClientTarget::Surfboard).unwrap(),
            @"surfboard:///install-config?url=https%3A%2F%2Fsub.example.com%2Fabc%26filter%3DS1%7CE1"
        );
        assert_snapshot!(
            links.for_target(ClientTarget::QuantumultX).unwrap(),
            @"quantumult-x:///update-configuration?remote-resource=https%3A%2F%2Fsub.example.com%2Fabc%26filter%3DS1%7CE1"
        );
        assert_snapshot!(
            links.for_target(ClientTarget::Shadowrocket).unwrap(),
            @"shadowrocket://add/sub://aHR0cHM6Ly9zdWIuZXhhbXBsZS5jb20vYWJjJmZpbHRlcj1TMXxFMQ=="
        );
    }

    #[test]
    fn test_base64_target_round_trips() {
        let filtered = compose_filtered("https://sub.example.com/订阅?k=v", &selection(&["S1", "E1"]));
        let link = ClientTarget::Shadowrocket.deep_link(&filtered);
        let encoded = link
            .strip_prefix(ClientTarget::Shadowrocket.template_prefix())
            .unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), filtered);
    }

    #[rstest]
    #[case::clash(ClientTarget::Clash)]
    #[case::surge(ClientTarget::Surge)]
    #[case::surfboard(ClientTarget::Surfboard)]
    #[case::quantumult_x(ClientTarget::QuantumultX)]
    fn test_percent_targets_round_trip(#[case] target: ClientTarget) {
        let filtered = "https://sub.example.com/路径?a=1&b=2&filter=S1|E1 x";
        let link = target.deep_link(filtered);
        let encoded = link.strip_prefix(target.template_prefix()).unwrap();

        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('='));
        assert!(encoded.is_ascii());
        assert_eq!(
            percent_decode_str(encoded).decode_utf8().unwrap(),
            filtered
        );
    }

    #[test]
    fn test_uri_component_unreserved_characters() {
        assert_eq!(encode_uri_component("aZ09-_.!~*'()"), "aZ09-_.!~*'()");
        assert_eq!(encode_uri_component(" /?#"), "%20%2F%3F%23");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn test_target_metadata() {
        assert_eq!(ClientTarget::ALL.len(), 5);
        assert_eq!(ClientTarget::Shadowrocket.encoding(), LinkEncoding::Base64);
        assert!(
            ClientTarget::ALL
                .iter()
                .filter(|t| **t != ClientTarget::Shadowrocket)
                .all(|t| t.encoding() == LinkEncoding::Percent)
        );
        assert_eq!(ClientTarget::QuantumultX.label(), "Quantumult X");
    }

    #[test]
    fn test_shortcut_mapping() {
        assert_eq!(ClientTarget::from_shortcut(1), Some(ClientTarget::Clash));
        assert_eq!(ClientTarget::from_shortcut(5), Some(ClientTarget::QuantumultX));
        assert_eq!(ClientTarget::from_shortcut(0), None);
        assert_eq!(ClientTarget::from_shortcut(6), None);
    }

    #[test]
    fn test_links_cover_every_target_in_order() {
        let links = SubscriptionLinks::compose(BASE, &SelectionSet::new());
        let targets: Vec<ClientTarget> = links.clients.iter().map(|(t, _)| *t).collect();
        assert_eq!(targets, ClientTarget::ALL);
    }
}
