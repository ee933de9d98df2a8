//! String and path helpers shared by the resolvers.

/// Convert a string to StudlyCase.
///
/// ## Rules
///
/// 1. Split on every non-alphanumeric character
/// 2. Upper-case the first character of each word
/// 3. Keep the remaining characters as written
/// 4. Join without separator
///
/// ## Examples
///
/// | Input | Output |
/// |-------|--------|
/// | "user" | "User" |
/// | "user_order" | "UserOrder" |
/// | "my-service thing" | "MyServiceThing" |
/// | "myServiceThing" | "MyServiceThing" |
/// | "HTTP client" | "HTTPClient" |
pub fn to_studly_case(input: &str) -> String {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(word.len());
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Whether `s` is usable as a class or namespace segment: non-empty,
/// alphanumeric or `_`, and not starting with a digit.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Translate a namespace-like path to a forward-slash file-system path
/// rooted at `root`.
///
/// Both `\` and `/` are accepted in either argument. Repeated separators are
/// collapsed and a trailing separator is dropped, so the function is
/// idempotent: feeding its output back in as `root` with an empty `ns`
/// returns the same string. A leading `/` on `root` is preserved.
pub fn namespace_to_path(ns: &str, root: &str) -> String {
    let joined = format!("{root}/{ns}").replace('\\', "/");
    normalize_separators(&joined)
}

/// Collapse runs of `/` and strip a trailing `/` (but never reduce `/` to
/// the empty string).
pub fn normalize_separators(path: &str) -> String {
    let absolute = path.starts_with('/');
    let body = path
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    match (absolute, body.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{body}"),
        (false, _) => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn studly_basic() {
        assert_eq!(to_studly_case("user"), "User");
        assert_eq!(to_studly_case("user_order"), "UserOrder");
        assert_eq!(to_studly_case("user-order item"), "UserOrderItem");
    }

    #[test]
    fn studly_preserves_inner_case() {
        assert_eq!(to_studly_case("myServiceThing"), "MyServiceThing");
        assert_eq!(to_studly_case("HTTP client"), "HTTPClient");
    }

    #[test]
    fn studly_drops_separators_only() {
        assert_eq!(to_studly_case("  __--  "), "");
        assert_eq!(to_studly_case("a.b/c"), "ABC");
    }

    #[test]
    fn identifier_rules() {
        assert!(is_identifier("App"));
        assert!(is_identifier("_Internal"));
        assert!(!is_identifier("9Lives"));
        assert!(!is_identifier("Bad-Name"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn namespace_to_path_maps_backslashes() {
        assert_eq!(
            namespace_to_path("Domain\\Billing\\Services", "/srv/app"),
            "/srv/app/Domain/Billing/Services"
        );
    }

    #[test]
    fn namespace_to_path_is_idempotent() {
        let once = namespace_to_path("\\Domain//Services\\", "app\\");
        let twice = namespace_to_path("", &once);
        assert_eq!(once, "app/Domain/Services");
        assert_eq!(once, twice);
    }

    #[test]
    fn namespace_to_path_ignores_separator_style() {
        assert_eq!(
            namespace_to_path("A\\B\\C", "root"),
            namespace_to_path("A/B/C", "root")
        );
    }

    #[test]
    fn normalize_keeps_root_slash() {
        assert_eq!(normalize_separators("//"), "/");
        assert_eq!(normalize_separators("/a//b/"), "/a/b");
    }
}
