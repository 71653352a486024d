//! Token helpers for class strings.

/// Splits a class string into individual tokens.
///
/// Runs of whitespace separate tokens; empty tokens are dropped.
///
/// # Example
///
/// ```rust
/// use variance::split_tokens;
///
/// assert_eq!(split_tokens("  h-8   px-3\ttext-xs "), vec!["h-8", "px-3", "text-xs"]);
/// assert!(split_tokens("   ").is_empty());
/// ```
pub fn split_tokens(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

/// Joins tokens with a single space, the form a rendering surface expects
/// for a class attribute.
///
/// # Example
///
/// ```rust
/// use variance::join_tokens;
///
/// assert_eq!(join_tokens(&["btn", "btn-lg"]), "btn btn-lg");
/// ```
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(token.as_ref());
    }
    out
}
