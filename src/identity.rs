//! Identity tokens for associating labels with their controls.

use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix used by [`ensure_identity`].
pub const DEFAULT_IDENTITY_PREFIX: &str = "input";

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

/// Returns the caller's id, or a fresh process-unique one.
///
/// A supplied, non-empty id is authoritative and returned unchanged, since
/// external labeling may already refer to it.
///
/// # Example
///
/// ```rust
/// use variance::ensure_identity;
///
/// assert_eq!(ensure_identity(Some("email")), "email");
///
/// let a = ensure_identity(None);
/// let b = ensure_identity(Some(""));
/// assert!(a.starts_with("input-"));
/// assert_ne!(a, b);
/// ```
pub fn ensure_identity(supplied: Option<&str>) -> String {
    ensure_identity_with_prefix(supplied, DEFAULT_IDENTITY_PREFIX)
}

/// Like [`ensure_identity`], with a custom prefix for generated ids.
pub fn ensure_identity_with_prefix(supplied: Option<&str>, prefix: &str) -> String {
    match supplied {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            let n = NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed);
            format!("{}-{}", prefix, n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_supplied_identity_is_kept() {
        assert_eq!(ensure_identity(Some("user-email")), "user-email");
    }

    #[test]
    fn test_empty_identity_is_replaced() {
        let id = ensure_identity(Some(""));
        assert!(id.starts_with("input-"));
        assert!(id.len() > "input-".len());
    }

    #[test]
    fn test_custom_prefix() {
        let id = ensure_identity_with_prefix(None, "select");
        assert!(id.starts_with("select-"));
    }

    #[test]
    fn test_generated_identities_are_unique_across_threads() {
        let ids: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| (0..250).map(|_| ensure_identity(None)).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), 1000);
    }
}
