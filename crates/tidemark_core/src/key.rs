//! Record addressing.

use crate::types::UserId;
use std::fmt;

/// Composite address of a user's record: optional namespace plus user id.
///
/// Two keys are equal iff both namespace and user id match, so distinct
/// namespaces partition the same user id into independent records and
/// multiple logical feeds can share one store without collision.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    /// Feed namespace, if any.
    pub namespace: Option<String>,
    /// The addressed user.
    pub user_id: UserId,
}

impl Key {
    /// Creates a key in the given namespace.
    #[must_use]
    pub fn new(namespace: Option<String>, user_id: UserId) -> Self {
        Self { namespace, user_id }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{ns}.{}", self.user_id),
            None => write!(f, "{}", self.user_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaces_partition_users() {
        let a = Key::new(Some("ns1".into()), UserId::from("u"));
        let b = Key::new(Some("ns2".into()), UserId::from("u"));
        let c = Key::new(None, UserId::from("u"));
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn display_includes_namespace() {
        let k = Key::new(Some("feed".into()), UserId::from("alice"));
        assert_eq!(format!("{k}"), "feed.alice");
        let bare = Key::new(None, UserId::from("alice"));
        assert_eq!(format!("{bare}"), "alice");
    }
}
