//! Feed configuration.

use crate::error::{FeedError, FeedResult};

/// Configuration for constructing a [`Feed`](crate::Feed).
///
/// Validation happens once, at feed construction; the engine itself
/// never re-checks these values at call time.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Per-user activity capacity. Must be positive.
    pub max_size: usize,

    /// Namespace partitioning this feed's records from others sharing
    /// the same store.
    pub namespace: Option<String>,

    /// Default page size for pagination. Must be positive.
    pub per_page: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_size: 1000,
            namespace: None,
            per_page: 25,
        }
    }
}

impl FeedConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-user activity capacity.
    #[must_use]
    pub const fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the feed namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets the default page size.
    #[must_use]
    pub const fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidMaxSize`] or
    /// [`FeedError::InvalidPerPage`] if either value is zero.
    pub fn validate(&self) -> FeedResult<()> {
        if self.max_size == 0 {
            return Err(FeedError::InvalidMaxSize);
        }
        if self.per_page == 0 {
            return Err(FeedError::InvalidPerPage);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = FeedConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_size, 1000);
        assert_eq!(config.per_page, 25);
        assert!(config.namespace.is_none());
    }

    #[test]
    fn builder_pattern() {
        let config = FeedConfig::new()
            .max_size(10)
            .per_page(3)
            .namespace("news");
        assert_eq!(config.max_size, 10);
        assert_eq!(config.per_page, 3);
        assert_eq!(config.namespace.as_deref(), Some("news"));
    }

    #[test]
    fn zero_max_size_is_rejected() {
        let err = FeedConfig::new().max_size(0).validate().unwrap_err();
        assert!(matches!(err, FeedError::InvalidMaxSize));
    }

    #[test]
    fn zero_per_page_is_rejected() {
        let err = FeedConfig::new().per_page(0).validate().unwrap_err();
        assert!(matches!(err, FeedError::InvalidPerPage));
    }
}
