//! Navigator limits.
//!
//! Paths and list indices come from callers and may come from end users;
//! the limits bound the work a single call can do and the nulls a single
//! write can pad a list with.

use serde::{Deserialize, Serialize};

use crate::error::PropertyError;

/// Configurable limits for path navigation.
///
/// # Example
///
/// ```
/// use tasklane_data::NavigatorLimits;
///
/// let limits = NavigatorLimits::default();
/// assert_eq!(limits.max_segments, 100);
///
/// let strict = NavigatorLimits::strict();
/// assert!(strict.check_list_index(5_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorLimits {
    /// Maximum number of non-empty segments in one path.
    pub max_segments: usize,

    /// Maximum list index a write may address.
    pub max_list_index: usize,
}

impl Default for NavigatorLimits {
    fn default() -> Self {
        Self {
            max_segments: 100,
            max_list_index: 100_000,
        }
    }
}

impl NavigatorLimits {
    /// Permissive limits for trusted environments
    pub fn permissive() -> Self {
        Self {
            max_segments: 200,
            max_list_index: 10_000_000,
        }
    }

    /// Strict limits for untrusted input
    pub fn strict() -> Self {
        Self {
            max_segments: 32,
            max_list_index: 1_000,
        }
    }

    /// No limits
    pub const fn unlimited() -> Self {
        Self {
            max_segments: usize::MAX,
            max_list_index: usize::MAX,
        }
    }

    /// Validate the segment count of a path
    #[inline]
    pub fn check_segments(&self, count: usize) -> Result<(), PropertyError> {
        if count > self.max_segments {
            Err(PropertyError::limit_exceeded(
                "path segments",
                self.max_segments,
                count,
            ))
        } else {
            Ok(())
        }
    }

    /// Validate a list index addressed by a write
    #[inline]
    pub fn check_list_index(&self, index: usize) -> Result<(), PropertyError> {
        if index > self.max_list_index {
            Err(PropertyError::limit_exceeded(
                "list index",
                self.max_list_index,
                index,
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let limits = NavigatorLimits::default();
        assert!(limits.check_segments(100).is_ok());
        assert!(limits.check_segments(101).is_err());
        assert!(limits.check_list_index(100_000).is_ok());
        assert!(limits.check_list_index(100_001).is_err());
    }

    #[test]
    fn strict_and_permissive() {
        assert!(NavigatorLimits::strict().check_segments(40).is_err());
        assert!(NavigatorLimits::permissive().check_list_index(5_000_000).is_ok());
    }

    #[test]
    fn unlimited() {
        let limits = NavigatorLimits::unlimited();
        assert!(limits.check_list_index(usize::MAX - 1).is_ok());
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let limits: NavigatorLimits = serde_json::from_str(r#"{"max_list_index": 10}"#).unwrap();
        assert_eq!(limits.max_list_index, 10);
        assert_eq!(limits.max_segments, 100);
    }
}
