//! Dot-separated property paths.
//!
//! `users.0.name` parses into `[Key("users"), Index(0), Key("name")]`.
//! Empty segments from leading, trailing or doubled dots are skipped. A
//! segment made only of ASCII digits is an index; it still works as a map
//! key when the container it lands on is a map.

use std::fmt;

use crate::error::PropertyError;
use crate::limits::NavigatorLimits;

/// One non-empty segment of a [`PropertyPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    text: String,
    index: Option<usize>,
}

impl PathSegment {
    /// The segment text, used as the key in map containers.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.text
    }

    /// The list index, if the segment is all digits.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Whether the segment can address a list slot.
    #[must_use]
    pub fn is_index(&self) -> bool {
        self.index.is_some()
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A parsed property path with at least one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    raw: String,
    segments: Vec<PathSegment>,
}

impl PropertyPath {
    /// Parse with the default limits.
    pub fn parse(path: &str) -> Result<Self, PropertyError> {
        Self::parse_with_limits(path, &NavigatorLimits::default())
    }

    /// Parse, rejecting paths longer than `limits.max_segments`.
    pub fn parse_with_limits(path: &str, limits: &NavigatorLimits) -> Result<Self, PropertyError> {
        let mut segments = Vec::new();
        for text in path.split('.').filter(|text| !text.is_empty()) {
            segments.push(parse_segment(path, text)?);
            limits.check_segments(segments.len())?;
        }
        if segments.is_empty() {
            return Err(PropertyError::invalid_path(path, "path has no segments"));
        }
        Ok(Self {
            raw: path.to_owned(),
            segments,
        })
    }

    /// The path as given by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// All segments in order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Segments leading to the container of the last one.
    #[must_use]
    pub fn parents(&self) -> &[PathSegment] {
        &self.segments[..self.segments.len() - 1]
    }

    /// The segment addressing the final slot.
    #[must_use]
    pub fn last(&self) -> &PathSegment {
        &self.segments[self.segments.len() - 1]
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_segment(path: &str, text: &str) -> Result<PathSegment, PropertyError> {
    let index = if text.bytes().all(|b| b.is_ascii_digit()) {
        let index = text.parse::<usize>().map_err(|_| {
            PropertyError::invalid_path(path, format!("list index `{text}` is out of range"))
        })?;
        Some(index)
    } else {
        None
    };
    Ok(PathSegment {
        text: text.to_owned(),
        index,
    })
}
