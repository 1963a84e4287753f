//! Path resolution and mutation over a dynamic data tree.
//!
//! Every call starts fresh from the source's root map. Reads never mutate
//! the tree. Writes create missing intermediate containers: a list when
//! the following segment is an index, a map otherwise. Lists are padded
//! with nulls up to the addressed index.
//!
//! A write that fails after creating containers leaves them in place; the
//! stored value is lowered before the tree is touched, so an unsupported
//! value never mutates anything.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::error::PropertyError;
use crate::form::{FormFile, FormPrincipal};
use crate::limits::NavigatorLimits;
use crate::path::{PathSegment, PropertyPath};
use crate::source::DataSource;
use crate::storable::Storable;

/// Result type for property operations.
pub type Result<T> = std::result::Result<T, PropertyError>;

/// A borrowed container inside the tree.
#[derive(Debug, Clone, Copy)]
pub enum Container<'a> {
    Map(&'a Map<String, Value>),
    List(&'a [Value]),
}

/// A mutably borrowed container inside the tree.
#[derive(Debug)]
pub enum ContainerMut<'a> {
    Map(&'a mut Map<String, Value>),
    List(&'a mut Vec<Value>),
}

/// Read-only view of a resolved slot.
#[derive(Debug, Clone)]
pub struct PropertyRef<'a> {
    container: Container<'a>,
    segment: PathSegment,
}

impl<'a> PropertyRef<'a> {
    /// The container holding the slot.
    #[must_use]
    pub fn container(&self) -> Container<'a> {
        self.container
    }

    /// The last path segment.
    #[must_use]
    pub fn segment(&self) -> &PathSegment {
        &self.segment
    }

    /// What currently occupies the slot.
    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        match self.container {
            Container::Map(map) => map.get(self.segment.key()),
            Container::List(list) => self.segment.index().and_then(|index| list.get(index)),
        }
    }
}

/// Mutable handle on a resolved slot, produced by the write resolver.
#[derive(Debug)]
pub struct PropertyHandle<'a> {
    container: ContainerMut<'a>,
    segment: PathSegment,
    path: String,
    limits: NavigatorLimits,
}

impl PropertyHandle<'_> {
    /// The last path segment.
    #[must_use]
    pub fn segment(&self) -> &PathSegment {
        &self.segment
    }

    /// What currently occupies the slot.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match &self.container {
            ContainerMut::Map(map) => map.get(self.segment.key()),
            ContainerMut::List(list) => self.segment.index().and_then(|index| list.get(index)),
        }
    }

    /// Store `value` in the slot, padding a list with nulls as needed.
    pub fn set(self, value: Value) -> Result<()> {
        match self.container {
            ContainerMut::Map(map) => {
                map.insert(self.segment.key().to_owned(), value);
            }
            ContainerMut::List(list) => {
                let index = list_index(&self.path, &self.segment)?;
                self.limits.check_list_index(index)?;
                if index < list.len() {
                    list[index] = value;
                } else {
                    list.resize(index, Value::Null);
                    list.push(value);
                }
            }
        }
        Ok(())
    }

    /// Remove the slot. List elements after it shift down.
    pub fn take(self) -> Option<Value> {
        match self.container {
            ContainerMut::Map(map) => map.shift_remove(self.segment.key()),
            ContainerMut::List(list) => match self.segment.index() {
                Some(index) if index < list.len() => Some(list.remove(index)),
                _ => None,
            },
        }
    }
}

fn list_index(path: &str, segment: &PathSegment) -> Result<usize> {
    segment.index().ok_or_else(|| {
        PropertyError::invalid_path(path, format!("`{segment}` is not a list index"))
    })
}

/// Resolves and mutates dot-separated paths against a [`DataSource`].
///
/// # Example
///
/// ```
/// use serde_json::{Map, json};
/// use tasklane_data::PathNavigator;
///
/// let nav = PathNavigator::new();
/// let mut data = Map::new();
/// nav.update(&mut data, "users.0.name", "ana").unwrap();
///
/// assert_eq!(serde_json::Value::Object(data.clone()), json!({"users": [{"name": "ana"}]}));
/// assert_eq!(nav.get_string(&data, "users.0.name").unwrap(), "ana");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathNavigator {
    limits: NavigatorLimits,
}

impl PathNavigator {
    /// A navigator with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A navigator with custom limits.
    #[must_use]
    pub fn with_limits(limits: NavigatorLimits) -> Self {
        Self { limits }
    }

    #[must_use]
    pub fn limits(&self) -> &NavigatorLimits {
        &self.limits
    }

    fn parse(&self, path: &str) -> Result<PropertyPath> {
        PropertyPath::parse_with_limits(path, &self.limits)
    }

    // ── resolution ──────────────────────────────────────────────────────────

    /// Resolve `path` without creating anything.
    ///
    /// `Ok(None)` means some parent is missing, null or a scalar.
    pub fn resolve<'a, S: DataSource + ?Sized>(
        &self,
        source: &'a S,
        path: &str,
    ) -> Result<Option<PropertyRef<'a>>> {
        let parsed = self.parse(path)?;
        let Some(root) = source.data() else {
            return Ok(None);
        };

        let mut container = Container::Map(root);
        for segment in parsed.parents() {
            let slot = match container {
                Container::Map(map) => map.get(segment.key()),
                Container::List(list) => list.get(list_index(path, segment)?),
            };
            container = match slot {
                Some(Value::Object(map)) => Container::Map(map),
                Some(Value::Array(list)) => Container::List(list),
                _ => return Ok(None),
            };
        }

        let segment = parsed.last().clone();
        if matches!(container, Container::List(_)) {
            list_index(path, &segment)?;
        }
        Ok(Some(PropertyRef { container, segment }))
    }

    /// Resolve `path` for writing, creating the root and missing parents.
    ///
    /// `Ok(None)` means some parent is a scalar and cannot be descended.
    pub fn resolve_mut<'a, S: DataSource + ?Sized>(
        &self,
        source: &'a mut S,
        path: &str,
    ) -> Result<Option<PropertyHandle<'a>>> {
        let parsed = self.parse(path)?;
        if source.data().is_none() {
            source.set_data(Map::new());
        }
        let Some(root) = source.data_mut() else {
            return Ok(None);
        };

        let segments = parsed.segments();
        let mut container = ContainerMut::Map(root);
        for (position, segment) in parsed.parents().iter().enumerate() {
            let slot = match container {
                ContainerMut::Map(map) => map.entry(segment.key()).or_insert(Value::Null),
                ContainerMut::List(list) => {
                    let index = list_index(path, segment)?;
                    self.limits.check_list_index(index)?;
                    if list.len() <= index {
                        list.resize(index + 1, Value::Null);
                    }
                    &mut list[index]
                }
            };

            if slot.is_null() {
                let next_is_index = segments[position + 1].is_index();
                tracing::trace!(path, segment = %segment, list = next_is_index, "creating container");
                *slot = if next_is_index {
                    Value::Array(Vec::new())
                } else {
                    Value::Object(Map::new())
                };
            }

            container = match slot {
                Value::Object(map) => ContainerMut::Map(map),
                Value::Array(list) => ContainerMut::List(list),
                _ => return Ok(None),
            };
        }

        let segment = parsed.last().clone();
        if matches!(container, ContainerMut::List(_)) {
            list_index(path, &segment)?;
        }
        Ok(Some(PropertyHandle {
            container,
            segment,
            path: path.to_owned(),
            limits: self.limits,
        }))
    }

    // ── raw access ──────────────────────────────────────────────────────────

    /// The value at `path`. A stored null is returned as `Value::Null`.
    pub fn find<'a, S: DataSource + ?Sized>(
        &self,
        source: &'a S,
        path: &str,
    ) -> Result<Option<&'a Value>> {
        Ok(self
            .resolve(source, path)?
            .and_then(|property| property.value()))
    }

    /// The value at `path`, failing when absent.
    pub fn get<'a, S: DataSource + ?Sized>(&self, source: &'a S, path: &str) -> Result<&'a Value> {
        self.find(source, path)?
            .ok_or_else(|| PropertyError::not_found(path))
    }

    /// Whether anything, including a null, is stored at `path`.
    pub fn contains<S: DataSource + ?Sized>(&self, source: &S, path: &str) -> Result<bool> {
        Ok(self.find(source, path)?.is_some())
    }

    /// Store `value` at `path`, creating missing parents.
    pub fn update<S, V>(&self, source: &mut S, path: &str, value: V) -> Result<()>
    where
        S: DataSource + ?Sized,
        V: Storable,
    {
        let value = value.into_storable()?;
        let Some(handle) = self.resolve_mut(source, path)? else {
            return Err(PropertyError::not_found(path));
        };
        tracing::debug!(path, "updating property");
        handle.set(value)
    }

    /// Remove the value at `path` and return it.
    ///
    /// Removing from a list shifts later elements down. Missing paths
    /// return `None` and leave the tree untouched.
    pub fn remove<S: DataSource + ?Sized>(&self, source: &mut S, path: &str) -> Result<Option<Value>> {
        let parsed = self.parse(path)?;
        let Some(root) = source.data_mut() else {
            return Ok(None);
        };

        let mut container = ContainerMut::Map(root);
        for segment in parsed.parents() {
            let slot = match container {
                ContainerMut::Map(map) => map.get_mut(segment.key()),
                ContainerMut::List(list) => list.get_mut(list_index(path, segment)?),
            };
            container = match slot {
                Some(Value::Object(map)) => ContainerMut::Map(map),
                Some(Value::Array(list)) => ContainerMut::List(list),
                _ => return Ok(None),
            };
        }

        let segment = parsed.last().clone();
        if matches!(container, ContainerMut::List(_)) {
            list_index(path, &segment)?;
        }
        let removed = PropertyHandle {
            container,
            segment,
            path: path.to_owned(),
            limits: self.limits,
        }
        .take();
        if removed.is_some() {
            tracing::debug!(path, "removed property");
        }
        Ok(removed)
    }

    // ── typed readers ───────────────────────────────────────────────────────

    fn find_as<'a, S, T>(
        &self,
        source: &'a S,
        path: &str,
        expected: &str,
        convert: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<Option<T>>
    where
        S: DataSource + ?Sized,
    {
        match self.find(source, path)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => convert(value).map(Some).ok_or_else(|| {
                tracing::trace!(path, expected, "property coercion failed");
                PropertyError::TypeMismatch {
                    path: path.to_owned(),
                    expected: expected.to_owned(),
                    actual: value.to_string(),
                }
            }),
        }
    }

    /// Text at `path`. Numbers and booleans are formatted.
    pub fn find_string<S: DataSource + ?Sized>(&self, source: &S, path: &str) -> Result<Option<String>> {
        self.find_as(source, path, "a string", text)
    }

    pub fn get_string<S: DataSource + ?Sized>(&self, source: &S, path: &str) -> Result<String> {
        required(self.find_string(source, path)?, path)
    }

    /// Integer at `path`. Integral floats and numeric text are accepted.
    pub fn find_integer<S: DataSource + ?Sized>(&self, source: &S, path: &str) -> Result<Option<i64>> {
        self.find_as(source, path, "an integer", |value| match value {
            Value::Number(number) => number.as_i64().or_else(|| {
                number
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn get_integer<S: DataSource + ?Sized>(&self, source: &S, path: &str) -> Result<i64> {
        required(self.find_integer(source, path)?, path)
    }

    /// Number at `path`. Numeric text is parsed.
    pub fn find_double<S: DataSource + ?Sized>(&self, source: &S, path: &str) -> Result<Option<f64>> {
        self.find_as(source, path, "a number", |value| match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn get_double<S: DataSource + ?Sized>(&self, source: &S, path: &str) -> Result<f64> {
        required(self.find_double(source, path)?, path)
    }

    /// Boolean at `path`. Only boolean leaves qualify.
    pub fn find_boolean<S: DataSource + ?Sized>(&self, source: &S, path: &str) -> Result<Option<bool>> {
        self.find_as(source, path, "a boolean", Value::as_bool)
    }

    pub fn get_boolean<S: DataSource + ?Sized>(&self, source: &S, path: &str) -> Result<bool> {
        required(self.find_boolean(source, path)?, path)
    }

    /// Calendar date at `path`, like `2011-12-03`.
    pub fn find_local_date<S: DataSource + ?Sized>(
        &self,
        source: &S,
        path: &str,
    ) -> Result<Option<NaiveDate>> {
        self.find_as(source, path, "a date like '2011-12-03'", |value| {
            text(value).and_then(|t| NaiveDate::parse_from_str(t.trim(), "%Y-%m-%d").ok())
        })
    }

    pub fn get_local_date<S: DataSource + ?Sized>(&self, source: &S, path: &str) -> Result<NaiveDate> {
        required(self.find_local_date(source, path)?, path)
    }

    /// UTC instant at `path`, like `2007-12-03T10:15:30.00Z`.
    pub fn find_date_time<S: DataSource + ?Sized>(
        &self,
        source: &S,
        path: &str,
    ) -> Result<Option<DateTime<Utc>>> {
        self.find_as(source, path, "an instant like '2007-12-03T10:15:30.00Z'", |value| {
            text(value)
                .and_then(|t| DateTime::parse_from_rfc3339(t.trim()).ok())
                .map(|instant| instant.with_timezone(&Utc))
        })
    }

    pub fn get_date_time<S: DataSource + ?Sized>(
        &self,
        source: &S,
        path: &str,
    ) -> Result<DateTime<Utc>> {
        required(self.find_date_time(source, path)?, path)
    }

    /// Date-time with offset at `path`, like `2007-12-03T10:15:30+01:00`.
    pub fn find_offset_date_time<S: DataSource + ?Sized>(
        &self,
        source: &S,
        path: &str,
    ) -> Result<Option<DateTime<FixedOffset>>> {
        self.find_as(source, path, "a date-time like '2007-12-03T10:15:30+01:00'", |value| {
            text(value).and_then(|t| DateTime::parse_from_rfc3339(t.trim()).ok())
        })
    }

    pub fn get_offset_date_time<S: DataSource + ?Sized>(
        &self,
        source: &S,
        path: &str,
    ) -> Result<DateTime<FixedOffset>> {
        required(self.find_offset_date_time(source, path)?, path)
    }

    /// Encoded form file at `path`.
    pub fn find_file<S: DataSource + ?Sized>(&self, source: &S, path: &str) -> Result<Option<FormFile>> {
        self.find_as(source, path, "a form file", |value| {
            value.as_str().and_then(|t| t.parse().ok())
        })
    }

    pub fn get_file<S: DataSource + ?Sized>(&self, source: &S, path: &str) -> Result<FormFile> {
        required(self.find_file(source, path)?, path)
    }

    /// Encoded form principal at `path`.
    pub fn find_principal<S: DataSource + ?Sized>(
        &self,
        source: &S,
        path: &str,
    ) -> Result<Option<FormPrincipal>> {
        self.find_as(source, path, "a form principal", |value| {
            value.as_str().and_then(|t| t.parse().ok())
        })
    }

    pub fn get_principal<S: DataSource + ?Sized>(
        &self,
        source: &S,
        path: &str,
    ) -> Result<FormPrincipal> {
        required(self.find_principal(source, path)?, path)
    }

    /// List at `path`, borrowed from the tree.
    pub fn find_list<'a, S: DataSource + ?Sized>(
        &self,
        source: &'a S,
        path: &str,
    ) -> Result<Option<&'a [Value]>> {
        self.find_as(source, path, "a list", |value| {
            value.as_array().map(Vec::as_slice)
        })
    }

    pub fn get_list<'a, S: DataSource + ?Sized>(&self, source: &'a S, path: &str) -> Result<&'a [Value]> {
        required(self.find_list(source, path)?, path)
    }

    /// Map at `path`, borrowed from the tree.
    pub fn find_map<'a, S: DataSource + ?Sized>(
        &self,
        source: &'a S,
        path: &str,
    ) -> Result<Option<&'a Map<String, Value>>> {
        self.find_as(source, path, "a map", Value::as_object)
    }

    pub fn get_map<'a, S: DataSource + ?Sized>(
        &self,
        source: &'a S,
        path: &str,
    ) -> Result<&'a Map<String, Value>> {
        required(self.find_map(source, path)?, path)
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn required<T>(value: Option<T>, path: &str) -> Result<T> {
    value.ok_or_else(|| PropertyError::not_found(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn tree(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn resolve_reports_container_and_segment() {
        let data = tree(json!({"users": [{"name": "ana"}]}));
        let nav = PathNavigator::new();
        let property = nav.resolve(&data, "users.0.name").unwrap().unwrap();
        assert!(matches!(property.container(), Container::Map(_)));
        assert_eq!(property.segment().key(), "name");
        assert_eq!(property.value(), Some(&json!("ana")));

        let property = nav.resolve(&data, "users.5").unwrap().unwrap();
        assert!(matches!(property.container(), Container::List(_)));
        assert_eq!(property.value(), None);
    }

    #[test]
    fn non_index_segment_on_list_is_invalid() {
        let data = tree(json!({"list": ["a"]}));
        let nav = PathNavigator::new();
        assert!(matches!(
            nav.find(&data, "list.name"),
            Err(PropertyError::InvalidPath { .. })
        ));
        assert!(matches!(
            nav.find(&data, "list.first.x"),
            Err(PropertyError::InvalidPath { .. })
        ));
    }

    #[test]
    fn numeric_segment_is_a_key_on_maps() {
        let mut data = Map::new();
        let nav = PathNavigator::new();
        nav.update(&mut data, "codes.404", "missing").unwrap();
        nav.update(&mut data, "codes.500", "broken").unwrap();
        assert_eq!(Value::Object(data), json!({"codes": {"404": "missing", "500": "broken"}}));
    }

    #[test]
    fn handle_set_pads_list() {
        let mut data = tree(json!({"list": []}));
        let nav = PathNavigator::new();
        let handle = nav.resolve_mut(&mut data, "list.3").unwrap().unwrap();
        assert_eq!(handle.value(), None);
        handle.set(json!(1)).unwrap();
        assert_eq!(data["list"], json!([null, null, null, 1]));
    }

    #[test]
    fn scalar_parent_blocks_write() {
        let mut data = tree(json!({"a": 1}));
        let nav = PathNavigator::new();
        assert_eq!(
            nav.update(&mut data, "a.b", 2).unwrap_err(),
            PropertyError::not_found("a.b")
        );
        assert_eq!(Value::Object(data), json!({"a": 1}));
    }

    #[test]
    fn list_index_limit_applies_to_writes() {
        let mut data = Map::new();
        let nav = PathNavigator::with_limits(NavigatorLimits {
            max_list_index: 10,
            ..NavigatorLimits::default()
        });
        assert!(nav.update(&mut data, "list.10", 1).is_ok());
        assert!(matches!(
            nav.update(&mut data, "list.11", 1),
            Err(PropertyError::LimitExceeded { .. })
        ));
        assert!(matches!(
            nav.update(&mut data, "grid.50.0", 1),
            Err(PropertyError::LimitExceeded { .. })
        ));
    }

    #[test]
    fn null_leaf_is_found_but_reads_as_absent() {
        let data = tree(json!({"a": null}));
        let nav = PathNavigator::new();
        assert_eq!(nav.find(&data, "a").unwrap(), Some(&Value::Null));
        assert!(nav.contains(&data, "a").unwrap());
        assert_eq!(nav.find_string(&data, "a").unwrap(), None);
        assert!(matches!(
            nav.get_string(&data, "a"),
            Err(PropertyError::NotFound { .. })
        ));
    }

    #[test]
    fn integer_reader() {
        let data = tree(json!({"a": 5, "b": 5.0, "c": "12", "d": 5.5, "e": true}));
        let nav = PathNavigator::new();
        assert_eq!(nav.get_integer(&data, "a").unwrap(), 5);
        assert_eq!(nav.get_integer(&data, "b").unwrap(), 5);
        assert_eq!(nav.get_integer(&data, "c").unwrap(), 12);
        assert!(matches!(
            nav.get_integer(&data, "d"),
            Err(PropertyError::TypeMismatch { .. })
        ));
        assert!(nav.find_integer(&data, "e").is_err());
    }
}
