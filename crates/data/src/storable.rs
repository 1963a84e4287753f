//! Lowering of caller values into storable JSON.

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};

use crate::error::PropertyError;
use crate::form::{FormFile, FormPrincipal, ParseFormValueError};

/// A value that can be written into a data tree.
///
/// Dates become ISO-8601 text, instants RFC 3339 text, and form files and
/// principals their encoded string form.
pub trait Storable {
    /// Convert into the JSON value that will be stored.
    fn into_storable(self) -> Result<Value, PropertyError>;
}

impl Storable for Value {
    fn into_storable(self) -> Result<Value, PropertyError> {
        Ok(self)
    }
}

impl Storable for String {
    fn into_storable(self) -> Result<Value, PropertyError> {
        Ok(Value::String(self))
    }
}

impl Storable for &str {
    fn into_storable(self) -> Result<Value, PropertyError> {
        Ok(Value::String(self.to_owned()))
    }
}

impl Storable for bool {
    fn into_storable(self) -> Result<Value, PropertyError> {
        Ok(Value::Bool(self))
    }
}

macro_rules! storable_int {
    ($($ty:ty),+) => {$(
        impl Storable for $ty {
            fn into_storable(self) -> Result<Value, PropertyError> {
                Ok(Value::Number(Number::from(self)))
            }
        }
    )+};
}

storable_int!(i32, i64, u32, u64, usize);

impl Storable for f64 {
    fn into_storable(self) -> Result<Value, PropertyError> {
        Number::from_f64(self)
            .map(Value::Number)
            .ok_or_else(|| PropertyError::UnsupportedValue {
                value: self.to_string(),
                reason: "non-finite numbers have no JSON form".into(),
            })
    }
}

impl Storable for f32 {
    fn into_storable(self) -> Result<Value, PropertyError> {
        f64::from(self).into_storable()
    }
}

impl Storable for NaiveDate {
    fn into_storable(self) -> Result<Value, PropertyError> {
        Ok(Value::String(self.format("%Y-%m-%d").to_string()))
    }
}

impl Storable for DateTime<Utc> {
    fn into_storable(self) -> Result<Value, PropertyError> {
        Ok(Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
    }
}

impl Storable for DateTime<FixedOffset> {
    fn into_storable(self) -> Result<Value, PropertyError> {
        Ok(Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, false)))
    }
}

impl Storable for FormFile {
    fn into_storable(self) -> Result<Value, PropertyError> {
        self.encode().map(Value::String).map_err(unencodable)
    }
}

impl Storable for FormPrincipal {
    fn into_storable(self) -> Result<Value, PropertyError> {
        self.encode().map(Value::String).map_err(unencodable)
    }
}

fn unencodable(err: ParseFormValueError) -> PropertyError {
    PropertyError::UnsupportedValue {
        value: err.value().to_owned(),
        reason: format!("{} encoding would not read back", err.kind()),
    }
}

impl Storable for Map<String, Value> {
    fn into_storable(self) -> Result<Value, PropertyError> {
        Ok(Value::Object(self))
    }
}

impl<T: Storable> Storable for Vec<T> {
    fn into_storable(self) -> Result<Value, PropertyError> {
        self.into_iter()
            .map(Storable::into_storable)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

impl<T: Storable> Storable for Option<T> {
    fn into_storable(self) -> Result<Value, PropertyError> {
        self.map_or(Ok(Value::Null), Storable::into_storable)
    }
}
