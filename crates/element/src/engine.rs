//! Typed get/set/add/find operations over any element accessor.
//!
//! Single-value reads look at index 0 only. `get_*` fails with
//! [`ElementError::ValueMissing`] on an empty collection or a null payload,
//! `find_*` returns `None` instead. List reads coerce every element and
//! skip null payloads.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tasklane_core::{DocumentItem, ElementValue, PrincipalItem};

use crate::accessor::{ElementValueAccessor, ElementValueSource};
use crate::error::ElementError;
use crate::input::ElementInput;

/// Result type for element operations.
pub type Result<T> = std::result::Result<T, ElementError>;

// ── write path ──────────────────────────────────────────────────────────────

/// Current values in order; an absent code reads as empty.
pub fn get_values<A: ElementValueSource + ?Sized>(accessor: &A) -> &[ElementValue] {
    accessor.element_values().unwrap_or(&[])
}

/// Replace the collection with a single value.
pub fn set_value<A, V>(accessor: &mut A, value: V) -> Result<()>
where
    A: ElementValueAccessor + ?Sized,
    V: Into<ElementInput>,
{
    set_values(accessor, [value])
}

/// Replace the collection. An empty input removes the code.
///
/// Every input is classified before the host is touched, so an
/// unsupported value leaves the collection as it was.
pub fn set_values<A, I>(accessor: &mut A, values: I) -> Result<()>
where
    A: ElementValueAccessor + ?Sized,
    I: IntoIterator,
    I::Item: Into<ElementInput>,
{
    let values = classify(values)?;
    tracing::debug!(code = accessor.code(), len = values.len(), "replacing element values");
    accessor.set_element_values(values);
    Ok(())
}

/// Append one value.
pub fn add_value<A, V>(accessor: &mut A, value: V) -> Result<()>
where
    A: ElementValueAccessor + ?Sized,
    V: Into<ElementInput>,
{
    add_values(accessor, [value])
}

/// Append values to whatever is stored.
pub fn add_values<A, I>(accessor: &mut A, values: I) -> Result<()>
where
    A: ElementValueAccessor + ?Sized,
    I: IntoIterator,
    I::Item: Into<ElementInput>,
{
    let added = classify(values)?;
    if added.is_empty() {
        return Ok(());
    }
    let mut current = get_values(&*accessor).to_vec();
    tracing::debug!(
        code = accessor.code(),
        existing = current.len(),
        added = added.len(),
        "appending element values"
    );
    current.extend(added);
    accessor.set_element_values(current);
    Ok(())
}

/// Remove every value stored under the accessor's code.
pub fn clear_values<A: ElementValueAccessor + ?Sized>(accessor: &mut A) {
    tracing::debug!(code = accessor.code(), "clearing element values");
    accessor.set_element_values(Vec::new());
}

fn classify<I>(values: I) -> Result<Vec<ElementValue>>
where
    I: IntoIterator,
    I::Item: Into<ElementInput>,
{
    values
        .into_iter()
        .map(|value| value.into().into_element_value())
        .collect()
}

// ── coercion ────────────────────────────────────────────────────────────────

fn coerce_string(code: &str, value: &ElementValue) -> Result<Option<String>> {
    match value {
        ElementValue::String { value, .. } => Ok(value.clone()),
        ElementValue::Number { value, .. } => Ok(value.map(|number| number.to_string())),
        other => Err(mismatch(code, "not a String", other)),
    }
}

fn coerce_double(code: &str, value: &ElementValue) -> Result<Option<f64>> {
    match value {
        ElementValue::Number { value, .. } => Ok(*value),
        ElementValue::String { value: None, .. } => Ok(None),
        ElementValue::String {
            value: Some(text), ..
        } => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| mismatch(code, "not a number", value)),
        other => Err(mismatch(code, "not a Number", other)),
    }
}

fn coerce_local_date(code: &str, value: &ElementValue) -> Result<Option<NaiveDate>> {
    let Some(text) = coerce_string(code, value)? else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map(Some)
        .map_err(|_| mismatch(code, "not a date", value))
}

fn coerce_map(code: &str, value: &ElementValue) -> Result<Map<String, Value>> {
    match value {
        ElementValue::Object { value, .. } => Ok(value.clone().unwrap_or_default()),
        other => Err(mismatch(code, "not an Object", other)),
    }
}

fn coerce_document(code: &str, value: &ElementValue) -> Result<Option<DocumentItem>> {
    match value {
        ElementValue::Document { value, .. } => Ok(value.clone()),
        other => Err(mismatch(code, "not a Document", other)),
    }
}

fn coerce_principal(code: &str, value: &ElementValue) -> Result<Option<PrincipalItem>> {
    match value {
        ElementValue::Principal { value, .. } => Ok(value.clone()),
        other => Err(mismatch(code, "not a Principal", other)),
    }
}

fn mismatch(code: &str, reason: &str, value: &ElementValue) -> ElementError {
    tracing::trace!(code, reason, kind = value.type_name(), "element coercion failed");
    ElementError::mismatch(code, reason, value)
}

// ── read path ───────────────────────────────────────────────────────────────

fn find_first<A, T>(
    accessor: &A,
    coerce: impl Fn(&str, &ElementValue) -> Result<Option<T>>,
) -> Result<Option<T>>
where
    A: ElementValueSource + ?Sized,
{
    match get_values(accessor).first() {
        Some(value) => coerce(accessor.code(), value),
        None => Ok(None),
    }
}

fn get_first<A, T>(
    accessor: &A,
    coerce: impl Fn(&str, &ElementValue) -> Result<Option<T>>,
) -> Result<T>
where
    A: ElementValueSource + ?Sized,
{
    find_first(accessor, coerce)?.ok_or_else(|| ElementError::ValueMissing {
        code: accessor.code().to_owned(),
    })
}

fn get_list<A, T>(
    accessor: &A,
    coerce: impl Fn(&str, &ElementValue) -> Result<Option<T>>,
) -> Result<Vec<T>>
where
    A: ElementValueSource + ?Sized,
{
    let code = accessor.code();
    let mut out = Vec::new();
    for value in get_values(accessor) {
        if let Some(item) = coerce(code, value)? {
            out.push(item);
        }
    }
    Ok(out)
}

fn coerce_map_present(code: &str, value: &ElementValue) -> Result<Option<Map<String, Value>>> {
    coerce_map(code, value).map(Some)
}

/// First value as text.
///
/// Numbers are formatted with `f64`'s `Display`: `42.0` reads as `"42"` and
/// `3.5` as `"3.5"`.
pub fn get_value_as_string<A: ElementValueSource + ?Sized>(accessor: &A) -> Result<String> {
    get_first(accessor, coerce_string)
}

/// First value as text, `None` when absent.
pub fn find_value_as_string<A: ElementValueSource + ?Sized>(accessor: &A) -> Result<Option<String>> {
    find_first(accessor, coerce_string)
}

/// Every value as text.
pub fn get_value_as_string_list<A: ElementValueSource + ?Sized>(accessor: &A) -> Result<Vec<String>> {
    get_list(accessor, coerce_string)
}

/// First value as a number. Text is parsed.
pub fn get_value_as_double<A: ElementValueSource + ?Sized>(accessor: &A) -> Result<f64> {
    get_first(accessor, coerce_double)
}

/// First value as a number, `None` when absent.
pub fn find_value_as_double<A: ElementValueSource + ?Sized>(accessor: &A) -> Result<Option<f64>> {
    find_first(accessor, coerce_double)
}

/// Every value as a number.
pub fn get_value_as_double_list<A: ElementValueSource + ?Sized>(accessor: &A) -> Result<Vec<f64>> {
    get_list(accessor, coerce_double)
}

/// First value as an ISO-8601 calendar date.
pub fn get_value_as_local_date<A: ElementValueSource + ?Sized>(accessor: &A) -> Result<NaiveDate> {
    get_first(accessor, coerce_local_date)
}

/// First value as a calendar date, `None` when absent.
pub fn find_value_as_local_date<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<Option<NaiveDate>> {
    find_first(accessor, coerce_local_date)
}

/// Every value as a calendar date.
pub fn get_value_as_local_date_list<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<Vec<NaiveDate>> {
    get_list(accessor, coerce_local_date)
}

/// First value as a JSON object. A null `OBJECT` payload reads as empty.
pub fn get_value_as_map<A: ElementValueSource + ?Sized>(accessor: &A) -> Result<Map<String, Value>> {
    get_first(accessor, coerce_map_present)
}

/// First value as a JSON object, `None` when the collection is empty.
pub fn find_value_as_map<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<Option<Map<String, Value>>> {
    find_first(accessor, coerce_map_present)
}

/// Every value as a JSON object.
pub fn get_value_as_map_list<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<Vec<Map<String, Value>>> {
    get_list(accessor, coerce_map_present)
}

/// First value as a document reference.
pub fn get_value_as_document<A: ElementValueSource + ?Sized>(accessor: &A) -> Result<DocumentItem> {
    get_first(accessor, coerce_document)
}

/// First value as a document reference, `None` when absent.
pub fn find_value_as_document<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<Option<DocumentItem>> {
    find_first(accessor, coerce_document)
}

/// Every value as a document reference.
pub fn get_value_as_document_list<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<Vec<DocumentItem>> {
    get_list(accessor, coerce_document)
}

/// First value as a principal reference.
pub fn get_value_as_principal<A: ElementValueSource + ?Sized>(accessor: &A) -> Result<PrincipalItem> {
    get_first(accessor, coerce_principal)
}

/// First value as a principal reference, `None` when absent.
pub fn find_value_as_principal<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<Option<PrincipalItem>> {
    find_first(accessor, coerce_principal)
}

/// Every value as a principal reference.
pub fn get_value_as_principal_list<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<Vec<PrincipalItem>> {
    get_list(accessor, coerce_principal)
}

// ── validity ────────────────────────────────────────────────────────────────

/// Collection validity: `None` when empty, otherwise `false` iff some
/// value is explicitly flagged invalid.
pub fn get_value_valid<A: ElementValueSource + ?Sized>(accessor: &A) -> Option<bool> {
    let values = get_values(accessor);
    if values.is_empty() {
        return None;
    }
    Some(values.iter().all(|value| value.valid() != Some(false)))
}

/// The flag of the value at `index`, verbatim.
pub fn get_value_valid_at<A: ElementValueSource + ?Sized>(
    accessor: &A,
    index: usize,
) -> Result<Option<bool>> {
    let values = get_values(accessor);
    values
        .get(index)
        .map(ElementValue::valid)
        .ok_or_else(|| out_of_range(accessor.code(), index, values.len()))
}

/// Set the flag on every value.
pub fn set_value_valid<A: ElementValueAccessor + ?Sized>(
    accessor: &mut A,
    valid: impl Into<Option<bool>>,
) {
    let valid = valid.into();
    let mut values = get_values(&*accessor).to_vec();
    if values.is_empty() {
        return;
    }
    for value in &mut values {
        value.set_valid(valid);
    }
    accessor.set_element_values(values);
}

/// Set the flag on the value at `index`.
pub fn set_value_valid_at<A: ElementValueAccessor + ?Sized>(
    accessor: &mut A,
    index: usize,
    valid: impl Into<Option<bool>>,
) -> Result<()> {
    let mut values = get_values(&*accessor).to_vec();
    let len = values.len();
    let Some(value) = values.get_mut(index) else {
        return Err(out_of_range(accessor.code(), index, len));
    };
    value.set_valid(valid.into());
    accessor.set_element_values(values);
    Ok(())
}

fn out_of_range(code: &str, index: usize, len: usize) -> ElementError {
    ElementError::IndexOutOfRange {
        code: code.to_owned(),
        index,
        len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;
    use tasklane_core::ProcessSaveElementCommand;

    fn command(values: Vec<ElementValue>) -> ProcessSaveElementCommand {
        let mut command = ProcessSaveElementCommand::new("EV");
        command.element_values = Some(values);
        command
    }

    #[rstest]
    #[case(ElementValue::string("abc"), "abc")]
    #[case(ElementValue::number(42.0), "42")]
    #[case(ElementValue::number(3.5), "3.5")]
    fn string_coercion(#[case] stored: ElementValue, #[case] expected: &str) {
        assert_eq!(get_value_as_string(&command(vec![stored])).unwrap(), expected);
    }

    #[test]
    fn string_from_object_is_mismatch() {
        let acc = command(vec![ElementValue::object(Map::new())]);
        let err = get_value_as_string(&acc).unwrap_err();
        assert!(matches!(err, ElementError::TypeMismatch { ref reason, .. } if reason == "not a String"));
    }

    #[rstest]
    #[case(ElementValue::number(2.5), 2.5)]
    #[case(ElementValue::string("3.5"), 3.5)]
    #[case(ElementValue::string(" 7 "), 7.0)]
    fn double_coercion(#[case] stored: ElementValue, #[case] expected: f64) {
        assert_eq!(get_value_as_double(&command(vec![stored])).unwrap(), expected);
    }

    #[rstest]
    #[case(ElementValue::string("abc"), "not a number")]
    #[case(ElementValue::object(Map::new()), "not a Number")]
    fn double_mismatch_reasons(#[case] stored: ElementValue, #[case] expected: &str) {
        match get_value_as_double(&command(vec![stored])).unwrap_err() {
            ElementError::TypeMismatch { reason, .. } => assert_eq!(reason, expected),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn local_date_parses_iso_text() {
        let acc = command(vec![ElementValue::string("2023-12-31")]);
        assert_eq!(
            get_value_as_local_date(&acc).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );

        let acc = command(vec![ElementValue::string("31/12/2023")]);
        assert!(matches!(
            get_value_as_local_date(&acc),
            Err(ElementError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn null_object_reads_as_empty_map() {
        let acc = command(vec![ElementValue::Object {
            value: None,
            valid: None,
        }]);
        assert_eq!(get_value_as_map(&acc).unwrap(), Map::new());
        assert_eq!(find_value_as_map(&acc).unwrap(), Some(Map::new()));
    }

    #[test]
    fn null_payload_is_missing_for_get_and_none_for_find() {
        let acc = command(vec![ElementValue::String {
            value: None,
            valid: Some(true),
        }]);
        assert!(matches!(
            get_value_as_string(&acc),
            Err(ElementError::ValueMissing { .. })
        ));
        assert_eq!(find_value_as_string(&acc).unwrap(), None);
    }

    #[test]
    fn list_reads_skip_null_payloads() {
        let acc = command(vec![
            ElementValue::number(1.0),
            ElementValue::Number {
                value: None,
                valid: None,
            },
            ElementValue::string("2"),
        ]);
        assert_eq!(get_value_as_double_list(&acc).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn map_list_keeps_object_order() {
        let first = json!({"a": 1}).as_object().cloned().unwrap();
        let second = json!({"b": 2}).as_object().cloned().unwrap();
        let acc = command(vec![
            ElementValue::object(first.clone()),
            ElementValue::object(second.clone()),
        ]);
        assert_eq!(get_value_as_map_list(&acc).unwrap(), vec![first, second]);
    }

    #[test]
    fn set_values_rejects_before_mutating() {
        let mut acc = command(vec![ElementValue::string("keep")]);
        let err = set_values(
            &mut acc,
            [ElementInput::from("a"), ElementInput::from(json!(true))],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ElementError::UnsupportedValueType {
                type_name: "boolean".into()
            }
        );
        assert_eq!(get_values(&acc), &[ElementValue::string("keep")]);
    }

    #[test]
    fn set_value_rejects_non_finite_numbers() {
        let mut acc = command(vec![ElementValue::number(1.5)]);
        for number in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                set_value(&mut acc, number).unwrap_err(),
                ElementError::UnsupportedValueType {
                    type_name: "non-finite number".into()
                }
            );
        }
        assert!(add_value(&mut acc, f32::NAN).is_err());
        assert_eq!(get_value_as_double(&acc).unwrap(), 1.5);
    }

    #[test]
    fn valid_at_out_of_range() {
        let mut acc = command(vec![ElementValue::string("a")]);
        assert_eq!(
            get_value_valid_at(&acc, 1).unwrap_err(),
            ElementError::IndexOutOfRange {
                code: "EV".into(),
                index: 1,
                len: 1
            }
        );
        assert!(set_value_valid_at(&mut acc, 5, false).is_err());
    }

    #[test]
    fn set_value_valid_on_empty_is_noop() {
        let mut acc = ProcessSaveElementCommand::new("EV");
        set_value_valid(&mut acc, true);
        assert!(acc.element_values.is_none());
        assert_eq!(get_value_valid(&acc), None);
    }
}
