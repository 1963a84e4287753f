//! String encodings of files and principals inside form data.
//!
//! Dynamic forms store an uploaded file as
//! `tasklane-file:uri=…;type=…;size=…;name=…;` and a selected principal as
//! `tasklane-principal:id=…;type=…;name=…;`. Both are plain string leaves
//! in the data tree.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tasklane_core::{PrincipalId, PrincipalItem, PrincipalType};

static FILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^tasklane-file:uri=([A-Za-z][A-Za-z0-9+.-]*:[A-Za-z0-9/_.-]+);type=([A-Za-z0-9.+-]+/[A-Za-z0-9.+-]+);size=([0-9]+);name=(.*);$",
    )
    .expect("file pattern compiles")
});

static PRINCIPAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^tasklane-principal:id=([0-9a-fA-F-]+);type=([A-Za-z_]+);name=(.*);$")
        .expect("principal pattern compiles")
});

/// A form string that does not follow the expected encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed {kind} value `{value}`")]
pub struct ParseFormValueError {
    kind: &'static str,
    value: String,
}

impl ParseFormValueError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }

    /// `file` or `principal`.
    #[must_use]
    pub fn kind(&self) -> &str {
        self.kind
    }

    /// The offending text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

fn captures<'t>(
    pattern: &Regex,
    kind: &'static str,
    text: &'t str,
) -> Result<regex::Captures<'t>, ParseFormValueError> {
    pattern
        .captures(text)
        .ok_or_else(|| ParseFormValueError::new(kind, text))
}

fn encode_checked<T>(value: &T, kind: &'static str) -> Result<String, ParseFormValueError>
where
    T: fmt::Display + FromStr + PartialEq,
{
    let text = value.to_string();
    match text.parse::<T>() {
        Ok(decoded) if decoded == *value => Ok(text),
        _ => Err(ParseFormValueError::new(kind, &text)),
    }
}

/// A file uploaded through a dynamic form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormFile {
    /// Storage URI.
    pub uri: String,
    /// MIME type.
    pub content_type: String,
    /// Size in bytes.
    pub size: u64,
    /// Original file name.
    pub name: String,
}

impl FormFile {
    /// Build a file reference without checking that it encodes cleanly.
    ///
    /// Use [`FormFile::try_new`] for caller-supplied parts.
    pub fn new(
        uri: impl Into<String>,
        content_type: impl Into<String>,
        size: u64,
        name: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            content_type: content_type.into(),
            size,
            name: name.into(),
        }
    }

    /// Build a file reference whose encoded form parses back to itself.
    pub fn try_new(
        uri: impl Into<String>,
        content_type: impl Into<String>,
        size: u64,
        name: impl Into<String>,
    ) -> Result<Self, ParseFormValueError> {
        let file = Self::new(uri, content_type, size, name);
        file.encode().map(|_| file)
    }

    /// The encoded string, failing when it would not decode to `self`.
    pub fn encode(&self) -> Result<String, ParseFormValueError> {
        encode_checked(self, "file")
    }
}

impl fmt::Display for FormFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tasklane-file:uri={};type={};size={};name={};",
            self.uri, self.content_type, self.size, self.name
        )
    }
}

impl FromStr for FormFile {
    type Err = ParseFormValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = captures(&FILE_PATTERN, "file", s)?;
        let size = caps[3]
            .parse()
            .map_err(|_| ParseFormValueError::new("file", s))?;
        Ok(Self::new(&caps[1], &caps[2], size, &caps[4]))
    }
}

/// A user, application or system principal selected in a dynamic form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormPrincipal {
    pub id: PrincipalId,
    pub principal_type: PrincipalType,
    pub name: String,
}

impl FormPrincipal {
    pub fn new(id: PrincipalId, principal_type: PrincipalType, name: impl Into<String>) -> Self {
        Self {
            id,
            principal_type,
            name: name.into(),
        }
    }

    /// The encoded string, failing when it would not decode to `self`.
    pub fn encode(&self) -> Result<String, ParseFormValueError> {
        encode_checked(self, "principal")
    }
}

impl fmt::Display for FormPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tasklane-principal:id={};type={};name={};",
            self.id, self.principal_type, self.name
        )
    }
}

impl FromStr for FormPrincipal {
    type Err = ParseFormValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = captures(&PRINCIPAL_PATTERN, "principal", s)?;
        let id = PrincipalId::parse(&caps[1]).map_err(|_| ParseFormValueError::new("principal", s))?;
        let principal_type = caps[2]
            .parse()
            .map_err(|_| ParseFormValueError::new("principal", s))?;
        Ok(Self::new(id, principal_type, &caps[3]))
    }
}

impl From<FormPrincipal> for PrincipalItem {
    fn from(principal: FormPrincipal) -> Self {
        Self::new(principal.id, principal.principal_type, principal.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn file_round_trips_through_text() {
        let file = FormFile::new("tl:files/a1-b2", "application/pdf", 1024, "report; final.pdf");
        let text = file.to_string();
        assert_eq!(
            text,
            "tasklane-file:uri=tl:files/a1-b2;type=application/pdf;size=1024;name=report; final.pdf;"
        );
        assert_eq!(text.parse::<FormFile>().unwrap(), file);
    }

    #[rstest]
    #[case("tasklane-file:uri=tl:x;type=text/plain;size=12;name=a.txt")]
    #[case("tasklane-file:uri=tl:x;type=text;size=12;name=a.txt;")]
    #[case("tasklane-file:uri=tl:x;type=text/plain;size=-1;name=a.txt;")]
    #[case("kuflow-file:uri=ku:x;type=text/plain;size=1;name=a.txt;")]
    fn malformed_files(#[case] text: &str) {
        assert!(text.parse::<FormFile>().is_err());
    }

    #[rstest]
    #[case("tl:files/a", "text/plain;charset=utf-8", "a.txt")]
    #[case("tl:files/my file", "text/plain", "a.txt")]
    #[case("files/a", "text/plain", "a.txt")]
    #[case("tl:files/a", "text/plain", "two\nlines.txt")]
    fn files_that_do_not_decode_are_refused(
        #[case] uri: &str,
        #[case] content_type: &str,
        #[case] name: &str,
    ) {
        assert!(FormFile::new(uri, content_type, 1, name).encode().is_err());
        assert!(FormFile::try_new(uri, content_type, 1, name).is_err());
    }

    #[test]
    fn try_new_accepts_encodable_parts() {
        let file = FormFile::try_new("tl:files/a", "text/plain", 1, "a; b.txt").unwrap();
        assert_eq!(
            file.encode().unwrap(),
            "tasklane-file:uri=tl:files/a;type=text/plain;size=1;name=a; b.txt;"
        );
    }

    #[test]
    fn principal_round_trips_through_text() {
        let principal = FormPrincipal::new(
            PrincipalId::parse("2b7a4f2e-9c1d-4e3a-8f5b-6d0c1e2f3a4b").unwrap(),
            PrincipalType::User,
            "Ana Diaz",
        );
        let text = principal.to_string();
        assert_eq!(
            text,
            "tasklane-principal:id=2b7a4f2e-9c1d-4e3a-8f5b-6d0c1e2f3a4b;type=USER;name=Ana Diaz;"
        );
        assert_eq!(text.parse::<FormPrincipal>().unwrap(), principal);

        let item = PrincipalItem::from(principal);
        assert_eq!(item.name.as_deref(), Some("Ana Diaz"));
    }

    #[test]
    fn principal_type_is_case_insensitive() {
        let parsed: FormPrincipal =
            "tasklane-principal:id=2b7a4f2e-9c1d-4e3a-8f5b-6d0c1e2f3a4b;type=application;name=bot;"
                .parse()
                .unwrap();
        assert_eq!(parsed.principal_type, PrincipalType::Application);
    }

    #[test]
    fn unknown_principal_type_fails() {
        let err = "tasklane-principal:id=2b7a4f2e-9c1d-4e3a-8f5b-6d0c1e2f3a4b;type=ROBOT;name=x;"
            .parse::<FormPrincipal>()
            .unwrap_err();
        assert!(err.to_string().starts_with("malformed principal value"));
    }
}
