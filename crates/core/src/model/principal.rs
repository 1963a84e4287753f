//! Principal (user or application identity) references.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::PrincipalId;

/// Kind of identity behind a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrincipalType {
    /// A human user.
    User,
    /// A registered application (robot, integration).
    Application,
    /// The platform itself.
    System,
}

impl PrincipalType {
    /// Wire representation, e.g. `"USER"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Application => "APPLICATION",
            Self::System => "SYSTEM",
        }
    }
}

impl fmt::Display for PrincipalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrincipalType {
    type Err = CoreError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::User, Self::Application, Self::System]
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownPrincipalType(s.to_owned()))
    }
}

/// Reference to a user or application identity, as stored in a
/// `PRINCIPAL` element value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalItem {
    /// Principal identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PrincipalId>,
    /// Identity kind.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub principal_type: Option<PrincipalType>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PrincipalItem {
    /// Create a fully populated principal reference.
    #[must_use]
    pub fn new(id: PrincipalId, principal_type: PrincipalType, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            principal_type: Some(principal_type),
            name: Some(name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("USER", PrincipalType::User)]
    #[case("user", PrincipalType::User)]
    #[case("Application", PrincipalType::Application)]
    #[case("SYSTEM", PrincipalType::System)]
    fn principal_type_parses_case_insensitively(#[case] raw: &str, #[case] expected: PrincipalType) {
        assert_eq!(raw.parse::<PrincipalType>().unwrap(), expected);
    }

    #[test]
    fn principal_type_rejects_unknown() {
        let err = "ROBOT".parse::<PrincipalType>().unwrap_err();
        assert_eq!(err, CoreError::UnknownPrincipalType("ROBOT".into()));
    }

    #[test]
    fn principal_item_wire_shape() {
        let id = PrincipalId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let item = PrincipalItem::new(id, PrincipalType::Application, "robot");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "type": "APPLICATION",
                "name": "robot"
            })
        );
        let back: PrincipalItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }
}
