use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::form::FormError;

/// Identifies one member of the registration FieldSet.
///
/// The wire name (`as_str`) is the camelCase key used for the HTML `name`
/// attribute and for serialized error maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    ProfilePicture,
    FirstName,
    MiddleName,
    LastName,
    StudentId,
    Course,
    Year,
    Section,
    Street,
    CityMunicipality,
    Province,
    PostalCode,
}

impl FieldName {
    /// Every field in form order.
    pub const ALL: [FieldName; 12] = [
        FieldName::ProfilePicture,
        FieldName::FirstName,
        FieldName::MiddleName,
        FieldName::LastName,
        FieldName::StudentId,
        FieldName::Course,
        FieldName::Year,
        FieldName::Section,
        FieldName::Street,
        FieldName::CityMunicipality,
        FieldName::Province,
        FieldName::PostalCode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::ProfilePicture => "profilePicture",
            FieldName::FirstName => "firstName",
            FieldName::MiddleName => "middleName",
            FieldName::LastName => "lastName",
            FieldName::StudentId => "studentId",
            FieldName::Course => "course",
            FieldName::Year => "year",
            FieldName::Section => "section",
            FieldName::Street => "street",
            FieldName::CityMunicipality => "cityMunicipality",
            FieldName::Province => "province",
            FieldName::PostalCode => "postalCode",
        }
    }

    /// Whether the field holds a string value that `set_field` may replace.
    /// The profile picture is the only non-text member.
    pub fn is_text(self) -> bool {
        self != FieldName::ProfilePicture
    }

    /// Maximum number of characters accepted on input, if capped.
    pub fn max_len(self) -> Option<usize> {
        match self {
            FieldName::PostalCode => Some(4),
            _ => None,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>().unwrap(), field);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "nickname".parse::<FieldName>().unwrap_err();
        assert_eq!(err, FormError::UnknownField("nickname".to_string()));
    }

    #[test]
    fn only_postal_code_is_capped() {
        let capped: Vec<_> = FieldName::ALL
            .into_iter()
            .filter(|field| field.max_len().is_some())
            .collect();
        assert_eq!(capped, vec![FieldName::PostalCode]);
    }

    #[test]
    fn serializes_as_camel_case() {
        let json = serde_json::to_string(&FieldName::CityMunicipality).unwrap();
        assert_eq!(json, "\"cityMunicipality\"");
    }
}
