//! The registration FieldSet: every value the form collects for one attempt.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::field::FieldName;
use super::photo::Photo;

/// The fixed, ordered set of year options offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum YearLevel {
    #[serde(rename = "1st Year")]
    First,
    #[serde(rename = "2nd Year")]
    Second,
    #[serde(rename = "3rd Year")]
    Third,
    #[serde(rename = "4th Year")]
    Fourth,
    #[serde(rename = "5th Year")]
    Fifth,
}

impl YearLevel {
    pub const ALL: [YearLevel; 5] = [
        YearLevel::First,
        YearLevel::Second,
        YearLevel::Third,
        YearLevel::Fourth,
        YearLevel::Fifth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            YearLevel::First => "1st Year",
            YearLevel::Second => "2nd Year",
            YearLevel::Third => "3rd Year",
            YearLevel::Fourth => "4th Year",
            YearLevel::Fifth => "5th Year",
        }
    }
}

impl fmt::Display for YearLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for YearLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YearLevel::ALL
            .into_iter()
            .find(|year| year.label() == s)
            .ok_or(())
    }
}

/// Current values of every form field.
///
/// Text fields are always defined (empty string until edited); only the
/// profile picture may be absent. `year` holds the selected option label, or
/// the empty string while unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub profile_picture: Option<Photo>,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub student_id: String,
    pub course: String,
    pub year: String,
    pub section: String,
    pub street: String,
    pub city_municipality: String,
    pub province: String,
    pub postal_code: String,
}

impl StudentForm {
    /// Returns the value of a text field, `None` for the profile picture.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::ProfilePicture => return None,
            FieldName::FirstName => &self.first_name,
            FieldName::MiddleName => &self.middle_name,
            FieldName::LastName => &self.last_name,
            FieldName::StudentId => &self.student_id,
            FieldName::Course => &self.course,
            FieldName::Year => &self.year,
            FieldName::Section => &self.section,
            FieldName::Street => &self.street,
            FieldName::CityMunicipality => &self.city_municipality,
            FieldName::Province => &self.province,
            FieldName::PostalCode => &self.postal_code,
        };
        Some(value.as_str())
    }

    pub(crate) fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        let value = match field {
            FieldName::ProfilePicture => return None,
            FieldName::FirstName => &mut self.first_name,
            FieldName::MiddleName => &mut self.middle_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::StudentId => &mut self.student_id,
            FieldName::Course => &mut self.course,
            FieldName::Year => &mut self.year,
            FieldName::Section => &mut self.section,
            FieldName::Street => &mut self.street,
            FieldName::CityMunicipality => &mut self.city_municipality,
            FieldName::Province => &mut self.province,
            FieldName::PostalCode => &mut self.postal_code,
        };
        Some(value)
    }

    /// The selected year, if `year` holds one of the enumerated labels.
    pub fn year_level(&self) -> Option<YearLevel> {
        self.year.parse().ok()
    }

    /// "First Middle Last", skipping an empty middle name.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let form = StudentForm::default();
        assert!(form.profile_picture.is_none());
        for field in FieldName::ALL.into_iter().filter(|f| f.is_text()) {
            assert_eq!(form.text(field), Some(""));
        }
    }

    #[test]
    fn year_labels_round_trip_in_order() {
        let labels: Vec<_> = YearLevel::ALL.iter().map(|y| y.label()).collect();
        assert_eq!(labels, ["1st Year", "2nd Year", "3rd Year", "4th Year", "5th Year"]);
        assert_eq!("3rd Year".parse::<YearLevel>(), Ok(YearLevel::Third));
        assert!("".parse::<YearLevel>().is_err());
        assert!("6th Year".parse::<YearLevel>().is_err());
    }

    #[test]
    fn full_name_skips_blank_middle_name() {
        let form = StudentForm {
            first_name: "Juan".into(),
            middle_name: "  ".into(),
            last_name: "Dela Cruz".into(),
            ..Default::default()
        };
        assert_eq!(form.full_name(), "Juan Dela Cruz");
    }
}
