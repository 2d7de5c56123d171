//! Validation engine for the registration form.
//!
//! `validate` is a pure function from a `StudentForm` snapshot to an
//! `ErrorMap`. Each field owns an ordered list of rules; all rules of a field
//! are evaluated in declaration order and the message of the last failing rule
//! is the one recorded. This is how a shape rule (student ID length, postal code
//! format) replaces the presence message of the same field.
//!
//! Shape rules only apply to non-blank values, so a blank field always reports
//! its presence message.

mod error_map;

use regex::Regex;
use std::sync::LazyLock;

use crate::model::field::FieldName;
use crate::model::student::{StudentForm, YearLevel};

pub use error_map::ErrorMap;

pub const PROFILE_PICTURE_REQUIRED: &str = "Profile picture is required";
pub const INVALID_IMAGE: &str = "Please select a valid image file";
pub const STUDENT_ID_TOO_SHORT: &str = "Student ID must be at least 8 characters";
pub const POSTAL_CODE_FORMAT: &str = "Postal code must be 4 digits";

pub const STUDENT_ID_MIN_LEN: usize = 8;

static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("postal code pattern is valid"));

/// A single predicate/message pair. `check` returns `true` when the form passes.
struct Rule {
    check: fn(&StudentForm) -> bool,
    message: &'static str,
}

const fn rule(check: fn(&StudentForm) -> bool, message: &'static str) -> Rule {
    Rule { check, message }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn has_profile_picture(form: &StudentForm) -> bool {
    form.profile_picture.is_some()
}

fn student_id_long_enough(form: &StudentForm) -> bool {
    let id = form.student_id.trim();
    id.is_empty() || id.chars().count() >= STUDENT_ID_MIN_LEN
}

fn postal_code_well_formed(form: &StudentForm) -> bool {
    !present(&form.postal_code) || POSTAL_CODE_RE.is_match(&form.postal_code)
}

fn year_is_an_option(form: &StudentForm) -> bool {
    !present(&form.year) || form.year.parse::<YearLevel>().is_ok()
}

/// Rules per field, in evaluation order. `middleName` has none.
static RULES: [(FieldName, &[Rule]); 11] = [
    (
        FieldName::ProfilePicture,
        &[rule(has_profile_picture, PROFILE_PICTURE_REQUIRED)],
    ),
    (
        FieldName::FirstName,
        &[rule(|f| present(&f.first_name), "First name is required")],
    ),
    (
        FieldName::LastName,
        &[rule(|f| present(&f.last_name), "Last name is required")],
    ),
    (
        FieldName::StudentId,
        &[
            rule(|f| present(&f.student_id), "Student ID is required"),
            rule(student_id_long_enough, STUDENT_ID_TOO_SHORT),
        ],
    ),
    (
        FieldName::Course,
        &[rule(|f| present(&f.course), "Course is required")],
    ),
    (
        FieldName::Year,
        &[
            rule(|f| present(&f.year), "Year is required"),
            // anything outside the option list counts as unselected
            rule(year_is_an_option, "Year is required"),
        ],
    ),
    (
        FieldName::Section,
        &[rule(|f| present(&f.section), "Section is required")],
    ),
    (
        FieldName::Street,
        &[rule(|f| present(&f.street), "Street address is required")],
    ),
    (
        FieldName::CityMunicipality,
        &[rule(
            |f| present(&f.city_municipality),
            "City/Municipality is required",
        )],
    ),
    (
        FieldName::Province,
        &[rule(|f| present(&f.province), "Province is required")],
    ),
    (
        FieldName::PostalCode,
        &[
            rule(|f| present(&f.postal_code), "Postal code is required"),
            rule(postal_code_well_formed, POSTAL_CODE_FORMAT),
        ],
    ),
];

/// Evaluates every rule against `form` and returns the failures.
///
/// Deterministic and side-effect free apart from a debug log line.
pub fn validate(form: &StudentForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for (field, rules) in RULES.iter() {
        for rule in rules.iter() {
            if !(rule.check)(form) {
                errors.insert(*field, rule.message);
            }
        }
    }
    log::debug!("validation pass: {} field(s) failing", errors.len());
    errors
}

/// Fields that carry at least one rule, in evaluation order.
pub fn validated_fields() -> impl Iterator<Item = FieldName> {
    RULES.iter().map(|(field, _)| *field)
}
