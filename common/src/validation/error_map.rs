use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::field::FieldName;

/// Field name to human-readable failure message. A field is valid iff it has
/// no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    /// Records `message` for `field`, replacing any earlier message.
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<(FieldName, String)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (FieldName, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_previous_message() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldName::StudentId, "first");
        errors.insert(FieldName::StudentId, "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldName::StudentId), Some("second"));
    }

    #[test]
    fn serializes_as_flat_object() {
        let errors: ErrorMap = [(FieldName::PostalCode, "Postal code must be 4 digits".to_string())]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"postalCode":"Postal code must be 4 digits"}"#);
    }
}
