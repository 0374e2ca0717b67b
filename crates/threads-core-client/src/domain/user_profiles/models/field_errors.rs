// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use super::ProfileField;

/// Validation messages keyed by the field they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<ProfileField, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: ProfileField, message: impl Into<String>) {
        // Keep the first message per field, like a schema that stops at the first
        // failing check.
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl FromIterator<(ProfileField, String)> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = (ProfileField, String)>>(iter: T) -> Self {
        let mut errors = FieldErrors::default();
        for (field, message) in iter {
            errors.insert(field, message);
        }
        errors
    }
}
