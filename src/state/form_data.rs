//! Applicant form data model and validation

use super::forms::Field;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Education level options, in select order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EducationLevel {
    HighSchool,
    Bachelors,
    Masters,
    Phd,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        Self::HighSchool,
        Self::Bachelors,
        Self::Masters,
        Self::Phd,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::Bachelors => "Bachelor's Degree",
            Self::Masters => "Master's Degree",
            Self::Phd => "PhD",
        }
    }
}

/// Step data owned by the parent controller.
///
/// The form widget never holds a draft copy; every field change is applied
/// here through [`FormData::apply`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub age: Option<u32>,
    pub country_of_origin: String,
    pub education_level: Option<EducationLevel>,
}

/// A single-field mutation requested by the form widget
#[derive(Debug, Clone, PartialEq)]
pub enum FormPatch {
    Age(Option<u32>),
    CountryOfOrigin(String),
    EducationLevel(Option<EducationLevel>),
}

impl FormData {
    /// Apply one field mutation
    pub fn apply(&mut self, patch: FormPatch) {
        match patch {
            FormPatch::Age(age) => self.age = age,
            FormPatch::CountryOfOrigin(code) => self.country_of_origin = code,
            FormPatch::EducationLevel(level) => self.education_level = level,
        }
    }
}

/// Per-field validation messages from the last validation pass.
///
/// Replaced wholesale by [`validate`], never edited incrementally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: HashMap<Field, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// External names of the fields currently in error, sorted
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.errors.keys().map(Field::name).collect();
        names.sort_unstable();
        names
    }
}

/// Check the three required fields for presence.
///
/// Age bounds are widget hints only and are not checked here.
pub fn validate(data: &FormData) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if data.age.is_none() {
        errors.insert(Field::Age, "Age is required");
    }
    if data.country_of_origin.is_empty() {
        errors.insert(Field::CountryOfOrigin, "Please select a country");
    }
    if data.education_level.is_none() {
        errors.insert(Field::EducationLevel, "Please select education level");
    }
    errors
}
