//! Form field definitions and age entry helpers

/// Input widget hint bounds for the age spinner
pub const AGE_HINT_MIN: u32 = 15;
pub const AGE_HINT_MAX: u32 = 99;

/// The independently validated inputs of the step, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    CountryOfOrigin,
    EducationLevel,
}

impl Field {
    pub const ALL: [Field; 3] = [Self::Age, Self::CountryOfOrigin, Self::EducationLevel];

    /// External field name, matching the persisted snapshot keys
    pub fn name(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::CountryOfOrigin => "countryOfOrigin",
            Self::EducationLevel => "educationLevel",
        }
    }

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Age => "Age (15-99)",
            Self::CountryOfOrigin => "Country of Origin",
            Self::EducationLevel => "Current Education Level",
        }
    }
}

/// Append a typed digit to the age value
pub fn push_age_digit(age: Option<u32>, digit: u32) -> Option<u32> {
    match age {
        None => Some(digit),
        Some(current) => Some(
            current
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .unwrap_or(current),
        ),
    }
}

/// Drop the last digit of the age value
pub fn pop_age_digit(age: Option<u32>) -> Option<u32> {
    age.and_then(|v| if v < 10 { None } else { Some(v / 10) })
}

/// Step the age up, within the widget hint bounds
pub fn age_step_up(age: Option<u32>) -> Option<u32> {
    match age {
        None => Some(AGE_HINT_MIN),
        Some(a) => Some((a + 1).clamp(AGE_HINT_MIN, AGE_HINT_MAX)),
    }
}

/// Step the age down, within the widget hint bounds
pub fn age_step_down(age: Option<u32>) -> Option<u32> {
    match age {
        None => Some(AGE_HINT_MIN),
        Some(a) => Some(a.saturating_sub(1).clamp(AGE_HINT_MIN, AGE_HINT_MAX)),
    }
}
