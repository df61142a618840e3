//! Form widget state for the demographics step
//!
//! The widget owns only focus; field values live in the parent-owned
//! [`FormData`] and every edit is emitted as a [`FormPatch`].

use super::field::{age_step_down, age_step_up, pop_age_digit, push_age_digit, Field};
use crate::country;
use crate::state::{EducationLevel, FormData, FormPatch};

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Demographics step form (age, country, education, save row)
#[derive(Debug, Clone)]
pub struct StepOneForm {
    pub active_field_index: usize,
}

/// Focus position of the save row, after the three inputs
const SAVE_ROW_INDEX: usize = Field::ALL.len();

impl StepOneForm {
    pub fn new() -> Self {
        Self {
            active_field_index: 0,
        }
    }

    /// The input under focus, if focus is not on the save row
    pub fn active_input(&self) -> Option<Field> {
        Field::ALL.get(self.active_field_index).copied()
    }

    /// Returns true if the save row is currently active
    pub fn is_save_row_active(&self) -> bool {
        self.active_field_index == SAVE_ROW_INDEX
    }

    /// Translate a typed character into a field change
    pub fn input_char(&self, c: char, data: &FormData) -> Option<FormPatch> {
        match self.active_input()? {
            Field::Age => {
                let age = push_age_digit(data.age, c.to_digit(10)?);
                (age != data.age).then_some(FormPatch::Age(age))
            }
            // Selects take no character input
            Field::CountryOfOrigin | Field::EducationLevel => None,
        }
    }

    /// Translate a backspace into a field change
    pub fn backspace(&self, data: &FormData) -> Option<FormPatch> {
        match self.active_input()? {
            Field::Age => {
                let age = pop_age_digit(data.age);
                (age != data.age).then_some(FormPatch::Age(age))
            }
            Field::CountryOfOrigin | Field::EducationLevel => None,
        }
    }

    /// Handle an Up key on the focused input (previous option, or age step up)
    pub fn select_prev(&self, data: &FormData) -> Option<FormPatch> {
        match self.active_input()? {
            Field::Age => {
                let age = age_step_up(data.age);
                (age != data.age).then_some(FormPatch::Age(age))
            }
            Field::CountryOfOrigin => Some(FormPatch::CountryOfOrigin(cycle_country(
                &data.country_of_origin,
                Direction::Prev,
            ))),
            Field::EducationLevel => Some(FormPatch::EducationLevel(cycle_education(
                data.education_level,
                Direction::Prev,
            ))),
        }
    }

    /// Handle a Down key on the focused input (next option, or age step down)
    pub fn select_next(&self, data: &FormData) -> Option<FormPatch> {
        match self.active_input()? {
            Field::Age => {
                let age = age_step_down(data.age);
                (age != data.age).then_some(FormPatch::Age(age))
            }
            Field::CountryOfOrigin => Some(FormPatch::CountryOfOrigin(cycle_country(
                &data.country_of_origin,
                Direction::Next,
            ))),
            Field::EducationLevel => Some(FormPatch::EducationLevel(cycle_education(
                data.education_level,
                Direction::Next,
            ))),
        }
    }
}

impl Default for StepOneForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for StepOneForm {
    fn field_count(&self) -> usize {
        Field::ALL.len() + 1 // three inputs plus the save row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SAVE_ROW_INDEX);
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Prev,
    Next,
}

/// Cycle over position 0 = placeholder, positions 1..=n = options
fn cycle_position(current: usize, option_count: usize, direction: Direction) -> usize {
    let total = option_count + 1;
    match direction {
        Direction::Next => (current + 1) % total,
        Direction::Prev => (current + total - 1) % total,
    }
}

/// Cycle the country selection through the name-sorted options.
///
/// The empty selection is part of the cycle, mirroring the placeholder
/// option of the select it models.
fn cycle_country(selected: &str, direction: Direction) -> String {
    let options = country::sorted_by_name();
    let current = if selected.is_empty() {
        0
    } else {
        options
            .iter()
            .position(|c| c.code == selected)
            .map_or(0, |i| i + 1)
    };

    match cycle_position(current, options.len(), direction) {
        0 => String::new(),
        pos => options[pos - 1].code.to_string(),
    }
}

/// Cycle the education selection, placeholder included
fn cycle_education(selected: Option<EducationLevel>, direction: Direction) -> Option<EducationLevel> {
    let options = EducationLevel::ALL;
    let current = match selected {
        None => 0,
        Some(level) => options.iter().position(|l| *l == level).map_or(0, |i| i + 1),
    };

    match cycle_position(current, options.len(), direction) {
        0 => None,
        pos => Some(options[pos - 1]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_on_age() {
            let form = StepOneForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.active_input(), Some(Field::Age));
            assert!(!form.is_save_row_active());
        }

        #[test]
        fn test_field_count() {
            assert_eq!(StepOneForm::new().field_count(), 4);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = StepOneForm::new();
            form.next_field();
            assert_eq!(form.active_input(), Some(Field::CountryOfOrigin));
            form.next_field();
            assert_eq!(form.active_input(), Some(Field::EducationLevel));
            form.next_field();
            assert!(form.is_save_row_active());
            assert_eq!(form.active_input(), None);
            form.next_field();
            assert_eq!(form.active_input(), Some(Field::Age));
        }

        #[test]
        fn test_prev_field_wraps_to_save_row() {
            let mut form = StepOneForm::new();
            form.prev_field();
            assert!(form.is_save_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = StepOneForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 3);
        }
    }

    mod age_input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_digits_patches_once_per_change() {
            let mut data = FormData::default();
            let form = StepOneForm::new();

            let patch = form.input_char('4', &data).unwrap();
            assert_eq!(patch, FormPatch::Age(Some(4)));
            data.apply(patch);

            let patch = form.input_char('2', &data).unwrap();
            assert_eq!(patch, FormPatch::Age(Some(42)));
            data.apply(patch);

            assert_eq!(data.age, Some(42));
        }

        #[test]
        fn test_non_digit_is_ignored() {
            let data = FormData::default();
            let form = StepOneForm::new();
            assert_eq!(form.input_char('x', &data), None);
            assert_eq!(form.input_char(' ', &data), None);
        }

        #[test]
        fn test_backspace_drops_last_digit() {
            let mut data = FormData {
                age: Some(42),
                ..Default::default()
            };
            let form = StepOneForm::new();

            let patch = form.backspace(&data).unwrap();
            assert_eq!(patch, FormPatch::Age(Some(4)));
            data.apply(patch);

            let patch = form.backspace(&data).unwrap();
            assert_eq!(patch, FormPatch::Age(None));
            data.apply(patch);

            // Nothing left to delete, no change event
            assert_eq!(form.backspace(&data), None);
        }

        #[test]
        fn test_arrow_keys_step_within_hints() {
            let data = FormData::default();
            let form = StepOneForm::new();
            assert_eq!(form.select_prev(&data), Some(FormPatch::Age(Some(15))));
            assert_eq!(form.select_next(&data), Some(FormPatch::Age(Some(15))));

            let data = FormData {
                age: Some(99),
                ..Default::default()
            };
            // Already at the hint max, no change event
            assert_eq!(form.select_prev(&data), None);
        }
    }

    mod country_select {
        use super::*;
        use pretty_assertions::assert_eq;

        fn form_on_country() -> StepOneForm {
            let mut form = StepOneForm::new();
            form.set_active_field(1);
            form
        }

        #[test]
        fn test_down_from_empty_selects_first_by_name() {
            let data = FormData::default();
            let patch = form_on_country().select_next(&data).unwrap();
            assert_eq!(patch, FormPatch::CountryOfOrigin("AU".to_string()));
        }

        #[test]
        fn test_up_from_empty_selects_last_by_name() {
            let data = FormData::default();
            let patch = form_on_country().select_prev(&data).unwrap();
            assert_eq!(patch, FormPatch::CountryOfOrigin("VN".to_string()));
        }

        #[test]
        fn test_cycle_reaches_placeholder_again() {
            let data = FormData {
                country_of_origin: "VN".to_string(),
                ..Default::default()
            };
            let patch = form_on_country().select_next(&data).unwrap();
            assert_eq!(patch, FormPatch::CountryOfOrigin(String::new()));
        }

        #[test]
        fn test_down_moves_in_name_order() {
            // Australia -> Brazil, regardless of table order
            let data = FormData {
                country_of_origin: "AU".to_string(),
                ..Default::default()
            };
            let patch = form_on_country().select_next(&data).unwrap();
            assert_eq!(patch, FormPatch::CountryOfOrigin("BR".to_string()));
        }
    }

    mod education_select {
        use super::*;
        use pretty_assertions::assert_eq;

        fn form_on_education() -> StepOneForm {
            let mut form = StepOneForm::new();
            form.set_active_field(2);
            form
        }

        #[test]
        fn test_down_walks_all_levels_then_placeholder() {
            let mut data = FormData::default();
            let form = form_on_education();
            let mut seen = Vec::new();
            for _ in 0..5 {
                let patch = form.select_next(&data).unwrap();
                data.apply(patch);
                seen.push(data.education_level);
            }
            assert_eq!(
                seen,
                vec![
                    Some(EducationLevel::HighSchool),
                    Some(EducationLevel::Bachelors),
                    Some(EducationLevel::Masters),
                    Some(EducationLevel::Phd),
                    None,
                ]
            );
        }

        #[test]
        fn test_up_from_empty_selects_phd() {
            let data = FormData::default();
            let patch = form_on_education().select_prev(&data).unwrap();
            assert_eq!(
                patch,
                FormPatch::EducationLevel(Some(EducationLevel::Phd))
            );
        }

        #[test]
        fn test_no_character_input_on_selects() {
            let data = FormData::default();
            assert_eq!(form_on_education().input_char('a', &data), None);
            assert_eq!(form_on_education().backspace(&data), None);
        }
    }

    #[test]
    fn test_save_row_produces_no_patches() {
        let mut form = StepOneForm::new();
        form.set_active_field(3);
        let data = FormData::default();
        assert_eq!(form.input_char('4', &data), None);
        assert_eq!(form.backspace(&data), None);
        assert_eq!(form.select_next(&data), None);
        assert_eq!(form.select_prev(&data), None);
    }
}
