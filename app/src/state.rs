//! Form state
//!
//! The badge form as a plain state machine: user actions go through
//! [`FormState::update`], and everything shown (preview, visible sections)
//! is derived from the current state.

use mail_merge::{space_out, BadgeMode, BadgeRequest, Person};
use serde::{Deserialize, Serialize};
use store::BadgeSettings;
use thiserror::Error;

/// The four text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name1,
    Company1,
    Name2,
    Company2,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name1,
        FormField::Company1,
        FormField::Name2,
        FormField::Company2,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name1 | FormField::Name2 => "Name",
            FormField::Company1 | FormField::Company2 => "Company",
        }
    }

    /// Short name typed in the interactive form
    pub fn code(self) -> &'static str {
        match self {
            FormField::Name1 => "n1",
            FormField::Company1 => "c1",
            FormField::Name2 => "n2",
            FormField::Company2 => "c2",
        }
    }

    /// Which person (1 or 2) the field belongs to
    pub fn person(self) -> u8 {
        if self.is_second_person() {
            2
        } else {
            1
        }
    }

    /// Whether the field belongs to the second person
    pub fn is_second_person(self) -> bool {
        matches!(self, FormField::Name2 | FormField::Company2)
    }
}

/// A user action on the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetField(FormField, String),
    SetMode(BadgeMode),
    SetAddSpaces(bool),
    SetAutoOpen(bool),
    ToggleMode,
    ToggleAddSpaces,
    ToggleAutoOpen,
}

/// Why a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the first person's name and company")]
    FirstPersonIncomplete,
    #[error("Please fill in the second person's name and company")]
    SecondPersonIncomplete,
}

/// Everything the form holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub name1: String,
    pub company1: String,
    pub name2: String,
    pub company2: String,
    pub mode: BadgeMode,
    pub add_spaces: bool,
    pub auto_open: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::from_settings(&BadgeSettings::default())
    }
}

impl FormState {
    /// Empty form with the configured starting mode and options
    pub fn from_settings(settings: &BadgeSettings) -> Self {
        Self {
            name1: String::new(),
            company1: String::new(),
            name2: String::new(),
            company2: String::new(),
            mode: settings.default_mode,
            add_spaces: settings.add_spaces,
            auto_open: settings.auto_open,
        }
    }

    /// Apply one action
    pub fn update(&mut self, action: FormAction) {
        match action {
            FormAction::SetField(field, value) => *self.field_mut(field) = value,
            FormAction::SetMode(mode) => self.mode = mode,
            FormAction::SetAddSpaces(on) => self.add_spaces = on,
            FormAction::SetAutoOpen(on) => self.auto_open = on,
            FormAction::ToggleMode => {
                self.mode = match self.mode {
                    BadgeMode::OnePerson => BadgeMode::TwoPeople,
                    BadgeMode::TwoPeople => BadgeMode::OnePerson,
                }
            }
            FormAction::ToggleAddSpaces => self.add_spaces = !self.add_spaces,
            FormAction::ToggleAutoOpen => self.auto_open = !self.auto_open,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name1 => &self.name1,
            FormField::Company1 => &self.company1,
            FormField::Name2 => &self.name2,
            FormField::Company2 => &self.company2,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name1 => &mut self.name1,
            FormField::Company1 => &mut self.company1,
            FormField::Name2 => &mut self.name2,
            FormField::Company2 => &mut self.company2,
        }
    }

    /// Whether the second person's section is shown
    pub fn second_person_visible(&self) -> bool {
        self.mode.has_second_person()
    }

    /// Preview of the name(s) as they will be printed
    pub fn preview(&self) -> String {
        let shown = |value: &str| {
            let value = value.trim();
            if self.add_spaces {
                space_out(value)
            } else {
                value.to_string()
            }
        };

        if self.second_person_visible() {
            format!("Name 1: {}\nName 2: {}", shown(&self.name1), shown(&self.name2))
        } else {
            format!("Name: {}", shown(&self.name1))
        }
    }

    /// Trim and check the fields, producing a generation request
    ///
    /// The form itself is left unchanged either way.
    pub fn validate(&self) -> Result<BadgeRequest, ValidationError> {
        let first = Person::new(self.name1.trim(), self.company1.trim());
        if first.name.is_empty() || first.company.is_empty() {
            return Err(ValidationError::FirstPersonIncomplete);
        }

        let request = if self.second_person_visible() {
            let second = Person::new(self.name2.trim(), self.company2.trim());
            if second.name.is_empty() || second.company.is_empty() {
                return Err(ValidationError::SecondPersonIncomplete);
            }
            BadgeRequest::pair(first, second)
        } else {
            BadgeRequest::single(first)
        };

        Ok(request.with_spaces(self.add_spaces))
    }
}
