//! Turning raw form input into a creation request.
use crate::validation::Validatable;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bounds applied to submitted projects.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormRules {
    pub title_max_length: usize,
    pub description_min_length: usize,
    pub people_min: u32,
    pub people_max: Option<u32>,
}

impl Default for FormRules {
    fn default() -> Self {
        FormRules {
            title_max_length: 32,
            description_min_length: 5,
            people_min: 1,
            people_max: None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Title is required and must be at most {max_length} characters")]
    Title { max_length: usize },
    #[error("Description is required and must be at least {min_length} characters")]
    Description { min_length: usize },
    #[error("People must be a whole number of at least {min}")]
    People { min: u32 },
    #[error("People must be at most {max}")]
    TooManyPeople { max: u32 },
}

/// Raw, unvalidated values from the project form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: String,
}

/// A creation request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub people: u32,
}

impl ProjectDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        ProjectDraft {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Validates every field, reporting the first one that fails
    pub fn validate(&self, rules: &FormRules) -> Result<NewProject, ValidationError> {
        let title_ok = Validatable::text(&self.title)
            .required()
            .max_length(rules.title_max_length)
            .is_valid();
        if !title_ok {
            return Err(ValidationError::Title {
                max_length: rules.title_max_length,
            });
        }

        let description_ok = Validatable::text(&self.description)
            .required()
            .min_length(rules.description_min_length)
            .is_valid();
        if !description_ok {
            return Err(ValidationError::Description {
                min_length: rules.description_min_length,
            });
        }

        // A project always has at least one person, whatever the rules say.
        let people_min = rules.people_min.max(1);
        let people_max = rules.people_max.unwrap_or(u32::MAX);
        let people = self.parse_people();
        let people_ok = Validatable::number(people)
            .required()
            .min(f64::from(people_min))
            .is_valid();
        if !people_ok || people.fract() != 0.0 {
            return Err(ValidationError::People { min: people_min });
        }
        if !Validatable::number(people).max(f64::from(people_max)).is_valid() {
            return Err(ValidationError::TooManyPeople { max: people_max });
        }

        Ok(NewProject {
            title: self.title.clone(),
            description: self.description.clone(),
            people: people as u32,
        })
    }

    /// Empty input reads as zero; anything unparsable is NaN.
    fn parse_people(&self) -> f64 {
        let people = self.people.trim();
        if people.is_empty() {
            return 0.0;
        }
        people.parse().unwrap_or(f64::NAN)
    }
}
