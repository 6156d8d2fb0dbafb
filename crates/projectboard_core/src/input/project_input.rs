//! Project input collector.
//!
//! # Responsibility
//! - Hold raw title/description/people values as typed by the user.
//! - Validate them against `InputRules` and submit to the store.
//!
//! # Invariants
//! - `submit` calls `add_project` at most once, and only after every field
//!   passed validation.
//! - Fields are cleared after a successful submit and kept after a rejected
//!   one.

use crate::config::InputRules;
use crate::input::validation::{
    validate, InputField, Validatable, ValidationError, ValidationFailure,
};
use crate::model::project::ProjectId;
use crate::store::project_store::ProjectStore;
use log::info;

/// Validated input ready for `ProjectStore::add_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people_count: u32,
}

/// Form-like input surface for new projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectInput {
    rules: InputRules,
    title: String,
    description: String,
    people: String,
}

impl ProjectInput {
    pub fn new(rules: InputRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn rules(&self) -> &InputRules {
        &self.rules
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_people(&mut self, value: impl Into<String>) {
        self.people = value.into();
    }

    /// Sets all three fields at once.
    pub fn fill(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) {
        self.set_title(title);
        self.set_description(description);
        self.set_people(people);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn people(&self) -> &str {
        &self.people
    }

    /// Validates the current field values.
    ///
    /// Title and description are returned untrimmed; only the checks look
    /// at the trimmed text.
    pub fn gather_user_input(&self) -> Result<ProjectDraft, ValidationError> {
        validate(
            &Validatable::text(InputField::Title, &self.title)
                .required()
                .max_length(self.rules.title_max_length),
        )?;
        validate(
            &Validatable::text(InputField::Description, &self.description)
                .required()
                .min_length(self.rules.description_min_length)
                .max_length(self.rules.description_max_length),
        )?;

        let people = parse_people(&self.people)?;
        validate(
            &Validatable::number(InputField::People, people)
                .required()
                .range(
                    i64::from(self.rules.people_min),
                    i64::from(self.rules.people_max),
                ),
        )?;
        let people_count = u32::try_from(people).map_err(|_| {
            ValidationError::new(
                InputField::People,
                ValidationFailure::AboveMaximum {
                    max: i64::from(self.rules.people_max),
                    actual: people,
                },
            )
        })?;

        Ok(ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            people_count,
        })
    }

    /// Validates and, on success, adds the project and clears the fields.
    ///
    /// The error's `Display` text is meant to be shown to the user as is.
    pub fn submit(&mut self, store: &mut ProjectStore) -> Result<ProjectId, ValidationError> {
        let draft = match self.gather_user_input() {
            Ok(draft) => draft,
            Err(err) => {
                info!(
                    "event=input_rejected module=input status=rejected field={}",
                    err.field.as_str()
                );
                return Err(err);
            }
        };

        let project_id = store.add_project(draft.title, draft.description, draft.people_count);
        self.clear_inputs();
        Ok(project_id)
    }

    pub fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

fn parse_people(raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            InputField::People,
            ValidationFailure::Required,
        ));
    }
    trimmed.parse::<i64>().map_err(|_| {
        ValidationError::new(
            InputField::People,
            ValidationFailure::NotANumber(trimmed.to_string()),
        )
    })
}
