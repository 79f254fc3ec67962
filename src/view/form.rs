use crate::domain::validation::{validate, Constraints};
use crate::domain::{FormRules, ProjectId};
use crate::error::{BoardError, Result};
use crate::store::ProjectStore;

/// Validated form input, ready to become a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Raw text of the project input form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Validates every field against `rules`.
    ///
    /// All three fields must pass; the error names the first one that failed.
    pub fn gather_input(&self, rules: &FormRules) -> Result<ProjectDraft> {
        if !validate(&rules.title.check(self.title.as_str())) {
            return Err(BoardError::InvalidInput("title".to_string()));
        }
        if !validate(&rules.description.check(self.description.as_str())) {
            return Err(BoardError::InvalidInput("description".to_string()));
        }
        let people = parse_people(&self.people, &rules.people)?;

        Ok(ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            people,
        })
    }

    /// Adds the form's project to `store` and clears the fields.
    ///
    /// On a validation failure nothing is added and the fields keep their
    /// values so the user can correct them.
    pub fn submit(&mut self, store: &mut ProjectStore, rules: &FormRules) -> Result<ProjectId> {
        let draft = match self.gather_input(rules) {
            Ok(draft) => draft,
            Err(e) => {
                tracing::debug!(error = %e, "project form rejected");
                return Err(e);
            }
        };

        let id = store.add_project(draft.title, draft.description, draft.people);
        self.clear();
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

fn parse_people(raw: &str, rules: &Constraints) -> Result<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(BoardError::InvalidInput("people".to_string()));
    }

    let value: f64 = raw
        .parse()
        .map_err(|_| BoardError::InvalidPeople(raw.to_string()))?;
    if !validate(&rules.check(value)) {
        return Err(BoardError::InvalidInput("people".to_string()));
    }
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(BoardError::InvalidPeople(raw.to_string()));
    }

    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectStatus;
    use crate::store::SequentialIds;

    #[test]
    fn test_valid_input() {
        let form = ProjectForm::with_values("Build API", "Backend work", "3");
        let draft = form.gather_input(&FormRules::default()).unwrap();
        assert_eq!(
            draft,
            ProjectDraft {
                title: "Build API".to_string(),
                description: "Backend work".to_string(),
                people: 3,
            }
        );
    }

    #[test]
    fn test_empty_title_rejected() {
        let form = ProjectForm::with_values("  ", "Backend work", "3");
        let err = form.gather_input(&FormRules::default()).unwrap_err();
        assert!(matches!(err, BoardError::InvalidInput(field) if field == "title"));
    }

    #[test]
    fn test_short_description_rejected() {
        let form = ProjectForm::with_values("Build API", "API", "3");
        let err = form.gather_input(&FormRules::default()).unwrap_err();
        assert!(matches!(err, BoardError::InvalidInput(field) if field == "description"));
    }

    #[test]
    fn test_people_bounds() {
        let rules = FormRules::default();

        let form = ProjectForm::with_values("Build API", "Backend work", "0");
        assert!(matches!(
            form.gather_input(&rules),
            Err(BoardError::InvalidInput(_))
        ));

        let form = ProjectForm::with_values("Build API", "Backend work", "");
        assert!(matches!(
            form.gather_input(&rules),
            Err(BoardError::InvalidInput(_))
        ));

        let form = ProjectForm::with_values("Build API", "Backend work", "many");
        assert!(matches!(
            form.gather_input(&rules),
            Err(BoardError::InvalidPeople(_))
        ));

        let form = ProjectForm::with_values("Build API", "Backend work", "2.5");
        assert!(matches!(
            form.gather_input(&rules),
            Err(BoardError::InvalidPeople(_))
        ));
    }

    #[test]
    fn test_people_max_value_from_rules() {
        let mut rules = FormRules::default();
        rules.people.max_value = Some(10.0);

        let form = ProjectForm::with_values("Build API", "Backend work", "11");
        assert!(form.gather_input(&rules).is_err());

        let form = ProjectForm::with_values("Build API", "Backend work", " 10 ");
        assert_eq!(form.gather_input(&rules).unwrap().people, 10);
    }

    #[test]
    fn test_submit_adds_project_and_clears() {
        let mut store = ProjectStore::with_id_generator(SequentialIds::new("P"));
        let mut form = ProjectForm::with_values("Build API", "Backend work", "3");

        let id = form.submit(&mut store, &FormRules::default()).unwrap();

        assert_eq!(id.as_str(), "P1");
        assert_eq!(store.get(&id).unwrap().status, ProjectStatus::Active);
        assert_eq!(form, ProjectForm::new());
    }

    #[test]
    fn test_rejected_submit_keeps_fields() {
        let mut store = ProjectStore::new();
        let mut form = ProjectForm::with_values("Build API", "x", "3");

        assert!(form.submit(&mut store, &FormRules::default()).is_err());
        assert!(store.is_empty());
        assert_eq!(form.description, "x");
    }
}
