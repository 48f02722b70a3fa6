use crate::api::{ApiError, NewAdvisory, Severity};
use leptos::*;

/// Splits the comma-separated affected-systems input. Tokens are trimmed and
/// empty tokens (e.g. from a trailing comma) are dropped.
pub fn parse_affected_systems(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validated form contents, ready to be stamped with the creator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvisoryDraft {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub description: String,
    pub affected_systems: Vec<String>,
}

impl AdvisoryDraft {
    pub fn into_record(self, created_by: impl Into<String>) -> NewAdvisory {
        NewAdvisory {
            id: self.id,
            title: self.title,
            severity: self.severity,
            description: self.description,
            affected_systems: self.affected_systems,
            created_by: created_by.into(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct CreateAdvisoryFormState {
    id: RwSignal<String>,
    title: RwSignal<String>,
    severity: RwSignal<String>,
    description: RwSignal<String>,
    affected_systems: RwSignal<String>,
}

impl Default for CreateAdvisoryFormState {
    fn default() -> Self {
        Self {
            id: create_rw_signal(String::new()),
            title: create_rw_signal(String::new()),
            severity: create_rw_signal(Severity::Low.as_str().to_string()),
            description: create_rw_signal(String::new()),
            affected_systems: create_rw_signal(String::new()),
        }
    }
}

impl CreateAdvisoryFormState {
    pub fn id_signal(&self) -> RwSignal<String> {
        self.id
    }

    pub fn title_signal(&self) -> RwSignal<String> {
        self.title
    }

    pub fn severity_signal(&self) -> RwSignal<String> {
        self.severity
    }

    pub fn description_signal(&self) -> RwSignal<String> {
        self.description
    }

    pub fn affected_systems_signal(&self) -> RwSignal<String> {
        self.affected_systems
    }

    /// Rejects blank required fields, then parses severity and affected
    /// systems. Text fields are sent as typed.
    pub fn to_draft(&self) -> Result<AdvisoryDraft, ApiError> {
        let id = self.id.get_untracked();
        if id.trim().is_empty() {
            return Err(ApiError::validation("Advisory ID is required"));
        }
        let title = self.title.get_untracked();
        if title.trim().is_empty() {
            return Err(ApiError::validation("Title is required"));
        }
        let severity = self
            .severity
            .get_untracked()
            .parse::<Severity>()
            .map_err(|err| ApiError::validation(err.to_string()))?;
        let description = self.description.get_untracked();
        if description.trim().is_empty() {
            return Err(ApiError::validation("Description is required"));
        }
        let affected_systems = parse_affected_systems(&self.affected_systems.get_untracked());
        if affected_systems.is_empty() {
            return Err(ApiError::validation(
                "List at least one affected system",
            ));
        }
        Ok(AdvisoryDraft {
            id,
            title,
            severity,
            description,
            affected_systems,
        })
    }
}
