use mhs_derive::api_model;
use serde::Deserialize;

/// One extracurricular activity as exposed by the API.
#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq, Eq)]
pub struct Activity {
    /// Free-text description
    pub description: String,
    /// Human-readable meeting time
    pub schedule: String,
    /// Roster capacity
    pub max_participants: u32,
    /// Participant emails in signup order
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }
}

/// Confirmation returned by signup and unregistration.
#[api_model]
pub struct MessageResponse {
    /// e.g. `Signed up emma@mergington.edu for Chess Club`
    pub message: String,
}

/// Query string of the roster mutations.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}
