use std::borrow::Cow;

pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";
pub const ALREADY_SIGNED_UP: &str = "Student already signed up for this activity";
pub const NOT_SIGNED_UP: &str = "Student is not signed up for this activity";
pub const ACTIVITY_FULL: &str = "Activity is full";

/// Errors of the activity registry.
///
/// `message` is the client-facing text; `context` carries the activity name for logs.
#[mhs_derive::mhs_error]
#[derive(Clone, PartialEq, Eq)]
pub enum ActivityError {
    /// The referenced activity does not exist.
    #[error("Activity lookup failed{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A roster precondition does not hold (already signed up, not signed up, full).
    #[error("Roster conflict{}: {message}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Broken seed data or other logic errors.
    #[error("Internal activities error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ActivityError {
    pub(crate) const fn not_found() -> Self {
        Self::NotFound { message: Cow::Borrowed(ACTIVITY_NOT_FOUND), context: None }
    }

    pub(crate) const fn conflict(message: &'static str) -> Self {
        Self::Conflict { message: Cow::Borrowed(message), context: None }
    }

    /// The client-facing message, without context.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::NotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }
}

#[cfg(feature = "server")]
impl From<ActivityError> for mhs_kernel::server::ApiError {
    fn from(err: ActivityError) -> Self {
        match err {
            ActivityError::NotFound { message, .. } => Self::not_found(message),
            ActivityError::Conflict { message, .. } => Self::bad_request(message),
            ActivityError::Internal { .. } => {
                tracing::error!(error = %err, "Activity registry failure");
                Self::internal()
            },
        }
    }
}
