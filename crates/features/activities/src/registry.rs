//! In-memory activity registry.
//!
//! The set of activities is fixed at construction, so the name index is read without
//! locking. Each roster sits behind its own mutex and every check-then-mutate sequence
//! runs inside that guard.

use crate::error::{
    ACTIVITY_FULL, ALREADY_SIGNED_UP, ActivityError, ActivityErrorExt, NOT_SIGNED_UP,
};
use crate::model::Activity;
use fxhash::FxHashMap;
use mhs_kernel::domain::config::ActivitiesConfig;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Whether `max_participants` limits signups.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Capacity is informational only; signups are never rejected for being over it.
    #[default]
    Advisory,
    /// Signups into a full roster fail with [`ACTIVITY_FULL`].
    Enforced,
}

impl From<&ActivitiesConfig> for CapacityPolicy {
    fn from(config: &ActivitiesConfig) -> Self {
        if config.enforce_capacity { Self::Enforced } else { Self::Advisory }
    }
}

#[derive(Debug)]
struct ActivitySlot {
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Mutex<Vec<String>>,
}

impl ActivitySlot {
    fn snapshot(&self) -> Activity {
        Activity {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.lock().clone(),
        }
    }
}

#[derive(Debug)]
pub struct ActivityRegistry {
    slots: FxHashMap<String, ActivitySlot>,
    policy: CapacityPolicy,
}

impl ActivityRegistry {
    /// Builds a registry from `(name, activity)` pairs.
    ///
    /// A repeated name replaces the earlier entry; repeated emails within one roster
    /// keep their first occurrence.
    ///
    /// # Errors
    /// Returns [`ActivityError::Internal`] if an activity has a zero capacity.
    pub fn new<I, N>(policy: CapacityPolicy, activities: I) -> Result<Self, ActivityError>
    where
        I: IntoIterator<Item = (N, Activity)>,
        N: Into<String>,
    {
        let mut slots = FxHashMap::default();

        for (name, activity) in activities {
            let name = name.into();
            if activity.max_participants == 0 {
                return Err(ActivityError::Internal {
                    message: "max_participants must be positive".into(),
                    context: Some(name.into()),
                });
            }

            let mut participants: Vec<String> = Vec::with_capacity(activity.participants.len());
            for email in activity.participants {
                if !participants.contains(&email) {
                    participants.push(email);
                }
            }

            slots.insert(
                name,
                ActivitySlot {
                    description: activity.description,
                    schedule: activity.schedule,
                    max_participants: activity.max_participants,
                    participants: Mutex::new(participants),
                },
            );
        }

        Ok(Self { slots, policy })
    }

    #[must_use]
    pub const fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Number of activities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Current state of every activity, keyed (and ordered) by name.
    #[must_use]
    pub fn list(&self) -> BTreeMap<String, Activity> {
        self.slots.iter().map(|(name, slot)| (name.clone(), slot.snapshot())).collect()
    }

    /// Current state of one activity.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.slots.get(name).map(ActivitySlot::snapshot)
    }

    /// Appends `email` to the roster of `name` and returns the confirmation message.
    ///
    /// # Errors
    /// * [`ActivityError::NotFound`] if the activity does not exist.
    /// * [`ActivityError::Conflict`] if the email is already on the roster, or the roster
    ///   is full under [`CapacityPolicy::Enforced`].
    pub fn sign_up(&self, name: &str, email: &str) -> Result<String, ActivityError> {
        let slot = self.slot(name)?;
        let mut participants = slot.participants.lock();

        if participants.iter().any(|p| p == email) {
            debug!(activity = name, email, "Duplicate signup rejected");
            return Err(ActivityError::conflict(ALREADY_SIGNED_UP)).context(name.to_owned());
        }

        if self.policy == CapacityPolicy::Enforced
            && participants.len() >= slot.max_participants as usize
        {
            debug!(activity = name, email, max = slot.max_participants, "Signup into full roster");
            return Err(ActivityError::conflict(ACTIVITY_FULL)).context(name.to_owned());
        }

        participants.push(email.to_owned());
        info!(activity = name, email, participants = participants.len(), "Student signed up");

        Ok(format!("Signed up {email} for {name}"))
    }

    /// Removes `email` from the roster of `name` and returns the confirmation message.
    ///
    /// # Errors
    /// * [`ActivityError::NotFound`] if the activity does not exist.
    /// * [`ActivityError::Conflict`] if the email is not on the roster.
    pub fn unregister(&self, name: &str, email: &str) -> Result<String, ActivityError> {
        let slot = self.slot(name)?;
        let mut participants = slot.participants.lock();

        let Some(position) = participants.iter().position(|p| p == email) else {
            debug!(activity = name, email, "Unregister of absent student rejected");
            return Err(ActivityError::conflict(NOT_SIGNED_UP)).context(name.to_owned());
        };

        participants.remove(position);
        info!(activity = name, email, participants = participants.len(), "Student unregistered");

        Ok(format!("Unregistered {email} from {name}"))
    }

    fn slot(&self, name: &str) -> Result<&ActivitySlot, ActivityError> {
        self.slots.get(name).ok_or_else(|| {
            debug!(activity = name, "Unknown activity");
            ActivityError::not_found()
        })
    }
}
