//! Member profiles, sessions and the admin user list.
//!
//! FitFusion keeps accounts and profile rows in a hosted backend. This module defines the
//! contracts the application expects from that backend ([ProfileStore](blocking::ProfileStore),
//! [AuthProvider](blocking::AuthProvider), [AdminDirectory](blocking::AdminDirectory)) and the
//! logic the profile and admin screens run on top of them. Implementations of the contracts
//! are supplied by the host.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Error;

#[cfg(feature = "sync")]
mod sync;

#[cfg(feature = "async")]
mod r#async;

/// Blocking collaborator contracts and profile operations.
#[cfg(feature = "sync")]
pub mod blocking {
    pub use super::sync::{admin_listing, load_profile, save_profile, AdminDirectory, AuthProvider, ProfileStore};
}

#[cfg(feature = "async")]
pub use r#async::{admin_listing, load_profile, save_profile, AdminDirectory, AuthProvider, ProfileStore};

#[cfg(all(feature = "sync", not(feature = "async")))]
pub use sync::{admin_listing, load_profile, save_profile, AdminDirectory, AuthProvider, ProfileStore};

/// Goals offered on the profile screen.
pub const FITNESS_GOALS: &[&str] = &["Weight Loss", "Muscle Gain", "Endurance", "General Fitness", "Strength"];

/// Diet preferences offered on the profile screen.
pub const DIET_PREFERENCES: &[&str] = &["Balanced", "High Protein", "Keto", "Vegan", "Vegetarian", "Paleo"];

/// Separates the days of a [WORKOUT_PLANS] schedule.
pub const WORKOUT_DAY_SEPARATOR: &str = "<br>";

/// Weekly schedules a member can pick. Days are separated by [WORKOUT_DAY_SEPARATOR].
pub const WORKOUT_PLANS: &[&str] = &[
    "Day 1: Chest and Triceps<br>Day 2: Back and Biceps<br>Day 3: Rest<br>Day 4: Legs and Shoulders<br>Day 5: Core and Cardio<br>Day 6: Full Body<br>Day 7: Rest",
    "Day 1: Upper Body<br>Day 2: Lower Body<br>Day 3: Cardio<br>Day 4: Rest<br>Day 5: Full Body<br>Day 6: HIIT<br>Day 7: Rest",
    "Day 1: Push<br>Day 2: Pull<br>Day 3: Legs<br>Day 4: Rest<br>Day 5: Push<br>Day 6: Pull<br>Day 7: Legs",
];

/// A member's profile row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub full_name: Option<String>,
    pub age: Option<u32>,
    pub fitness_goal: Option<String>,
    pub workout_plan: Option<String>,
    pub diet_preference: Option<String>,
    pub created_at: Option<OffsetDateTime>,
}

impl Profile {
    /// Creates an empty profile for `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// The chosen workout plan split into one line per day, empty when none is set.
    pub fn workout_days(&self) -> Vec<&str> {
        match self.workout_plan.as_deref() {
            Some(plan) if !plan.is_empty() => plan.split(WORKOUT_DAY_SEPARATOR).collect(),
            _ => Vec::new(),
        }
    }
}

/// Partial profile edit. Only fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub age: Option<u32>,
    pub fitness_goal: Option<String>,
    pub workout_plan: Option<String>,
    pub diet_preference: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self == &ProfileUpdate::default()
    }

    /// Checks that selected options come from [FITNESS_GOALS], [DIET_PREFERENCES] and [WORKOUT_PLANS].
    pub fn validate(&self) -> Result<(), Error> {
        check_option("fitness goal", self.fitness_goal.as_deref(), FITNESS_GOALS)?;
        check_option("diet preference", self.diet_preference.as_deref(), DIET_PREFERENCES)?;
        check_option("workout plan", self.workout_plan.as_deref(), WORKOUT_PLANS)?;
        Ok(())
    }

    /// Copies the provided fields onto `profile`.
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(full_name) = &self.full_name {
            profile.full_name = Some(full_name.clone());
        }
        if let Some(age) = self.age {
            profile.age = Some(age);
        }
        if let Some(fitness_goal) = &self.fitness_goal {
            profile.fitness_goal = Some(fitness_goal.clone());
        }
        if let Some(workout_plan) = &self.workout_plan {
            profile.workout_plan = Some(workout_plan.clone());
        }
        if let Some(diet_preference) = &self.diet_preference {
            profile.diet_preference = Some(diet_preference.clone());
        }
    }
}

fn check_option(field: &str, value: Option<&str>, allowed: &[&str]) -> Result<(), Error> {
    match value {
        Some(value) if !allowed.contains(&value) => Err(Error::InvalidArgument(format!("unsupported {field}: {value}"))),
        _ => Ok(()),
    }
}

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
}

/// Handle for a registered session listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Invoked with the current session whenever it changes. `None` means signed out.
pub type SessionCallback = Box<dyn Fn(Option<&Session>) + Send + Sync>;

/// A row of the admin user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    /// Email is not stored with profiles, so a label derived from the id stands in for it.
    pub display_email: String,
    pub profile: Profile,
}

impl DirectoryEntry {
    /// Case-insensitive substring search over email label, name and fitness goal.
    pub fn matches(&self, search: &str) -> bool {
        let search = search.to_lowercase();
        let fields = [
            Some(self.display_email.as_str()),
            self.profile.full_name.as_deref(),
            self.profile.fitness_goal.as_deref(),
        ];

        fields.into_iter().flatten().any(|field| field.to_lowercase().contains(&search))
    }
}

impl From<Profile> for DirectoryEntry {
    fn from(profile: Profile) -> Self {
        let prefix: String = profile.id.chars().take(8).collect();
        Self {
            display_email: format!("User {prefix}"),
            profile,
        }
    }
}

/// Counters shown above the admin user list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    pub total: usize,
    pub with_workout_plan: usize,
    pub with_diet_preference: usize,
}

impl DirectoryStats {
    pub fn from_profiles(profiles: &[Profile]) -> Self {
        Self {
            total: profiles.len(),
            with_workout_plan: profiles.iter().filter(|profile| has_value(&profile.workout_plan)).count(),
            with_diet_preference: profiles.iter().filter(|profile| has_value(&profile.diet_preference)).count(),
        }
    }
}

fn has_value(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}

/// The admin user list after searching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminListing {
    pub entries: Vec<DirectoryEntry>,
    /// Computed over all profiles, not only the matching ones.
    pub stats: DirectoryStats,
}

impl AdminListing {
    pub fn build(profiles: Vec<Profile>, search: &str) -> Self {
        let stats = DirectoryStats::from_profiles(&profiles);
        let entries = profiles
            .into_iter()
            .map(DirectoryEntry::from)
            .filter(|entry| entry.matches(search))
            .collect();

        Self { entries, stats }
    }

    /// Drops the listed member with `id` and updates the counters. Returns `None` when no
    /// listed entry has that id.
    pub fn remove(&mut self, id: &str) -> Option<DirectoryEntry> {
        let index = self.entries.iter().position(|entry| entry.profile.id == id)?;
        let entry = self.entries.remove(index);

        self.stats.total = self.stats.total.saturating_sub(1);
        if has_value(&entry.profile.workout_plan) {
            self.stats.with_workout_plan = self.stats.with_workout_plan.saturating_sub(1);
        }
        if has_value(&entry.profile.diet_preference) {
            self.stats.with_diet_preference = self.stats.with_diet_preference.saturating_sub(1);
        }

        Some(entry)
    }
}
