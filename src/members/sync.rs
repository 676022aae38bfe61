//! Blocking collaborator contracts

use log::{debug, info, warn};

use super::{AdminListing, ListenerId, Profile, ProfileUpdate, Session, SessionCallback};
use crate::Error;

/// Storage for profile rows.
pub trait ProfileStore: Send + Sync {
    /// Returns the profile for `user_id`, or `None` when no row exists.
    fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, Error>;

    /// Writes the provided fields and returns the updated profile.
    fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<Profile, Error>;

    fn list_profiles(&self) -> Result<Vec<Profile>, Error>;
}

/// Email and password authentication.
pub trait AuthProvider: Send + Sync {
    /// The current session, if signed in.
    fn session(&self) -> Option<Session>;

    fn sign_in(&self, email: &str, password: &str) -> Result<Session, Error>;

    fn sign_out(&self);

    /// Registers `callback` to run whenever the session changes.
    fn on_session_change(&self, callback: SessionCallback) -> ListenerId;

    fn remove_listener(&self, id: ListenerId);
}

/// Admin membership lookup.
pub trait AdminDirectory: Send + Sync {
    fn is_admin(&self, user_id: &str) -> bool;
}

/// Loads the signed-in member's profile.
pub fn load_profile(auth: &dyn AuthProvider, store: &dyn ProfileStore) -> Result<Profile, Error> {
    let session = auth.session().ok_or(Error::NotSignedIn)?;

    debug!("loading profile {}", session.user_id);
    store
        .get_profile(&session.user_id)?
        .ok_or_else(|| Error::NotFound(format!("profile {}", session.user_id)))
}

/// Validates and saves an edit to the signed-in member's profile.
pub fn save_profile(auth: &dyn AuthProvider, store: &dyn ProfileStore, update: &ProfileUpdate) -> Result<Profile, Error> {
    let session = auth.session().ok_or(Error::NotSignedIn)?;

    if let Err(err) = update.validate() {
        warn!("rejected profile update for {}: {err}", session.user_id);
        return Err(err);
    }

    store.update_profile(&session.user_id, update)
}

/// Lists members matching `search` for a signed-in admin.
pub fn admin_listing(auth: &dyn AuthProvider, admins: &dyn AdminDirectory, store: &dyn ProfileStore, search: &str) -> Result<AdminListing, Error> {
    let session = auth.session().ok_or(Error::NotSignedIn)?;
    if !admins.is_admin(&session.user_id) {
        return Err(Error::NotAdmin);
    }

    let listing = AdminListing::build(store.list_profiles()?, search);
    info!("admin {} listed {} of {} profiles", session.user_id, listing.entries.len(), listing.stats.total);

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::members::FITNESS_GOALS;
    use crate::stubs::{sample_profiles, AdminDirectoryStub, AuthStub, ProfileStoreStub};

    #[test]
    fn test_load_profile_requires_session() {
        let auth = AuthStub::default();
        let store = ProfileStoreStub::new(sample_profiles());

        assert!(matches!(load_profile(&auth, &store), Err(Error::NotSignedIn)));
    }

    #[test]
    fn test_load_profile() {
        let auth = AuthStub::with_account("jane@example.com", "secret", "2f1c9a7e-0000");
        let store = ProfileStoreStub::new(sample_profiles());

        auth.sign_in("jane@example.com", "secret").unwrap();
        let profile = load_profile(&auth, &store).unwrap();

        assert_eq!(profile.full_name.as_deref(), Some("Jane Smith"));
    }

    #[test]
    fn test_load_profile_missing_row() {
        let auth = AuthStub::with_account("new@example.com", "secret", "no-profile");
        let store = ProfileStoreStub::new(sample_profiles());

        auth.sign_in("new@example.com", "secret").unwrap();
        assert!(matches!(load_profile(&auth, &store), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_sign_in_with_wrong_password() {
        let auth = AuthStub::with_account("jane@example.com", "secret", "2f1c9a7e-0000");

        assert!(matches!(auth.sign_in("jane@example.com", "guess"), Err(Error::AuthFailed(_))));
        assert!(auth.session().is_none());
    }

    #[test]
    fn test_save_profile() {
        let auth = AuthStub::with_account("jane@example.com", "secret", "2f1c9a7e-0000");
        let store = ProfileStoreStub::new(sample_profiles());
        auth.sign_in("jane@example.com", "secret").unwrap();

        let update = ProfileUpdate {
            age: Some(25),
            fitness_goal: Some(FITNESS_GOALS[4].to_owned()),
            ..Default::default()
        };
        let saved = save_profile(&auth, &store, &update).unwrap();

        assert_eq!(saved.age, Some(25));
        assert_eq!(saved.fitness_goal.as_deref(), Some("Strength"));
        assert_eq!(saved.diet_preference.as_deref(), Some("Keto"));
        assert_eq!(load_profile(&auth, &store).unwrap(), saved);
    }

    #[test]
    fn test_save_profile_rejects_unknown_goal() {
        let auth = AuthStub::with_account("jane@example.com", "secret", "2f1c9a7e-0000");
        let store = ProfileStoreStub::new(sample_profiles());
        auth.sign_in("jane@example.com", "secret").unwrap();

        let update = ProfileUpdate {
            fitness_goal: Some("Flexibility".to_owned()),
            ..Default::default()
        };

        assert!(matches!(save_profile(&auth, &store, &update), Err(Error::InvalidArgument(_))));
        assert_eq!(load_profile(&auth, &store).unwrap().fitness_goal.as_deref(), Some("Weight Loss"));
    }

    #[test]
    fn test_admin_listing() {
        let auth = AuthStub::with_account("admin@example.com", "secret", "admin-0001");
        let admins = AdminDirectoryStub::new(&["admin-0001"]);
        let store = ProfileStoreStub::new(sample_profiles());
        auth.sign_in("admin@example.com", "secret").unwrap();

        let listing = admin_listing(&auth, &admins, &store, "LOSS").unwrap();
        let names: Vec<_> = listing.entries.iter().filter_map(|entry| entry.profile.full_name.as_deref()).collect();

        assert_eq!(names, vec!["Jane Smith"]);
        assert_eq!(listing.stats.total, 3);
    }

    #[test]
    fn test_admin_listing_requires_admin() {
        let auth = AuthStub::with_account("jane@example.com", "secret", "2f1c9a7e-0000");
        let admins = AdminDirectoryStub::new(&["admin-0001"]);
        let store = ProfileStoreStub::new(sample_profiles());

        assert!(matches!(admin_listing(&auth, &admins, &store, ""), Err(Error::NotSignedIn)));

        auth.sign_in("jane@example.com", "secret").unwrap();
        assert!(matches!(admin_listing(&auth, &admins, &store, ""), Err(Error::NotAdmin)));
    }

    #[test]
    fn test_session_listeners() {
        let auth = AuthStub::with_account("jane@example.com", "secret", "2f1c9a7e-0000");
        let changes = Arc::new(AtomicUsize::new(0));
        let signed_out = Arc::new(AtomicUsize::new(0));

        let counter = changes.clone();
        let outs = signed_out.clone();
        let id = auth.on_session_change(Box::new(move |session| {
            counter.fetch_add(1, Ordering::SeqCst);
            if session.is_none() {
                outs.fetch_add(1, Ordering::SeqCst);
            }
        }));

        auth.sign_in("jane@example.com", "secret").unwrap();
        auth.sign_out();
        assert_eq!(changes.load(Ordering::SeqCst), 2);
        assert_eq!(signed_out.load(Ordering::SeqCst), 1);

        auth.remove_listener(id);
        auth.sign_in("jane@example.com", "secret").unwrap();
        assert_eq!(changes.load(Ordering::SeqCst), 2);
    }
}
