//! Asynchronous collaborator contracts

use async_trait::async_trait;
use log::{debug, info, warn};

use super::{AdminListing, ListenerId, Profile, ProfileUpdate, Session, SessionCallback};
use crate::Error;

/// Storage for profile rows.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Returns the profile for `user_id`, or `None` when no row exists.
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, Error>;

    /// Writes the provided fields and returns the updated profile.
    async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<Profile, Error>;

    async fn list_profiles(&self) -> Result<Vec<Profile>, Error>;
}

/// Email and password authentication.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The current session, if signed in.
    async fn session(&self) -> Option<Session>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, Error>;

    async fn sign_out(&self);

    /// Registers `callback` to run whenever the session changes.
    fn on_session_change(&self, callback: SessionCallback) -> ListenerId;

    fn remove_listener(&self, id: ListenerId);
}

/// Admin membership lookup.
#[async_trait]
pub trait AdminDirectory: Send + Sync {
    async fn is_admin(&self, user_id: &str) -> bool;
}

/// Loads the signed-in member's profile.
pub async fn load_profile(auth: &dyn AuthProvider, store: &dyn ProfileStore) -> Result<Profile, Error> {
    let session = auth.session().await.ok_or(Error::NotSignedIn)?;

    debug!("loading profile {}", session.user_id);
    store
        .get_profile(&session.user_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("profile {}", session.user_id)))
}

/// Validates and saves an edit to the signed-in member's profile.
pub async fn save_profile(auth: &dyn AuthProvider, store: &dyn ProfileStore, update: &ProfileUpdate) -> Result<Profile, Error> {
    let session = auth.session().await.ok_or(Error::NotSignedIn)?;

    if let Err(err) = update.validate() {
        warn!("rejected profile update for {}: {err}", session.user_id);
        return Err(err);
    }

    store.update_profile(&session.user_id, update).await
}

/// Lists members matching `search` for a signed-in admin.
pub async fn admin_listing(
    auth: &dyn AuthProvider,
    admins: &dyn AdminDirectory,
    store: &dyn ProfileStore,
    search: &str,
) -> Result<AdminListing, Error> {
    let session = auth.session().await.ok_or(Error::NotSignedIn)?;
    if !admins.is_admin(&session.user_id).await {
        return Err(Error::NotAdmin);
    }

    let listing = AdminListing::build(store.list_profiles().await?, search);
    info!("admin {} listed {} of {} profiles", session.user_id, listing.entries.len(), listing.stats.total);

    Ok(listing)
}
