//! In-memory collaborators for tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use time::macros::datetime;

use crate::members::{ListenerId, Profile, ProfileUpdate, Session, SessionCallback, DIET_PREFERENCES, FITNESS_GOALS, WORKOUT_PLANS};
use crate::Error;

pub(crate) fn sample_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: "7c4d2b10-aaaa".to_owned(),
            full_name: Some("John Doe".to_owned()),
            age: Some(28),
            fitness_goal: Some(FITNESS_GOALS[1].to_owned()),
            workout_plan: Some(WORKOUT_PLANS[0].to_owned()),
            diet_preference: Some(DIET_PREFERENCES[1].to_owned()),
            created_at: Some(datetime!(2025-03-01 10:00 UTC)),
        },
        Profile {
            id: "2f1c9a7e-0000".to_owned(),
            full_name: Some("Jane Smith".to_owned()),
            age: Some(24),
            fitness_goal: Some(FITNESS_GOALS[0].to_owned()),
            workout_plan: Some(WORKOUT_PLANS[1].to_owned()),
            diet_preference: Some(DIET_PREFERENCES[2].to_owned()),
            created_at: Some(datetime!(2025-03-02 10:00 UTC)),
        },
        Profile {
            id: "9e8f7a6b-cccc".to_owned(),
            full_name: Some("Mike Johnson".to_owned()),
            age: Some(32),
            fitness_goal: Some(FITNESS_GOALS[2].to_owned()),
            workout_plan: None,
            diet_preference: Some(DIET_PREFERENCES[0].to_owned()),
            created_at: None,
        },
    ]
}

pub(crate) struct ProfileStoreStub {
    profiles: RwLock<Vec<Profile>>,
}

impl ProfileStoreStub {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }

    fn fetch(&self, user_id: &str) -> Result<Option<Profile>, Error> {
        let profiles = self.profiles.read()?;
        Ok(profiles.iter().find(|profile| profile.id == user_id).cloned())
    }

    fn write(&self, user_id: &str, update: &ProfileUpdate) -> Result<Profile, Error> {
        let mut profiles = self.profiles.write()?;
        let profile = profiles
            .iter_mut()
            .find(|profile| profile.id == user_id)
            .ok_or_else(|| Error::NotFound(format!("profile {user_id}")))?;

        update.apply_to(profile);
        Ok(profile.clone())
    }

    fn all(&self) -> Result<Vec<Profile>, Error> {
        Ok(self.profiles.read()?.clone())
    }
}

struct Account {
    email: String,
    password: String,
    user_id: String,
}

#[derive(Default)]
pub(crate) struct AuthStub {
    accounts: Vec<Account>,
    session: RwLock<Option<Session>>,
    listeners: RwLock<Vec<(ListenerId, SessionCallback)>>,
    next_listener: AtomicU64,
}

impl AuthStub {
    pub fn with_account(email: &str, password: &str, user_id: &str) -> Self {
        Self {
            accounts: vec![Account {
                email: email.to_owned(),
                password: password.to_owned(),
                user_id: user_id.to_owned(),
            }],
            ..Default::default()
        }
    }

    fn current(&self) -> Option<Session> {
        self.session.read().ok()?.clone()
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<Session, Error> {
        let account = self
            .accounts
            .iter()
            .find(|account| account.email == email && account.password == password)
            .ok_or_else(|| Error::AuthFailed("Invalid login credentials".to_owned()))?;

        let session = Session {
            user_id: account.user_id.clone(),
            email: account.email.clone(),
        };
        self.replace_session(Some(session.clone()))?;
        Ok(session)
    }

    fn replace_session(&self, session: Option<Session>) -> Result<(), Error> {
        *self.session.write()? = session.clone();
        for (_, callback) in self.listeners.read()?.iter() {
            callback(session.as_ref());
        }
        Ok(())
    }

    fn register(&self, callback: SessionCallback) -> ListenerId {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.push((id, callback));
        }
        id
    }

    fn unregister(&self, id: ListenerId) {
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.retain(|(listener, _)| *listener != id);
        }
    }
}

pub(crate) struct AdminDirectoryStub {
    admins: Vec<String>,
}

impl AdminDirectoryStub {
    pub fn new(admins: &[&str]) -> Self {
        Self {
            admins: admins.iter().map(|id| id.to_string()).collect(),
        }
    }

    fn contains(&self, user_id: &str) -> bool {
        self.admins.iter().any(|id| id == user_id)
    }
}

#[cfg(feature = "sync")]
mod blocking_impls {
    use super::*;
    use crate::members::blocking::{AdminDirectory, AuthProvider, ProfileStore};

    impl ProfileStore for ProfileStoreStub {
        fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, Error> {
            self.fetch(user_id)
        }

        fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<Profile, Error> {
            self.write(user_id, update)
        }

        fn list_profiles(&self) -> Result<Vec<Profile>, Error> {
            self.all()
        }
    }

    impl AuthProvider for AuthStub {
        fn session(&self) -> Option<Session> {
            self.current()
        }

        fn sign_in(&self, email: &str, password: &str) -> Result<Session, Error> {
            self.authenticate(email, password)
        }

        fn sign_out(&self) {
            let _ = self.replace_session(None);
        }

        fn on_session_change(&self, callback: SessionCallback) -> ListenerId {
            self.register(callback)
        }

        fn remove_listener(&self, id: ListenerId) {
            self.unregister(id)
        }
    }

    impl AdminDirectory for AdminDirectoryStub {
        fn is_admin(&self, user_id: &str) -> bool {
            self.contains(user_id)
        }
    }
}

#[cfg(feature = "async")]
mod async_impls {
    use async_trait::async_trait;

    use super::*;
    use crate::members::{AdminDirectory, AuthProvider, ProfileStore};

    #[async_trait]
    impl ProfileStore for ProfileStoreStub {
        async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, Error> {
            self.fetch(user_id)
        }

        async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<Profile, Error> {
            self.write(user_id, update)
        }

        async fn list_profiles(&self) -> Result<Vec<Profile>, Error> {
            self.all()
        }
    }

    #[async_trait]
    impl AuthProvider for AuthStub {
        async fn session(&self) -> Option<Session> {
            self.current()
        }

        async fn sign_in(&self, email: &str, password: &str) -> Result<Session, Error> {
            self.authenticate(email, password)
        }

        async fn sign_out(&self) {
            let _ = self.replace_session(None);
        }

        fn on_session_change(&self, callback: SessionCallback) -> ListenerId {
            self.register(callback)
        }

        fn remove_listener(&self, id: ListenerId) {
            self.unregister(id)
        }
    }

    #[async_trait]
    impl AdminDirectory for AdminDirectoryStub {
        async fn is_admin(&self, user_id: &str) -> bool {
            self.contains(user_id)
        }
    }
}
