//! Session state: the bearer token, the access role and the cached
//! profile of the signed-in user.
//!
//! The session lives in a reactive context value provided at the app
//! root. Pages read it from context and build their [`ApiClient`] from
//! it; localStorage is only touched here.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::model::{Role, User};

const TOKEN_KEY: &str = "ems_token";
const ROLE_KEY: &str = "ems_role";
const USER_KEY: &str = "ems_user";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
    /// Filled in by the profile fetch right after login; pages fall back
    /// to it when the profile endpoint is unreachable.
    pub user: Option<User>,
}

#[derive(Copy, Clone)]
pub struct SessionCtx(RwSignal<Option<Session>>);

impl SessionCtx {
    /// Creates the context from whatever localStorage still holds and
    /// registers it for the component tree. Called once, at the root.
    pub fn provide() -> Self {
        let ctx = Self(create_rw_signal(load_session()));
        provide_context(ctx);
        ctx
    }

    pub fn use_ctx() -> Self {
        expect_context::<Self>()
    }

    pub fn get(&self) -> Option<Session> {
        self.0.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.with(|s| s.is_some())
    }

    pub fn role(&self) -> Option<Role> {
        self.0.with(|s| s.as_ref().map(|s| s.role))
    }

    pub fn user(&self) -> Option<User> {
        self.0.with(|s| s.as_ref().and_then(|s| s.user.clone()))
    }

    /// API client carrying the current token. Reads untracked: building
    /// a client inside an async action must not subscribe it.
    pub fn api(&self) -> ApiClient {
        let token = self
            .0
            .with_untracked(|s| s.as_ref().map(|s| s.token.clone()));
        ApiClient::new(token)
    }

    /// Stores a fresh login. The profile arrives separately via
    /// [`SessionCtx::set_user`].
    pub fn establish(&self, token: String, role: Role) {
        let session = Session {
            token,
            role,
            user: None,
        };
        persist_session(&session);
        self.0.set(Some(session));
        log::info!("session established for role {role}");
    }

    pub fn set_user(&self, user: User) {
        self.0.update(|s| {
            if let Some(s) = s {
                s.user = Some(user);
                persist_session(s);
            }
        });
    }

    /// Drops the session locally. Used for both explicit logout and the
    /// forced logout after a 401.
    pub fn clear(&self) {
        clear_storage();
        self.0.set(None);
        log::info!("session cleared");
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn load_session() -> Option<Session> {
    let storage = storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let role = storage
        .get_item(ROLE_KEY)
        .ok()?
        .and_then(|r| Role::from_wire(&r))?;
    let user = storage
        .get_item(USER_KEY)
        .ok()?
        .and_then(|raw| serde_json::from_str(&raw).ok());
    Some(Session { token, role, user })
}

fn persist_session(session: &Session) {
    let Some(storage) = storage() else {
        return;
    };
    let _ = storage.set_item(TOKEN_KEY, &session.token);
    let _ = storage.set_item(ROLE_KEY, session.role.as_wire());
    match &session.user {
        Some(user) => {
            if let Ok(raw) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &raw);
            }
        }
        None => {
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

fn clear_storage() {
    let Some(storage) = storage() else {
        return;
    };
    let _ = storage.remove_item(TOKEN_KEY);
    let _ = storage.remove_item(ROLE_KEY);
    let _ = storage.remove_item(USER_KEY);
}
