use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::validation::{is_valid_email, MIN_PASSWORD_LEN};

/// The one credential pair that maps to the admin role
const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "admin";

const STORAGE_KEY_USER: &str = "bookline_user";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Customer,
}

/// Loyalty tier shown next to the user's name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Tier::Bronze => "#CD7F32",
            Tier::Silver => "#C0C0C0",
            Tier::Gold => "#FFD700",
        }
    }

    pub fn discount_percentage(&self) -> u32 {
        match self {
            Tier::Bronze => 5,
            Tier::Silver => 10,
            Tier::Gold => 15,
        }
    }
}

/// Signed-in user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: String,
    pub name: String,
    pub email: String,
    pub tier: Tier,
    pub role: Role,
}

impl UserSession {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Error type for sign-in and sign-up
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    InvalidEmail,
    EmptyPassword,
    PasswordTooShort,
    PasswordMismatch,
    Storage(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AuthError::InvalidEmail => write!(f, "Invalid email address"),
            AuthError::EmptyPassword => write!(f, "Password is required"),
            AuthError::PasswordTooShort => {
                write!(f, "Password must be at least {} characters", MIN_PASSWORD_LEN)
            }
            AuthError::PasswordMismatch => write!(f, "Passwords do not match"),
            AuthError::Storage(e) => write!(f, "Failed to store session: {}", e),
        }
    }
}

impl std::error::Error for AuthError {}

/// Map a credential pair to a session
///
/// Deterministic: the admin pair yields the gold-tier admin, anything else a
/// bronze-tier customer.
pub fn authenticate(email: &str, password: &str) -> UserSession {
    let email = email.trim();
    if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
        UserSession {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: email.to_string(),
            tier: Tier::Gold,
            role: Role::Admin,
        }
    } else {
        UserSession {
            id: "2".to_string(),
            name: "Regular User".to_string(),
            email: email.to_string(),
            tier: Tier::Bronze,
            role: Role::Customer,
        }
    }
}

pub fn validate_sign_in(email: &str, password: &str) -> Result<(), AuthError> {
    if !is_valid_email(email) {
        return Err(AuthError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(AuthError::EmptyPassword);
    }
    Ok(())
}

pub fn validate_sign_up(email: &str, password: &str, confirm: &str) -> Result<(), AuthError> {
    if !is_valid_email(email) {
        return Err(AuthError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort);
    }
    if password != confirm {
        return Err(AuthError::PasswordMismatch);
    }
    Ok(())
}

// =============================================================================
// Session persistence
// =============================================================================

/// Where the session survives a reload
pub trait SessionStorage {
    fn load(&self) -> Option<UserSession>;
    fn save(&self, session: &UserSession) -> Result<(), String>;
    fn clear(&self);
}

/// Browser localStorage
pub struct LocalSessionStorage;

impl SessionStorage for LocalSessionStorage {
    fn load(&self) -> Option<UserSession> {
        LocalStorage::get::<UserSession>(STORAGE_KEY_USER).ok()
    }

    fn save(&self, session: &UserSession) -> Result<(), String> {
        LocalStorage::set(STORAGE_KEY_USER, session).map_err(|e| e.to_string())
    }

    fn clear(&self) {
        LocalStorage::delete(STORAGE_KEY_USER);
    }
}

/// In-memory fallback holding the same JSON localStorage would
///
/// Used when the browser refuses localStorage (private mode, disabled
/// storage); the session then lasts until the tab closes.
#[derive(Default)]
pub struct MemorySessionStorage {
    entry: RefCell<Option<String>>,
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Option<UserSession> {
        let entry = self.entry.borrow();
        serde_json::from_str(entry.as_deref()?).ok()
    }

    fn save(&self, session: &UserSession) -> Result<(), String> {
        let json = serde_json::to_string(session).map_err(|e| e.to_string())?;
        *self.entry.borrow_mut() = Some(json);
        Ok(())
    }

    fn clear(&self) {
        *self.entry.borrow_mut() = None;
    }
}

/// Pick the session backend for this environment
pub fn session_storage() -> Rc<dyn SessionStorage> {
    if local_storage_available() {
        Rc::new(LocalSessionStorage)
    } else {
        log::warn!("localStorage unavailable, sessions will not survive a reload");
        Rc::new(MemorySessionStorage::default())
    }
}

#[cfg(target_family = "wasm")]
fn local_storage_available() -> bool {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .is_some()
}

#[cfg(not(target_family = "wasm"))]
fn local_storage_available() -> bool {
    false
}

/// Validate, authenticate and persist
pub fn sign_in(storage: &dyn SessionStorage, email: &str, password: &str) -> Result<UserSession, AuthError> {
    validate_sign_in(email, password)?;
    let session = authenticate(email, password);
    storage.save(&session).map_err(AuthError::Storage)?;
    log::info!("Signed in {} as {:?}", session.email, session.role);
    Ok(session)
}

/// Mock account creation: validates, then signs in
pub fn sign_up(
    storage: &dyn SessionStorage,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<UserSession, AuthError> {
    validate_sign_up(email, password, confirm)?;
    let session = authenticate(email, password);
    storage.save(&session).map_err(AuthError::Storage)?;
    log::info!("Created account for {}", session.email);
    Ok(session)
}

// =============================================================================
// Store handle
// =============================================================================

/// Authentication state handed to components through context
#[derive(Clone, Copy, PartialEq)]
pub struct AuthStore {
    pub session: Signal<Option<UserSession>>,
    storage: Signal<Rc<dyn SessionStorage>>,
}

impl AuthStore {
    /// Create the store and restore a persisted session
    pub fn new(storage: Rc<dyn SessionStorage>) -> Self {
        let restored = storage.load();
        if let Some(user) = &restored {
            log::info!("Restored session for {}", user.email);
        }

        Self {
            session: Signal::new(restored),
            storage: Signal::new(storage),
        }
    }

    fn storage(&self) -> Rc<dyn SessionStorage> {
        Rc::clone(&*self.storage.peek())
    }

    pub fn user(&self) -> Option<UserSession> {
        self.session.read().clone()
    }

    pub fn is_admin(&self) -> bool {
        self.session.read().as_ref().is_some_and(UserSession::is_admin)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<UserSession, AuthError> {
        let session = sign_in(self.storage().as_ref(), email, password)?;
        self.session.set(Some(session.clone()));
        Ok(session)
    }

    pub fn register(&mut self, email: &str, password: &str, confirm: &str) -> Result<UserSession, AuthError> {
        let session = sign_up(self.storage().as_ref(), email, password, confirm)?;
        self.session.set(Some(session.clone()));
        Ok(session)
    }

    pub fn logout(&mut self) {
        log::info!("Logging out...");
        self.storage().clear();
        self.session.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_pair() {
        let session = authenticate("admin@example.com", "admin");
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.tier, Tier::Gold);
        assert!(session.is_admin());
    }

    #[test]
    fn test_everyone_else_is_customer() {
        for (email, password) in [
            ("admin@example.com", "wrong"),
            ("reader@example.com", "admin"),
            ("someone@books.org", "secret123"),
        ] {
            let session = authenticate(email, password);
            assert_eq!(session.role, Role::Customer);
            assert_eq!(session.tier, Tier::Bronze);
            assert_eq!(session.email, email);
        }
    }

    #[test]
    fn test_sign_in_validation() {
        assert_eq!(validate_sign_in("nope", "pw"), Err(AuthError::InvalidEmail));
        assert_eq!(validate_sign_in("a@b.co", ""), Err(AuthError::EmptyPassword));
        // The admin password is shorter than the sign-up minimum
        assert_eq!(validate_sign_in("admin@example.com", "admin"), Ok(()));
    }

    #[test]
    fn test_sign_up_validation() {
        assert_eq!(validate_sign_up("a@b.co", "short", "short"), Err(AuthError::PasswordTooShort));
        assert_eq!(validate_sign_up("a@b.co", "longenough", "different"), Err(AuthError::PasswordMismatch));
        assert_eq!(validate_sign_up("a@b.co", "longenough", "longenough"), Ok(()));
    }

    #[test]
    fn test_session_round_trip() {
        let storage = MemorySessionStorage::default();
        assert!(storage.load().is_none());

        let session = sign_in(&storage, "admin@example.com", "admin").expect("valid credentials");
        assert_eq!(storage.load(), Some(session));

        storage.clear();
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_fallback_storage_keeps_session() {
        // No browser storage off wasm, so the in-memory backend is chosen
        let storage = session_storage();
        assert!(storage.load().is_none());

        let session = sign_up(storage.as_ref(), "reader@example.com", "secret123", "secret123")
            .expect("valid sign-up");
        assert_eq!(storage.load(), Some(session));

        storage.clear();
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_failed_sign_in_persists_nothing() {
        let storage = MemorySessionStorage::default();
        assert!(sign_in(&storage, "bad", "pw").is_err());
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_tier_discounts() {
        assert_eq!(Tier::Bronze.discount_percentage(), 5);
        assert_eq!(Tier::Silver.discount_percentage(), 10);
        assert_eq!(Tier::Gold.discount_percentage(), 15);
        assert_eq!(Tier::default(), Tier::Bronze);
    }
}
