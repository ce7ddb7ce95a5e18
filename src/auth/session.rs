use super::guard::{self, Route};
use super::store::{MemoryTokenStore, TokenStore};
use super::token::{decode_claims, TokenClaims};
use crate::types::{AppError, Result};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// The signed-in state of one client.
///
/// Cheap to clone; clones share the same underlying store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_arc(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::new())
    }

    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Token for an authenticated request, or [`AppError::Auth`] when signed out.
    pub fn bearer(&self) -> Result<String> {
        self.token()
            .ok_or_else(|| AppError::Auth("not signed in".to_string()))
    }

    pub fn sign_in(&self, token: &str) -> Result<()> {
        self.store.save(token)?;
        debug!("session token stored");
        Ok(())
    }

    pub fn sign_out(&self) -> Result<()> {
        self.store.clear()?;
        debug!("session token cleared");
        Ok(())
    }

    /// Unverified claims of the current token.
    pub fn claims(&self) -> Option<TokenClaims> {
        let token = self.token()?;
        let claims = decode_claims(&token);
        if claims.is_none() {
            warn!("stored token is not a decodable JWT");
        }
        claims
    }

    pub fn role(&self) -> Option<String> {
        self.claims().and_then(|c| c.role)
    }

    pub fn is_admin(&self) -> bool {
        self.claims().map(|c| c.is_admin()).unwrap_or(false)
    }

    /// Route to render for `path` in the current state.
    pub fn route_for(&self, path: &str) -> Route {
        guard::resolve(path, self.is_authenticated())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::encode_test_token;
    use serde_json::json;

    #[test]
    fn test_sign_in_and_out() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());
        assert!(matches!(session.bearer(), Err(AppError::Auth(_))));

        session.sign_in("tok").unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.bearer().unwrap(), "tok");

        session.sign_out().unwrap();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_clones_share_store() {
        let a = Session::in_memory();
        let b = a.clone();
        a.sign_in("shared").unwrap();
        assert_eq!(b.token().as_deref(), Some("shared"));
    }

    #[test]
    fn test_role_from_token() {
        let session = Session::in_memory();
        session
            .sign_in(&encode_test_token(&json!({"sub": "a@b", "role": "admin"})))
            .unwrap();
        assert_eq!(session.role().as_deref(), Some("admin"));
        assert!(session.is_admin());
    }

    #[test]
    fn test_opaque_token_is_not_admin() {
        let session = Session::new(MemoryTokenStore::with_token("opaque"));
        assert!(session.is_authenticated());
        assert_eq!(session.role(), None);
        assert!(!session.is_admin());
    }

    #[test]
    fn test_route_for_guards_protected_paths() {
        let session = Session::in_memory();
        assert_eq!(session.route_for("/profile"), Route::Login);
        session.sign_in("tok").unwrap();
        assert_eq!(session.route_for("/profile"), Route::Profile);
        assert_eq!(session.route_for("/nowhere"), Route::Login);
    }

    #[test]
    fn test_debug_hides_token() {
        let session = Session::new(MemoryTokenStore::with_token("secret-token"));
        let debug = format!("{:?}", session);
        assert!(!debug.contains("secret-token"));
    }
}
