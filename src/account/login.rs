use crate::api::ChatBackend;
use crate::auth::Session;
use crate::types::{LoginRequest, Result, SignupRequest, SignupRole};
use tracing::{info, warn};

/// Which half of the combined form is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    /// Heading and submit button label.
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Log In",
            AuthMode::Signup => "Sign Up",
        }
    }

    /// Prompt shown before the mode switch link.
    pub fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "No account? ",
            AuthMode::Signup => "Have an account? ",
        }
    }
}

#[derive(Debug, Clone)]
pub enum AuthRequest {
    Login(LoginRequest),
    Signup(SignupRequest),
}

/// Send a login or signup request and return the issued token.
pub async fn authenticate<B: ChatBackend + ?Sized>(
    backend: &B,
    request: &AuthRequest,
) -> Result<String> {
    match request {
        AuthRequest::Login(req) => backend.login(req).await,
        AuthRequest::Signup(req) => backend.signup(req).await,
    }
}

/// State of the login/signup form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: SignupRole,
    error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switch between login and signup. Clears any shown error.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.error = None;
    }

    /// Build the request for the current mode and clear the previous error.
    pub fn begin(&mut self) -> AuthRequest {
        self.error = None;
        match self.mode {
            AuthMode::Login => AuthRequest::Login(LoginRequest {
                email: self.email.clone(),
                password: self.password.clone(),
            }),
            AuthMode::Signup => AuthRequest::Signup(SignupRequest {
                email: self.email.clone(),
                password: self.password.clone(),
                name: self.name.clone(),
                role: self.role,
            }),
        }
    }

    /// Store the token on success. On failure the error text is kept for
    /// display and nothing is stored. Returns true when the caller should
    /// navigate to the chat view.
    pub fn finish(&mut self, session: &Session, result: Result<String>) -> bool {
        let stored = result.and_then(|token| session.sign_in(&token));
        match stored {
            Ok(()) => {
                info!(mode = ?self.mode, "signed in");
                true
            }
            Err(e) => {
                warn!(mode = ?self.mode, error = %e, "authentication failed");
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// Run the whole submit cycle against `backend`.
    pub async fn submit<B: ChatBackend + ?Sized>(&mut self, backend: &B, session: &Session) -> bool {
        let request = self.begin();
        let result = authenticate(backend, &request).await;
        self.finish(session, result)
    }
}
