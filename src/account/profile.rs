use crate::api::ChatBackend;
use crate::auth::Session;
use crate::types::{Result, UserProfile};
use tracing::warn;

pub const LOAD_FAILED: &str = "Failed to load profile";
pub const SAVE_FAILED: &str = "Failed to save changes";

/// Editable copy of the signed-in user's profile.
///
/// Only name, degree and department can be changed; email and role are
/// shown read-only. Saving sends the whole object.
#[derive(Debug, Clone, Default)]
pub struct ProfileEditor {
    profile: Option<UserProfile>,
    error: Option<String>,
    saving: bool,
}

impl ProfileEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn apply_loaded(&mut self, result: Result<UserProfile>) -> bool {
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to load profile");
                self.error = Some(LOAD_FAILED.to_string());
                false
            }
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if let Some(p) = self.profile.as_mut() {
            p.name = name.into();
        }
    }

    pub fn set_degree(&mut self, degree: impl Into<String>) {
        if let Some(p) = self.profile.as_mut() {
            p.degree = Some(degree.into());
        }
    }

    pub fn set_department(&mut self, department: impl Into<String>) {
        if let Some(p) = self.profile.as_mut() {
            p.department = Some(department.into());
        }
    }

    /// Snapshot to send, or `None` if nothing is loaded.
    pub fn begin_save(&mut self) -> Option<UserProfile> {
        let profile = self.profile.clone()?;
        self.saving = true;
        self.error = None;
        Some(profile)
    }

    /// Replace local state with the stored profile, or record the failure.
    pub fn apply_saved(&mut self, result: Result<UserProfile>) -> bool {
        self.saving = false;
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to save profile");
                self.error = Some(SAVE_FAILED.to_string());
                false
            }
        }
    }

    pub async fn load<B: ChatBackend + ?Sized>(&mut self, backend: &B, session: &Session) -> bool {
        let result = match session.bearer() {
            Ok(token) => backend.profile(&token).await,
            Err(e) => Err(e),
        };
        self.apply_loaded(result)
    }

    pub async fn save<B: ChatBackend + ?Sized>(&mut self, backend: &B, session: &Session) -> bool {
        let Some(profile) = self.begin_save() else {
            return false;
        };
        let result = match session.bearer() {
            Ok(token) => backend.update_profile(&token, &profile).await,
            Err(e) => Err(e),
        };
        self.apply_saved(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppError;

    fn profile() -> UserProfile {
        UserProfile {
            email: "ada@seattleu.edu".into(),
            name: "Ada".into(),
            role: "user".into(),
            degree: None,
            department: None,
            created_at: None,
        }
    }

    #[test]
    fn test_setters_require_loaded_profile() {
        let mut editor = ProfileEditor::new();
        editor.set_name("ignored");
        assert!(editor.profile().is_none());
        assert!(editor.begin_save().is_none());
    }

    #[test]
    fn test_edit_only_touches_editable_fields() {
        let mut editor = ProfileEditor::new();
        editor.apply_loaded(Ok(profile()));
        editor.set_name("Ada L.");
        editor.set_degree("MSCS");
        editor.set_department("CS");

        let snapshot = editor.begin_save().unwrap();
        assert!(editor.is_saving());
        assert_eq!(snapshot.name, "Ada L.");
        assert_eq!(snapshot.degree.as_deref(), Some("MSCS"));
        assert_eq!(snapshot.email, "ada@seattleu.edu");
        assert_eq!(snapshot.role, "user");
    }

    #[test]
    fn test_failure_messages() {
        let mut editor = ProfileEditor::new();
        editor.apply_loaded(Err(AppError::Network("down".into())));
        assert_eq!(editor.error(), Some(LOAD_FAILED));

        editor.apply_loaded(Ok(profile()));
        editor.begin_save();
        editor.apply_saved(Err(AppError::Api {
            status: 500,
            body: "x".into(),
        }));
        assert_eq!(editor.error(), Some(SAVE_FAILED));
        assert!(!editor.is_saving());
        assert_eq!(editor.profile().unwrap().name, "Ada");
    }
}
