//! Login/signup, profile editing and document upload forms.

pub mod login;
pub mod profile;
pub mod upload;

pub use login::{authenticate, AuthMode, AuthRequest, LoginForm};
pub use profile::ProfileEditor;
pub use upload::{UploadForm, UploadStatus};
