//! Session state and route guarding
//!
//! The client never verifies tokens: it stores the bearer string issued by
//! the backend, attaches it to requests, and peeks at its payload for
//! navigation hints. Authorization is always enforced server side.
//!
//! # Module Structure
//!
//! - [`auth::token`](crate::auth::token) - unverified JWT payload decoding
//! - [`auth::store`](crate::auth::store) - token persistence (memory, file)
//! - [`auth::session`](crate::auth::session) - the [`Session`] handle
//! - [`auth::guard`](crate::auth::guard) - route table and sidebar links
//!
//! # Usage
//!
//! ```
//! use su_rag::auth::{Route, Session};
//!
//! let session = Session::in_memory();
//! assert_eq!(session.route_for("/chat"), Route::Login);
//!
//! session.sign_in("token-from-backend").unwrap();
//! assert_eq!(session.route_for("/chat/42"), Route::Chat);
//! ```

/// Route table and navigation items.
pub mod guard;
/// Signed-in state shared by controllers.
pub mod session;
/// Token storage backends.
pub mod store;
/// Unverified claim decoding.
pub mod token;

pub use guard::{nav_items, resolve, NavItem, Route};
pub use session::Session;
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use token::{decode_claims, TokenClaims};
