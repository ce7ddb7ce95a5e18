//! Route table and navigation gating.

use std::fmt;

/// Client routes. Anything else redirects to [`Route::Login`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Chat,
    Profile,
    Settings,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Chat => "/chat",
            Route::Profile => "/profile",
            Route::Settings => "/settings",
        }
    }

    /// Match a location path, ignoring any query string or fragment.
    /// `/chat` also owns every nested `/chat/...` path.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match path {
            "/login" => Some(Route::Login),
            "/profile" => Some(Route::Profile),
            "/settings" => Some(Route::Settings),
            "/chat" => Some(Route::Chat),
            p if p.starts_with("/chat/") => Some(Route::Chat),
            _ => None,
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Route actually rendered for `path`.
///
/// Unknown paths and protected routes without a token both land on login.
pub fn resolve(path: &str, authenticated: bool) -> Route {
    match Route::from_path(path) {
        Some(route) if authenticated || !route.requires_auth() => route,
        _ => Route::Login,
    }
}

/// One sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Sidebar links. Settings is listed only for admins; this is a display
/// hint and the backend still enforces access.
pub fn nav_items(is_admin: bool) -> Vec<NavItem> {
    let mut items = vec![
        NavItem {
            label: "Home",
            href: "/",
        },
        NavItem {
            label: "Chats",
            href: Route::Chat.path(),
        },
    ];
    if is_admin {
        items.push(NavItem {
            label: "Settings",
            href: Route::Settings.path(),
        });
    }
    items.push(NavItem {
        label: "Profile",
        href: Route::Profile.path(),
    });
    items
}
