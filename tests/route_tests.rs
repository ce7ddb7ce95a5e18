//! Route guarding and navigation tests.

use rstest::rstest;
use su_rag::auth::{nav_items, resolve, Route, Session};

#[rstest]
#[case("/login", false, Route::Login)]
#[case("/login", true, Route::Login)]
#[case("/chat", true, Route::Chat)]
#[case("/chat/abc-123", true, Route::Chat)]
#[case("/chat", false, Route::Login)]
#[case("/chat/abc-123", false, Route::Login)]
#[case("/profile", true, Route::Profile)]
#[case("/profile", false, Route::Login)]
#[case("/settings", true, Route::Settings)]
#[case("/settings", false, Route::Login)]
#[case("/", true, Route::Login)]
#[case("/does-not-exist", true, Route::Login)]
#[case("/does-not-exist", false, Route::Login)]
fn test_resolve(#[case] path: &str, #[case] authenticated: bool, #[case] expected: Route) {
    assert_eq!(resolve(path, authenticated), expected);
}

#[rstest]
#[case(Route::Login, false)]
#[case(Route::Chat, true)]
#[case(Route::Profile, true)]
#[case(Route::Settings, true)]
fn test_requires_auth(#[case] route: Route, #[case] protected: bool) {
    assert_eq!(route.requires_auth(), protected);
    assert_eq!(Route::from_path(route.path()), Some(route));
}

#[rstest]
#[case(false, &["Home", "Chats", "Profile"])]
#[case(true, &["Home", "Chats", "Settings", "Profile"])]
fn test_nav_items(#[case] admin: bool, #[case] expected: &[&str]) {
    let labels: Vec<_> = nav_items(admin).iter().map(|i| i.label).collect();
    assert_eq!(labels, expected);
}

#[test]
fn test_logout_sends_protected_routes_to_login() {
    let session = Session::in_memory();
    session.sign_in("tok").unwrap();
    assert_eq!(session.route_for("/chat"), Route::Chat);

    session.sign_out().unwrap();
    assert_eq!(session.route_for("/chat"), Route::Login);
}
