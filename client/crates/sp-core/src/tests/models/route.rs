use crate::Route;

use std::str::FromStr;

#[test]
fn test_route_default_is_home() {
    assert_eq!(Route::default(), Route::Home);
}

#[test]
fn test_route_as_str() {
    assert_eq!(Route::ShopList.as_str(), "list");
    assert_eq!(Route::Notifications.as_str(), "notifications");
}

#[test]
fn test_route_from_str() {
    assert_eq!(Route::from_str("diet").unwrap(), Route::Diet);
    assert_eq!(Route::from_str("profile").unwrap(), Route::Profile);
    assert!(Route::from_str("settings").is_err());
}

#[test]
fn test_bottom_bar_excludes_top_bar_routes() {
    for route in Route::TOP_BAR {
        assert!(!Route::BOTTOM_BAR.contains(&route));
    }
    assert_eq!(Route::BOTTOM_BAR[0], Route::Home);
}
