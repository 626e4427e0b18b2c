use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::net::request::Navigator;

#[test]
fn should_fetch_when_no_user() {
    assert!(should_fetch_current_user(&Session::default()));
}

#[test]
fn should_not_fetch_when_user_exists() {
    let session = Session { username: Some("admin".to_owned()) };
    assert!(!should_fetch_current_user(&session));
}

#[test]
fn router_navigator_forwards_path_with_default_options() {
    let seen = Rc::new(RefCell::new(Vec::<(String, bool)>::new()));
    let sink = seen.clone();
    let navigator = router_navigator(move |path: &str, options: NavigateOptions| {
        sink.borrow_mut().push((path.to_owned(), options.replace));
    });
    navigator.navigate_to("/log");
    assert_eq!(*seen.borrow(), vec![("/log".to_owned(), false)]);
}
