use super::*;

#[test]
fn menu_keys_map_to_admin_pages() {
    assert_eq!(menu_target("1"), Some("/ad/page1"));
    assert_eq!(menu_target("2"), Some("/ad/page2"));
    assert_eq!(menu_target("3"), Some("/ad/page3"));
}

#[test]
fn unknown_menu_key_has_no_target() {
    assert_eq!(menu_target("4"), None);
    assert_eq!(menu_target(""), None);
}

#[test]
fn menu_keys_are_unique() {
    for (i, item) in MENU.iter().enumerate() {
        assert!(MENU[i + 1..].iter().all(|other| other.key != item.key));
    }
}

#[test]
fn path_selects_owning_menu_key() {
    assert_eq!(menu_key_for_path("/ad/page2"), Some("2"));
    assert_eq!(menu_key_for_path("/ad/page3/"), Some("3"));
    assert_eq!(menu_key_for_path("/ad/page1/detail"), Some("1"));
}

#[test]
fn path_outside_menu_selects_nothing() {
    assert_eq!(menu_key_for_path("/ad"), None);
    assert_eq!(menu_key_for_path("/ad/page10"), None);
}

#[test]
fn selecting_a_menu_key_highlights_it_and_returns_its_page() {
    let mut ui = UiState::default();
    assert_eq!(select_menu(&mut ui, "3"), Some("/ad/page3"));
    assert_eq!(ui.selected_menu_key, "3");
}

#[test]
fn selecting_an_unknown_key_changes_nothing() {
    let mut ui = UiState::default();
    ui.select("2");
    assert_eq!(select_menu(&mut ui, "9"), None);
    assert_eq!(ui.selected_menu_key, "2");
}
