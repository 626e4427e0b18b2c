//! Local UI chrome state for the admin shell.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (sidebar collapse, highlighted menu
//! entry) out of the session so layout controls can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Menu key highlighted when the admin shell first renders.
pub const DEFAULT_MENU_KEY: &str = "1";

/// UI state for the admin sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub sider_collapsed: bool,
    pub selected_menu_key: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sider_collapsed: false, selected_menu_key: DEFAULT_MENU_KEY.to_owned() }
    }
}

impl UiState {
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.sider_collapsed = collapsed;
    }

    pub fn select(&mut self, key: &str) {
        key.clone_into(&mut self.selected_menu_key);
    }
}
