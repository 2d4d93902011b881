use leptos::prelude::*;

use super::page_labels::DEFAULT_PAGE;

/// Состояние оболочки: активная страница и видимость боковой панели
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open_page(&self, key: &str) {
        log::debug!("open_page: key='{}'", key);
        self.active.set(key.to_string());
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|active| active == key)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
