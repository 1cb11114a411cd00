use leptos::prelude::*;

use crate::shared::config::Page;

/// Глобальное состояние приложения: текущая страница.
///
/// Выбор региона сюда не входит: у каждой страницы своё хранилище.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new(initial: Page) -> Self {
        Self {
            page: RwSignal::new(initial),
        }
    }

    pub fn navigate(&self, page: Page) {
        if self.page.get_untracked() == page {
            return;
        }
        log::debug!("Navigate to {:?}", page);
        self.page.set(page);
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.page.get() == page
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
