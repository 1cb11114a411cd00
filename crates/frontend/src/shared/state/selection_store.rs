use contracts::domain::a001_region::Region;
use contracts::shared::selection::{Selection, SelectionChange};
use leptos::prelude::*;

/// Хранилище выбранного региона.
///
/// Создаётся страницей и передаётся дочерним компонентам через контекст.
/// Единственный писатель: обработчики событий карты и кнопки "Clear".
#[derive(Clone, Copy)]
pub struct SelectionStore {
    selection: RwSignal<Selection>,
    scope: &'static str,
}

impl SelectionStore {
    pub fn new(scope: &'static str) -> Self {
        Self {
            selection: RwSignal::new(Selection::Unselected),
            scope,
        }
    }

    /// Событие карты: повторный выбор того же региона снимает выбор
    pub fn select_region(&self, region: Option<Region>) {
        self.apply(|selection| selection.select_region(region.as_ref()));
    }

    /// Установить регион без переключения
    pub fn assign(&self, region: Option<Region>) {
        self.apply(|selection| selection.assign(region.as_ref()));
    }

    pub fn clear(&self) {
        self.apply(Selection::clear);
    }

    pub fn get(&self) -> Selection {
        self.selection.get()
    }

    pub fn selected_region(&self) -> Signal<Option<Region>> {
        let selection = self.selection;
        Signal::derive(move || selection.with(|s| s.region().cloned()))
    }

    /// Переход считается на копии: сигнал пишется только при реальном изменении
    fn apply(&self, transition: impl FnOnce(&mut Selection) -> SelectionChange) {
        let mut next = self.selection.get_untracked();
        match transition(&mut next) {
            SelectionChange::Selected(id) => {
                self.selection.set(next);
                log::info!("[{}] region selected: {}", self.scope, id);
            }
            SelectionChange::Cleared => {
                self.selection.set(next);
                log::info!("[{}] selection cleared", self.scope);
            }
            SelectionChange::Unchanged => {}
        }
    }
}

/// Хранилище выбора, предоставленное текущей страницей
pub fn use_selection() -> SelectionStore {
    use_context::<SelectionStore>().expect("SelectionStore not found in context")
}
