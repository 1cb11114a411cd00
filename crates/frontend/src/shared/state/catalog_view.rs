use std::collections::BTreeMap;

use contracts::domain::a001_region::{Region, RegionId};
use contracts::shared::region_filter::{region_counts, Located};
use contracts::shared::view_state::RegionView;
use leptos::prelude::*;

use super::selection_store::SelectionStore;

/// Связка каталога и выбора региона.
///
/// Отфильтрованный список является производным значением (`Memo`), отдельно не хранится.
pub struct CatalogViewModel<T: Send + Sync + 'static> {
    pub selection: SelectionStore,
    pub filtered: Memo<Vec<T>>,
    pub selected_region: Memo<Option<Region>>,
    counts: StoredValue<BTreeMap<RegionId, usize>>,
    total: usize,
}

impl<T: Send + Sync + 'static> Clone for CatalogViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for CatalogViewModel<T> {}

impl<T> CatalogViewModel<T>
where
    T: Located + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(catalog: &[T], selection: SelectionStore) -> Self {
        let total = catalog.len();
        let counts = StoredValue::new(region_counts(catalog));
        let catalog = StoredValue::new(catalog.to_vec());

        let view = Memo::new(move |_| {
            let current = selection.get();
            catalog.with_value(|items| RegionView::derive(items.clone(), &current))
        });

        Self {
            selection,
            filtered: Memo::new(move |_| view.with(|v| v.filtered.clone())),
            selected_region: Memo::new(move |_| view.with(|v| v.selected_region.clone())),
            counts,
            total,
        }
    }

    /// Количество сущностей по регионам (весь каталог, без учёта выбора)
    pub fn counts(&self) -> BTreeMap<RegionId, usize> {
        self.counts.get_value()
    }

    pub fn total(&self) -> usize {
        self.total
    }
}
