//! Состояние выбора региона
//!
//! Два состояния: `Unselected` и `Selected`. Переходы:
//! - pick(r) из `Unselected` → `Selected(r)`
//! - pick(r) из `Selected(r)` → `Unselected` (повторный клик снимает выбор)
//! - pick(r2) из `Selected(r)` → `Selected(r2)`
//! - clear из любого состояния → `Unselected`

use crate::domain::a001_region::{Region, RegionId};

/// Текущий выбор. Сравнение регионов идёт только по ID.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    /// Снимок выбранного региона (нужен UI для отображения имени)
    Selected(Region),
}

/// Результат перехода
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(RegionId),
    Cleared,
    Unchanged,
}

impl Selection {
    pub fn selected_id(&self) -> Option<&str> {
        self.region().map(|region| region.id.as_str())
    }

    pub fn region(&self) -> Option<&Region> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(region) => Some(region),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }

    /// Обработать событие выбора с карты (с переключением)
    pub fn select_region(&mut self, region: Option<&Region>) -> SelectionChange {
        match region {
            None => self.clear(),
            Some(region) if self.selected_id() == Some(region.id.as_str()) => self.clear(),
            Some(region) => self.set(region),
        }
    }

    /// Установить регион без переключения (форма объявления)
    pub fn assign(&mut self, region: Option<&Region>) -> SelectionChange {
        match region {
            None => self.clear(),
            Some(region) if self.selected_id() == Some(region.id.as_str()) => {
                SelectionChange::Unchanged
            }
            Some(region) => self.set(region),
        }
    }

    /// Сбросить выбор
    pub fn clear(&mut self) -> SelectionChange {
        match std::mem::take(self) {
            Selection::Unselected => SelectionChange::Unchanged,
            Selection::Selected(_) => SelectionChange::Cleared,
        }
    }

    fn set(&mut self, region: &Region) -> SelectionChange {
        *self = Selection::Selected(region.clone());
        SelectionChange::Selected(region.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_region::{RegionKind, RegionShape};

    fn city(name: &str) -> Region {
        Region::new(name, RegionKind::City, RegionShape::Unplaced)
    }

    #[test]
    fn test_initial_state() {
        let selection = Selection::default();
        assert_eq!(selection, Selection::Unselected);
        assert_eq!(selection.selected_id(), None);
    }

    #[test]
    fn test_pick_from_unselected() {
        let mut selection = Selection::default();
        let change = selection.select_region(Some(&city("Pokhara")));
        assert_eq!(change, SelectionChange::Selected(RegionId::new("pokhara")));
        assert_eq!(selection.selected_id(), Some("pokhara"));
    }

    #[test]
    fn test_toggle_law() {
        let pokhara = city("Pokhara");
        let mut selection = Selection::default();
        selection.select_region(Some(&pokhara));
        let change = selection.select_region(Some(&pokhara));
        assert_eq!(change, SelectionChange::Cleared);
        assert_eq!(selection, Selection::Unselected);
    }

    #[test]
    fn test_toggle_compares_ids_only() {
        let mut selection = Selection::default();
        selection.select_region(Some(&city("Pokhara")));
        // Тот же ID, другая геометрия
        let snapshot = Region::unplaced_city("pokhara");
        selection.select_region(Some(&snapshot));
        assert!(!selection.is_selected());
    }

    #[test]
    fn test_pick_other_region_switches() {
        let mut selection = Selection::default();
        selection.select_region(Some(&city("Pokhara")));
        selection.select_region(Some(&city("Butwal")));
        assert_eq!(selection.selected_id(), Some("butwal"));
        assert_eq!(selection.region().map(|r| r.name.as_str()), Some("Butwal"));
    }

    #[test]
    fn test_pick_none_clears() {
        let mut selection = Selection::default();
        selection.select_region(Some(&city("Pokhara")));
        assert_eq!(selection.select_region(None), SelectionChange::Cleared);
        assert_eq!(selection, Selection::Unselected);
        assert_eq!(selection.select_region(None), SelectionChange::Unchanged);
    }

    #[test]
    fn test_clear_is_absorbing() {
        let mut selection = Selection::default();
        selection.select_region(Some(&city("Kathmandu")));
        assert_eq!(selection.clear(), SelectionChange::Cleared);
        assert_eq!(selection, Selection::Unselected);
        assert_eq!(selection.clear(), SelectionChange::Unchanged);
        assert_eq!(selection, Selection::Unselected);
    }

    #[test]
    fn test_assign_does_not_toggle() {
        let lalitpur = city("Lalitpur");
        let mut selection = Selection::default();
        selection.assign(Some(&lalitpur));
        assert_eq!(selection.assign(Some(&lalitpur)), SelectionChange::Unchanged);
        assert_eq!(selection.selected_id(), Some("lalitpur"));
        assert_eq!(selection.assign(None), SelectionChange::Cleared);
    }
}
