use crate::domain::a001_region::Region;
use crate::shared::region_filter::{filter_by_region, Located};
use crate::shared::selection::Selection;

/// Производное состояние списка: отфильтрованные сущности и выбранный регион.
///
/// Всегда вычисляется заново из каталога и выбора, отдельно не хранится.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionView<T> {
    pub filtered: Vec<T>,
    pub selected_region: Option<Region>,
}

impl<T: Located> RegionView<T> {
    pub fn derive(catalog: Vec<T>, selection: &Selection) -> Self {
        Self {
            filtered: filter_by_region(catalog, selection.selected_id()),
            selected_region: selection.region().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_region::{RegionKind, RegionShape};

    #[derive(Debug, Clone, PartialEq)]
    struct Listing(&'static str, Region);

    impl Located for Listing {
        fn region(&self) -> &Region {
            &self.1
        }
    }

    fn city(name: &str) -> Region {
        Region::new(name, RegionKind::City, RegionShape::Unplaced)
    }

    fn catalog() -> Vec<Listing> {
        vec![
            Listing("thangka", city("Kathmandu")),
            Listing("scarf", city("Pokhara")),
            Listing("sculpture", city("Pokhara")),
        ]
    }

    #[test]
    fn test_pick_then_repick_pokhara() {
        let mut selection = Selection::default();

        selection.select_region(Some(&city("Pokhara")));
        let view = RegionView::derive(catalog(), &selection);
        let names: Vec<&str> = view.filtered.iter().map(|l| l.0).collect();
        assert_eq!(names, vec!["scarf", "sculpture"]);
        assert_eq!(view.selected_region.map(|r| r.name), Some("Pokhara".to_string()));

        selection.select_region(Some(&city("Pokhara")));
        let view = RegionView::derive(catalog(), &selection);
        assert_eq!(view.filtered, catalog());
        assert_eq!(view.selected_region, None);
    }

    #[test]
    fn test_stale_selection_yields_empty_view() {
        let mut selection = Selection::default();
        selection.select_region(Some(&city("Lo Manthang")));
        let view = RegionView::derive(catalog(), &selection);
        assert!(view.filtered.is_empty());
        assert!(view.selected_region.is_some());
    }
}
