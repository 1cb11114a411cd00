//! Фильтрация сущностей по выбранному региону

use std::collections::BTreeMap;

use crate::domain::a001_region::{Region, RegionId};

/// Сущность, привязанная к региону (товар, донор)
pub trait Located {
    fn region(&self) -> &Region;
}

/// Отфильтровать сущности по ID региона.
///
/// `None` и пустой ID возвращают вход без изменений. Иначе подпоследовательность
/// с `region().id == selected` в исходном порядке. Неизвестный ID даёт
/// пустой список, а не ошибку.
pub fn filter_by_region<T: Located>(entities: Vec<T>, selected: Option<&str>) -> Vec<T> {
    match active_id(selected) {
        None => entities,
        Some(id) => entities
            .into_iter()
            .filter(|entity| entity.region().id == id)
            .collect(),
    }
}

/// То же, что [`filter_by_region`], но без копирования элементов
pub fn filter_refs_by_region<'a, T: Located>(entities: &'a [T], selected: Option<&str>) -> Vec<&'a T> {
    let selected = active_id(selected);
    entities
        .iter()
        .filter(|entity| selected.map_or(true, |id| entity.region().id == id))
        .collect()
}

/// Пустой ID означает отсутствие выбора
fn active_id(selected: Option<&str>) -> Option<&str> {
    selected.filter(|id| !id.is_empty())
}

/// Количество сущностей по каждому региону (для бейджей на карте)
pub fn region_counts<T: Located>(entities: &[T]) -> BTreeMap<RegionId, usize> {
    let mut counts = BTreeMap::new();
    for entity in entities {
        *counts.entry(entity.region().id.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_region::{RegionKind, RegionShape};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        location: Region,
    }

    impl Located for Item {
        fn region(&self) -> &Region {
            &self.location
        }
    }

    fn item(id: u32, city: &str) -> Item {
        Item {
            id,
            location: Region::new(city, RegionKind::City, RegionShape::Unplaced),
        }
    }

    fn catalog() -> Vec<Item> {
        vec![
            item(1, "Kathmandu"),
            item(2, "Pokhara"),
            item(3, "Kathmandu"),
            item(4, "Butwal"),
            item(5, "Pokhara"),
        ]
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_identity_when_unselected() {
        let all = catalog();
        assert_eq!(filter_by_region(all.clone(), None), all);
        assert_eq!(filter_refs_by_region(&all, None).len(), all.len());
    }

    #[test]
    fn test_empty_id_means_unselected() {
        let all = catalog();
        assert_eq!(filter_by_region(all.clone(), Some("")), all);
        assert_eq!(filter_refs_by_region(&all, Some("")).len(), all.len());
    }

    #[test]
    fn test_matches_kathmandu_in_order() {
        let three = vec![item(1, "Kathmandu"), item(2, "Pokhara"), item(3, "Kathmandu")];
        let filtered = filter_by_region(three, Some("kathmandu"));
        assert_eq!(ids(&filtered), vec![1, 3]);
    }

    #[test]
    fn test_subset_property() {
        let all = catalog();
        for id in ["kathmandu", "pokhara", "butwal", "hetauda"] {
            let filtered = filter_by_region(all.clone(), Some(id));
            assert!(filtered.iter().all(|e| e.region().id == id));

            let expected: Vec<u32> = all
                .iter()
                .filter(|e| e.region().id == id)
                .map(|e| e.id)
                .collect();
            assert_eq!(ids(&filtered), expected);
        }
    }

    #[test]
    fn test_idempotent() {
        let once = filter_by_region(catalog(), Some("pokhara"));
        let twice = filter_by_region(once.clone(), Some("pokhara"));
        assert_eq!(once, twice);
        assert_eq!(ids(&twice), vec![2, 5]);
    }

    #[test]
    fn test_unknown_id_yields_empty() {
        assert!(filter_by_region(catalog(), Some("nonexistent-id")).is_empty());
        assert!(filter_refs_by_region(&catalog(), Some("nonexistent-id")).is_empty());
    }

    #[test]
    fn test_refs_variant_agrees() {
        let all = catalog();
        let owned = filter_by_region(all.clone(), Some("kathmandu"));
        let borrowed: Vec<Item> = filter_refs_by_region(&all, Some("kathmandu"))
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(owned, borrowed);
    }

    #[test]
    fn test_region_counts() {
        let counts = region_counts(&catalog());
        assert_eq!(counts.get(&RegionId::new("kathmandu")), Some(&2));
        assert_eq!(counts.get(&RegionId::new("butwal")), Some(&1));
        assert_eq!(counts.get(&RegionId::new("hetauda")), None);
        assert_eq!(counts.values().sum::<usize>(), 5);
    }
}
