use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор региона, производный от отображаемого имени
///
/// Правило: нижний регистр, каждая серия пробельных символов заменяется
/// одним дефисом (`"Koshi Province"` → `"koshi-province"`). Пробелы по краям
/// не обрезаются и тоже дают дефис.
/// Разные имена могут дать одинаковый ID, коллизии не обрабатываются.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    /// Построить ID из отображаемого имени
    pub fn from_name(name: &str) -> Self {
        let mut slug = String::with_capacity(name.len());
        let mut in_whitespace = false;
        for ch in name.chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    slug.push('-');
                }
                in_whitespace = true;
            } else {
                slug.extend(ch.to_lowercase());
                in_whitespace = false;
            }
        }
        Self(slug)
    }

    /// Обернуть уже готовое значение без нормализации
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for RegionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RegionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ============================================================================
// Region kind / shape
// ============================================================================

/// Уровень административного деления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Province,
    District,
    City,
}

impl RegionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionKind::Province => "province",
            RegionKind::District => "district",
            RegionKind::City => "city",
        }
    }

    /// Человекочитаемое название для UI
    pub fn display_name(&self) -> &'static str {
        match self {
            RegionKind::Province => "Province",
            RegionKind::District => "District",
            RegionKind::City => "City",
        }
    }
}

/// Географическая точка (градусы)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Данные для отрисовки региона на карте.
///
/// Для фильтрации не используются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegionShape {
    /// Контур (провинции): замкнутое кольцо вершин и точка подписи
    Outline {
        ring: Vec<GeoPoint>,
        label_at: GeoPoint,
    },
    /// Маркер (города)
    Marker(GeoPoint),
    /// Регион без геометрии (например, fallback для неизвестного города)
    #[default]
    Unplaced,
}

impl RegionShape {
    /// Точка, к которой привязываются подпись и бейдж
    pub fn anchor(&self) -> Option<GeoPoint> {
        match self {
            RegionShape::Outline { label_at, .. } => Some(*label_at),
            RegionShape::Marker(point) => Some(*point),
            RegionShape::Unplaced => None,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Регион (провинция, район или город)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    pub kind: RegionKind,
    #[serde(default)]
    pub shape: RegionShape,
}

impl Region {
    /// Создать регион; ID вычисляется из имени
    pub fn new(name: impl Into<String>, kind: RegionKind, shape: RegionShape) -> Self {
        let name = name.into();
        Self {
            id: RegionId::from_name(&name),
            name,
            kind,
            shape,
        }
    }

    /// Регион-заглушка для города, которого нет в реестре
    pub fn unplaced_city(name: impl Into<String>) -> Self {
        Self::new(name, RegionKind::City, RegionShape::Unplaced)
    }

    pub fn is_city(&self) -> bool {
        self.kind == RegionKind::City
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_name() {
        assert_eq!(RegionId::from_name("Kathmandu").as_str(), "kathmandu");
        assert_eq!(RegionId::from_name("Koshi Province").as_str(), "koshi-province");
        assert_eq!(
            RegionId::from_name("Sudurpashchim   Province").as_str(),
            "sudurpashchim-province"
        );
        assert_eq!(RegionId::from_name("Koshi\tProvince").as_str(), "koshi-province");
    }

    #[test]
    fn test_id_keeps_edge_whitespace_as_hyphens() {
        assert_eq!(RegionId::from_name(" Koshi  Province ").as_str(), "-koshi-province-");
        assert_eq!(RegionId::from_name("Pokhara\n").as_str(), "pokhara-");
        assert_eq!(RegionId::from_name("").as_str(), "");
    }

    #[test]
    fn test_id_collision_is_silent() {
        // Разный регистр и пробелы дают одинаковый ID
        assert_eq!(
            RegionId::from_name("New  Road"),
            RegionId::from_name("new road")
        );
    }

    #[test]
    fn test_region_new_derives_id() {
        let region = Region::new("Pokhara", RegionKind::City, RegionShape::Unplaced);
        assert_eq!(region.id, "pokhara");
        assert!(region.is_city());
        assert_eq!(region.shape.anchor(), None);
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&RegionKind::Province).unwrap();
        assert_eq!(json, "\"province\"");
        let kind: RegionKind = serde_json::from_str("\"city\"").unwrap();
        assert_eq!(kind, RegionKind::City);
    }

    #[test]
    fn test_shape_deserialize() {
        let shape: RegionShape =
            serde_json::from_str(r#"{ "marker": { "lat": 27.7, "lng": 85.3 } }"#).unwrap();
        assert_eq!(shape.anchor(), Some(GeoPoint::new(27.7, 85.3)));
    }
}
