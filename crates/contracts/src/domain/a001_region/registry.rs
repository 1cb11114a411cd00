use super::aggregate::{Region, RegionKind};

/// Неизменяемый реестр регионов.
///
/// Заполняется один раз при загрузке фикстуры и далее только читается.
/// Порядок регионов совпадает с порядком в фикстуре.
#[derive(Debug, Clone, Default)]
pub struct RegionRegistry {
    regions: Vec<Region>,
}

impl RegionRegistry {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Найти регион по ID.
    ///
    /// При коллизии ID возвращается первый регион в порядке реестра.
    pub fn get_region_by_id(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == id)
    }

    /// Поиск по подстроке имени (без учёта регистра), в порядке реестра
    pub fn search_regions_by_name(&self, query: &str) -> Vec<&Region> {
        let query = query.to_lowercase();
        self.regions
            .iter()
            .filter(|region| region.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Город по точному имени (без учёта регистра)
    pub fn get_city_by_name(&self, name: &str) -> Option<&Region> {
        let name = name.to_lowercase();
        self.regions
            .iter()
            .filter(|region| region.is_city())
            .find(|region| region.name.to_lowercase() == name)
    }

    /// Город по ID или по имени
    pub fn get_city_by_id_or_name(&self, key: &str) -> Option<&Region> {
        let name = key.to_lowercase();
        self.regions
            .iter()
            .filter(|region| region.is_city())
            .find(|region| region.id == key || region.name.to_lowercase() == name)
    }

    /// Снимок региона для сущности, заданной названием города.
    ///
    /// Если города нет в реестре, возвращается заглушка с ID из имени:
    /// такая сущность не попадёт ни в одну выборку по карте.
    pub fn location_for_city(&self, name: &str) -> Region {
        match self.get_city_by_name(name) {
            Some(region) => region.clone(),
            None => {
                log::warn!("City '{}' is not in the region registry, using fallback", name);
                Region::unplaced_city(name)
            }
        }
    }

    pub fn regions_of_kind(&self, kind: RegionKind) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(move |region| region.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
