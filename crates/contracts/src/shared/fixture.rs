//! Встроенный набор данных: реестр регионов, товары и доноры.
//!
//! JSON-документы вшиваются в бинарник и разбираются один раз при первом
//! обращении. Сущности в фикстуре ссылаются на город по имени, при загрузке
//! в них копируется снимок региона из реестра.

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::a001_region::{Region, RegionKind, RegionRegistry, RegionShape};
use crate::domain::a002_product::{Product, ProductRecord};
use crate::domain::a003_donor::{Donor, DonorRecord};

/// Поддерживаемая версия формата фикстуры
pub const FIXTURE_VERSION: u32 = 1;

const REGIONS_JSON: &str = include_str!("../../fixtures/regions.json");
const PRODUCTS_JSON: &str = include_str!("../../fixtures/products.json");
const DONORS_JSON: &str = include_str!("../../fixtures/donors.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to parse fixture '{document}': {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("fixture '{document}' has version {found}, expected {expected}")]
    UnsupportedVersion {
        document: &'static str,
        found: u32,
        expected: u32,
    },
    #[error("invalid record '{id}' in fixture '{document}': {reason}")]
    InvalidRecord {
        document: &'static str,
        id: String,
        reason: String,
    },
}

// ============================================================================
// Documents
// ============================================================================

#[derive(Debug, Deserialize)]
struct RegionRecord {
    name: String,
    kind: RegionKind,
    #[serde(default)]
    shape: RegionShape,
}

#[derive(Debug, Deserialize)]
struct RegionDocument {
    version: u32,
    regions: Vec<RegionRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductDocument {
    version: u32,
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct DonorDocument {
    version: u32,
    donors: Vec<DonorRecord>,
}

fn parse<T: for<'de> Deserialize<'de>>(document: &'static str, json: &str) -> Result<T, FixtureError> {
    serde_json::from_str(json).map_err(|source| FixtureError::Parse { document, source })
}

fn check_version(document: &'static str, found: u32) -> Result<(), FixtureError> {
    if found != FIXTURE_VERSION {
        return Err(FixtureError::UnsupportedVersion {
            document,
            found,
            expected: FIXTURE_VERSION,
        });
    }
    Ok(())
}

// ============================================================================
// Loaders
// ============================================================================

pub fn load_regions(json: &str) -> Result<RegionRegistry, FixtureError> {
    let doc: RegionDocument = parse("regions", json)?;
    check_version("regions", doc.version)?;

    let regions: Vec<Region> = doc
        .regions
        .into_iter()
        .map(|record| Region::new(record.name, record.kind, record.shape))
        .collect();

    Ok(RegionRegistry::new(regions))
}

pub fn load_products(json: &str, registry: &RegionRegistry) -> Result<Vec<Product>, FixtureError> {
    let doc: ProductDocument = parse("products", json)?;
    check_version("products", doc.version)?;

    Ok(doc
        .products
        .into_iter()
        .map(|record| {
            let location = registry.location_for_city(&record.city);
            record.into_product(location)
        })
        .collect())
}

pub fn load_donors(json: &str, registry: &RegionRegistry) -> Result<Vec<Donor>, FixtureError> {
    let doc: DonorDocument = parse("donors", json)?;
    check_version("donors", doc.version)?;

    doc.donors
        .into_iter()
        .map(|record| {
            let id = record.id.clone();
            let location = registry.location_for_city(&record.city);
            record
                .into_donor(location)
                .map_err(|reason| FixtureError::InvalidRecord {
                    document: "donors",
                    id,
                    reason,
                })
        })
        .collect()
}

// ============================================================================
// Catalog
// ============================================================================

/// Все статические данные приложения
#[derive(Debug, Clone)]
pub struct Catalog {
    pub regions: RegionRegistry,
    pub products: Vec<Product>,
    pub donors: Vec<Donor>,
}

impl Catalog {
    /// Разобрать встроенную фикстуру
    pub fn load() -> Result<Self, FixtureError> {
        Self::from_sources(REGIONS_JSON, PRODUCTS_JSON, DONORS_JSON)
    }

    pub fn from_sources(regions: &str, products: &str, donors: &str) -> Result<Self, FixtureError> {
        let regions = load_regions(regions)?;
        let products = load_products(products, &regions)?;
        let donors = load_donors(donors, &regions)?;

        log::debug!(
            "Fixture loaded: {} regions, {} products, {} donors",
            regions.len(),
            products.len(),
            donors.len()
        );

        Ok(Self {
            regions,
            products,
            donors,
        })
    }
}

static CATALOG: Lazy<Result<Catalog, FixtureError>> = Lazy::new(Catalog::load);

/// Общий экземпляр каталога (разбирается при первом вызове)
pub fn catalog() -> Result<&'static Catalog, &'static FixtureError> {
    Lazy::force(&CATALOG).as_ref()
}
