//! Build script: sanity check of the embedded fixtures
//!
//! Parses fixtures/*.json, verifies the format version and warns about
//! entities whose city is missing from the region registry (such entities
//! can never be reached by a map selection).

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const FIXTURE_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct RegionsJson {
    version: u32,
    regions: Vec<RegionJson>,
}

#[derive(Debug, Deserialize)]
struct RegionJson {
    name: String,
    kind: String,
}

#[derive(Debug, Deserialize)]
struct EntityJson {
    id: String,
    city: String,
}

#[derive(Debug, Deserialize)]
struct ProductsJson {
    version: u32,
    products: Vec<EntityJson>,
}

#[derive(Debug, Deserialize)]
struct DonorsJson {
    version: u32,
    donors: Vec<EntityJson>,
}

fn main() {
    println!("cargo:rerun-if-changed=fixtures");

    let fixtures = Path::new("fixtures");
    if !fixtures.exists() {
        println!("cargo:warning=Fixtures directory not found, skipping fixture check");
        return;
    }

    let regions: RegionsJson = read_json(&fixtures.join("regions.json"));
    check_version("regions.json", regions.version);

    let cities: HashSet<String> = regions
        .regions
        .iter()
        .filter(|r| r.kind == "city")
        .map(|r| r.name.to_lowercase())
        .collect();

    let products: ProductsJson = read_json(&fixtures.join("products.json"));
    check_version("products.json", products.version);
    warn_unknown_cities("products.json", &products.products, &cities);

    let donors: DonorsJson = read_json(&fixtures.join("donors.json"));
    check_version("donors.json", donors.version);
    warn_unknown_cities("donors.json", &donors.donors, &cities);
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> T {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
}

fn check_version(file: &str, version: u32) {
    if version != FIXTURE_VERSION {
        panic!(
            "{} has version {}, expected {}",
            file, version, FIXTURE_VERSION
        );
    }
}

fn warn_unknown_cities(file: &str, entities: &[EntityJson], cities: &HashSet<String>) {
    for entity in entities {
        if !cities.contains(&entity.city.to_lowercase()) {
            println!(
                "cargo:warning={}: record {} references unknown city '{}'",
                file, entity.id, entity.city
            );
        }
    }
}
