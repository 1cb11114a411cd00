use serde::{Deserialize, Serialize};

use crate::domain::a001_region::Region;
use crate::shared::region_filter::Located;

/// Товар маркетплейса
///
/// `location` хранит снимок региона на момент создания записи, а не ссылка в реестр.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Цена в целых рупиях
    pub price: u32,
    pub image: Option<String>,
    pub location: Region,
    #[serde(rename = "sellerName")]
    pub seller_name: String,
    pub category: Option<String>,
}

impl Located for Product {
    fn region(&self) -> &Region {
        &self.location
    }
}

/// Запись товара в фикстуре: регион задан названием города
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    #[serde(default)]
    pub image: Option<String>,
    pub city: String,
    pub seller_name: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductRecord {
    pub fn into_product(self, location: Region) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            location,
            seller_name: self.seller_name,
            category: self.category,
        }
    }
}
