use serde::{Deserialize, Serialize};

use crate::domain::a001_region::Region;

/// Черновик нового объявления (форма "Create Product Listing").
///
/// Ничего не сохраняется: после валидации черновик только логируется.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListingDraft {
    pub name: String,
    pub description: String,
    /// Цена как введена пользователем
    pub price: String,
    pub location: Option<Region>,
}

impl ProductListingDraft {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.location.is_none() {
            return Err("Please select a location".into());
        }
        if self.name.trim().is_empty() {
            return Err("Product name is required".into());
        }
        if self.description.trim().is_empty() {
            return Err("Description is required".into());
        }
        self.parsed_price()?;
        Ok(())
    }

    /// Цена в целых рупиях (неотрицательная)
    pub fn parsed_price(&self) -> Result<u32, String> {
        let raw = self.price.trim();
        if raw.is_empty() {
            return Err("Price is required".into());
        }
        raw.parse::<u32>()
            .map_err(|_| format!("Price must be a whole non-negative number, got '{}'", raw))
    }

    /// Сообщение об успешном создании
    pub fn confirmation(&self) -> Option<String> {
        let location = self.location.as_ref()?;
        Some(format!(
            "Product listing created for {} in {}!",
            self.name.trim(),
            location.name
        ))
    }
}
