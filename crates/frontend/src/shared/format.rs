//! Форматирование значений для карточек и заголовков списков

use chrono::NaiveDate;

/// Цена в рупиях: `Rs. 15,000`
pub fn format_price(rupees: u32) -> String {
    format!("Rs. {}", format_thousands(rupees as u64))
}

fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Дата донации: `15 Nov 2023`
pub fn format_donation_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// "1 product found" / "3 products found"
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {} found", count, noun)
    } else {
        format!("{} {}s found", count, noun)
    }
}

/// Заголовок списка: "All Products" или "Products from Pokhara"
pub fn list_heading(plural: &str, region_name: Option<&str>) -> String {
    match region_name {
        Some(name) => format!("{} from {}", plural, name),
        None => format!("All {}", plural),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(15000), "Rs. 15,000");
        assert_eq!(format_price(1500), "Rs. 1,500");
        assert_eq!(format_price(999), "Rs. 999");
        assert_eq!(format_price(0), "Rs. 0");
        assert_eq!(format_price(1_250_000), "Rs. 1,250,000");
    }

    #[test]
    fn test_format_donation_date() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 15).unwrap();
        assert_eq!(format_donation_date(date), "15 Nov 2023");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "product"), "0 products found");
        assert_eq!(count_label(1, "product"), "1 product found");
        assert_eq!(count_label(12, "donor"), "12 donors found");
    }

    #[test]
    fn test_list_heading() {
        assert_eq!(list_heading("Products", None), "All Products");
        assert_eq!(list_heading("Donors", Some("Pokhara")), "Donors from Pokhara");
    }
}
