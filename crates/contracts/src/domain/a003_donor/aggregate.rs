use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::a001_region::Region;
use crate::shared::region_filter::Located;

/// Группа крови (ABO + резус)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }

    pub fn all() -> [BloodGroup; 8] {
        [
            BloodGroup::APositive,
            BloodGroup::ANegative,
            BloodGroup::BPositive,
            BloodGroup::BNegative,
            BloodGroup::AbPositive,
            BloodGroup::AbNegative,
            BloodGroup::OPositive,
            BloodGroup::ONegative,
        ]
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Доступность донора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Availability {
    /// "Available"
    Now,
    /// "Available after N week(s)"
    AfterWeeks(u8),
}

impl Availability {
    pub fn is_available_now(&self) -> bool {
        matches!(self, Availability::Now)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Now => f.write_str("Available"),
            Availability::AfterWeeks(1) => f.write_str("Available after 1 week"),
            Availability::AfterWeeks(n) => write!(f, "Available after {} weeks", n),
        }
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("available") {
            return Ok(Availability::Now);
        }

        let weeks = s
            .strip_prefix("Available after ")
            .and_then(|rest| rest.strip_suffix(" weeks").or_else(|| rest.strip_suffix(" week")))
            .ok_or_else(|| format!("Unknown availability: '{}'", s))?;

        weeks
            .trim()
            .parse::<u8>()
            .map(Availability::AfterWeeks)
            .map_err(|e| format!("Invalid week count in '{}': {}", s, e))
    }
}

impl TryFrom<String> for Availability {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Availability> for String {
    fn from(value: Availability) -> Self {
        value.to_string()
    }
}

/// Донор крови
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub id: String,
    pub name: String,
    #[serde(rename = "bloodGroup")]
    pub blood_group: BloodGroup,
    pub contact: String,
    pub image: Option<String>,
    pub location: Region,
    #[serde(rename = "lastDonation")]
    pub last_donation: NaiveDate,
    pub availability: Availability,
}

impl Located for Donor {
    fn region(&self) -> &Region {
        &self.location
    }
}

/// Запись донора в фикстуре: даты и доступность в текстовом виде
#[derive(Debug, Clone, Deserialize)]
pub struct DonorRecord {
    pub id: String,
    pub name: String,
    pub blood_group: BloodGroup,
    pub contact: String,
    #[serde(default)]
    pub image: Option<String>,
    pub city: String,
    pub last_donation: String,
    pub availability: String,
}

impl DonorRecord {
    /// Преобразовать запись в донора; ошибка содержит текст причины
    pub fn into_donor(self, location: Region) -> Result<Donor, String> {
        let last_donation = NaiveDate::parse_from_str(&self.last_donation, "%Y-%m-%d")
            .map_err(|e| format!("Invalid last_donation '{}': {}", self.last_donation, e))?;
        let availability = self.availability.parse::<Availability>()?;

        Ok(Donor {
            id: self.id,
            name: self.name,
            blood_group: self.blood_group,
            contact: self.contact,
            image: self.image,
            location,
            last_donation,
            availability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_region::{RegionKind, RegionShape};

    #[test]
    fn test_blood_group_serde() {
        let group: BloodGroup = serde_json::from_str("\"AB-\"").unwrap();
        assert_eq!(group, BloodGroup::AbNegative);
        assert_eq!(serde_json::to_string(&BloodGroup::OPositive).unwrap(), "\"O+\"");
        for group in BloodGroup::all() {
            let json = format!("\"{}\"", group);
            assert_eq!(serde_json::from_str::<BloodGroup>(&json).unwrap(), group);
        }
    }

    #[test]
    fn test_availability_parse() {
        assert_eq!("Available".parse(), Ok(Availability::Now));
        assert_eq!("Available after 1 week".parse(), Ok(Availability::AfterWeeks(1)));
        assert_eq!("Available after 2 weeks".parse(), Ok(Availability::AfterWeeks(2)));
        assert!("Soon".parse::<Availability>().is_err());
        assert!("Available after many weeks".parse::<Availability>().is_err());
    }

    #[test]
    fn test_availability_display() {
        assert_eq!(Availability::Now.to_string(), "Available");
        assert_eq!(Availability::AfterWeeks(1).to_string(), "Available after 1 week");
        assert_eq!(Availability::AfterWeeks(3).to_string(), "Available after 3 weeks");
        assert!(Availability::Now.is_available_now());
        assert!(!Availability::AfterWeeks(2).is_available_now());
    }

    #[test]
    fn test_record_into_donor() {
        let record = DonorRecord {
            id: "1".into(),
            name: "Ram Bahadur Thapa".into(),
            blood_group: BloodGroup::APositive,
            contact: "9841234567".into(),
            image: None,
            city: "Kathmandu".into(),
            last_donation: "2023-11-15".into(),
            availability: "Available".into(),
        };
        let location = Region::new("Kathmandu", RegionKind::City, RegionShape::Unplaced);
        let donor = record.into_donor(location).unwrap();
        assert_eq!(donor.last_donation, NaiveDate::from_ymd_opt(2023, 11, 15).unwrap());
        assert_eq!(donor.region().id, "kathmandu");
    }

    #[test]
    fn test_record_with_bad_date() {
        let record = DonorRecord {
            id: "2".into(),
            name: "Sita".into(),
            blood_group: BloodGroup::OPositive,
            contact: "9800000000".into(),
            image: None,
            city: "Pokhara".into(),
            last_donation: "15/11/2023".into(),
            availability: "Available".into(),
        };
        let location = Region::unplaced_city("Pokhara");
        assert!(record.into_donor(location).is_err());
    }
}
