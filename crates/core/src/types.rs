//! Core types used throughout Catalog Admin
//!
//! Identifier aliases plus the two closed enumerations a product is
//! classified by: the target [`Gender`] and the available [`Size`]s.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Type alias for product identifiers
pub type ProductId = uuid::Uuid;

/// Type alias for category identifiers
pub type CategoryId = uuid::Uuid;

/// Type alias for persisted image identifiers
pub type ImageId = uuid::Uuid;

// ============================================================================
// Gender
// ============================================================================

/// Audience a product is sold for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
    Kid,
    Unisex,
}

impl Gender {
    /// Wire value (`men`, `women`, `kid`, `unisex`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "men",
            Gender::Women => "women",
            Gender::Kid => "kid",
            Gender::Unisex => "unisex",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
            Gender::Kid => "Kid",
            Gender::Unisex => "Unisex",
        }
    }

    /// Get all genders in selector order
    pub fn all() -> &'static [Gender] {
        &[Gender::Men, Gender::Women, Gender::Kid, Gender::Unisex]
    }
}

impl FromStr for Gender {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "men" => Ok(Gender::Men),
            "women" => Ok(Gender::Women),
            "kid" => Ok(Gender::Kid),
            "unisex" => Ok(Gender::Unisex),
            other => Err(CatalogError::invalid_field(
                "gender",
                format!("unknown gender '{}'", other),
            )),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Size
// ============================================================================

/// Garment size. Ordering follows the size chart, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "XS")]
    ExtraSmall,
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
    #[serde(rename = "XL")]
    ExtraLarge,
    #[serde(rename = "XXL")]
    DoubleExtraLarge,
}

impl Size {
    /// Size chart label (`XS` .. `XXL`)
    pub fn label(&self) -> &'static str {
        match self {
            Size::ExtraSmall => "XS",
            Size::Small => "S",
            Size::Medium => "M",
            Size::Large => "L",
            Size::ExtraLarge => "XL",
            Size::DoubleExtraLarge => "XXL",
        }
    }

    /// Get all sizes in chart order
    pub fn all() -> &'static [Size] {
        &[
            Size::ExtraSmall,
            Size::Small,
            Size::Medium,
            Size::Large,
            Size::ExtraLarge,
            Size::DoubleExtraLarge,
        ]
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "XS" => Ok(Size::ExtraSmall),
            "S" => Ok(Size::Small),
            "M" => Ok(Size::Medium),
            "L" => Ok(Size::Large),
            "XL" => Ok(Size::ExtraLarge),
            "XXL" => Ok(Size::DoubleExtraLarge),
            other => Err(CatalogError::invalid_field(
                "sizes",
                format!("unknown size '{}'", other),
            )),
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gender_round_trip_through_wire_value() {
        for gender in Gender::all() {
            assert_eq!(gender.as_str().parse::<Gender>().unwrap(), *gender);
        }
    }

    #[test]
    fn test_gender_rejects_unknown() {
        let err = "robot".parse::<Gender>().unwrap_err();
        assert!(err.is_validation());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_size_labels_and_order() {
        let labels: Vec<&str> = Size::all().iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["XS", "S", "M", "L", "XL", "XXL"]);
        assert!(Size::ExtraSmall < Size::DoubleExtraLarge);
    }

    #[test]
    fn test_size_parse() {
        assert_eq!(" M ".parse::<Size>().unwrap(), Size::Medium);
        assert_eq!("XXL".parse::<Size>().unwrap(), Size::DoubleExtraLarge);
        assert!("XXXL".parse::<Size>().is_err());
        assert!("m".parse::<Size>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&vec![Size::Small, Size::ExtraLarge]).unwrap();
        assert_eq!(json, r#"["S","XL"]"#);

        let gender: Gender = serde_json::from_str(r#""unisex""#).unwrap();
        assert_eq!(gender, Gender::Unisex);
    }
}
