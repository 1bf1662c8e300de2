//! # Domain Types
//!
//! The catalog model consumed (read-only) by the cart logic.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    ShopItem     │   │  RegionPrices   │   │     Region      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │──►│  US  Option<f64>│◄──│  US EU IN       │       │
//! │  │  title          │   │  EU  Option<f64>│   │  CA AU XX       │       │
//! │  │  shop_type      │   │  ...            │   └─────────────────┘       │
//! │  │  prices         │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unavailable Prices
//! A price is either a finite number or "unavailable". JSON has no NaN, so
//! the catalog expresses unavailability as `null` or by leaving the region
//! out. Anything that is not a finite number is read as unavailable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};

/// Identifier of a catalog item.
pub type ItemId = i64;

// =============================================================================
// Region
// =============================================================================

/// Geographic pricing zone.
///
/// Closed set: no other value is ever valid.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Region {
    #[default]
    Us,
    Eu,
    In,
    Ca,
    Au,
    Xx,
}

impl Region {
    /// Every supported region, in display order.
    pub const ALL: [Region; 6] = [
        Region::Us,
        Region::Eu,
        Region::In,
        Region::Ca,
        Region::Au,
        Region::Xx,
    ];

    /// Returns the two-letter code.
    pub const fn code(&self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Eu => "EU",
            Region::In => "IN",
            Region::Ca => "CA",
            Region::Au => "AU",
            Region::Xx => "XX",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Region::ALL
            .into_iter()
            .find(|region| region.code() == code)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "region".to_string(),
                allowed: Region::ALL.iter().map(|r| r.code().to_string()).collect(),
            })
    }
}

// =============================================================================
// Shop Type
// =============================================================================

/// Which shop an item is sold in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum ShopType {
    #[default]
    Regular,
    BlackMarket,
}

// =============================================================================
// Region Prices
// =============================================================================

/// Per-region price table of one item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegionPrices {
    #[serde(rename = "US", default, deserialize_with = "lenient_price")]
    pub us: Option<f64>,
    #[serde(rename = "EU", default, deserialize_with = "lenient_price")]
    pub eu: Option<f64>,
    #[serde(rename = "IN", default, deserialize_with = "lenient_price")]
    pub in_: Option<f64>,
    #[serde(rename = "CA", default, deserialize_with = "lenient_price")]
    pub ca: Option<f64>,
    #[serde(rename = "AU", default, deserialize_with = "lenient_price")]
    pub au: Option<f64>,
    #[serde(rename = "XX", default, deserialize_with = "lenient_price")]
    pub xx: Option<f64>,
}

impl RegionPrices {
    /// Returns the price for `region`, or `None` when it is unavailable.
    ///
    /// Only finite numbers count as a price.
    pub fn get(&self, region: Region) -> Option<f64> {
        let raw = match region {
            Region::Us => self.us,
            Region::Eu => self.eu,
            Region::In => self.in_,
            Region::Ca => self.ca,
            Region::Au => self.au,
            Region::Xx => self.xx,
        };
        raw.filter(|price| price.is_finite())
    }

    /// Sets the price for `region`. `None` marks it unavailable.
    pub fn set(&mut self, region: Region, price: Option<f64>) {
        let slot = match region {
            Region::Us => &mut self.us,
            Region::Eu => &mut self.eu,
            Region::In => &mut self.in_,
            Region::Ca => &mut self.ca,
            Region::Au => &mut self.au,
            Region::Xx => &mut self.xx,
        };
        *slot = price;
    }

    /// Builder-style [`RegionPrices::set`].
    pub fn with(mut self, region: Region, price: f64) -> Self {
        self.set(region, Some(price));
        self
    }
}

/// Reads any JSON value as an optional price; non-numbers become `None`.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()).filter(|p| p.is_finite()))
}

/// Reads any JSON value as a shop type; unrecognised values become the default.
fn lenient_shop_type<'de, D>(deserializer: D) -> Result<ShopType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default())
}

// =============================================================================
// Shop Item
// =============================================================================

/// A purchasable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShopItem {
    /// Unique identifier (> 0).
    #[ts(type = "number")]
    pub id: ItemId,

    /// Display name, also the breakdown sort key.
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub purchase_url: String,

    /// Unknown or missing values read as [`ShopType::Regular`].
    #[serde(default, deserialize_with = "lenient_shop_type")]
    pub shop_type: ShopType,

    /// Price per region.
    #[serde(default)]
    pub prices: RegionPrices,

    #[serde(default)]
    pub image_hash: String,
}

impl ShopItem {
    /// Creates a regular-shop item with no prices and empty metadata.
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        ShopItem {
            id,
            title: title.into(),
            description: String::new(),
            image_url: String::new(),
            purchase_url: String::new(),
            shop_type: ShopType::Regular,
            prices: RegionPrices::default(),
            image_hash: String::new(),
        }
    }

    /// Sets the price table.
    pub fn with_prices(mut self, prices: RegionPrices) -> Self {
        self.prices = prices;
        self
    }

    /// Returns the finite price for `region`, if any.
    pub fn price(&self, region: Region) -> Option<f64> {
        self.prices.get(region)
    }
}

/// A decoded catalog plus the number of entries that were not usable items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedCatalog {
    pub items: Vec<ShopItem>,
    pub skipped: usize,
}

/// Decodes a catalog payload (a JSON array of items).
///
/// The payload must be a JSON array. Entries that do not decode as an item
/// (missing `id` or `title`, wrong types) are skipped and counted.
pub fn decode_catalog(json: &str) -> CoreResult<DecodedCatalog> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = entries.len();
    let items: Vec<ShopItem> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    Ok(DecodedCatalog {
        skipped: total - items.len(),
        items,
    })
}

/// [`decode_catalog`] without the skip count.
pub fn parse_catalog(json: &str) -> CoreResult<Vec<ShopItem>> {
    Ok(decode_catalog(json)?.items)
}

// =============================================================================
// Unit Tests
// =============================================================================
