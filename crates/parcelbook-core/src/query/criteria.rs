//! Filter criteria for the parcel list

use serde::Serialize;

use crate::record::{parse_decimal, parse_number, ParcelRecord};

/// Inclusive numeric range; an absent bound never excludes anything
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// A set bound requires a parsed value that satisfies it
    pub fn contains(&self, value: Option<f64>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(value) = value else {
            return false;
        };
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Raw filter inputs as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub region: String,
    pub cadastral: String,
    pub article: String,
    pub area_min: String,
    pub area_max: String,
    pub price_min: String,
    pub price_max: String,
}

/// Filter configuration for parcel records.
///
/// Text criteria are stored normalized: region trimmed, substring
/// criteria trimmed and lowercased.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    /// Exact region match; empty matches all
    pub region: String,
    /// Case-insensitive substring of the full cadastral string
    pub cadastral: String,
    /// Case-insensitive substring of the article
    pub article: String,
    /// Bounds on `area_ha`
    pub area: NumericRange,
    /// Bounds on `price_per_plot_rub`
    pub price: NumericRange,
}

impl FilterCriteria {
    /// Create criteria that match every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from raw inputs. Unparsable numeric inputs leave
    /// the bound unset, as an empty input would.
    pub fn from_inputs(inputs: &FilterInputs) -> Self {
        Self::new()
            .with_region(&inputs.region)
            .with_cadastral(&inputs.cadastral)
            .with_article(&inputs.article)
            .with_area(
                parse_decimal(&inputs.area_min),
                parse_decimal(&inputs.area_max),
            )
            .with_price(
                parse_number(&inputs.price_min),
                parse_number(&inputs.price_max),
            )
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = region.trim().to_string();
        self
    }

    pub fn with_cadastral(mut self, cadastral: &str) -> Self {
        self.cadastral = cadastral.trim().to_lowercase();
        self
    }

    pub fn with_article(mut self, article: &str) -> Self {
        self.article = article.trim().to_lowercase();
        self
    }

    pub fn with_area(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.area = NumericRange::new(min, max);
        self
    }

    pub fn with_price(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price = NumericRange::new(min, max);
        self
    }

    /// Whether a region criterion is active
    pub fn has_region(&self) -> bool {
        !self.region.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check if a record matches all configured filters
    pub fn matches(&self, record: &ParcelRecord) -> bool {
        self.matches_region(record)
            && self.matches_cadastral(record)
            && self.matches_article(record)
            && self.area.contains(record.area())
            && self.price.contains(record.plot_price())
    }

    fn matches_region(&self, record: &ParcelRecord) -> bool {
        !self.has_region() || record.region.as_text() == self.region
    }

    fn matches_cadastral(&self, record: &ParcelRecord) -> bool {
        self.cadastral.is_empty()
            || record
                .cadastral_number
                .raw_text()
                .to_lowercase()
                .contains(&self.cadastral)
    }

    fn matches_article(&self, record: &ParcelRecord) -> bool {
        self.article.is_empty()
            || record
                .article
                .as_text()
                .to_lowercase()
                .contains(&self.article)
    }
}
