//! Parcel record model
//!
//! A [`ParcelRecord`] is one dataset row. Records are built once by the
//! dataset loader and never mutated afterwards.

pub mod field;
pub mod number;
pub mod value;

use serde::{Deserialize, Serialize};

pub use field::{FieldKind, ParcelField};
pub use number::{coerce_decimal, coerce_number, parse_decimal, parse_number};
pub use value::FieldValue;

/// One catalog entry describing a land plot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParcelRecord {
    pub cadastral_number: FieldValue,
    pub cadastral_number_raw: FieldValue,
    pub region: FieldValue,
    pub article: FieldValue,
    pub area_ha: FieldValue,
    pub price_per_sotka_rub: FieldValue,
    pub price_per_plot_rub: FieldValue,
    pub discount_limit_percent: FieldValue,
    pub wholesale_only: FieldValue,
    pub land_use: FieldValue,
    pub recommended_usage: FieldValue,
    pub owner: FieldValue,
    pub partner: FieldValue,
    pub right_date: FieldValue,
    pub balance_value: FieldValue,
    pub service_notes: FieldValue,
    pub context: FieldValue,
    pub recommendations: FieldValue,
    pub location_description: FieldValue,
    pub best_use: FieldValue,
    /// Catalog number; primary tiebreak within a region
    pub number: FieldValue,
    /// Position in the source file; final tiebreak
    pub source_row: u64,
    /// Position among records sharing the same raw cadastral string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_index: Option<u64>,
}

impl ParcelRecord {
    /// Typed accessor for a displayable attribute
    pub fn field(&self, field: ParcelField) -> &FieldValue {
        match field {
            ParcelField::CadastralNumber => &self.cadastral_number,
            ParcelField::Region => &self.region,
            ParcelField::Article => &self.article,
            ParcelField::AreaHa => &self.area_ha,
            ParcelField::PricePerSotka => &self.price_per_sotka_rub,
            ParcelField::PricePerPlot => &self.price_per_plot_rub,
            ParcelField::DiscountLimitPercent => &self.discount_limit_percent,
            ParcelField::WholesaleOnly => &self.wholesale_only,
            ParcelField::LandUse => &self.land_use,
            ParcelField::RecommendedUsage => &self.recommended_usage,
            ParcelField::Owner => &self.owner,
            ParcelField::Partner => &self.partner,
            ParcelField::RightDate => &self.right_date,
            ParcelField::BalanceValue => &self.balance_value,
            ParcelField::ServiceNotes => &self.service_notes,
            ParcelField::Context => &self.context,
            ParcelField::Recommendations => &self.recommendations,
            ParcelField::LocationDescription => &self.location_description,
            ParcelField::BestUse => &self.best_use,
        }
    }

    fn field_mut(&mut self, field: ParcelField) -> &mut FieldValue {
        match field {
            ParcelField::CadastralNumber => &mut self.cadastral_number,
            ParcelField::Region => &mut self.region,
            ParcelField::Article => &mut self.article,
            ParcelField::AreaHa => &mut self.area_ha,
            ParcelField::PricePerSotka => &mut self.price_per_sotka_rub,
            ParcelField::PricePerPlot => &mut self.price_per_plot_rub,
            ParcelField::DiscountLimitPercent => &mut self.discount_limit_percent,
            ParcelField::WholesaleOnly => &mut self.wholesale_only,
            ParcelField::LandUse => &mut self.land_use,
            ParcelField::RecommendedUsage => &mut self.recommended_usage,
            ParcelField::Owner => &mut self.owner,
            ParcelField::Partner => &mut self.partner,
            ParcelField::RightDate => &mut self.right_date,
            ParcelField::BalanceValue => &mut self.balance_value,
            ParcelField::ServiceNotes => &mut self.service_notes,
            ParcelField::Context => &mut self.context,
            ParcelField::Recommendations => &mut self.recommendations,
            ParcelField::LocationDescription => &mut self.location_description,
            ParcelField::BestUse => &mut self.best_use,
        }
    }

    /// Assign a cell by dataset column name.
    ///
    /// Returns `false` for columns the record does not model. Positional
    /// columns (`source_row`, `match_index`) are handled by the loader.
    pub fn set_column(&mut self, column: &str, value: FieldValue) -> bool {
        if let Some(field) = ParcelField::from_column(column) {
            *self.field_mut(field) = value;
            return true;
        }
        match column {
            "cadastral_number_raw" => self.cadastral_number_raw = value,
            "number" => self.number = value,
            _ => return false,
        }
        true
    }

    /// First `;`/`,`-separated sub-identifier of the cadastral number
    pub fn primary_cadastral(&self) -> String {
        let raw = self.cadastral_number.as_text();
        raw.split([';', ','])
            .next()
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    /// Key grouping records that came from the same raw cadastral cell
    pub fn duplicate_key(&self) -> String {
        let raw = self.cadastral_number_raw.as_text();
        if raw.is_empty() {
            self.cadastral_number.as_text()
        } else {
            raw
        }
    }

    /// Numeric catalog number used for ordering, when parsable
    pub fn sort_number(&self) -> Option<f64> {
        coerce_number(&self.number)
    }

    /// Area in hectares; a lone comma is decimal here
    pub fn area(&self) -> Option<f64> {
        coerce_decimal(&self.area_ha)
    }

    pub fn plot_price(&self) -> Option<f64> {
        coerce_number(&self.price_per_plot_rub)
    }

    /// Builder used by tests and fixtures
    pub fn with(mut self, field: ParcelField, value: impl Into<FieldValue>) -> Self {
        *self.field_mut(field) = value.into();
        self
    }

    pub fn with_number(mut self, number: impl Into<FieldValue>) -> Self {
        self.number = number.into();
        self
    }

    pub fn with_source_row(mut self, source_row: u64) -> Self {
        self.source_row = source_row;
        self
    }
}
