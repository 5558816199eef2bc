//! Typed catalog of displayable parcel attributes

use std::fmt;

/// How a field is rendered in the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Short text, shown trimmed
    Text,
    /// Money-like numbers, shown with ru-RU grouping
    Number,
    /// Free text whose line breaks are kept
    LongText,
}

/// Every parcel attribute the detail view can show, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParcelField {
    CadastralNumber,
    Region,
    Article,
    AreaHa,
    PricePerSotka,
    PricePerPlot,
    DiscountLimitPercent,
    WholesaleOnly,
    LandUse,
    RecommendedUsage,
    Owner,
    Partner,
    RightDate,
    BalanceValue,
    ServiceNotes,
    Context,
    Recommendations,
    LocationDescription,
    BestUse,
}

impl ParcelField {
    pub const ALL: [ParcelField; 19] = [
        ParcelField::CadastralNumber,
        ParcelField::Region,
        ParcelField::Article,
        ParcelField::AreaHa,
        ParcelField::PricePerSotka,
        ParcelField::PricePerPlot,
        ParcelField::DiscountLimitPercent,
        ParcelField::WholesaleOnly,
        ParcelField::LandUse,
        ParcelField::RecommendedUsage,
        ParcelField::Owner,
        ParcelField::Partner,
        ParcelField::RightDate,
        ParcelField::BalanceValue,
        ParcelField::ServiceNotes,
        ParcelField::Context,
        ParcelField::Recommendations,
        ParcelField::LocationDescription,
        ParcelField::BestUse,
    ];

    /// Dataset column name
    pub fn column(self) -> &'static str {
        match self {
            ParcelField::CadastralNumber => "cadastral_number",
            ParcelField::Region => "region",
            ParcelField::Article => "article",
            ParcelField::AreaHa => "area_ha",
            ParcelField::PricePerSotka => "price_per_sotka_rub",
            ParcelField::PricePerPlot => "price_per_plot_rub",
            ParcelField::DiscountLimitPercent => "discount_limit_percent",
            ParcelField::WholesaleOnly => "wholesale_only",
            ParcelField::LandUse => "land_use",
            ParcelField::RecommendedUsage => "recommended_usage",
            ParcelField::Owner => "owner",
            ParcelField::Partner => "partner",
            ParcelField::RightDate => "right_date",
            ParcelField::BalanceValue => "balance_value",
            ParcelField::ServiceNotes => "service_notes",
            ParcelField::Context => "context",
            ParcelField::Recommendations => "recommendations",
            ParcelField::LocationDescription => "location_description",
            ParcelField::BestUse => "best_use",
        }
    }

    /// Human label shown next to the value
    pub fn label(self) -> &'static str {
        match self {
            ParcelField::CadastralNumber => "Кадастровый номер",
            ParcelField::Region => "Регион",
            ParcelField::Article => "Артикул",
            ParcelField::AreaHa => "Площадь (га)",
            ParcelField::PricePerSotka => "Цена за сотку (₽)",
            ParcelField::PricePerPlot => "Цена за участок (₽)",
            ParcelField::DiscountLimitPercent => "Допустимая скидка (%)",
            ParcelField::WholesaleOnly => "Продажа",
            ParcelField::LandUse => "ВРИ / категория",
            ParcelField::RecommendedUsage => "Рекомендованное назначение",
            ParcelField::Owner => "Собственник",
            ParcelField::Partner => "Партнёр",
            ParcelField::RightDate => "Дата права",
            ParcelField::BalanceValue => "Балансовая стоимость",
            ParcelField::ServiceNotes => "Служебные отметки",
            ParcelField::Context => "Контекст",
            ParcelField::Recommendations => "Рекомендации",
            ParcelField::LocationDescription => "Описание расположения",
            ParcelField::BestUse => "Наилучшее использование",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            ParcelField::PricePerSotka | ParcelField::PricePerPlot | ParcelField::BalanceValue => {
                FieldKind::Number
            }
            ParcelField::ServiceNotes
            | ParcelField::Context
            | ParcelField::Recommendations
            | ParcelField::LocationDescription
            | ParcelField::BestUse => FieldKind::LongText,
            _ => FieldKind::Text,
        }
    }

    /// Look up a field by its dataset column name
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.column() == column)
    }
}

impl fmt::Display for ParcelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
