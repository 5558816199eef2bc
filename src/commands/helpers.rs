//! Helper functions shared across commands

use parcelbook_core::error::{CatalogError, Result};
use parcelbook_core::query::FilterInputs;
use parcelbook_core::record::{parse_decimal, parse_number};
use parcelbook_core::session::{ActionStatus, FilterInput, Session};

use crate::cli::FilterArgs;

/// Turn a non-success action status into an error
pub fn require_success(status: ActionStatus) -> Result<ActionStatus> {
    match status {
        ActionStatus::Failed(reason) => Err(CatalogError::Other(reason)),
        ActionStatus::NoSelection => Err(CatalogError::UsageError(
            "no parcel selected".to_string(),
        )),
        ActionStatus::Busy => Err(CatalogError::Other(
            "the same action is still in flight".to_string(),
        )),
        other => Ok(other),
    }
}

/// Reject numeric bounds that do not parse; the session itself would
/// silently ignore them
pub fn validate_bounds(filters: &FilterArgs) -> Result<()> {
    let bounds: [(&str, &Option<String>, fn(&str) -> Option<f64>); 4] = [
        ("area-min", &filters.area_min, parse_decimal),
        ("area-max", &filters.area_max, parse_decimal),
        ("price-min", &filters.price_min, parse_number),
        ("price-max", &filters.price_max, parse_number),
    ];
    for (name, value, parse) in bounds {
        if let Some(raw) = value {
            if !raw.trim().is_empty() && parse(raw).is_none() {
                return Err(CatalogError::invalid_value(&format!("--{}", name), raw));
            }
        }
    }
    Ok(())
}

/// Feed filter flags into the session the way the filter panel would.
///
/// Region goes first so its auto-selection applies before the other
/// criteria narrow the result.
pub fn apply_filter_args(session: &mut Session, filters: &FilterArgs) {
    let inputs = [
        (FilterInput::Region, &filters.region),
        (FilterInput::Cadastral, &filters.cadastral),
        (FilterInput::Article, &filters.article),
        (FilterInput::AreaMin, &filters.area_min),
        (FilterInput::AreaMax, &filters.area_max),
        (FilterInput::PriceMin, &filters.price_min),
        (FilterInput::PriceMax, &filters.price_max),
    ];
    for (input, value) in inputs {
        if let Some(value) = value {
            session.set_filter(input, value);
        }
    }
}

/// Human summary of the active filter inputs, e.g. `region=Алтай area>=2`
pub fn describe_inputs(inputs: &FilterInputs) -> String {
    let mut parts = Vec::new();
    let mut push = |label: &str, value: &str| {
        if !value.trim().is_empty() {
            parts.push(format!("{}{}", label, value.trim()));
        }
    };
    push("region=", &inputs.region);
    push("cadastral~", &inputs.cadastral);
    push("article~", &inputs.article);
    push("area>=", &inputs.area_min);
    push("area<=", &inputs.area_max);
    push("price>=", &inputs.price_min);
    push("price<=", &inputs.price_max);
    parts.join(" ")
}
