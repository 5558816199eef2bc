//! Parcel querying: criteria, ordering, and list state

pub mod collate;
pub mod criteria;
pub mod engine;
pub mod state;

pub use criteria::{FilterCriteria, FilterInputs, NumericRange};
pub use engine::apply;
pub use state::{ApplyMode, CatalogState, DEFAULT_PAGE_SIZE};
