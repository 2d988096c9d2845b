pub mod app_state;
pub mod criteria;
pub mod selection;

pub use app_state::{AppMode, Panel};
pub use criteria::{FilterCriteria, MIN_LENGTH_MAX};
pub use selection::SelectionSet;
