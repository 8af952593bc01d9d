pub mod result;
pub mod state;

pub use result::{CatalogOutcome, FetchResult};
pub use state::{QueryAction, QueryState, Tab, Transition};
