mod aggregate;
mod criteria;
mod filter;
mod sort;

pub use aggregate::{top_by_frequency, top_by_score, DEFAULT_TOP_LIMIT};
pub use criteria::FilterCriteria;
pub use filter::filter_songs;
pub use sort::{sort_songs, SortField, SortState};
