pub mod store;

mod featured_books;
mod get_algorithm_performance;
mod get_dataset_stats;
mod list_books;
mod search_books;

pub use featured_books::{FeaturedBooks, FEATURED_MIN_RATING};
pub use get_algorithm_performance::GetAlgorithmPerformance;
pub use get_dataset_stats::GetDatasetStats;
pub use list_books::{ListBooks, DEFAULT_PAGE_LIMIT};
pub use search_books::SearchBooks;
