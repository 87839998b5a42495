pub mod category_query;

pub use category_query::{CategoryItem, CategoryQuery, CategoryQueryError};
