pub mod catalog;
pub mod consolidate;

pub use catalog::{
    CATEGORIES, CatalogFood, RecipeCatalog, breakfast_options, common_foods, dinner_options,
    lunch_options,
};
pub use consolidate::{categorize, expand, merge, total_cost};
