pub mod aggregation;
pub mod categorization;
pub mod export;

// Re-export commonly used types
pub use aggregation::{
    AggregatedLine, AggregationReport, Contribution, IngredientAggregationService, SkipReason,
    SkippedIngredient,
};
pub use categorization::{CategorizationService, Category, TAXONOMY};
pub use export::{CSV_HEADER, CsvOptions, group_by_category, to_csv, to_csv_with, to_text};
pub use grocer_shared::{Ingredient, RecipeSelection, SerializedSelection};
