pub mod recipe;

pub use recipe::{Ingredient, RecipeSelection, SerializedSelection, parse_ingredients};
