mod ambiguous;
mod parse;

pub use ambiguous::is_ambiguous_quantity;
pub use parse::parse_ingredients;

use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe, as supplied by the recipe store.
///
/// `quantity` keeps the numeric text of the source. The parser replaces any
/// quantity that is not a non-negative number with `"0"`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub notes: Option<String>,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A recipe picked into the meal plan together with its parsed ingredients.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSelection {
    pub recipe_title: String,
    pub ingredients: Vec<Ingredient>,
}

impl RecipeSelection {
    pub fn new(recipe_title: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            recipe_title: recipe_title.into(),
            ingredients,
        }
    }
}

/// Recipe selection in the shape the plan store hands it over, with the
/// ingredient list still encoded.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedSelection {
    pub recipe_title: String,
    pub ingredients_serialized: String,
}

impl SerializedSelection {
    /// Decodes the ingredient list. A malformed list yields a selection
    /// without ingredients.
    pub fn parse(&self) -> RecipeSelection {
        RecipeSelection {
            recipe_title: self.recipe_title.to_owned(),
            ingredients: parse_ingredients(&self.ingredients_serialized),
        }
    }
}
