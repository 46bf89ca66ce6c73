use serde::Deserialize;
use serde_json::Value;

use super::{Ingredient, is_ambiguous_quantity};

#[derive(Deserialize)]
struct IngredientRecord {
    name: String,
    /// Text or a JSON number depending on the source. Anything else,
    /// including a missing or null `qty`, only zeroes this ingredient.
    #[serde(default)]
    qty: Value,
    unit: String,
    #[serde(default)]
    notes: Option<String>,
}

impl From<IngredientRecord> for Ingredient {
    fn from(record: IngredientRecord) -> Self {
        let quantity = match record.qty {
            Value::String(text) => normalize_quantity(&text),
            Value::Number(number) => normalize_quantity(&number.to_string()),
            other => {
                tracing::debug!(
                    ingredient = %record.name,
                    qty = %other,
                    "quantity is neither text nor a number, recorded as 0"
                );
                "0".to_owned()
            }
        };

        Ingredient {
            name: record.name,
            quantity,
            unit: record.unit,
            notes: record.notes,
        }
    }
}

/// Parse a recipe's serialized ingredient list.
///
/// The list is a JSON array of `{name, qty, unit, notes?}` objects. Anything
/// that does not decode into that shape yields an empty list: recipe data is
/// entered by hand, imported or generated, and one bad recipe must not abort
/// the shopping list.
pub fn parse_ingredients(serialized: &str) -> Vec<Ingredient> {
    let records: Vec<IngredientRecord> = match serde_json::from_str(serialized) {
        Ok(records) => records,
        Err(err) => {
            tracing::debug!(error = %err, "ingredient list not decodable, treating as empty");
            return Vec::new();
        }
    };

    records.into_iter().map(Ingredient::from).collect()
}

fn normalize_quantity(raw: &str) -> String {
    let trimmed = raw.trim();

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => trimmed.to_owned(),
        _ => {
            if is_ambiguous_quantity(trimmed) {
                tracing::debug!(quantity = trimmed, "qualitative quantity recorded as 0");
            } else {
                tracing::debug!(quantity = trimmed, "unparseable quantity recorded as 0");
            }
            "0".to_owned()
        }
    }
}
