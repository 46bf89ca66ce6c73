use std::io::Read;

use grocer_shared::SerializedSelection;
use grocer_shopping::{AggregationReport, IngredientAggregationService};

use crate::error::AppError;

/// Read a meal plan export: a JSON array of `{recipeTitle, ingredientsSerialized}`.
///
/// `-` reads from stdin.
pub fn read_plan(path: &str) -> Result<Vec<SerializedSelection>, AppError> {
    let content = if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| AppError::ReadPlan {
                path: path.to_owned(),
                source,
            })?;
        content
    } else {
        std::fs::read_to_string(path).map_err(|source| AppError::ReadPlan {
            path: path.to_owned(),
            source,
        })?
    };

    parse_plan(&content, path)
}

/// The plan envelope must be well formed; each recipe's ingredient payload
/// may still be broken and then counts as empty.
pub fn parse_plan(content: &str, path: &str) -> Result<Vec<SerializedSelection>, AppError> {
    serde_json::from_str(content).map_err(|source| AppError::PlanFormat {
        path: path.to_owned(),
        source,
    })
}

#[tracing::instrument(skip_all, fields(recipes = plan.len()))]
pub fn shopping_list(plan: &[SerializedSelection]) -> AggregationReport {
    let selections: Vec<_> = plan.iter().map(SerializedSelection::parse).collect();
    let report = IngredientAggregationService::aggregate_with_report(&selections);

    if !report.skipped.is_empty() {
        tracing::info!(
            skipped = report.skipped.len(),
            "Ingredients without a usable quantity left off the list"
        );
    }

    report
}
