use std::collections::HashMap;

use grocer_shared::{Ingredient, RecipeSelection};
use serde::Serialize;

use crate::categorization::{CategorizationService, Category};

/// One recipe's share of an aggregated line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub recipe_title: String,
    pub quantity: f64,
    pub unit: String,
    pub notes: Option<String>,
}

/// Consolidated shopping list line
///
/// `quantity` is always the sum of `contributions[].quantity`, and every
/// contribution shares the line's aggregation key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedLine {
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub category: Category,
    pub contributions: Vec<Contribution>,
}

impl AggregatedLine {
    /// Case-folded name and literal unit
    pub fn key(&self) -> String {
        aggregation_key(&self.name, &self.unit)
    }
}

/// Why an ingredient was left out of the shopping list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// Quantity is zero, negative or not finite
    NotPositive,
    /// Quantity is not a number at all
    Unparseable,
    /// Adding the quantity would push the line total past `f64::MAX`
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedIngredient {
    pub recipe_title: String,
    pub ingredient: Ingredient,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregationReport {
    pub lines: Vec<AggregatedLine>,
    pub skipped: Vec<SkippedIngredient>,
}

/// Ingredient Aggregation Service
///
/// Stateless domain service that merges the ingredients of every selected
/// recipe into one line per (case-folded name, literal unit), keeping each
/// recipe's contribution for provenance.
///
/// - "Chicken breast 400 g" + "chicken breast 100 g" = "Chicken breast 500 g"
/// - "flour 1 tbsp" + "flour 1 Tbsp" = 2 separate lines (units are never normalized)
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    /// Aggregate the ingredients of all selections
    ///
    /// Lines are sorted by category section, then by display name.
    pub fn aggregate(selections: &[RecipeSelection]) -> Vec<AggregatedLine> {
        Self::aggregate_with_report(selections).lines
    }

    /// Aggregate and also report every ingredient that was skipped
    #[tracing::instrument(skip_all, fields(selections = selections.len()))]
    pub fn aggregate_with_report(selections: &[RecipeSelection]) -> AggregationReport {
        let mut lines: Vec<AggregatedLine> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut skipped = Vec::new();

        for selection in selections {
            for ingredient in &selection.ingredients {
                let quantity = match parse_amount(&ingredient.quantity) {
                    Ok(quantity) => quantity,
                    Err(reason) => {
                        tracing::debug!(
                            recipe = %selection.recipe_title,
                            ingredient = %ingredient.name,
                            quantity = %ingredient.quantity,
                            ?reason,
                            "ingredient skipped"
                        );
                        skipped.push(SkippedIngredient {
                            recipe_title: selection.recipe_title.to_owned(),
                            ingredient: ingredient.clone(),
                            reason,
                        });
                        continue;
                    }
                };

                let contribution = Contribution {
                    recipe_title: selection.recipe_title.to_owned(),
                    quantity,
                    unit: ingredient.unit.to_owned(),
                    notes: ingredient.notes.to_owned(),
                };

                let key = aggregation_key(&ingredient.name, &ingredient.unit);
                match positions.get(&key) {
                    Some(&position) => {
                        if !add_contribution(&mut lines[position], contribution) {
                            tracing::warn!(
                                recipe = %selection.recipe_title,
                                ingredient = %ingredient.name,
                                quantity = %ingredient.quantity,
                                "ingredient skipped, line total would overflow"
                            );
                            skipped.push(SkippedIngredient {
                                recipe_title: selection.recipe_title.to_owned(),
                                ingredient: ingredient.clone(),
                                reason: SkipReason::Overflow,
                            });
                        }
                    }
                    None => {
                        positions.insert(key, lines.len());
                        lines.push(AggregatedLine {
                            name: ingredient.name.to_owned(),
                            unit: ingredient.unit.to_owned(),
                            quantity,
                            category: CategorizationService::categorize(&ingredient.name),
                            contributions: vec![contribution],
                        });
                    }
                }
            }
        }

        sort_lines(&mut lines);

        tracing::debug!(
            lines = lines.len(),
            skipped = skipped.len(),
            "ingredients aggregated"
        );

        AggregationReport { lines, skipped }
    }

    /// Merge two aggregated batches
    ///
    /// Lines of `first` keep their display name and category; contributions
    /// of `second` are appended after theirs. Merging `aggregate(a)` with
    /// `aggregate(b)` gives the same lines as aggregating `a` then `b` in one
    /// call. A contribution of `second` that would overflow the line total is
    /// dropped, as `aggregate` skips it.
    pub fn merge(first: Vec<AggregatedLine>, second: Vec<AggregatedLine>) -> Vec<AggregatedLine> {
        let mut lines = first;
        let mut positions: HashMap<String, usize> = lines
            .iter()
            .enumerate()
            .map(|(position, line)| (line.key(), position))
            .collect();

        for line in second {
            let key = line.key();
            match positions.get(&key) {
                Some(&position) => {
                    let existing = &mut lines[position];
                    existing.quantity = existing
                        .contributions
                        .iter()
                        .fold(0.0, |total, contribution| total + contribution.quantity);
                    for contribution in line.contributions {
                        let recipe_title = contribution.recipe_title.clone();
                        if !add_contribution(existing, contribution) {
                            tracing::warn!(
                                recipe = %recipe_title,
                                ingredient = %existing.name,
                                "contribution dropped, line total would overflow"
                            );
                        }
                    }
                }
                None => {
                    positions.insert(key, lines.len());
                    lines.push(line);
                }
            }
        }

        sort_lines(&mut lines);

        lines
    }
}

fn aggregation_key(name: &str, unit: &str) -> String {
    format!("{}__{}", name.to_lowercase(), unit)
}

/// Returns false, leaving the line untouched, when the new total is not finite.
fn add_contribution(line: &mut AggregatedLine, contribution: Contribution) -> bool {
    let total = line.quantity + contribution.quantity;
    if !total.is_finite() {
        return false;
    }

    line.quantity = total;
    line.contributions.push(contribution);
    true
}

fn parse_amount(quantity: &str) -> Result<f64, SkipReason> {
    match quantity.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        Ok(_) => Err(SkipReason::NotPositive),
        Err(_) => Err(SkipReason::Unparseable),
    }
}

// Stable, so lines sharing category and name keep first-seen order.
fn sort_lines(lines: &mut [AggregatedLine]) {
    lines.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.name.cmp(&b.name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(title: &str, ingredients: &[(&str, &str, &str)]) -> RecipeSelection {
        RecipeSelection::new(
            title,
            ingredients
                .iter()
                .map(|(name, quantity, unit)| Ingredient::new(*name, *quantity, *unit))
                .collect(),
        )
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(IngredientAggregationService::aggregate(&[]).is_empty());
    }

    #[test]
    fn test_aggregate_same_ingredient_same_unit() {
        let lines = IngredientAggregationService::aggregate(&[
            selection("Curry", &[("Chicken breast", "400", "g")]),
            selection("Soup", &[("chicken breast", "100", "g")]),
        ]);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Chicken breast");
        assert_eq!(lines[0].unit, "g");
        assert_eq!(lines[0].quantity, 500.0);
        assert_eq!(lines[0].category, Category::Meat);
        assert_eq!(
            lines[0].contributions,
            vec![
                Contribution {
                    recipe_title: "Curry".to_string(),
                    quantity: 400.0,
                    unit: "g".to_string(),
                    notes: None,
                },
                Contribution {
                    recipe_title: "Soup".to_string(),
                    quantity: 100.0,
                    unit: "g".to_string(),
                    notes: None,
                },
            ]
        );
    }

    #[test]
    fn test_aggregate_units_are_case_sensitive() {
        let lines = IngredientAggregationService::aggregate(&[selection(
            "Pancakes",
            &[("Flour", "1", "tbsp"), ("flour", "2", "Tbsp"), ("flour", "1", "g")],
        )]);

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.contributions.len() == 1));
    }

    #[test]
    fn test_aggregate_skips_invalid_quantities() {
        let report = IngredientAggregationService::aggregate_with_report(&[selection(
            "Stew",
            &[
                ("Salt", "0", "tsp"),
                ("Pepper", "-1", "tsp"),
                ("Thyme", "a sprig", ""),
                ("Water", "NaN", "cup"),
                ("Carrot", "2", "whole"),
            ],
        )]);

        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.lines[0].name, "Carrot");
        assert_eq!(
            report
                .skipped
                .iter()
                .map(|s| (s.ingredient.name.as_str(), s.reason))
                .collect::<Vec<_>>(),
            vec![
                ("Salt", SkipReason::NotPositive),
                ("Pepper", SkipReason::NotPositive),
                ("Thyme", SkipReason::Unparseable),
                ("Water", SkipReason::NotPositive),
            ]
        );
    }

    #[test]
    fn test_aggregate_sorted_by_category_then_name() {
        let lines = IngredientAggregationService::aggregate(&[selection(
            "Dinner",
            &[
                ("water", "1", "l"),
                ("rice", "200", "g"),
                ("onion", "1", "whole"),
                ("Beef", "300", "g"),
                ("apple", "2", "whole"),
                ("Zucchini", "1", "whole"),
            ],
        )]);

        let names: Vec<_> = lines.iter().map(|line| line.name.as_str()).collect();
        // Uppercase sorts before lowercase
        assert_eq!(
            names,
            vec!["Zucchini", "apple", "onion", "Beef", "rice", "water"]
        );
    }

    #[test]
    fn test_first_seen_name_decides_category_and_display() {
        let lines = IngredientAggregationService::aggregate(&[
            selection("A", &[("TOMATO", "1", "whole")]),
            selection("B", &[("tomato", "2", "whole")]),
        ]);

        assert_eq!(lines[0].name, "TOMATO");
        assert_eq!(lines[0].category, Category::Produce);
        assert_eq!(lines[0].quantity, 3.0);
    }

    #[test]
    fn test_merge_matches_single_aggregation() {
        let first = vec![
            selection("Curry", &[("Chicken breast", "400", "g"), ("Rice", "0.1", "kg")]),
            selection("Salad", &[("Lettuce", "1", "head")]),
        ];
        let second = vec![
            selection("Soup", &[("chicken breast", "100", "g"), ("rice", "0.2", "kg")]),
            selection("Pasta", &[("Pasta", "500", "g"), ("Lettuce", "1", "Head")]),
        ];

        let merged = IngredientAggregationService::merge(
            IngredientAggregationService::aggregate(&first),
            IngredientAggregationService::aggregate(&second),
        );
        let all: Vec<_> = first.into_iter().chain(second).collect();

        assert_eq!(merged, IngredientAggregationService::aggregate(&all));
    }

    #[test]
    fn test_aggregate_skips_overflowing_quantity() {
        let report = IngredientAggregationService::aggregate_with_report(&[
            selection("Bulk", &[("Flour", "1e308", "g")]),
            selection("Bulk again", &[("flour", "1e308", "g"), ("Flour", "5", "g")]),
        ]);

        assert_eq!(report.lines.len(), 1);
        assert!(report.lines[0].quantity.is_finite());
        assert_eq!(report.lines[0].quantity, 1e308 + 5.0);
        assert_eq!(report.lines[0].contributions.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].recipe_title, "Bulk again");
        assert_eq!(report.skipped[0].reason, SkipReason::Overflow);
    }

    #[test]
    fn test_merge_drops_overflowing_contribution() {
        let first = vec![selection("Bulk", &[("Flour", "1e308", "g")])];
        let second = vec![selection("Bulk again", &[("flour", "1e308", "g"), ("Flour", "5", "g")])];

        let merged = IngredientAggregationService::merge(
            IngredientAggregationService::aggregate(&first),
            IngredientAggregationService::aggregate(&second),
        );
        let all: Vec<_> = first.into_iter().chain(second).collect();

        assert!(merged[0].quantity.is_finite());
        assert_eq!(merged, IngredientAggregationService::aggregate(&all));
    }

    #[test]
    fn test_line_key() {
        let lines =
            IngredientAggregationService::aggregate(&[selection("A", &[("Olive Oil", "2", "Tbsp")])]);

        assert_eq!(lines[0].key(), "olive oil__Tbsp");
    }
}
