use std::collections::BTreeMap;

use strum::VariantArray;

use crate::aggregation::AggregatedLine;
use crate::categorization::Category;

pub const CSV_HEADER: &str = "Item,Quantity,Unit,Category,From Recipes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Double embedded `"` characters. Off reproduces the legacy export,
    /// which quoted fields without escaping them.
    pub escape_quotes: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            escape_quotes: true,
        }
    }
}

/// Group lines by category for sectioned display
///
/// Every category is present, in section order, even when it has no lines.
/// Lines keep their relative order within a section.
pub fn group_by_category(lines: &[AggregatedLine]) -> BTreeMap<Category, Vec<&AggregatedLine>> {
    let mut groups: BTreeMap<Category, Vec<&AggregatedLine>> = Category::VARIANTS
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for line in lines {
        groups.entry(line.category).or_default().push(line);
    }

    groups
}

pub fn to_csv(lines: &[AggregatedLine]) -> String {
    to_csv_with(lines, CsvOptions::default())
}

/// Export lines as CSV text
///
/// The header comes first, then one row per line. Every field is quoted and
/// rows are joined with `\n`, without a trailing newline.
pub fn to_csv_with(lines: &[AggregatedLine], options: CsvOptions) -> String {
    let mut rows = Vec::with_capacity(lines.len() + 1);
    rows.push(CSV_HEADER.to_owned());

    for line in lines {
        let from_recipes = line
            .contributions
            .iter()
            .map(|c| format!("{} ({} {})", c.recipe_title, c.quantity, c.unit))
            .collect::<Vec<_>>()
            .join("; ");

        let quantity = format_quantity(line.quantity);
        let fields: [&str; 5] = [
            &line.name,
            &quantity,
            &line.unit,
            line.category.as_str(),
            &from_recipes,
        ];

        rows.push(
            fields
                .iter()
                .map(|field| quote(field, options))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    rows.join("\n")
}

/// Render lines as plain text, one titled block per non-empty category
pub fn to_text(lines: &[AggregatedLine]) -> String {
    group_by_category(lines)
        .into_iter()
        .filter(|(_, lines)| !lines.is_empty())
        .map(|(category, lines)| {
            let mut block = category.to_string();
            for line in lines {
                block.push_str("\n- ");
                block.push_str(&line.quantity.to_string());
                if !line.unit.is_empty() {
                    block.push(' ');
                    block.push_str(&line.unit);
                }
                block.push(' ');
                block.push_str(&line.name);
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

// Two decimals, exact ties rounded away from zero ("0.125" -> "0.13").
// `{:.2}` alone rounds ties to even.
fn format_quantity(quantity: f64) -> String {
    format!("{:.2}", (quantity * 100.0).round() / 100.0)
}

fn quote(field: &str, options: CsvOptions) -> String {
    if options.escape_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        format!("\"{}\"", field)
    }
}
