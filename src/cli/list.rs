use clap::ValueEnum;
use grocer_shopping::{group_by_category, to_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Sections per grocery category
    Text,
    /// Flat list of lines
    Json,
    /// Lines keyed by grocery category
    GroupedJson,
}

#[tracing::instrument]
pub fn list(plan: &str, format: ListFormat) -> anyhow::Result<()> {
    let report = grocer::plan::shopping_list(&grocer::plan::read_plan(plan)?);

    if report.lines.is_empty() {
        eprintln!("{}", super::EMPTY_LIST_MESSAGE);
    }

    let output = match format {
        ListFormat::Text => to_text(&report.lines),
        ListFormat::Json => serde_json::to_string_pretty(&report.lines)?,
        ListFormat::GroupedJson => serde_json::to_string_pretty(&group_by_category(&report.lines))?,
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
