use grocer::{AppError, Config};
use grocer_shopping::{CsvOptions, to_csv_with};

#[tracing::instrument(skip(config))]
pub fn export(
    config: &Config,
    plan: &str,
    output: Option<&str>,
    no_escape: bool,
) -> anyhow::Result<()> {
    let report = grocer::plan::shopping_list(&grocer::plan::read_plan(plan)?);

    if report.lines.is_empty() {
        eprintln!("{}", super::EMPTY_LIST_MESSAGE);
    }

    let options = CsvOptions {
        escape_quotes: config.export.escape_quotes && !no_escape,
    };
    let csv = to_csv_with(&report.lines, options);

    match output {
        Some(path) => {
            std::fs::write(path, &csv).map_err(|source| AppError::WriteOutput {
                path: path.to_owned(),
                source,
            })?;
            tracing::info!(path, lines = report.lines.len(), "Shopping list exported");
        }
        None => println!("{csv}"),
    }

    Ok(())
}
