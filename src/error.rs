use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read plan {path}: {source}")]
    ReadPlan {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Plan {path} is not a list of recipe selections: {source}")]
    PlanFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
