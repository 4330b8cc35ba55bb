#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Template error: {0}")]
    Template(String),

    #[error("Source collection error: {0}")]
    Sources(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Completion request failed: {0}")]
    Completion(String),

    #[error("Output error: {0}")]
    Output(String),
}
