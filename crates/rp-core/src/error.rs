use thiserror::Error;

pub type RpResult<T> = Result<T, RpError>;

#[derive(Error, Debug)]
pub enum RpError {
    #[error("Graph query failed: {what}")]
    Query { what: String },

    #[error("Output error: {what}")]
    Output { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
