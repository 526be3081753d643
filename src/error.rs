use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by mutating or querying a weighted digraph. Absence of a
/// vertex or arc is an expected outcome and is reported through `bool`
/// return values instead; these variants mark contract violations.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    #[error("arc weights must be strictly positive")]
    ZeroWeight,

    #[error("arc endpoint is not a vertex of the graph")]
    MissingEndpoint,

    #[error("no arc exists between the given vertices")]
    ArcNotFound,
}
