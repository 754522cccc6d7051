use thiserror::Error;

#[derive(Error, Debug)]
pub enum LacunaError {
    /// Malformed puzzle line: wrong field count, bad integer token or a
    /// parameter outside its domain.
    #[error("parse error: {0}")]
    Parse(String),

    /// Window bookkeeping failure. Seeing this means a solver bug, not
    /// bad input.
    #[error("solver error: {0}")]
    Solver(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
