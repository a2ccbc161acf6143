use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum FlowError {
    /// The graph is frozen once a result has been queried; edges added
    /// afterwards would not be reflected in the cached solution.
    #[error("solver has already run; the graph can no longer be modified")]
    AlreadySolved,
}
