/// Why the screen is in the error state
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorCause {
    #[error("network error: {0}")]
    Network(String),

    #[error("translation API error: {0}")]
    Api(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("server returned no languages")]
    EmptyCatalog,
}

/// The single published screen snapshot. Exactly one variant is active;
/// transitions replace the whole value.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    DataLoaded(T),
    Error(ErrorCause),
}

impl<T> ViewState<T> {
    /// Data behind the loaded state, if the screen is loaded.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::DataLoaded(data) => Some(data),
            _ => None,
        }
    }
}
