use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("unknown section: {0:?}")]
    UnknownSection(String),
    #[error("no element with anchor id `{0}`")]
    MissingAnchor(&'static str),
    #[error("browser window is unavailable")]
    NoWindow,
}

#[cfg(feature = "ssr")]
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("invalid leptos configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
