use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Unknown IUPAC symbol '{0}' in motif")]
    UnknownSymbol(char),
    #[error("Invalid motif: {0}")]
    InvalidMotif(String),
    #[error("Too many motifs: got {count}, but only {max} colors are available")]
    TooManyMotifs { count: usize, max: usize },
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("No exon (uppercase A/C/G/T run) found in sequence: {0}")]
    NoExonFound(String),
    #[error("{0}")]
    Io(String),
    #[error("Failed to render image: {0}")]
    Render(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn handle_error_and_exit(err: Error) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}
