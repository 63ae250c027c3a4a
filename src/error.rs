use std::io;
use thiserror::Error;

/// Failure modes for one conversion run.
///
/// `NotFound` and `MalformedDocument` abort the affected document;
/// whether they abort the whole batch is up to `batch::BatchOptions`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no {path:?} element in document")]
    NotFound { path: String },

    #[error("malformed document: {context}")]
    MalformedDocument { context: String },

    #[error("xml parse error: {0}")]
    Xml(#[from] xml::reader::Error),

    #[error("xml write error: {0}")]
    XmlWrite(#[from] xml::writer::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
