//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with pom.xml reading, parsing and writing
//! - LookupError: Issues with remote version metadata and search queries
//! - LocateError: Issues while locating a parent manifest
//! - ResolveError: Issues during coordinate resolution
//! - ConfigError: Issues with configuration

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Coordinate;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Remote lookup related errors
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Parent manifest location errors
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// Coordinate resolution errors
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML parsing or serialization error
    #[error("failed to parse XML in {path}: {message}")]
    XmlError { path: PathBuf, message: String },
}

/// Errors related to remote version metadata and search lookups
///
/// A non-2xx metadata response is not represented here: the version
/// picker reports it as an empty result, and only the callers that
/// require a document (search) surface `NotFound`.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Network or stream decoding failure
    #[error("transport failure for {url}: {message}")]
    Transport { url: String, message: String },

    /// A 200 response whose body is not the expected document
    #[error("malformed document at {url}: {message}")]
    MalformedDocument { url: String, message: String },

    /// A non-2xx response where a document was required
    #[error("no document at {url} (HTTP {status})")]
    NotFound { url: String, status: u16 },
}

/// Errors while locating a parent manifest
///
/// Always fatal to the resolution call that triggered it; a missing
/// local file is not an error (it means the parent is remote).
#[derive(Error, Debug)]
pub enum LocateError {
    /// Local parent manifest exists but could not be loaded
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Remote parent manifest could not be fetched
    #[error("failed to resolve remote parent {coordinate}: {message}")]
    Remote { coordinate: String, message: String },
}

/// Errors during coordinate resolution
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The artifact-resolution collaborator failed
    #[error("artifact resolution failed for {coordinate}: {message}")]
    Collaborator { coordinate: String, message: String },

    /// No strategy produced a version for the coordinate
    #[error("no version found for '{coordinate}'")]
    VersionNotFound { coordinate: Coordinate },

    /// An ancestor manifest chain exceeded the fixed hop bound
    #[error("ancestor chain for {coordinate} exceeds {limit} hops")]
    AncestorChainTooDeep { coordinate: String, limit: usize },

    /// Parent manifest location failed
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// Metadata lookup failed (transport or malformed document)
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the configuration file
    #[error("failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new XmlError
    pub fn xml_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::XmlError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl LookupError {
    /// Creates a new Transport error
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        LookupError::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new MalformedDocument error
    pub fn malformed(url: impl Into<String>, message: impl Into<String>) -> Self {
        LookupError::MalformedDocument {
            url: url.into(),
            message: message.into(),
        }
    }
}

impl ResolveError {
    /// Creates a new Collaborator error
    pub fn collaborator(coordinate: impl Into<String>, message: impl Into<String>) -> Self {
        ResolveError::Collaborator {
            coordinate: coordinate.into(),
            message: message.into(),
        }
    }
}
