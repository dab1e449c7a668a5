use thiserror::Error;

use crate::rdata::RdataError;
use crate::validation::ValidationError;
use crate::zone::RecordType;

/// Uniform error surface of the sync client. Transport faults and remote API
/// faults both abort the current sync attempt; no retry happens at this
/// layer.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Network-level failure before an HTTP status was obtained.
    #[error("request error: method={method}, url={url}: {source}")]
    Transport {
        method: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response from the remote API. `error_msg` has already been
    /// HTML-entity-decoded.
    #[error(
        "HTTP error: method={method}, url={url}, status={status}, serial={serial}, \
         error_code={error_code}, error_msg={error_msg}"
    )]
    Api {
        method: String,
        url: String,
        status: String,
        serial: String,
        error_code: String,
        error_msg: String,
    },

    /// A raw row's rdata did not match its type's text grammar.
    #[error("invalid {rtype} rdata {rdata:?}: {source}")]
    Rdata {
        rtype: RecordType,
        rdata: String,
        #[source]
        source: RdataError,
    },

    /// An update was requested for a zone name absent from the directory
    /// cache. The caller must create the zone first.
    #[error("zone {0} is not known to the remote directory")]
    UnknownZone(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, SyncError>;
