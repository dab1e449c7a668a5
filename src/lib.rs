//! Synchronization client for the SakuraCloud DNS service.
//!
//! The remote API stores a zone's records as a single flat row list on one
//! resource object; this crate translates between that representation and a
//! structured model of typed record sets. The read path goes
//! [`directory`] → [`decode`] → [`zone::Zone`]; the write path goes desired
//! records → [`encode`] → [`directory`] (create-if-absent, then wholesale
//! replace). [`provider::SakuraCloudProvider`] ties the two together for one
//! sync session.

pub mod config;
pub mod decode;
pub mod directory;
pub mod encode;
pub mod error;
pub mod provider;
pub mod rdata;
pub mod sakura;
pub mod validation;
pub mod zone;

pub use config::ApiConfig;
pub use error::{Result, SyncError};
pub use provider::SakuraCloudProvider;
pub use zone::{DEFAULT_TTL, Record, RecordData, RecordType, Zone};
