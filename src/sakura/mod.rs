//! Wire client for the SakuraCloud CommonServiceItem API.

pub mod client;
pub mod types;
