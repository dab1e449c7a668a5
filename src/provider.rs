//! Sync Orchestrator: read path (remote rows into a structured zone) and
//! write path (desired zone state replacing the remote record list).

use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::decode::decode_rows;
use crate::directory::ZoneDirectory;
use crate::encode::encode_records;
use crate::error::Result;
use crate::sakura::client::{CommonServiceApi, SakuraClient};
use crate::zone::Zone;

/// One sync session against the SakuraCloud DNS service.
///
/// Holds the zone directory cache, so zones synced through the same provider
/// share one bulk fetch. Strictly sequential: each call completes (or fails)
/// before the next begins.
pub struct SakuraCloudProvider<C = SakuraClient> {
    id: String,
    directory: ZoneDirectory<C>,
}

impl SakuraCloudProvider<SakuraClient> {
    pub fn new(id: impl Into<String>, config: &ApiConfig) -> Self {
        Self::with_client(id, SakuraClient::new(config))
    }
}

impl<C: CommonServiceApi> SakuraCloudProvider<C> {
    /// Builds a provider over any API implementation; tests use an in-memory
    /// fake here.
    pub fn with_client(id: impl Into<String>, client: C) -> Self {
        Self {
            id: id.into(),
            directory: ZoneDirectory::new(client),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// All remote zone names, sorted.
    pub fn list_zones(&mut self) -> Result<Vec<String>> {
        let mut names = self.directory.zone_names()?;
        names.sort();
        Ok(names)
    }

    /// Loads the remote zone's records into `zone`.
    ///
    /// Returns `false` without touching `zone` when the remote zone does not
    /// exist; that is a signal, not an error. With `lenient` set, malformed
    /// individual records are skipped instead of failing the populate.
    pub fn populate(&mut self, zone: &mut Zone, lenient: bool) -> Result<bool> {
        debug!(provider = %self.id, zone = %zone.name(), lenient, "populate");

        let Some(item) = self.directory.get_zone(zone.name())? else {
            info!(provider = %self.id, zone = %zone.name(), "zone does not exist");
            return Ok(false);
        };
        let rows = item.settings.dns.resource_record_sets.clone();

        let records = decode_rows(&rows, lenient)?;
        let found = records.len();
        for record in records {
            zone.add_record(record);
        }

        info!(provider = %self.id, zone = %zone.name(), found, "populated zone");
        Ok(true)
    }

    /// Pushes `desired` to the remote service, creating the zone first if it
    /// does not exist yet.
    ///
    /// The remote API only accepts whole-zone replacement, so every desired
    /// record is re-serialized and submitted on each call; rows absent from
    /// `desired` are deleted remotely.
    pub fn apply(&mut self, desired: &Zone) -> Result<()> {
        debug!(provider = %self.id, zone = %desired.name(), records = desired.len(), "apply");

        if !self.list_zones()?.contains(&desired.name().to_string()) {
            self.directory.create_zone(desired.name())?;
        }

        let rows = encode_records(desired.records());
        self.directory.update_zone(desired.name(), rows)?;

        info!(provider = %self.id, zone = %desired.name(), records = desired.len(), "applied zone");
        Ok(())
    }
}
