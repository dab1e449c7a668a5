//! Remote Zone Directory: resolves zone names to remote zone resources,
//! backed by a session-scoped cache over one bulk fetch.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Result, SyncError};
use crate::sakura::client::CommonServiceApi;
use crate::sakura::types::{CommonServiceItem, DNS_SERVICE_CLASS, RecordRow, ZoneCreateItem};
use crate::validation::validate_zone_name;
use crate::zone::ensure_trailing_dot;

/// Directory of the account's DNS zone resources.
///
/// The first lookup fetches every resource item in one call, keeps the DNS
/// ones, and builds a cache keyed by the trailing-dot zone name. The cache is
/// owned by this object and lives for one sync session; a successful create
/// or update overwrites only the mutated zone's entry with the authoritative
/// state from the response. Concurrent syncs of the same zone name against
/// one directory are the caller's responsibility to prevent.
pub struct ZoneDirectory<C> {
    client: C,
    cache: Option<HashMap<String, CommonServiceItem>>,
}

impl<C: CommonServiceApi> ZoneDirectory<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            cache: None,
        }
    }

    fn item_map(&mut self) -> Result<&mut HashMap<String, CommonServiceItem>> {
        if self.cache.is_none() {
            let items = self.client.list_items()?;
            let mut map = HashMap::new();
            for item in items {
                if item.service_class != DNS_SERVICE_CLASS {
                    continue;
                }
                map.insert(ensure_trailing_dot(&item.status.zone), item);
            }
            debug!(zones = map.len(), "built zone directory cache");
            self.cache = Some(map);
        }
        Ok(self.cache.as_mut().unwrap())
    }

    /// Looks up a zone by name (with or without trailing dot).
    pub fn get_zone(&mut self, zone_name: &str) -> Result<Option<&CommonServiceItem>> {
        let key = ensure_trailing_dot(zone_name);
        Ok(self.item_map()?.get(&key))
    }

    /// Every zone name known to the account, in trailing-dot form.
    pub fn zone_names(&mut self) -> Result<Vec<String>> {
        Ok(self.item_map()?.keys().cloned().collect())
    }

    /// Creates an empty zone resource and caches the returned handle.
    pub fn create_zone(&mut self, zone_name: &str) -> Result<()> {
        validate_zone_name(zone_name)?;
        let key = ensure_trailing_dot(zone_name);
        let item = self.client.create_item(&ZoneCreateItem::for_zone(&key))?;
        debug!(zone = %key, id = %item.id, "created zone");
        self.item_map()?.insert(key, item);
        Ok(())
    }

    /// Replaces the zone's entire remote record list with `rows`. Any row not
    /// included is deleted remotely. The cache entry is refreshed from the
    /// response.
    pub fn update_zone(&mut self, zone_name: &str, rows: Vec<RecordRow>) -> Result<()> {
        let key = ensure_trailing_dot(zone_name);
        let id = self
            .item_map()?
            .get(&key)
            .map(|item| item.id.clone())
            .ok_or_else(|| SyncError::UnknownZone(key.clone()))?;
        let item = self.client.update_item(&id, rows)?;
        debug!(zone = %key, id = %item.id, "updated zone");
        self.item_map()?.insert(key, item);
        Ok(())
    }
}
