//! Record-Set Decoder: collapses the remote flat row list into structured,
//! typed records grouped by (name, type).

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use crate::error::{Result, SyncError};
use crate::rdata::{CaaValue, MxValue, RdataError, SrvValue, SvcbValue, TxtValue};
use crate::sakura::types::RecordRow;
use crate::zone::{DEFAULT_TTL, Record, RecordData, RecordType};

struct Group {
    name: String,
    rtype: RecordType,
    ttl: u32,
    rdatas: Vec<String>,
}

/// Decodes one zone's raw rows into structured records.
///
/// Rows with an unsupported type tag are dropped silently. Rows sharing a
/// (name, type) pair merge into one record; the first row's TTL wins if the
/// rows disagree. With `lenient` set, a group whose rdata fails its type's
/// grammar is skipped with a warning instead of failing the whole decode.
pub fn decode_rows(rows: &[RecordRow], lenient: bool) -> Result<Vec<Record>> {
    // Group by (name, type), keeping first-seen key order and per-group row
    // arrival order.
    let mut order: Vec<(String, RecordType)> = Vec::new();
    let mut groups: HashMap<(String, RecordType), Group> = HashMap::new();

    for row in rows {
        let Some(rtype) = RecordType::from_tag(&row.rtype) else {
            debug!(rtype = %row.rtype, name = %row.name, "skipping unsupported record type");
            continue;
        };
        let name = if row.name == "@" {
            String::new()
        } else {
            row.name.clone()
        };

        match groups.entry((name.clone(), rtype)) {
            Entry::Vacant(e) => {
                order.push((name.clone(), rtype));
                e.insert(Group {
                    name,
                    rtype,
                    ttl: row.ttl.unwrap_or(DEFAULT_TTL),
                    rdatas: vec![row.rdata.clone()],
                });
            }
            Entry::Occupied(e) => e.into_mut().rdatas.push(row.rdata.clone()),
        }
    }

    let mut records = Vec::with_capacity(order.len());
    for key in &order {
        let group = &groups[key];
        match decode_group(group) {
            Ok(data) => records.push(Record::new(group.name.clone(), group.ttl, data)),
            Err(e) if lenient => {
                warn!(name = %group.name, rtype = %group.rtype, error = %e, "skipping malformed record");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(records)
}

fn decode_group(group: &Group) -> Result<RecordData> {
    let wrap = |rdata: &str, source: RdataError| SyncError::Rdata {
        rtype: group.rtype,
        rdata: rdata.to_string(),
        source,
    };

    fn values<T>(
        rdatas: &[String],
        parse: impl Fn(&str) -> std::result::Result<T, RdataError>,
        wrap: impl Fn(&str, RdataError) -> SyncError,
    ) -> Result<Vec<T>> {
        rdatas
            .iter()
            .map(|rdata| parse(rdata).map_err(|e| wrap(rdata, e)))
            .collect()
    }

    let rdatas = &group.rdatas;
    Ok(match group.rtype {
        RecordType::A => RecordData::A(values(
            rdatas,
            |r| r.parse().map_err(|_| RdataError::InvalidAddress(r.into())),
            wrap,
        )?),
        RecordType::Aaaa => RecordData::Aaaa(values(
            rdatas,
            |r| r.parse().map_err(|_| RdataError::InvalidAddress(r.into())),
            wrap,
        )?),
        RecordType::Alias => RecordData::Alias(rdatas.to_vec()),
        RecordType::Caa => RecordData::Caa(values(rdatas, CaaValue::parse_rdata, wrap)?),
        RecordType::Cname => RecordData::Cname(rdatas.to_vec()),
        RecordType::Https => RecordData::Https(values(rdatas, SvcbValue::parse_rdata, wrap)?),
        RecordType::Mx => RecordData::Mx(values(rdatas, MxValue::parse_rdata, wrap)?),
        RecordType::Ns => RecordData::Ns(rdatas.to_vec()),
        RecordType::Ptr => RecordData::Ptr(rdatas.to_vec()),
        RecordType::Srv => RecordData::Srv(values(rdatas, SrvValue::parse_rdata, wrap)?),
        RecordType::Svcb => RecordData::Svcb(values(rdatas, SvcbValue::parse_rdata, wrap)?),
        RecordType::Txt => RecordData::Txt(values(rdatas, TxtValue::parse_rdata, wrap)?),
    })
}
