//! Structured zone model: typed records grouped by (name, type).

use std::collections::BTreeMap;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::rdata::{CaaValue, MxValue, SrvValue, SvcbValue, TxtValue};

/// TTL applied when a remote row carries no TTL field. Rows written back with
/// exactly this TTL omit the field so the remote side applies its own default.
pub const DEFAULT_TTL: u32 = 3600;

/// Appends the trailing dot if missing. Zone names are cached and compared in
/// this fully-qualified form.
pub fn ensure_trailing_dot(name: &str) -> String {
    if !name.is_empty() && !name.ends_with('.') {
        format!("{}.", name)
    } else {
        name.to_string()
    }
}

/// Root-relative form used in remote `Name`/`Zone` payload fields.
pub fn strip_trailing_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// The closed set of record types the remote service stores. Raw rows of any
/// other type are dropped during decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordType {
    A,
    Aaaa,
    Alias,
    Caa,
    Cname,
    Https,
    Mx,
    Ns,
    Ptr,
    Srv,
    Svcb,
    Txt,
}

impl RecordType {
    /// Maps a wire type tag to its variant. `None` for unsupported tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "ALIAS" => Self::Alias,
            "CAA" => Self::Caa,
            "CNAME" => Self::Cname,
            "HTTPS" => Self::Https,
            "MX" => Self::Mx,
            "NS" => Self::Ns,
            "PTR" => Self::Ptr,
            "SRV" => Self::Srv,
            "SVCB" => Self::Svcb,
            "TXT" => Self::Txt,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Alias => "ALIAS",
            Self::Caa => "CAA",
            Self::Cname => "CNAME",
            Self::Https => "HTTPS",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
            Self::Srv => "SRV",
            Self::Svcb => "SVCB",
            Self::Txt => "TXT",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed values of one record set. One variant per supported type keeps the
/// per-type serialization dispatch exhaustive at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Vec<Ipv4Addr>),
    Aaaa(Vec<Ipv6Addr>),
    Alias(Vec<String>),
    Caa(Vec<CaaValue>),
    Cname(Vec<String>),
    Https(Vec<SvcbValue>),
    Mx(Vec<MxValue>),
    Ns(Vec<String>),
    Ptr(Vec<String>),
    Srv(Vec<SrvValue>),
    Svcb(Vec<SvcbValue>),
    Txt(Vec<TxtValue>),
}

impl RecordData {
    pub fn rtype(&self) -> RecordType {
        match self {
            Self::A(_) => RecordType::A,
            Self::Aaaa(_) => RecordType::Aaaa,
            Self::Alias(_) => RecordType::Alias,
            Self::Caa(_) => RecordType::Caa,
            Self::Cname(_) => RecordType::Cname,
            Self::Https(_) => RecordType::Https,
            Self::Mx(_) => RecordType::Mx,
            Self::Ns(_) => RecordType::Ns,
            Self::Ptr(_) => RecordType::Ptr,
            Self::Srv(_) => RecordType::Srv,
            Self::Svcb(_) => RecordType::Svcb,
            Self::Txt(_) => RecordType::Txt,
        }
    }

    /// Number of values in this record set.
    pub fn len(&self) -> usize {
        match self {
            Self::A(v) => v.len(),
            Self::Aaaa(v) => v.len(),
            Self::Alias(v) => v.len(),
            Self::Caa(v) => v.len(),
            Self::Cname(v) => v.len(),
            Self::Https(v) => v.len(),
            Self::Mx(v) => v.len(),
            Self::Ns(v) => v.len(),
            Self::Ptr(v) => v.len(),
            Self::Srv(v) => v.len(),
            Self::Svcb(v) => v.len(),
            Self::Txt(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One record set: all values sharing a name and type, with one TTL.
/// The empty name denotes the zone apex (`"@"` on the wire).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub ttl: u32,
    pub data: RecordData,
}

impl Record {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn rtype(&self) -> RecordType {
        self.data.rtype()
    }
}

/// A zone and its record sets, keyed by (name, type) so at most one record
/// exists per pair. The zone name is kept in trailing-dot form.
#[derive(Debug, Clone, Default)]
pub struct Zone {
    name: String,
    records: BTreeMap<(String, RecordType), Record>,
}

impl Zone {
    pub fn new(name: &str) -> Self {
        Self {
            name: ensure_trailing_dot(name),
            records: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts a record, replacing any previous record for the same
    /// (name, type) pair.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert((record.name.clone(), record.rtype()), record);
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn get(&self, name: &str, rtype: RecordType) -> Option<&Record> {
        self.records.get(&(name.to_string(), rtype))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_dot_is_appended_once() {
        assert_eq!(ensure_trailing_dot("example.com"), "example.com.");
        assert_eq!(ensure_trailing_dot("example.com."), "example.com.");
        assert_eq!(ensure_trailing_dot(""), "");
    }

    #[test]
    fn trailing_dot_is_stripped_once() {
        assert_eq!(strip_trailing_dot("example.com."), "example.com");
        assert_eq!(strip_trailing_dot("example.com"), "example.com");
        assert_eq!(strip_trailing_dot(""), "");
    }

    #[test]
    fn record_type_tags_round_trip() {
        for tag in [
            "A", "AAAA", "ALIAS", "CAA", "CNAME", "HTTPS", "MX", "NS", "PTR", "SRV", "SVCB", "TXT",
        ] {
            let rtype = RecordType::from_tag(tag).unwrap();
            assert_eq!(rtype.as_str(), tag);
        }
        assert_eq!(RecordType::from_tag("SOA"), None);
        assert_eq!(RecordType::from_tag("a"), None);
    }

    #[test]
    fn zone_holds_one_record_per_name_and_type() {
        let mut zone = Zone::new("unit.tests");
        assert_eq!(zone.name(), "unit.tests.");

        zone.add_record(Record::new(
            "www",
            300,
            RecordData::A(vec!["192.0.2.1".parse().unwrap()]),
        ));
        zone.add_record(Record::new(
            "www",
            600,
            RecordData::A(vec!["192.0.2.2".parse().unwrap()]),
        ));
        zone.add_record(Record::new(
            "www",
            600,
            RecordData::Aaaa(vec!["2001:db8::1".parse().unwrap()]),
        ));

        assert_eq!(zone.len(), 2);
        let a = zone.get("www", RecordType::A).unwrap();
        assert_eq!(a.ttl, 600);
    }
}
