//! Record-Set Encoder: flattens structured records into the remote flat row
//! format, one row per value.

use crate::rdata::unescape_semicolons;
use crate::sakura::types::RecordRow;
use crate::zone::{DEFAULT_TTL, Record, RecordData};

/// Serializes the desired records of one zone into the full row list sent to
/// the remote API.
///
/// The empty record name becomes the wire apex `"@"`. A TTL equal to
/// [`DEFAULT_TTL`] is omitted from the row so the remote side applies its own
/// default. TXT values are re-joined from any chunked form, and TXT and
/// SVCB/HTTPS values have the internal `\;` escaping reverted since the wire
/// carries raw semicolons.
pub fn encode_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<RecordRow> {
    let mut rows = Vec::new();
    for record in records {
        let name = if record.name.is_empty() {
            "@".to_string()
        } else {
            record.name.clone()
        };
        let rtype = record.rtype();
        for rdata in rdatas(&record.data) {
            rows.push(RecordRow {
                name: name.clone(),
                rtype: rtype.as_str().to_string(),
                rdata,
                ttl: (record.ttl != DEFAULT_TTL).then_some(record.ttl),
            });
        }
    }
    rows
}

fn rdatas(data: &RecordData) -> Vec<String> {
    match data {
        RecordData::A(vs) => vs.iter().map(ToString::to_string).collect(),
        RecordData::Aaaa(vs) => vs.iter().map(ToString::to_string).collect(),
        RecordData::Alias(vs) | RecordData::Cname(vs) | RecordData::Ns(vs)
        | RecordData::Ptr(vs) => vs.clone(),
        RecordData::Caa(vs) => vs.iter().map(|v| v.to_rdata()).collect(),
        RecordData::Mx(vs) => vs.iter().map(|v| v.to_rdata()).collect(),
        RecordData::Srv(vs) => vs.iter().map(|v| v.to_rdata()).collect(),
        RecordData::Https(vs) | RecordData::Svcb(vs) => vs
            .iter()
            .map(|v| unescape_semicolons(&v.to_rdata()))
            .collect(),
        RecordData::Txt(vs) => vs
            .iter()
            .map(|v| unescape_semicolons(&v.joined()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdata::{CaaValue, MxValue, SrvValue, SvcbValue, TxtValue};
    use crate::zone::Record;

    #[test]
    fn apex_record_encodes_to_at_sign() {
        let record = Record::new("", 300, RecordData::A(vec!["1.2.3.4".parse().unwrap()]));
        let rows = encode_records([&record]);
        assert_eq!(rows[0].name, "@");
        assert_eq!(rows[0].rtype, "A");
        assert_eq!(rows[0].rdata, "1.2.3.4");
        assert_eq!(rows[0].ttl, Some(300));
    }

    #[test]
    fn default_ttl_is_omitted() {
        let record = Record::new("a", DEFAULT_TTL, RecordData::A(vec!["1.2.3.4".parse().unwrap()]));
        let rows = encode_records([&record]);
        assert_eq!(rows[0].ttl, None);
    }

    #[test]
    fn multi_value_record_expands_to_multiple_rows() {
        let record = Record::new(
            "_srv._tcp",
            60,
            RecordData::Srv(vec![
                SrvValue {
                    priority: 10,
                    weight: 20,
                    port: 30,
                    target: "foo-1.unit.tests.".to_string(),
                },
                SrvValue {
                    priority: 12,
                    weight: 30,
                    port: 30,
                    target: "foo-2.unit.tests.".to_string(),
                },
            ]),
        );
        let rows = encode_records([&record]);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.name == "_srv._tcp" && r.rtype == "SRV"));
        assert_eq!(rows[0].rdata, "10 20 30 foo-1.unit.tests.");
        assert_eq!(rows[1].rdata, "12 30 30 foo-2.unit.tests.");
    }

    #[test]
    fn mx_values_are_space_joined() {
        let record = Record::new(
            "mx1",
            60,
            RecordData::Mx(vec![
                MxValue {
                    preference: 10,
                    exchange: "mx1.unit.tests.".to_string(),
                },
                MxValue {
                    preference: 20,
                    exchange: "mx2.unit.tests.".to_string(),
                },
            ]),
        );
        let rows = encode_records([&record]);
        assert_eq!(rows[0].rdata, "10 mx1.unit.tests.");
        assert_eq!(rows[1].rdata, "20 mx2.unit.tests.");
    }

    #[test]
    fn caa_value_is_quoted() {
        let record = Record::new(
            "caa",
            60,
            RecordData::Caa(vec![CaaValue {
                flags: 0,
                tag: "issue".to_string(),
                value: "ca.example.com".to_string(),
            }]),
        );
        let rows = encode_records([&record]);
        assert_eq!(rows[0].rdata, "0 issue \"ca.example.com\"");
    }

    #[test]
    fn txt_chunks_are_joined_and_unescaped() {
        let record = Record::new(
            "txt",
            60,
            RecordData::Txt(vec![TxtValue::new("\"v=DKIM1\\; k=rsa\\; p=abc\" \"def\"")]),
        );
        let rows = encode_records([&record]);
        assert_eq!(rows[0].rdata, "v=DKIM1; k=rsa; p=abcdef");
    }

    #[test]
    fn svcb_params_are_unescaped() {
        let record = Record::new(
            "www",
            60,
            RecordData::Https(vec![SvcbValue {
                priority: 1,
                target: ".".to_string(),
                params: "alpn=h2 ech=abc\\;def".to_string(),
            }]),
        );
        let rows = encode_records([&record]);
        assert_eq!(rows[0].rtype, "HTTPS");
        assert_eq!(rows[0].rdata, "1 . alpn=h2 ech=abc;def");
    }
}
