//! Per-type text-rdata codecs.
//!
//! Each value type parses the remote service's text rdata grammar and
//! serializes back to it. Values that may contain literal semicolons (TXT
//! text, SVCB/HTTPS parameter strings) are held internally with the `\;`
//! escaping convention; the encoder reverts the escaping on the way out
//! because the wire format carries raw semicolons.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RdataError {
    #[error("expected {expected} fields, got {got}")]
    FieldCount { expected: usize, got: usize },

    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("invalid address {0:?}")]
    InvalidAddress(String),
}

/// Escapes literal semicolons into the internal `\;` form.
pub(crate) fn escape_semicolons(text: &str) -> String {
    text.replace(';', "\\;")
}

/// Reverts `\;` back to raw semicolons for transmission.
pub(crate) fn unescape_semicolons(text: &str) -> String {
    text.replace("\\;", ";")
}

fn parse_u16(field: &str) -> Result<u16, RdataError> {
    field
        .parse()
        .map_err(|_| RdataError::InvalidNumber(field.to_string()))
}

/// MX rdata: `<preference> <exchange>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxValue {
    pub preference: u16,
    pub exchange: String,
}

impl MxValue {
    pub fn parse_rdata(rdata: &str) -> Result<Self, RdataError> {
        let fields: Vec<&str> = rdata.split_whitespace().collect();
        let [preference, exchange] = fields[..] else {
            return Err(RdataError::FieldCount {
                expected: 2,
                got: fields.len(),
            });
        };
        Ok(Self {
            preference: parse_u16(preference)?,
            exchange: exchange.to_string(),
        })
    }

    pub fn to_rdata(&self) -> String {
        format!("{} {}", self.preference, self.exchange)
    }
}

/// SRV rdata: `<priority> <weight> <port> <target>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvValue {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

impl SrvValue {
    pub fn parse_rdata(rdata: &str) -> Result<Self, RdataError> {
        let fields: Vec<&str> = rdata.split_whitespace().collect();
        let [priority, weight, port, target] = fields[..] else {
            return Err(RdataError::FieldCount {
                expected: 4,
                got: fields.len(),
            });
        };
        Ok(Self {
            priority: parse_u16(priority)?,
            weight: parse_u16(weight)?,
            port: parse_u16(port)?,
            target: target.to_string(),
        })
    }

    pub fn to_rdata(&self) -> String {
        format!(
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

/// CAA rdata: `<flags> <tag> <value>`, value optionally quoted on input.
/// The remote service expects the value quoted on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaaValue {
    pub flags: u8,
    pub tag: String,
    pub value: String,
}

impl CaaValue {
    pub fn parse_rdata(rdata: &str) -> Result<Self, RdataError> {
        let fields: Vec<&str> = rdata.splitn(3, ' ').filter(|f| !f.is_empty()).collect();
        let [flags, tag, value] = fields[..] else {
            return Err(RdataError::FieldCount {
                expected: 3,
                got: fields.len(),
            });
        };
        let flags = flags
            .parse()
            .map_err(|_| RdataError::InvalidNumber(flags.to_string()))?;
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        Ok(Self {
            flags,
            tag: tag.to_string(),
            value: value.to_string(),
        })
    }

    pub fn to_rdata(&self) -> String {
        format!("{} {} \"{}\"", self.flags, self.tag, self.value)
    }
}

/// SVCB/HTTPS rdata: `<priority> <target> [params...]`. The parameter string
/// is kept verbatim apart from semicolon escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvcbValue {
    pub priority: u16,
    pub target: String,
    pub params: String,
}

impl SvcbValue {
    pub fn parse_rdata(rdata: &str) -> Result<Self, RdataError> {
        let mut fields = rdata.split_whitespace();
        let (Some(priority), Some(target)) = (fields.next(), fields.next()) else {
            return Err(RdataError::FieldCount {
                expected: 2,
                got: rdata.split_whitespace().count(),
            });
        };
        let params = fields.collect::<Vec<_>>().join(" ");
        Ok(Self {
            priority: parse_u16(priority)?,
            target: target.to_string(),
            params: escape_semicolons(&params),
        })
    }

    pub fn to_rdata(&self) -> String {
        if self.params.is_empty() {
            format!("{} {}", self.priority, self.target)
        } else {
            format!("{} {} {}", self.priority, self.target, self.params)
        }
    }
}

/// TXT value in the internal escaped form. Long values may arrive chunked as
/// a sequence of quoted strings (`"abc" "def"`); [`TxtValue::joined`] folds
/// the chunks back into the single logical text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtValue {
    text: String,
}

impl TxtValue {
    /// Wraps text already in the internal escaped form.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Parses wire rdata, escaping raw semicolons into the internal form.
    pub fn parse_rdata(rdata: &str) -> Result<Self, RdataError> {
        Ok(Self {
            text: escape_semicolons(rdata),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The single logical text, with any quoted-chunk framing removed.
    /// Still in the internal escaped form.
    pub fn joined(&self) -> String {
        let t = self.text.as_str();
        if t.len() >= 2 && t.starts_with('"') && t.ends_with('"') {
            t[1..t.len() - 1].split("\" \"").collect()
        } else {
            t.to_string()
        }
    }
}
