use regex::Regex;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("zone name is empty")]
    Empty,
    #[error("label too long (max 63 characters)")]
    LabelTooLong,
    #[error("label contains invalid characters (only a-z, 0-9, and '-' allowed)")]
    InvalidCharacters,
    #[error("label must not start or end with '-'")]
    LeadingOrTrailingHyphen,
}

lazy_static::lazy_static! {
    /// Only lowercase letters, digits and '-'
    static ref LABEL_RE: Regex = Regex::new(r"^[a-z0-9-]+$").unwrap();
}

fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.is_empty() {
        return Err(ValidationError::Empty);
    }
    if label.len() > 63 {
        return Err(ValidationError::LabelTooLong);
    }
    if !LABEL_RE.is_match(label) {
        return Err(ValidationError::InvalidCharacters);
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(ValidationError::LeadingOrTrailingHyphen);
    }

    Ok(())
}

/// Checks an ASCII zone name label by label, with or without trailing dot.
/// Punycode labels (`xn--`) pass since '--' is legal mid-label.
pub fn validate_zone_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim_end_matches('.');
    if name.is_empty() {
        return Err(ValidationError::Empty);
    }
    for label in name.split('.') {
        validate_label(label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(validate_zone_name("example.com.").is_ok());
        assert!(validate_zone_name("example.com").is_ok());
        assert!(validate_zone_name("xn--fsq.example.").is_ok());
    }

    #[test]
    fn rejects_bad_names() {
        assert!(matches!(validate_zone_name(""), Err(ValidationError::Empty)));
        assert!(matches!(
            validate_zone_name("."),
            Err(ValidationError::Empty)
        ));
        assert!(matches!(
            validate_zone_name("Example.com."),
            Err(ValidationError::InvalidCharacters)
        ));
        assert!(matches!(
            validate_zone_name("foo..com."),
            Err(ValidationError::Empty)
        ));
        assert!(matches!(
            validate_zone_name("-foo.com."),
            Err(ValidationError::LeadingOrTrailingHyphen)
        ));
        let long = format!("{}.com.", "a".repeat(64));
        assert!(matches!(
            validate_zone_name(&long),
            Err(ValidationError::LabelTooLong)
        ));
    }
}
