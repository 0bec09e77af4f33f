use crate::error::InvalidFormat;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// State code, district number, series, number. One space or hyphen may
// separate the groups.
static PLATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z]{2})[ -]?([0-9]{1,2})[ -]?([A-Z]{1,2})[ -]?([0-9]{4})$")
        .expect("plate pattern is valid")
});

/// A validated registration number, upper case with separators removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plate(String);

impl Plate {
    pub fn parse(raw: &str) -> Result<Plate, InvalidFormat> {
        let upper = raw.trim().to_ascii_uppercase();
        let caps = PLATE_PATTERN.captures(&upper).ok_or_else(|| InvalidFormat {
            input: raw.trim().to_string(),
        })?;
        let canonical: String = caps
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .collect();
        Ok(Plate(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_forms() {
        for raw in &[
            "MH02FB2727",
            "mh02fb2727",
            "MH-02-FB-2727",
            "MH 02 FB 2727",
            "  PB65AM0008 ",
            "DL3C1234",
            "KA1A0001",
        ] {
            assert!(Plate::parse(raw).is_ok(), "expected {:?} to be accepted", raw);
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for raw in &[
            "",
            "MH02FB",
            "MH02FB27270",
            "1H02FB2727",
            "MH02FB 2727X",
            "MH02FBC2727",
            "MH123FB2727",
            "MH--02FB2727",
            "MH_02_FB_2727",
        ] {
            assert!(Plate::parse(raw).is_err(), "expected {:?} to be rejected", raw);
        }
    }

    #[test]
    fn canonicalizes_case_and_separators() {
        let plate = Plate::parse(" mh-02 fb-2727").unwrap();
        assert_eq!(plate.as_str(), "MH02FB2727");
        assert_eq!(plate.to_string(), "MH02FB2727");
    }

    #[test]
    fn error_keeps_trimmed_input() {
        let err = Plate::parse("  MH02FB  ").unwrap_err();
        assert_eq!(err.input, "MH02FB");
        assert!(err.to_string().contains("MH02FB2727"));
    }
}
