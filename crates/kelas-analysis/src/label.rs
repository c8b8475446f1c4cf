//! Proficiency band labels
//!
//! Each student receives a [`ClassLabel`] from the combined total score
//! alone. The label does not depend on the cluster a student was assigned to.
//!
//! # Bands
//!
//! | Total score     | Label            |
//! |-----------------|------------------|
//! | `70 ..= 79`     | `Kelas C`        |
//! | `80 ..= 85`     | `Kelas B`        |
//! | anything else   | `Kelas Unggulan` |
//!
//! Both bands are closed ranges, so totals strictly between 79 and 80
//! (for example 79.5) belong to neither and fall into `Kelas Unggulan`
//! together with totals below 70 and above 85.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display name of a proficiency band.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum ClassLabel {
    #[serde(rename = "Kelas C")]
    #[display("Kelas C")]
    KelasC,
    #[serde(rename = "Kelas B")]
    #[display("Kelas B")]
    KelasB,
    #[serde(rename = "Kelas Unggulan")]
    #[display("Kelas Unggulan")]
    KelasUnggulan,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown class label '{label}'")]
pub struct UnknownLabelError {
    pub label: String,
}

impl ClassLabel {
    pub const ALL: [Self; 3] = [Self::KelasC, Self::KelasB, Self::KelasUnggulan];

    /// Assigns the band for a combined total score.
    ///
    /// # Examples
    ///
    /// ```
    /// use kelas_analysis::label::ClassLabel;
    ///
    /// assert_eq!(ClassLabel::from_total(76.5), ClassLabel::KelasC);
    /// assert_eq!(ClassLabel::from_total(82.0), ClassLabel::KelasB);
    /// assert_eq!(ClassLabel::from_total(79.5), ClassLabel::KelasUnggulan);
    /// ```
    #[must_use]
    pub fn from_total(total: f64) -> Self {
        if (70.0..=79.0).contains(&total) {
            Self::KelasC
        } else if (80.0..=85.0).contains(&total) {
            Self::KelasB
        } else {
            Self::KelasUnggulan
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KelasC => "Kelas C",
            Self::KelasB => "Kelas B",
            Self::KelasUnggulan => "Kelas Unggulan",
        }
    }
}

impl FromStr for ClassLabel {
    type Err = UnknownLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownLabelError {
                label: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_c() {
        for total in [70.0, 72.5, 76.5, 79.0] {
            assert_eq!(ClassLabel::from_total(total), ClassLabel::KelasC, "{total}");
        }
    }

    #[test]
    fn test_band_b() {
        for total in [80.0, 82.0, 84.99, 85.0] {
            assert_eq!(ClassLabel::from_total(total), ClassLabel::KelasB, "{total}");
        }
    }

    #[test]
    fn test_everything_else_is_unggulan() {
        for total in [0.0, 60.0, 69.99, 85.01, 90.0, 100.0] {
            assert_eq!(
                ClassLabel::from_total(total),
                ClassLabel::KelasUnggulan,
                "{total}"
            );
        }
    }

    #[test]
    fn test_gap_between_c_and_b_is_unggulan() {
        for total in [79.01, 79.5, 79.99] {
            assert_eq!(
                ClassLabel::from_total(total),
                ClassLabel::KelasUnggulan,
                "{total}"
            );
        }
    }

    #[test]
    fn test_display_and_parse() {
        for label in ClassLabel::ALL {
            assert_eq!(label.as_str().parse::<ClassLabel>().unwrap(), label);
        }
        for label in ClassLabel::ALL {
            assert_eq!(label.to_string(), label.as_str());
        }
        assert!("Kelas A".parse::<ClassLabel>().is_err());
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&ClassLabel::KelasB).unwrap();
        assert_eq!(json, "\"Kelas B\"");
        let label: ClassLabel = serde_json::from_str("\"Kelas C\"").unwrap();
        assert_eq!(label, ClassLabel::KelasC);
    }
}
