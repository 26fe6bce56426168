//! Legal subject area enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of legal areas an article can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalArea {
    /// Administrative law.
    Administrative,
    /// Civil law.
    Civil,
    /// Criminal law.
    Criminal,
    /// Environmental law.
    Environmental,
    /// National security law.
    #[serde(rename = "National Security")]
    NationalSecurity,
}

impl LegalArea {
    /// All areas, in the order they are presented to authors.
    pub const ALL: [LegalArea; 5] = [
        Self::Administrative,
        Self::Civil,
        Self::Criminal,
        Self::Environmental,
        Self::NationalSecurity,
    ];

    /// The wire value stored in the `area` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrative => "Administrative",
            Self::Civil => "Civil",
            Self::Criminal => "Criminal",
            Self::Environmental => "Environmental",
            Self::NationalSecurity => "National Security",
        }
    }

    /// The label shown on submission and catalog pages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Administrative => "Administrative Law",
            Self::Civil => "Civil Law",
            Self::Criminal => "Criminal Law",
            Self::Environmental => "Environmental Law",
            Self::NationalSecurity => "National Security Law",
        }
    }
}

impl fmt::Display for LegalArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LegalArea {
    type Err = journal_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Administrative" => Ok(Self::Administrative),
            "Civil" => Ok(Self::Civil),
            "Criminal" => Ok(Self::Criminal),
            "Environmental" => Ok(Self::Environmental),
            "National Security" => Ok(Self::NationalSecurity),
            _ => Err(journal_core::AppError::validation(format!(
                "Invalid legal area: '{s}'. Expected one of: Administrative, Civil, Criminal, \
                 Environmental, National Security"
            ))),
        }
    }
}
