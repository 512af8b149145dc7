//! Pride flag names accepted by the `pride` image endpoint

use crate::error::DagpiError;
use std::fmt;
use std::str::FromStr;

/// Flags accepted by the `pride` image endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrideFlag {
    Asexual,
    Bisexual,
    Gay,
    Genderfluid,
    Genderqueer,
    Intersex,
    Lesbian,
    Nonbinary,
    Progress,
    Pan,
    Trans,
}

impl PrideFlag {
    pub const ALL: [PrideFlag; 11] = [
        PrideFlag::Asexual,
        PrideFlag::Bisexual,
        PrideFlag::Gay,
        PrideFlag::Genderfluid,
        PrideFlag::Genderqueer,
        PrideFlag::Intersex,
        PrideFlag::Lesbian,
        PrideFlag::Nonbinary,
        PrideFlag::Progress,
        PrideFlag::Pan,
        PrideFlag::Trans,
    ];

    /// Wire value sent as the `flag` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            PrideFlag::Asexual => "asexual",
            PrideFlag::Bisexual => "bisexual",
            PrideFlag::Gay => "gay",
            PrideFlag::Genderfluid => "genderfluid",
            PrideFlag::Genderqueer => "genderqueer",
            PrideFlag::Intersex => "intersex",
            PrideFlag::Lesbian => "lesbian",
            PrideFlag::Nonbinary => "nonbinary",
            PrideFlag::Progress => "progress",
            PrideFlag::Pan => "pan",
            PrideFlag::Trans => "trans",
        }
    }
}

impl fmt::Display for PrideFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrideFlag {
    type Err = DagpiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrideFlag::ALL
            .iter()
            .copied()
            .find(|flag| flag.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let accepted: Vec<&str> = PrideFlag::ALL.iter().map(|f| f.as_str()).collect();
                DagpiError::invalid_parameter(
                    "flag",
                    s,
                    format!("pride flag must be one of: {}", accepted.join(", ")),
                )
            })
    }
}
