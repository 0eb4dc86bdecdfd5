use serde::Serialize;
use std::fmt;

/// Presence of a visitor on the premises.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum VisitStatus {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

impl VisitStatus {
    /// Parse user or sheet input, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "IN" => Some(Self::In),
            "OUT" => Some(Self::Out),
            _ => None,
        }
    }

    /// Convert enum → sheet cell
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::In => "IN",
            VisitStatus::Out => "OUT",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, VisitStatus::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, VisitStatus::Out)
    }
}

impl fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
