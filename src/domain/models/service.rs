//! Service Kinds
//!
//! The endpoint families a network can advertise.

use std::fmt;
use std::str::FromStr;

use crate::shared::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Subgraphs,
    Sps,
    Firehose,
    Substreams,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [Self::Subgraphs, Self::Sps, Self::Firehose, Self::Substreams];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Subgraphs => "subgraphs",
            Self::Sps => "sps",
            Self::Firehose => "firehose",
            Self::Substreams => "substreams",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownService(s.to_string()))
    }
}
