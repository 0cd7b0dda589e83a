use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four collections exposed by the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Characters,
    Locations,
    Concepts,
    Storylines,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        Self::Characters,
        Self::Locations,
        Self::Concepts,
        Self::Storylines,
    ];

    /// Path segment of the collection on the remote API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Locations => "locations",
            Self::Concepts => "concepts",
            Self::Storylines => "storylines",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource kind: {0:?}")]
pub struct ParseKindError(pub String);

impl FromStr for ResourceKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "characters" => Ok(Self::Characters),
            "locations" => Ok(Self::Locations),
            "concepts" => Ok(Self::Concepts),
            "storylines" => Ok(Self::Storylines),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub kind: ResourceKind,
    pub page: u32,
}

impl PageRequest {
    pub fn new(kind: ResourceKind, page: u32) -> Self {
        Self { kind, page }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/{}?pagination[page]={}",
            base_url.trim_end_matches('/'),
            self.kind,
            self.page
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_round_trip_through_their_names() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.as_str().parse::<ResourceKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert_eq!(
            "bogus".parse::<ResourceKind>(),
            Err(ParseKindError("bogus".to_string()))
        );
        assert!("Characters".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn url_carries_the_page_in_the_pagination_parameter() {
        let request = PageRequest::new(ResourceKind::Storylines, 3);

        assert_eq!(
            request.url("https://api.batmanapi.com/v1/"),
            "https://api.batmanapi.com/v1/storylines?pagination[page]=3"
        );
    }
}
