use serde::{Deserialize, Serialize};

use crate::{
    models::{Character, Concept, Location, Storyline},
    requests::ResourceKind,
};

/// Page size assumed when the API omits it or reports zero.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// One page of entities plus the pagination metadata describing it.
///
/// `meta` and `meta.pagination` are optional so a response that lacks them
/// still decodes; deciding what that means is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl Pagination {
    pub fn new(total: u32, page: u32, page_size: u32) -> Self {
        Self {
            total: Some(total),
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// Number of pages needed for `total` items, never less than one.
    pub fn total_pages(&self) -> u32 {
        let total = self.total.unwrap_or(0);
        let page_size = match self.page_size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size,
        };

        total.div_ceil(page_size).max(1)
    }
}

impl<T> Envelope<T> {
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            data,
            meta: Some(Meta {
                pagination: Some(pagination),
            }),
        }
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.meta.as_ref().and_then(|meta| meta.pagination.as_ref())
    }
}

/// An envelope whose resource kind is only known at runtime.
///
/// Serializes exactly like the inner envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyEnvelope {
    Characters(Envelope<Character>),
    Locations(Envelope<Location>),
    Concepts(Envelope<Concept>),
    Storylines(Envelope<Storyline>),
}

impl AnyEnvelope {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Characters(_) => ResourceKind::Characters,
            Self::Locations(_) => ResourceKind::Locations,
            Self::Concepts(_) => ResourceKind::Concepts,
            Self::Storylines(_) => ResourceKind::Storylines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pages(total: Option<u32>, page_size: Option<u32>) -> u32 {
        Pagination {
            total,
            page: Some(1),
            page_size,
        }
        .total_pages()
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(pages(Some(3), Some(10)), 1);
        assert_eq!(pages(Some(25), Some(10)), 3);
        assert_eq!(pages(Some(10), Some(10)), 1);
        assert_eq!(pages(Some(11), Some(10)), 2);
    }

    #[test]
    fn zero_or_missing_page_size_uses_the_default() {
        assert_eq!(pages(Some(25), Some(0)), 3);
        assert_eq!(pages(Some(25), None), 3);
    }

    #[test]
    fn empty_totals_still_yield_one_page() {
        assert_eq!(pages(Some(0), Some(10)), 1);
        assert_eq!(pages(None, Some(0)), 1);
        assert_eq!(pages(Some(0), Some(0)), 1);
    }

    #[test]
    fn envelope_without_meta_decodes_with_no_pagination() {
        let envelope: Envelope<Character> = serde_json::from_value(json!({
            "data": [{ "id": 1, "attributes": { "name": "Batman" } }]
        }))
        .unwrap();

        assert_eq!(envelope.data.len(), 1);
        assert!(envelope.pagination().is_none());

        let envelope: Envelope<Character> =
            serde_json::from_value(json!({ "data": [], "meta": {} })).unwrap();
        assert!(envelope.meta.is_some());
        assert!(envelope.pagination().is_none());
    }

    #[test]
    fn entities_without_default_decode_inside_an_envelope() {
        fn decode<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Envelope<T> {
            serde_json::from_value(value).unwrap()
        }

        let envelope: Envelope<Storyline> = decode(json!({
            "data": [{ "id": 3, "attributes": { "name": "Knightfall" } }]
        }));
        assert_eq!(envelope.data[0].attributes.name, "Knightfall");

        let envelope: Envelope<Location> = decode(json!({ "meta": {} }));
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn pagination_uses_camel_case_page_size() {
        let envelope: Envelope<Concept> = serde_json::from_value(json!({
            "data": [],
            "meta": { "pagination": { "total": 25, "page": 2, "pageSize": 5 } }
        }))
        .unwrap();

        assert_eq!(envelope.pagination(), Some(&Pagination::new(25, 2, 5)));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap()["meta"]["pagination"]["pageSize"],
            5
        );
    }
}
