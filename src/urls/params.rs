//! Search filters for list endpoints

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the discovery search endpoints
///
/// Every field is an optional string; an empty string means "not set" and is
/// never sent. Values are passed through as-is (no date or number validation).
/// The serde names are the wire names, so a filter set can also be loaded from
/// a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryParams {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sort: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub size: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub locale: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub keyword: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub include_test: String,
    #[serde(rename = "includeTBA", skip_serializing_if = "String::is_empty")]
    pub include_tba: String,
    #[serde(rename = "includeTBD", skip_serializing_if = "String::is_empty")]
    pub include_tbd: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub venue_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_date_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub end_date_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub attraction_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub segment_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub segment_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub classification_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub classification_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub market_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub promoter_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dma_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub latlong: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub radius: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unit: String,
}

impl QueryParams {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text keyword
    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Set the page number and page size
    #[must_use]
    pub fn page(mut self, page: impl Into<String>, size: impl Into<String>) -> Self {
        self.page = page.into();
        self.size = size.into();
        self
    }

    /// Set the sort order (e.g. `date,asc`)
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    /// Non-empty fields as `(wire name, value)` pairs
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("id", &self.id),
            ("sort", &self.sort),
            ("page", &self.page),
            ("size", &self.size),
            ("locale", &self.locale),
            ("keyword", &self.keyword),
            ("includeTest", &self.include_test),
            ("includeTBA", &self.include_tba),
            ("includeTBD", &self.include_tbd),
            ("venueId", &self.venue_id),
            ("startDateTime", &self.start_date_time),
            ("endDateTime", &self.end_date_time),
            ("countryCode", &self.country_code),
            ("stateCode", &self.state_code),
            ("attractionId", &self.attraction_id),
            ("segmentId", &self.segment_id),
            ("segmentName", &self.segment_name),
            ("classificationId", &self.classification_id),
            ("classificationName", &self.classification_name),
            ("marketId", &self.market_id),
            ("promoterId", &self.promoter_id),
            ("dmaId", &self.dma_id),
            ("latlong", &self.latlong),
            ("radius", &self.radius),
            ("unit", &self.unit),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| (name, value.as_str()))
        .collect()
    }

    /// True when no filter is set
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}
