//! Gallery filtering by category tag

use crate::catalog::ImageName;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Identifier of the synthetic "everything" filter
pub const ALL: &str = "all";

/// A gallery filter: everything, or one category tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Tag(String),
}

impl Filter {
    /// Parse a filter identifier. Any string is accepted; only `"all"` is special.
    pub fn parse(id: &str) -> Self {
        if id == ALL {
            Filter::All
        } else {
            Filter::Tag(id.to_string())
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Filter::All => ALL,
            Filter::Tag(tag) => tag,
        }
    }

    /// Does `image` pass this filter?
    pub fn matches(&self, image: &ImageName) -> bool {
        match self {
            Filter::All => true,
            Filter::Tag(tag) => image.has_tag(tag),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Filter vocabulary of a catalog: `all` followed by every distinct tag, sorted
pub fn available_filters(images: &[ImageName]) -> Vec<Filter> {
    let tags: BTreeSet<String> = images.iter().flat_map(|img| img.tags()).collect();

    std::iter::once(Filter::All)
        .chain(tags.into_iter().map(Filter::Tag))
        .collect()
}

/// The subsequence of `images` passing `filter`, in catalog order
pub fn visible_set(images: &[ImageName], filter: &Filter) -> Vec<ImageName> {
    match filter {
        Filter::All => images.to_vec(),
        _ => images.iter().filter(|img| filter.matches(img)).cloned().collect(),
    }
}

/// Active filter selection
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    active: Filter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &Filter {
        &self.active
    }

    /// Select a filter by identifier. Unknown tags are accepted and simply
    /// match nothing.
    pub fn set_filter(&mut self, id: &str) {
        let filter = Filter::parse(id);
        if filter != self.active {
            tracing::debug!(filter = %filter, "Filter changed");
            self.active = filter;
        }
    }

    pub fn is_active(&self, filter: &Filter) -> bool {
        &self.active == filter
    }

    pub fn visible_set(&self, images: &[ImageName]) -> Vec<ImageName> {
        visible_set(images, &self.active)
    }
}

/// Display names for filter tags
///
/// Tags listed here get a fixed label; any other tag is shown with its first
/// character upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterLabels(HashMap<String, String>);

impl FilterLabels {
    pub fn new(labels: HashMap<String, String>) -> Self {
        Self(labels)
    }

    /// Label for `filter`; `all_label` is used for [`Filter::All`]
    pub fn label(&self, filter: &Filter, all_label: &str) -> String {
        match filter {
            Filter::All => all_label.to_string(),
            Filter::Tag(tag) => self
                .0
                .get(tag)
                .cloned()
                .unwrap_or_else(|| capitalize(tag)),
        }
    }
}

impl Default for FilterLabels {
    fn default() -> Self {
        let mut labels = HashMap::new();
        labels.insert("archit".to_string(), "Architecture".to_string());
        labels.insert("landsc".to_string(), "Landscape".to_string());
        labels.insert("int".to_string(), "Interior".to_string());
        labels.insert("street".to_string(), "Street Photography".to_string());
        Self(labels)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog_from_names;

    fn scenario() -> Vec<ImageName> {
        catalog_from_names(["sunset-landsc.jpg", "cafe-street-int.jpg"]).to_vec()
    }

    #[test]
    fn test_available_filters_sorted_with_all_first() {
        let filters = available_filters(&scenario());
        let ids: Vec<&str> = filters.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["all", "int", "landsc", "street"]);
    }

    #[test]
    fn test_available_filters_dedup_and_case_normalized() {
        let images = catalog_from_names(["a-Street.jpg", "b-street-INT.jpg", "c-int.png"]);
        let ids: Vec<String> = available_filters(&images)
            .iter()
            .map(|f| f.id().to_string())
            .collect();
        assert_eq!(ids, vec!["all", "int", "street"]);
    }

    #[test]
    fn test_available_filters_empty_catalog() {
        assert_eq!(available_filters(&[]), vec![Filter::All]);
    }

    #[test]
    fn test_all_is_identity() {
        let images = scenario();
        assert_eq!(visible_set(&images, &Filter::All), images);
    }

    #[test]
    fn test_select_street() {
        let mut state = FilterState::new();
        state.set_filter("street");
        assert_eq!(
            state.visible_set(&scenario()),
            vec![ImageName::from("cafe-street-int.jpg")]
        );
    }

    #[test]
    fn test_tag_filter_partitions_catalog() {
        let images = catalog_from_names([
            "a-street.jpg",
            "b-landsc-street.jpg",
            "c-int.jpg",
            "d-archit-int.jpg",
            "e-street-int.jpg",
        ])
        .to_vec();

        for filter in available_filters(&images).into_iter().skip(1) {
            let visible = visible_set(&images, &filter);
            for img in &images {
                let tagged = img.tags().iter().any(|t| t == filter.id());
                assert_eq!(visible.contains(img), tagged, "{} / {}", filter, img);
            }
            // Catalog order preserved
            let positions: Vec<usize> = visible
                .iter()
                .map(|v| images.iter().position(|i| i == v).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_unknown_filter_is_empty() {
        let mut state = FilterState::new();
        state.set_filter("portrait");
        assert!(state.visible_set(&scenario()).is_empty());
        // Case is not normalized on selection
        state.set_filter("STREET");
        assert!(state.visible_set(&scenario()).is_empty());
    }

    #[test]
    fn test_default_filter_is_all() {
        let state = FilterState::new();
        assert!(state.is_active(&Filter::All));
        assert_eq!(state.active().id(), "all");
    }

    #[test]
    fn test_labels() {
        let labels = FilterLabels::default();
        assert_eq!(labels.label(&Filter::All, "All"), "All");
        assert_eq!(labels.label(&Filter::parse("archit"), "All"), "Architecture");
        assert_eq!(labels.label(&Filter::parse("street"), "All"), "Street Photography");
        assert_eq!(labels.label(&Filter::parse("portrait"), "All"), "Portrait");
        assert_eq!(labels.label(&Filter::parse("ölbaum"), "All"), "Ölbaum");
    }
}
