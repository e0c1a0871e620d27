//! Read models of the [`Service`].
//!
//! List items carry the shallow joins their screens display, and filters
//! are applied in memory against the full fetched collection.
//!
//! [`Service`]: crate::Service

pub mod agreement;
pub mod broker;
pub mod dashboard;
pub mod owner;
pub mod payment;
pub mod property;
pub mod requirement;
pub mod tenant;

/// Case-insensitive substring search term.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Search(String);

impl Search {
    /// Creates a new [`Search`] term.
    ///
    /// [`None`] is returned if the given `term` is blank, meaning no
    /// filtering should be applied at all.
    #[must_use]
    pub fn new(term: impl AsRef<str>) -> Option<Self> {
        let term = term.as_ref().trim().to_lowercase();
        (!term.is_empty()).then_some(Self(term))
    }

    /// Checks whether any of the provided `fields` contains this [`Search`]
    /// term.
    #[must_use]
    pub fn matches_any<'f>(
        &self,
        fields: impl IntoIterator<Item = &'f str>,
    ) -> bool {
        fields
            .into_iter()
            .any(|f| f.to_lowercase().contains(&self.0))
    }
}

#[cfg(test)]
mod spec {
    use super::Search;

    #[test]
    fn blank_terms_mean_no_filtering() {
        assert_eq!(Search::new(""), None);
        assert_eq!(Search::new("   "), None);
    }

    #[test]
    fn matches_case_insensitively() {
        let search = Search::new("  Flat A ").unwrap();

        assert!(search.matches_any(["flat a, gulberg"]));
        assert!(search.matches_any(["FLAT A"]));
        assert!(search.matches_any(["house", "Flat A"]));
        assert!(!search.matches_any(["flat b", "house"]));
        assert!(!search.matches_any([]));
    }
}
