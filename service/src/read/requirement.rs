//! [`Requirement`]-related read definitions.

use crate::domain::{requirement, Requirement};

use super::Search;

/// In-memory filter over the [`Requirement`] list.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    /// [`Search`] term over customer name, phone and preferred location.
    pub search: Option<Search>,

    /// Exact [`requirement::Status`] to keep.
    pub status: Option<requirement::Status>,

    /// Exact [`requirement::Kind`] to keep.
    pub kind: Option<requirement::Kind>,
}

impl Filter {
    /// Checks whether the provided [`Requirement`] passes this [`Filter`].
    #[must_use]
    pub fn matches(&self, req: &Requirement) -> bool {
        if let Some(search) = &self.search {
            let matched = search.matches_any(
                [
                    Some(req.customer_name.as_ref()),
                    Some(req.customer_phone.as_ref()),
                    req.preferred_location.as_ref().map(AsRef::as_ref),
                ]
                .into_iter()
                .flatten(),
            );
            if !matched {
                return false;
            }
        }
        if let Some(status) = self.status {
            if req.status != status {
                return false;
            }
        }
        self.kind.map_or(true, |kind| req.kind == kind)
    }
}
