//! [`Owner`]-related read definitions.

use derive_more::{From, Into};

use crate::domain::Owner;

use super::Search;

/// In-memory filter over the [`Owner`] list.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    /// [`Search`] term over full name, phone and e-mail.
    pub search: Option<Search>,
}

impl Filter {
    /// Checks whether the provided [`Owner`] passes this [`Filter`].
    #[must_use]
    pub fn matches(&self, owner: &Owner) -> bool {
        self.search.as_ref().map_or(true, |search| {
            search.matches_any(
                [
                    Some(owner.full_name.as_ref()),
                    Some(owner.phone.as_ref()),
                    owner.email.as_ref().map(AsRef::as_ref),
                ]
                .into_iter()
                .flatten(),
            )
        })
    }
}

/// Total count of [`Owner`]s.
#[derive(Clone, Copy, Debug, Eq, From, Hash, Into, PartialEq)]
pub struct TotalCount(i32);
