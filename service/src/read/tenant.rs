//! [`Tenant`]-related read definitions.

use derive_more::{From, Into};

use crate::domain::Tenant;

use super::Search;

/// In-memory filter over the [`Tenant`] list.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    /// [`Search`] term over full name, phone and e-mail.
    pub search: Option<Search>,
}

impl Filter {
    /// Checks whether the provided [`Tenant`] passes this [`Filter`].
    #[must_use]
    pub fn matches(&self, tenant: &Tenant) -> bool {
        self.search.as_ref().map_or(true, |search| {
            search.matches_any(
                [
                    Some(tenant.full_name.as_ref()),
                    Some(tenant.phone.as_ref()),
                    tenant.email.as_ref().map(AsRef::as_ref),
                ]
                .into_iter()
                .flatten(),
            )
        })
    }
}

/// Total count of [`Tenant`]s.
#[derive(Clone, Copy, Debug, Eq, From, Hash, Into, PartialEq)]
pub struct TotalCount(i32);
