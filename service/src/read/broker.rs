//! [`Broker`]-related read definitions.

use crate::domain::Broker;

use super::Search;

/// In-memory filter over the [`Broker`] list.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    /// [`Search`] term over full name, phone and agency name.
    pub search: Option<Search>,
}

impl Filter {
    /// Checks whether the provided [`Broker`] passes this [`Filter`].
    #[must_use]
    pub fn matches(&self, broker: &Broker) -> bool {
        self.search.as_ref().map_or(true, |search| {
            search.matches_any([
                broker.full_name.as_ref(),
                broker.phone.as_ref(),
                broker.agency_name.as_ref(),
            ])
        })
    }
}
