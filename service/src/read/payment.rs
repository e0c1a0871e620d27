//! [`Payment`]-related read definitions.

use crate::domain::{contact::FullName, payment, property, Payment};

use super::Search;

/// Item of the [`Payment`] list with the shallow joins its screen displays.
#[derive(Clone, Debug)]
pub struct ListItem {
    /// The [`Payment`] itself.
    pub payment: Payment,

    /// [`property::Title`] of the property the paid agreement rents out.
    pub property_title: property::Title,

    /// [`FullName`] of the paying tenant.
    pub tenant_name: FullName,
}

/// In-memory filter over the [`Payment`] list.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    /// [`Search`] term over property title, tenant name and reference
    /// number.
    pub search: Option<Search>,

    /// Exact [`payment::Kind`] to keep.
    pub kind: Option<payment::Kind>,

    /// Exact [`payment::Status`] to keep.
    pub status: Option<payment::Status>,
}

impl Filter {
    /// Checks whether the provided [`ListItem`] passes this [`Filter`].
    #[must_use]
    pub fn matches(&self, item: &ListItem) -> bool {
        if let Some(search) = &self.search {
            let matched = search.matches_any(
                [
                    Some(item.property_title.as_ref()),
                    Some(item.tenant_name.as_ref()),
                    item.payment.reference.as_ref().map(AsRef::as_ref),
                ]
                .into_iter()
                .flatten(),
            );
            if !matched {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if item.payment.kind != kind {
                return false;
            }
        }
        self.status.map_or(true, |status| item.payment.status == status)
    }
}
