//! [`RentAgreement`]-related read definitions.

use derive_more::{From, Into};

use crate::domain::{agreement, contact::FullName, property, RentAgreement};

use super::Search;

/// Item of the [`RentAgreement`] list with the shallow joins its screen
/// displays.
#[derive(Clone, Debug)]
pub struct ListItem {
    /// The [`RentAgreement`] itself.
    pub agreement: RentAgreement,

    /// [`property::Title`] of the rented property.
    pub property_title: property::Title,

    /// [`FullName`] of the renting tenant.
    pub tenant_name: FullName,
}

/// In-memory filter over the [`RentAgreement`] list.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    /// [`Search`] term over property title and tenant name.
    pub search: Option<Search>,

    /// Exact [`agreement::Status`] to keep.
    pub status: Option<agreement::Status>,
}

impl Filter {
    /// Checks whether the provided [`ListItem`] passes this [`Filter`].
    #[must_use]
    pub fn matches(&self, item: &ListItem) -> bool {
        if let Some(search) = &self.search {
            let matched = search.matches_any([
                item.property_title.as_ref(),
                item.tenant_name.as_ref(),
            ]);
            if !matched {
                return false;
            }
        }
        self.status
            .map_or(true, |status| item.agreement.status == status)
    }
}

/// Count of [`RentAgreement`]s in the [`agreement::Status::Active`] status.
#[derive(Clone, Copy, Debug, Eq, From, Hash, Into, PartialEq)]
pub struct ActiveCount(i32);
