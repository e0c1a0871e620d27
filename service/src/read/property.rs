//! [`Property`]-related read definitions.

use common::Percent;
use derive_more::{From, Into};

use crate::domain::{
    broker, contact::FullName, owner, property, Owner, Property,
};

use super::Search;

/// Item of the [`Property`] list with the shallow joins its screen displays.
#[derive(Clone, Debug)]
pub struct ListItem {
    /// The [`Property`] itself.
    pub property: Property,

    /// [`Owner`]s linked to the [`Property`].
    pub owners: Vec<OwnerRef>,

    /// Brokers linked to the [`Property`].
    pub brokers: Vec<BrokerRef>,
}

/// Shallow reference to an [`Owner`] of a [`Property`].
#[derive(Clone, Debug)]
pub struct OwnerRef {
    /// ID of the [`Owner`].
    pub id: owner::Id,

    /// [`FullName`] of the [`Owner`].
    pub full_name: FullName,

    /// Share of the [`Property`] the [`Owner`] holds.
    pub share: Percent,
}

/// Shallow reference to a broker of a [`Property`].
#[derive(Clone, Debug)]
pub struct BrokerRef {
    /// ID of the broker.
    pub id: broker::Id,

    /// [`FullName`] of the broker.
    pub full_name: FullName,
}

/// In-memory filter over the [`Property`] list.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    /// [`Search`] term over title, address and city.
    pub search: Option<Search>,

    /// Exact [`property::Status`] to keep.
    pub status: Option<property::Status>,

    /// Exact [`property::Kind`] to keep.
    pub kind: Option<property::Kind>,

    /// Keep only [`Property`]s having an [`Ownership`] row referencing this
    /// [`Owner`].
    ///
    /// [`Ownership`]: property::Ownership
    pub owner: Option<owner::Id>,
}

impl Filter {
    /// Checks whether the provided [`ListItem`] passes this [`Filter`].
    #[must_use]
    pub fn matches(&self, item: &ListItem) -> bool {
        if let Some(search) = &self.search {
            let matched = search.matches_any([
                item.property.title.as_ref(),
                item.property.address.as_ref(),
                item.property.city.as_ref(),
            ]);
            if !matched {
                return false;
            }
        }
        if let Some(status) = self.status {
            if item.property.status != status {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if item.property.kind != kind {
                return false;
            }
        }
        if let Some(owner_id) = self.owner {
            if !item.owners.iter().any(|o| o.id == owner_id) {
                return false;
            }
        }
        true
    }
}

/// Primary [`Owner`] of a [`Property`]: the first [`Ownership`] row of the
/// property joined with its [`Owner`].
///
/// An artifact of the single-select owner assignment, not a schema-level
/// designation.
///
/// [`Ownership`]: property::Ownership
#[derive(Clone, Debug)]
pub struct PrimaryOwner {
    /// The [`Owner`] itself.
    pub owner: Owner,

    /// Share of the [`Property`] the [`Owner`] holds.
    pub share: Percent,
}

/// Total count of [`Property`]s.
#[derive(Clone, Copy, Debug, Eq, From, Hash, Into, PartialEq)]
pub struct TotalCount(i32);

#[cfg(test)]
mod spec {
    use common::{DateTime, Money, Percent};

    use super::{Filter, ListItem, OwnerRef, Search};
    use crate::domain::{owner, property, Property};

    fn item(title: &str, status: property::Status) -> ListItem {
        ListItem {
            property: Property {
                id: property::Id::new(),
                title: title.parse().unwrap(),
                address: "12 Canal Road".parse().unwrap(),
                city: "Lahore".parse().unwrap(),
                state: None,
                zip_code: None,
                kind: property::Kind::Residential,
                area: "1200".parse().unwrap(),
                price: Money::pkr("15000".parse().unwrap()),
                status,
                furnishing: property::Furnishing::Unfurnished,
                bedrooms: Some(2),
                bathrooms: Some(1),
                description: None,
                created_at: DateTime::now().coerce(),
            },
            owners: vec![],
            brokers: vec![],
        }
    }

    #[test]
    fn search_covers_title_address_and_city() {
        let filter = Filter {
            search: Search::new("canal"),
            ..Filter::default()
        };
        assert!(filter.matches(&item("Flat A", property::Status::ForRent)));

        let filter = Filter {
            search: Search::new("LAHORE"),
            ..Filter::default()
        };
        assert!(filter.matches(&item("Flat A", property::Status::ForRent)));

        let filter = Filter {
            search: Search::new("karachi"),
            ..Filter::default()
        };
        assert!(!filter.matches(&item("Flat A", property::Status::ForRent)));
    }

    #[test]
    fn status_filter_is_exact() {
        let filter = Filter {
            status: Some(property::Status::Rented),
            ..Filter::default()
        };

        assert!(filter.matches(&item("Flat A", property::Status::Rented)));
        assert!(!filter.matches(&item("Flat A", property::Status::ForRent)));
    }

    #[test]
    fn owner_filter_requires_an_ownership_row() {
        let owner_id = owner::Id::new();
        let filter = Filter {
            owner: Some(owner_id),
            ..Filter::default()
        };

        let mut owned = item("Flat A", property::Status::ForRent);
        owned.owners.push(OwnerRef {
            id: owner_id,
            full_name: "Ahmed Khan".parse().unwrap(),
            share: Percent::ONE_HUNDRED,
        });

        assert!(filter.matches(&owned));
        assert!(!filter.matches(&item("Flat B", property::Status::ForRent)));
    }

    #[test]
    fn no_match_is_distinct_from_empty_collection() {
        let all = vec![
            item("Flat A", property::Status::ForRent),
            item("Flat B", property::Status::ForSale),
        ];
        let filter = Filter {
            search: Search::new("penthouse"),
            ..Filter::default()
        };

        let filtered = all
            .iter()
            .filter(|i| filter.matches(i))
            .collect::<Vec<_>>();

        // The fetched collection is non-empty, the filtered result is empty:
        // a view can tell "nothing matched" apart from "nothing exists".
        assert!(!all.is_empty());
        assert!(filtered.is_empty());
    }
}
