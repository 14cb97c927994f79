use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted movie record.
///
/// The identifier is assigned by the store on insert and never changes
/// afterwards. All text fields are non-empty once the record is persisted;
/// duration is at least one minute. Those rules are enforced at the request
/// boundary before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-assigned immutable identifier
    pub id: i64,

    /// Movie title
    pub name: String,

    /// Director name
    pub director: String,

    /// Runtime in minutes (>= 1)
    pub duration: u32,

    /// Genre label (historical field name kept from the wire contract)
    pub gender: String,

    /// Catalog category
    pub category: String,

    /// Release date
    pub publish_date: NaiveDate,
}

/// A movie that has not been persisted yet.
///
/// Same fields as [`Movie`] minus the identifier; assigning one is the
/// store's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDraft {
    pub name: String,
    pub director: String,
    pub duration: u32,
    pub gender: String,
    pub category: String,
    pub publish_date: NaiveDate,
}

impl MovieDraft {
    /// Attach a store-assigned identifier, producing the persisted shape.
    pub fn with_id(self, id: i64) -> Movie {
        Movie {
            id,
            name: self.name,
            director: self.director,
            duration: self.duration,
            gender: self.gender,
            category: self.category,
            publish_date: self.publish_date,
        }
    }
}
