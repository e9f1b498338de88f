use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One family member: a name unique within the family and the date they
/// joined. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub joined: NaiveDate,
}

impl Member {
    pub fn new(name: impl Into<String>, joined: NaiveDate) -> Self {
        Self {
            name: name.into(),
            joined,
        }
    }
}
