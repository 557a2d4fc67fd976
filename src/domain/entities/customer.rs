//! Customer entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer record as returned by the data source.
///
/// Services and caches treat it as an opaque value: nothing downstream
/// inspects the fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new Customer instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let customer = Customer::new(
    ///     1,
    ///     "Ada Lovelace".to_string(),
    ///     Some("ada@example.com".to_string()),
    ///     Utc::now(),
    /// );
    /// ```
    pub fn new(
        id: i64,
        name: String,
        email: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
        }
    }
}
