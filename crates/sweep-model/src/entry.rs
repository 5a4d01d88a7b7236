use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Entry status eligible for scanning and deletion.
pub const STATUS_ACTIVE: &str = "active";

/// A form submission held by the external entry store.
///
/// Field values are untyped strings keyed by field id. `id` and
/// `date_created` are pseudo-fields resolvable through [`Entry::value`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub form_id: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

fn default_status() -> String {
    STATUS_ACTIVE.to_string()
}

impl Entry {
    pub fn new(id: impl Into<String>, form_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            form_id: form_id.into(),
            status: default_status(),
            date_created: String::new(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, field_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field_id.into(), value.into());
        self
    }

    pub fn with_date_created(mut self, date_created: impl Into<String>) -> Self {
        self.date_created = date_created.into();
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    /// Resolve a field value; missing fields read as the empty string.
    pub fn value(&self, field_id: &str) -> &str {
        match field_id {
            "id" => &self.id,
            "date_created" => &self.date_created,
            _ => self
                .fields
                .get(field_id)
                .map(String::as_str)
                .unwrap_or_default(),
        }
    }
}
