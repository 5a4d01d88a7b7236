use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from source column names to destination field ids.
///
/// Pairs with a blank destination are dropped at construction, so every
/// stored mapping points at a real field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportMapping {
    columns: BTreeMap<String, String>,
}

impl ImportMapping {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut columns = BTreeMap::new();
        for (column, field_id) in pairs {
            let field_id = field_id.into();
            if field_id.trim().is_empty() {
                continue;
            }
            columns.insert(column.into(), field_id);
        }
        Self { columns }
    }

    pub fn field_for(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(column, field)| (column.as_str(), field.as_str()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
