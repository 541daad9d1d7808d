use serde::{Deserialize, Serialize};

// Safety limits to prevent resource abuse on the raw command path
pub(crate) const MAX_SORT_FIELDS: usize = 8;
pub(crate) const MAX_PROJECTION_FIELDS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub order: Order,
}

/// Whether the executor hands back the matched document as it was before the
/// update was applied or after.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnDocument {
    #[default]
    Before,
    After,
}

/// Collation to apply when matching the filter against candidate documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collation {
    pub locale: String,
    #[serde(default)]
    pub case_insensitive: bool,
    #[serde(default)]
    pub numeric_ordering: bool,
}

impl Collation {
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self { locale: locale.into(), ..Self::default() }
    }
}

/// Options for a find-one-and-update command.
///
/// Every setting is independently defaultable; the wire command only carries
/// the ones that were set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindOneAndUpdateOptions {
    pub projection: Option<Vec<String>>,
    pub sort: Option<Vec<SortSpec>>,
    pub collation: Option<Collation>,
    #[serde(default)]
    pub return_document: ReturnDocument,
    #[serde(default)]
    pub upsert: bool,
}

impl FindOneAndUpdateOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort order used to pick among multiple matching documents.
    #[must_use]
    pub fn with_sort(mut self, sort: Vec<SortSpec>) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn with_projection(mut self, fields: Vec<String>) -> Self {
        self.projection = Some(fields);
        self
    }

    #[must_use]
    pub fn with_collation(mut self, collation: Collation) -> Self {
        self.collation = Some(collation);
        self
    }

    #[must_use]
    pub fn with_return_document(mut self, return_document: ReturnDocument) -> Self {
        self.return_document = return_document;
        self
    }

    /// Insert a new document from the update when the filter matches nothing.
    #[must_use]
    pub fn with_upsert(mut self, upsert: bool) -> Self {
        self.upsert = upsert;
        self
    }
}
