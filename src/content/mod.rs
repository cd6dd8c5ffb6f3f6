//! Typed repositories over owned record sequences.
//!
//! The catalog used to be queried through dynamic `where`/`scope` helpers
//! resolving field names at runtime. Here the same operations are explicit
//! methods over an owned, ordered `Vec` — every filter and sort is a typed
//! closure, and ordering is stable so repeated listings never flicker.

use std::cmp::Ordering;

use crate::types::{DocumentType, IndexedDocument, SearchIndexArtifact};

/// Listing page size for snippet cards.
pub const CARDS_PER_PAGE: usize = 24;

/// Listing page size for collection cards.
pub const COLLECTION_CARDS_PER_PAGE: usize = 12;

/// An owned, ordered sequence of records with typed query helpers.
#[derive(Debug, Clone, Default)]
pub struct Records<T> {
    items: Vec<T>,
}

impl<T> Records<T> {
    pub fn new(items: Vec<T>) -> Self {
        Records { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// First record matching the predicate.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| predicate(item))
    }

    /// Keep records matching the predicate, preserving order.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Records<T>
    where
        T: Clone,
    {
        Records {
            items: self
                .items
                .iter()
                .filter(|item| predicate(item))
                .cloned()
                .collect(),
        }
    }

    /// Re-order records with a stable sort; equal records keep their
    /// relative positions.
    pub fn order_by(mut self, compare: impl FnMut(&T, &T) -> Ordering) -> Records<T> {
        self.items.sort_by(compare);
        self
    }

    /// Slice out one page of records. Pages are 1-based; a page past the end
    /// comes back empty rather than wrapping.
    pub fn paginate(&self, page_number: usize, per_page: usize) -> Page<T>
    where
        T: Clone,
    {
        let per_page = per_page.max(1);
        let item_count = self.items.len();
        let page_count = item_count.div_ceil(per_page);
        let start = page_number.saturating_sub(1).saturating_mul(per_page);
        let items = if page_number == 0 || start >= item_count {
            Vec::new()
        } else {
            self.items[start..(start + per_page).min(item_count)].to_vec()
        };
        Page {
            page_number,
            page_count,
            item_count,
            items,
        }
    }
}

impl<T> From<Vec<T>> for Records<T> {
    fn from(items: Vec<T>) -> Self {
        Records::new(items)
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub page_number: usize,
    pub page_count: usize,
    pub item_count: usize,
    pub items: Vec<T>,
}

/// Repository over the loaded index documents, with the scopes the listing
/// surfaces actually use.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    records: Records<IndexedDocument>,
}

impl DocumentStore {
    pub fn new(documents: Vec<IndexedDocument>) -> Self {
        DocumentStore {
            records: Records::new(documents),
        }
    }

    pub fn from_artifact(artifact: SearchIndexArtifact) -> Self {
        DocumentStore::new(artifact.search_index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &Records<IndexedDocument> {
        &self.records
    }

    pub fn collections(&self) -> Records<IndexedDocument> {
        self.records
            .filter(|doc| doc.kind == DocumentType::Collection)
    }

    pub fn snippets(&self) -> Records<IndexedDocument> {
        self.records.filter(|doc| doc.kind == DocumentType::Snippet)
    }

    pub fn of_kind(&self, kind: DocumentType) -> Records<IndexedDocument> {
        self.records.filter(|doc| doc.kind == kind)
    }

    pub fn find_by_url(&self, url: &str) -> Option<&IndexedDocument> {
        self.records.find(|doc| doc.url == url)
    }
}

/// Order documents by descending rank, stable for equal ranks.
pub fn by_rank(records: Records<IndexedDocument>) -> Records<IndexedDocument> {
    records.order_by(|a, b| b.rank.partial_cmp(&a.rank).unwrap_or(Ordering::Equal))
}
