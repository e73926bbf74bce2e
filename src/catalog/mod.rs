// Catalog module - ordered registry of snippets
// Built once through `CatalogBuilder`, then frozen into an immutable `Catalog`.

pub mod error;
pub mod snippet;

pub use error::CatalogError;
pub use snippet::{Snippet, SnippetBody};

use std::collections::HashSet;
use std::sync::Arc;

/// Append-only registry used while the catalog is being declared
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    snippets: Vec<Snippet>,
    ids: HashSet<String>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a snippet.
    ///
    /// Fails without touching the builder if the id is empty, holds a control
    /// character or is already taken.
    pub fn register(&mut self, snippet: Snippet) -> Result<&mut Self, CatalogError> {
        if snippet.id().is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if snippet.id().chars().any(char::is_control) {
            return Err(CatalogError::ControlCharacters(snippet.id().to_string()));
        }
        if self.ids.contains(snippet.id()) {
            return Err(CatalogError::DuplicateId(snippet.id().to_string()));
        }

        self.ids.insert(snippet.id().to_string());
        self.snippets.push(snippet);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Freeze the registry. Nothing can be added, removed or reordered afterwards.
    pub fn freeze(self) -> Catalog {
        Catalog {
            snippets: self.snippets.into(),
        }
    }
}

/// Frozen, ordered collection of snippets
#[derive(Debug, Clone)]
pub struct Catalog {
    snippets: Arc<[Snippet]>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// All snippets in declaration order
    pub fn all(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn get(&self, id: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id() == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.snippets.iter().map(Snippet::id)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Catalog restricted to snippets whose id contains `pattern`, order preserved
    pub fn filtered(&self, pattern: &str) -> Catalog {
        Catalog {
            snippets: self
                .snippets
                .iter()
                .filter(|s| s.id().contains(pattern))
                .cloned()
                .collect(),
        }
    }
}
