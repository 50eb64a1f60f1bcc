//! Provider backed by a fixed list of faces.

use async_trait::async_trait;

use super::FaceCatalogProvider;
use crate::error::Result;
use crate::game::Face;

/// Always returns the same faces.
///
/// An empty list models a source that produced nothing; the engine rejects
/// it with `EmptyCatalog`.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalogProvider {
    faces: Vec<Face>,
}

impl StaticCatalogProvider {
    #[must_use]
    pub fn new<I, F>(faces: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Face>,
    {
        Self {
            faces: faces.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl FaceCatalogProvider for StaticCatalogProvider {
    async fn fetch_catalog(&self) -> Result<Vec<Face>> {
        Ok(self.faces.clone())
    }
}
