//! Faces and face catalogs.
//!
//! A `Face` is an opaque identifier for what a token shows (in the
//! sprite-backed provider it is an image URL). A `Catalog` is the fixed,
//! ordered set of faces one game draws from. It can never be empty: the
//! constructor and the deserializer both reject empty input with
//! `Error::EmptyCatalog`.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::error::{Error, Result};

/// A visual value a token can display.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Face(String);

impl Face {
    /// Create a face from its identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The face identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Face {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Face {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-empty ordered set of faces for one game.
///
/// Backed by a persistent vector so every `GameState` can carry its catalog
/// without copying it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Face>", into = "Vec<Face>")]
pub struct Catalog {
    faces: Vector<Face>,
}

impl Catalog {
    /// Build a catalog, failing with `EmptyCatalog` when `faces` is empty.
    pub fn new<I, F>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<Face>,
    {
        let faces: Vector<Face> = faces.into_iter().map(Into::into).collect();
        if faces.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        Ok(Self { faces })
    }

    /// Number of faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Always false for catalogs built through `new`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Check whether `face` belongs to this catalog.
    #[must_use]
    pub fn contains(&self, face: &Face) -> bool {
        self.faces.contains(face)
    }

    /// Iterate over the faces in order.
    pub fn iter(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter()
    }

    /// Draw one face uniformly at random.
    ///
    /// Fails with `EmptyCatalog` rather than inventing a face.
    pub fn draw(&self, rng: &mut GameRng) -> Result<Face> {
        rng.gen_index(self.faces.len())
            .and_then(|i| self.faces.get(i))
            .cloned()
            .ok_or(Error::EmptyCatalog)
    }
}

impl TryFrom<Vec<Face>> for Catalog {
    type Error = Error;

    fn try_from(faces: Vec<Face>) -> Result<Self> {
        Self::new(faces)
    }
}

impl From<Catalog> for Vec<Face> {
    fn from(catalog: Catalog) -> Self {
        catalog.faces.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_rejected() {
        let faces: Vec<Face> = Vec::new();
        assert_eq!(Catalog::new(faces), Err(Error::EmptyCatalog));
    }

    #[test]
    fn test_catalog_keeps_order() {
        let catalog = Catalog::new(["A", "B", "C"]).unwrap();
        let ids: Vec<_> = catalog.iter().map(Face::as_str).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_draw_single_face() {
        let catalog = Catalog::new(["A"]).unwrap();
        let mut rng = GameRng::new(1);
        for _ in 0..20 {
            assert_eq!(catalog.draw(&mut rng).unwrap(), Face::from("A"));
        }
    }

    #[test]
    fn test_draw_stays_in_catalog() {
        let catalog = Catalog::new(["A", "B", "C"]).unwrap();
        let mut rng = GameRng::new(3);
        for _ in 0..100 {
            let face = catalog.draw(&mut rng).unwrap();
            assert!(catalog.contains(&face));
        }
    }

    #[test]
    fn test_face_serializes_as_string() {
        let json = serde_json::to_string(&Face::from("pikachu.png")).unwrap();
        assert_eq!(json, "\"pikachu.png\"");
    }

    #[test]
    fn test_catalog_serde() {
        let catalog = Catalog::new(["A", "B"]).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"["A","B"]"#);
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn test_empty_catalog_fails_to_deserialize() {
        let result: std::result::Result<Catalog, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }
}
