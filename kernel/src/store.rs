//! `VertexStore`: fixed-capacity, seal-once vertex buffer.
//!
//! Vertices are appended in arrival order while the store is open. The final
//! vertex (flagged `is_last`) seals it; after that the store is read-only and
//! its length is final until [`VertexStore::reset`].
//!
//! Arrival order is load-bearing: candidate enumeration walks vertex indices,
//! so two stores with the same vertex set in different orders enumerate
//! differently.

use crate::geometry::vertex::Vertex;

/// Failure to append to a [`VertexStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// The store already holds `capacity` vertices.
    CapacityExceeded { capacity: usize },
    /// The store is sealed; no further vertices are accepted.
    NotReady,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "vertex capacity {capacity} exceeded")
            }
            Self::NotReady => write!(f, "vertex store is sealed"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Owned vertex buffer with a capacity fixed at construction.
#[derive(Debug, Clone)]
pub struct VertexStore {
    vertices: Vec<Vertex>,
    capacity: usize,
    sealed: bool,
}

impl VertexStore {
    /// Create an empty, open store.
    ///
    /// The buffer is allocated up front; it never grows past `capacity`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            capacity,
            sealed: false,
        }
    }

    /// Append `vertex`, sealing the store if `is_last`.
    ///
    /// # Errors
    ///
    /// - [`LoadError::NotReady`] if the store is already sealed.
    /// - [`LoadError::CapacityExceeded`] if the store is full. The vertex is
    ///   not stored and the store stays open.
    pub fn load(&mut self, vertex: Vertex, is_last: bool) -> Result<(), LoadError> {
        if self.sealed {
            return Err(LoadError::NotReady);
        }
        if self.vertices.len() >= self.capacity {
            return Err(LoadError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.vertices.push(vertex);
        if is_last {
            self.sealed = true;
        }
        Ok(())
    }

    /// Whether the final vertex has been loaded.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Number of vertices loaded so far (final once sealed).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Vertex at `index` in arrival order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Vertex> {
        self.vertices.get(index).copied()
    }

    /// Vertices in arrival order.
    #[must_use]
    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Iterate vertices in arrival order. Each call starts from the first.
    pub fn iter(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    /// Discard all vertices and reopen the store. Capacity is unchanged.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.sealed = false;
    }
}
