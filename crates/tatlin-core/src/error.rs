//! Error handling for Tatlin
//!
//! Provides error types for the geometry and view layers:
//! - Geometry errors (buffer construction invariants)
//! - View errors (camera state stack misuse)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Degenerate numeric input is never an error here: it is normalized
//! to a defined fallback by the code that receives it.

use thiserror::Error;

/// Geometry error type
///
/// Raised while building vertex buffers from upstream data. Every variant
/// points at a data-production bug upstream, so construction is aborted and
/// no partially built geometry is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Every movement must contribute two path vertices and three arrow vertices
    #[error("The 2:3 ratio of model vertices to arrow vertices does not hold: {vertices} vertices, {arrows} arrow vertices")]
    ArrowRatioMismatch {
        /// Number of path vertices built.
        vertices: usize,
        /// Number of arrow vertices built.
        arrows: usize,
    },

    /// Mesh vertex count is not a whole number of triangles
    #[error("Mesh has {vertices} vertices, which is not a multiple of 3")]
    IncompleteTriangles {
        /// Number of vertices supplied.
        vertices: usize,
    },

    /// Normals are not parallel to vertices
    #[error("Mesh has {vertices} vertices but {normals} normals")]
    NormalCountMismatch {
        /// Number of vertices supplied.
        vertices: usize,
        /// Number of normals supplied.
        normals: usize,
    },
}

/// View error type
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// `pop_state` was called more often than `push_state`
    #[error("View state stack is empty")]
    StateStackEmpty,
}

/// Main error type for Tatlin
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// View error
    #[error(transparent)]
    View(#[from] ViewError),
}

impl Error {
    /// Check if this is a geometry construction error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a view error
    pub fn is_view_error(&self) -> bool {
        matches!(self, Error::View(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
