//! Vector and matrix helpers shared by the geometry and view modules.

pub mod matrix_stack;
pub mod vector;

pub use matrix_stack::MatrixStack;
pub use vector::{rotate, rotate_in_place, rotation_matrix, translate, translate_in_place};
