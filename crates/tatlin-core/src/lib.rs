//! # Tatlin Core
//!
//! Core types, errors, and configuration for Tatlin.
//! Provides the input data model consumed by the geometry builders
//! (toolpath movements), the shared error types, and the per-instance
//! configuration structs for colors, arrows, zoom limits and the platform.

pub mod config;
pub mod constants;
pub mod data;
pub mod error;

pub use config::{ColorMap, PlatformConfig, ToolpathStyle, ZoomLimits};

pub use data::{Movement, MovementKind, Rgba, ToolMovement};

pub use error::{Error, GeometryError, Result, ViewError};
