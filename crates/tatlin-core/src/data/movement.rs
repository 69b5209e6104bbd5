//! Toolpath movement records.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One tool-travel segment as produced by a toolpath parser.
///
/// Implemented by [`Movement`], and by any parser-side record type that wants
/// to feed geometry construction without an intermediate copy.
pub trait ToolMovement {
    /// Start of the segment
    fn point_a(&self) -> Vec3;

    /// End of the segment
    fn point_b(&self) -> Vec3;

    /// Whether material is deposited while travelling
    fn extruder_on(&self) -> bool;

    fn is_loop(&self) -> bool;

    fn is_perimeter(&self) -> bool;

    /// Only meaningful when [`ToolMovement::is_perimeter`] is true
    fn is_perimeter_outer(&self) -> bool;

    /// Direction of travel in the XY plane, in degrees counter-clockwise from +X.
    fn angle(&self) -> f32 {
        let delta = self.point_b() - self.point_a();
        delta.y.atan2(delta.x).to_degrees()
    }
}

/// Plain movement record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub point_a: Vec3,
    pub point_b: Vec3,
    pub extruder_on: bool,
    pub is_loop: bool,
    pub is_perimeter: bool,
    pub is_perimeter_outer: bool,
}

impl Movement {
    /// Create an extruding movement with no loop or perimeter tags
    pub fn new(point_a: Vec3, point_b: Vec3) -> Self {
        Self {
            point_a,
            point_b,
            extruder_on: true,
            is_loop: false,
            is_perimeter: false,
            is_perimeter_outer: false,
        }
    }

    /// Create a non-extruding travel move
    pub fn travel(point_a: Vec3, point_b: Vec3) -> Self {
        Self {
            extruder_on: false,
            ..Self::new(point_a, point_b)
        }
    }

    pub fn with_extruder(mut self, on: bool) -> Self {
        self.extruder_on = on;
        self
    }

    pub fn with_loop(mut self, is_loop: bool) -> Self {
        self.is_loop = is_loop;
        self
    }

    /// Tag as a perimeter; `outer` selects the outermost shell
    pub fn with_perimeter(mut self, outer: bool) -> Self {
        self.is_perimeter = true;
        self.is_perimeter_outer = outer;
        self
    }
}

impl ToolMovement for Movement {
    fn point_a(&self) -> Vec3 {
        self.point_a
    }

    fn point_b(&self) -> Vec3 {
        self.point_b
    }

    fn extruder_on(&self) -> bool {
        self.extruder_on
    }

    fn is_loop(&self) -> bool {
        self.is_loop
    }

    fn is_perimeter(&self) -> bool {
        self.is_perimeter
    }

    fn is_perimeter_outer(&self) -> bool {
        self.is_perimeter_outer
    }
}

/// Movement classification used for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    /// Extruder off
    Travel,
    Loop,
    OuterPerimeter,
    InnerPerimeter,
    /// Anything else that extrudes
    Fill,
}

impl MovementKind {
    pub const ALL: [MovementKind; 5] = [
        MovementKind::Travel,
        MovementKind::Loop,
        MovementKind::OuterPerimeter,
        MovementKind::InnerPerimeter,
        MovementKind::Fill,
    ];

    /// Classify a movement. The first matching rule wins.
    pub fn classify<M: ToolMovement + ?Sized>(movement: &M) -> Self {
        if !movement.extruder_on() {
            MovementKind::Travel
        } else if movement.is_loop() {
            MovementKind::Loop
        } else if movement.is_perimeter() && movement.is_perimeter_outer() {
            MovementKind::OuterPerimeter
        } else if movement.is_perimeter() {
            MovementKind::InnerPerimeter
        } else {
            MovementKind::Fill
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MovementKind::Travel => "travel",
            MovementKind::Loop => "loop",
            MovementKind::OuterPerimeter => "outer perimeter",
            MovementKind::InnerPerimeter => "inner perimeter",
            MovementKind::Fill => "fill",
        }
    }
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
