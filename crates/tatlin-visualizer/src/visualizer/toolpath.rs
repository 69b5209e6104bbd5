//! Toolpath geometry
//!
//! Turns layered movement records into three parallel buffers:
//! - path vertices, two per movement (`GL_LINES` style)
//! - colors, one per movement, shared by its two vertices
//! - direction arrows, three vertices per movement (`GL_TRIANGLES` style)
//!
//! `layer_stops` records where each layer ends in the vertex buffer so a
//! renderer can draw a single layer or a prefix of layers.

use super::bounds::BoundingBox;
use super::geometry::{BoundsCache, Geometry, RenderMode};
use crate::math::vector::rotation_matrix;
use glam::{Mat4, Vec3};
use std::collections::HashMap;
use std::ops::Range;
use std::time::Instant;
use tatlin_core::{GeometryError, MovementKind, Rgba, ToolMovement, ToolpathStyle};
use tracing::{debug, info, trace};

const VERTICES_PER_MOVEMENT: usize = 2;
const ARROW_VERTICES_PER_MOVEMENT: usize = 3;

/// Buffer ranges to draw for the current layer selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRanges {
    /// Range into [`ToolpathGeometry::vertices`] (and [`ToolpathGeometry::vertex_colors`])
    pub vertices: Range<usize>,
    /// Range into [`ToolpathGeometry::arrows`], `None` when arrows are disabled
    pub arrows: Option<Range<usize>>,
}

/// Movement counts gathered during construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolpathStats {
    pub layers: usize,
    pub movements: usize,
    by_kind: HashMap<MovementKind, usize>,
}

impl ToolpathStats {
    pub fn count(&self, kind: MovementKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}

/// Renderable toolpath built from layered movements
#[derive(Debug, Clone)]
pub struct ToolpathGeometry {
    vertices: Vec<Vec3>,
    colors: Vec<Rgba>,
    arrows: Vec<Vec3>,
    layer_stops: Vec<usize>,
    layers_to_draw: usize,
    arrows_enabled: bool,
    stats: ToolpathStats,
    bounds: BoundsCache,
}

impl ToolpathGeometry {
    /// Build buffers from an ordered sequence of layers.
    ///
    /// Fails only if the vertex and arrow buffers end up out of step, which
    /// means the input could not be trusted and nothing is returned.
    pub fn from_layers<L, M>(layers: &[L], style: &ToolpathStyle) -> Result<Self, GeometryError>
    where
        L: AsRef<[M]>,
        M: ToolMovement,
    {
        let t_start = Instant::now();

        let movement_count: usize = layers.iter().map(|l| l.as_ref().len()).sum();
        let mut vertices = Vec::with_capacity(movement_count * VERTICES_PER_MOVEMENT);
        let mut colors = Vec::with_capacity(movement_count);
        let mut arrows = Vec::with_capacity(movement_count * ARROW_VERTICES_PER_MOVEMENT);
        let mut layer_stops = Vec::with_capacity(layers.len() + 1);
        layer_stops.push(0);

        let arrow_template = style.arrow.map(Vec3::from_array);
        let mut by_kind: HashMap<MovementKind, usize> = HashMap::new();

        for layer in layers {
            for movement in layer.as_ref() {
                let end = movement.point_b();
                vertices.push(movement.point_a());
                vertices.push(end);

                let kind = MovementKind::classify(movement);
                *by_kind.entry(kind).or_insert(0) += 1;
                colors.push(style.colors.color_for(kind));

                let rotation = rotation_matrix(movement.angle(), Vec3::Z);
                arrows.extend(arrow_template.iter().map(|p| rotation * *p + end));
            }
            layer_stops.push(vertices.len());
        }

        if arrows.len() != (vertices.len() / VERTICES_PER_MOVEMENT) * ARROW_VERTICES_PER_MOVEMENT {
            return Err(GeometryError::ArrowRatioMismatch {
                vertices: vertices.len(),
                arrows: arrows.len(),
            });
        }

        let layer_count = layer_stops.len() - 1;
        let geometry = Self {
            vertices,
            colors,
            arrows,
            layer_stops,
            layers_to_draw: layer_count,
            arrows_enabled: style.arrows_enabled,
            stats: ToolpathStats {
                layers: layer_count,
                movements: movement_count,
                by_kind,
            },
            bounds: BoundsCache::new(),
        };

        info!(
            "Initialized toolpath geometry in {:.2} seconds",
            t_start.elapsed().as_secs_f64()
        );
        info!("Vertex count: {}", geometry.vertices.len());
        debug!(
            "Toolpath: {} layers, {} movements, {} arrow vertices",
            layer_count,
            movement_count,
            geometry.arrows.len()
        );

        Ok(geometry)
    }

    /// One color per movement
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Colors expanded to one per path vertex
    pub fn vertex_colors(&self) -> Vec<Rgba> {
        self.colors
            .iter()
            .flat_map(|c| [*c; VERTICES_PER_MOVEMENT])
            .collect()
    }

    /// Colors expanded to one per arrow vertex
    pub fn arrow_colors(&self) -> Vec<Rgba> {
        self.colors
            .iter()
            .flat_map(|c| [*c; ARROW_VERTICES_PER_MOVEMENT])
            .collect()
    }

    pub fn arrows(&self) -> &[Vec3] {
        &self.arrows
    }

    pub fn arrow_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.arrows)
    }

    /// Vertex offset at which each layer ends, starting with 0
    pub fn layer_stops(&self) -> &[usize] {
        &self.layer_stops
    }

    pub fn layer_count(&self) -> usize {
        self.layer_stops.len() - 1
    }

    pub fn layers_to_draw(&self) -> usize {
        self.layers_to_draw
    }

    /// Select how many layers to draw, clamped to `[1, layer_count]`.
    pub fn set_layers_to_draw(&mut self, layers: usize) {
        let max = self.layer_count();
        self.layers_to_draw = if max == 0 { 0 } else { layers.clamp(1, max) };
        trace!("Layers to draw: {} (requested {})", self.layers_to_draw, layers);
    }

    pub fn arrows_enabled(&self) -> bool {
        self.arrows_enabled
    }

    pub fn set_arrows_enabled(&mut self, enabled: bool) {
        self.arrows_enabled = enabled;
    }

    /// Buffer ranges for the current layer selection.
    ///
    /// `Flat` covers only the last selected layer, `Volumetric` every layer up
    /// to and including it. The arrow range always mirrors the vertex range.
    pub fn render_ranges(&self, mode: RenderMode) -> RenderRanges {
        if self.layers_to_draw == 0 {
            return RenderRanges {
                vertices: 0..0,
                arrows: self.arrows_enabled.then_some(0..0),
            };
        }

        let end = self.layer_stops[self.layers_to_draw];
        let start = match mode {
            RenderMode::Flat => self.layer_stops[self.layers_to_draw - 1],
            RenderMode::Volumetric => 0,
        };

        let to_arrow = |offset: usize| (offset / VERTICES_PER_MOVEMENT) * ARROW_VERTICES_PER_MOVEMENT;
        RenderRanges {
            vertices: start..end,
            arrows: self.arrows_enabled.then(|| to_arrow(start)..to_arrow(end)),
        }
    }

    pub fn stats(&self) -> &ToolpathStats {
        &self.stats
    }
}

impl Geometry for ToolpathGeometry {
    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    fn bounding_box(&self) -> BoundingBox {
        self.bounds.get_or_compute(&self.vertices)
    }

    /// The 2D view discards Z so every layer lands on the same plane.
    fn model_transform(&self, mode: RenderMode) -> Mat4 {
        match mode {
            RenderMode::Flat => Mat4::from_scale(Vec3::new(1.0, 1.0, 0.0)),
            RenderMode::Volumetric => Mat4::IDENTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tatlin_core::{ColorMap, Movement};

    fn layer_at(z: f32, count: usize) -> Vec<Movement> {
        (0..count)
            .map(|i| {
                let x = i as f32;
                Movement::new(Vec3::new(x, 0.0, z), Vec3::new(x + 1.0, 0.0, z))
            })
            .collect()
    }

    #[test]
    fn test_two_single_movement_layers() {
        let layers = vec![layer_at(0.2, 1), layer_at(0.4, 1)];
        let tp = ToolpathGeometry::from_layers(&layers, &ToolpathStyle::default()).unwrap();

        assert_eq!(tp.vertices().len(), 4);
        assert_eq!(tp.colors().len(), 2);
        assert!(tp.colors().iter().all(|c| *c == ColorMap::default().fill));
        assert_eq!(tp.arrows().len(), 6);
        assert_eq!(tp.layer_stops(), &[0, 2, 4]);
        assert_eq!(tp.layer_count(), 2);
        assert_eq!(tp.layers_to_draw(), 2);
    }

    #[test]
    fn test_arrow_tip_sits_on_movement_end() {
        let layers = vec![vec![Movement::new(Vec3::new(1.0, 1.0, 0.3), Vec3::new(1.0, 4.0, 0.3))]];
        let tp = ToolpathGeometry::from_layers(&layers, &ToolpathStyle::default()).unwrap();

        let arrow = tp.arrows();
        assert!(arrow[0].abs_diff_eq(Vec3::new(1.0, 4.0, 0.3), 1e-5));
        // barbs trail behind the tip, against the direction of travel
        assert!(arrow[1].y < 4.0 && arrow[2].y < 4.0);
        assert!((arrow[1].z - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_render_ranges_per_mode() {
        let layers = vec![layer_at(0.2, 2), layer_at(0.4, 3), layer_at(0.6, 1)];
        let mut tp = ToolpathGeometry::from_layers(&layers, &ToolpathStyle::default()).unwrap();
        assert_eq!(tp.layer_stops(), &[0, 4, 10, 12]);

        tp.set_layers_to_draw(2);
        let flat = tp.render_ranges(RenderMode::Flat);
        assert_eq!(flat.vertices, 4..10);
        assert_eq!(flat.arrows, Some(6..15));

        let volumetric = tp.render_ranges(RenderMode::Volumetric);
        assert_eq!(volumetric.vertices, 0..10);
        assert_eq!(volumetric.arrows, Some(0..15));
    }

    #[test]
    fn test_layer_selector_is_clamped() {
        let layers = vec![layer_at(0.2, 1), layer_at(0.4, 1)];
        let mut tp = ToolpathGeometry::from_layers(&layers, &ToolpathStyle::default()).unwrap();

        tp.set_layers_to_draw(0);
        assert_eq!(tp.layers_to_draw(), 1);
        tp.set_layers_to_draw(99);
        assert_eq!(tp.layers_to_draw(), 2);
    }

    #[test]
    fn test_disabled_arrows_have_no_range() {
        let style = ToolpathStyle {
            arrows_enabled: false,
            ..Default::default()
        };
        let mut tp = ToolpathGeometry::from_layers(&[layer_at(0.2, 2)], &style).unwrap();
        assert_eq!(tp.render_ranges(RenderMode::Flat).arrows, None);

        tp.set_arrows_enabled(true);
        assert_eq!(tp.render_ranges(RenderMode::Flat).arrows, Some(0..6));
    }

    #[test]
    fn test_empty_input() {
        let layers: Vec<Vec<Movement>> = Vec::new();
        let mut tp = ToolpathGeometry::from_layers(&layers, &ToolpathStyle::default()).unwrap();
        assert_eq!(tp.layer_stops(), &[0]);
        assert_eq!(tp.layer_count(), 0);
        tp.set_layers_to_draw(5);
        assert_eq!(tp.layers_to_draw(), 0);
        assert_eq!(tp.render_ranges(RenderMode::Volumetric).vertices, 0..0);
        assert_eq!(tp.width(), 0.0);
    }

    #[test]
    fn test_expanded_colors_and_stats() {
        let travel = Movement::travel(Vec3::ZERO, Vec3::X);
        let outer = Movement::new(Vec3::X, Vec3::Y).with_perimeter(true);
        let tp = ToolpathGeometry::from_layers(&[vec![travel, outer]], &ToolpathStyle::default())
            .unwrap();

        let colors = ColorMap::default();
        assert_eq!(
            tp.vertex_colors(),
            vec![colors.travel, colors.travel, colors.outer_perimeter, colors.outer_perimeter]
        );
        assert_eq!(tp.arrow_colors().len(), 6);

        let stats = tp.stats();
        assert_eq!(stats.movements, 2);
        assert_eq!(stats.count(MovementKind::Travel), 1);
        assert_eq!(stats.count(MovementKind::OuterPerimeter), 1);
        assert_eq!(stats.count(MovementKind::Fill), 0);
    }

    #[test]
    fn test_flat_transform_discards_z() {
        let tp = ToolpathGeometry::from_layers(&[layer_at(3.0, 1)], &ToolpathStyle::default())
            .unwrap();
        let p = tp
            .model_transform(RenderMode::Flat)
            .transform_point3(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p, Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(tp.model_transform(RenderMode::Volumetric), Mat4::IDENTITY);
    }
}
