use glam::Vec3;
use tatlin::{
    init_logging, Axis, Geometry, MeshGeometry, Movement, PlatformGeometry, Projection,
    RenderState, ToolpathGeometry, ToolpathStyle, ViewMode, ViewSet, BUILD_DATE, VERSION,
};
use tracing::info;

const LAYERS: usize = 20;
const LAYER_HEIGHT: f32 = 0.3;
const SIDE: f32 = 20.0;

/// One outer perimeter, one inner perimeter and a travel back to the start per layer
fn synthetic_toolpath() -> Vec<Vec<Movement>> {
    let square = |half: f32, z: f32| {
        [
            Vec3::new(-half, -half, z),
            Vec3::new(half, -half, z),
            Vec3::new(half, half, z),
            Vec3::new(-half, half, z),
        ]
    };

    (0..LAYERS)
        .map(|layer| {
            let z = layer as f32 * LAYER_HEIGHT;
            let mut moves = Vec::new();
            for (half, outer) in [(SIDE / 2.0, true), (SIDE / 2.0 - 1.0, false)] {
                let corners = square(half, z);
                let edges = corners.iter().zip(corners.iter().cycle().skip(1));
                moves.extend(edges.map(|(a, b)| Movement::new(*a, *b).with_perimeter(outer)));
            }
            moves.push(Movement::travel(Vec3::new(-SIDE / 2.0, -SIDE / 2.0, z), Vec3::ZERO));
            moves
        })
        .collect()
}

/// Axis-aligned cube of the given edge length, two triangles per face
fn cube(edge: f32) -> (Vec<Vec3>, Vec<Vec3>) {
    let h = edge / 2.0;
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];

    let mut vertices = Vec::with_capacity(36);
    let mut normals = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let c = n * h;
        let quad = [
            c - u * h - v * h,
            c + u * h - v * h,
            c + u * h + v * h,
            c - u * h + v * h,
        ];
        for i in [0, 1, 2, 0, 2, 3] {
            vertices.push(quad[i]);
            normals.push(n);
        }
    }
    (vertices, normals)
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("Tatlin {} (built {})", VERSION, BUILD_DATE);

    let layers = synthetic_toolpath();
    let mut toolpath = ToolpathGeometry::from_layers(&layers, &ToolpathStyle::default())?;
    toolpath.set_layers_to_draw(LAYERS / 2);
    info!(
        "Toolpath: {} layers, {} vertices, {} x {} x {} mm",
        toolpath.layer_count(),
        toolpath.vertex_count(),
        toolpath.width(),
        toolpath.depth(),
        toolpath.height()
    );

    let (vertices, normals) = cube(10.0);
    let mut mesh = MeshGeometry::new(vertices, normals)?;
    mesh.scale(2.0);
    mesh.set_rotation(Axis::Z, 45.0);
    mesh.center_on_platform();
    info!(
        "Mesh: {} triangles, {} x {} x {} mm",
        mesh.triangle_count(),
        mesh.width(),
        mesh.depth(),
        mesh.height()
    );

    let platform = PlatformGeometry::default();
    let mut views = ViewSet::default();
    let mut state = RenderState::new();

    for projection in [Projection::Orthographic, Projection::Perspective] {
        views.set_projection(projection);
        let view = views.active_mut();
        let mode = view.render_mode();

        let mut scope = view.begin(&mut state, 800.0, 600.0);
        view.display_transform(&mut scope);
        let ranges = toolpath.render_ranges(mode);
        info!(
            "{:?}: drawing vertices {:?}, arrows {:?}",
            projection, ranges.vertices, ranges.arrows
        );
        info!(
            "{:?} scene MVP: {:?}",
            projection,
            scope.mvp() * toolpath.model_transform(mode)
        );

        scope.modelview.load_identity();
        view.ui_transform(&mut scope, platform.indicator_length());
        info!("{:?} overlay MVP: {:?}", projection, scope.mvp());
        view.end(scope);
    }

    Ok(())
}
