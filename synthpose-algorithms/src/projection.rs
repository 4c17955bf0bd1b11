//! Camera-space projection of meshes into pixel bounding boxes

use synthpose_core::{BoundingBox2D, Mesh, Point2d, Scene, Transform3D, ViewFrame};

/// Two opposite pixel corners of a projected box.
///
/// `first` carries the normalized minimum in x and, after the Y flip, the
/// bottom edge; `second` carries the maximum in x and the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelCorners {
    pub first: Point2d,
    pub second: Point2d,
}

/// 2D box of one scene object for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectBoundingBox {
    pub name: String,
    pub pass_index: u32,
    pub bbox: BoundingBox2D,
}

/// Project `mesh` into the camera image and return the pixel corners of its
/// 2D bounding box.
///
/// Vertices are taken to camera space through the mesh world transform and
/// `camera_world_inverse`. For each vertex in front of the camera the view
/// frame is rescaled to that vertex's depth and the vertex is expressed as a
/// fraction of the frame. Vertices at or behind the camera plane are skipped.
///
/// Returns `None` when no vertex is in front of the camera, or when the box
/// clipped to the image collapses to zero width or height.
pub fn project_bounding_box(
    mesh: &Mesh,
    camera_world_inverse: &Transform3D,
    view_frame: &ViewFrame,
    resolution: (u32, u32),
) -> Option<PixelCorners> {
    let corners = view_frame.negated_corners();
    let to_camera = *camera_world_inverse * mesh.world_transform;

    let mut lx = Vec::with_capacity(mesh.vertex_count());
    let mut ly = Vec::with_capacity(mesh.vertex_count());

    for vertex in &mesh.vertices {
        let co = to_camera.transform_point(vertex);
        let z = -co.z;
        if z <= 0.0 {
            continue;
        }

        // perspective division of the frame to this vertex's depth
        let frame = corners.map(|c| c / (c.z / z));
        let (min_x, max_x) = (frame[1].x, frame[2].x);
        let (min_y, max_y) = (frame[0].y, frame[1].y);

        lx.push((co.x - min_x) / (max_x - min_x));
        ly.push((co.y - min_y) / (max_y - min_y));
    }

    if lx.is_empty() || ly.is_empty() {
        return None;
    }

    let min_x = fold_min(&lx).clamp(0.0, 1.0);
    let max_x = fold_max(&lx).clamp(0.0, 1.0);
    let min_y = fold_min(&ly).clamp(0.0, 1.0);
    let max_y = fold_max(&ly).clamp(0.0, 1.0);

    if min_x == max_x || min_y == max_y {
        return None;
    }

    let (dim_x, dim_y) = (resolution.0 as f64, resolution.1 as f64);
    Some(PixelCorners {
        first: Point2d::new(min_x * dim_x, (1.0 - min_y) * dim_y),
        second: Point2d::new(max_x * dim_x, (1.0 - max_y) * dim_y),
    })
}

/// Relabel projected corners as `[x, y, width, height]` with a top-left origin
pub fn format_as_xywh(corners: Option<PixelCorners>) -> Option<BoundingBox2D> {
    let corners = corners?;
    let x1 = corners.first.x;
    let x2 = corners.second.x;
    let y1 = corners.second.y;
    let y2 = corners.first.y;
    Some(BoundingBox2D::new(x1, y1, x2 - x1, y2 - y1))
}

/// Bounding boxes of every visible mesh in `scene`, in mesh order.
///
/// Meshes without visible geometry are left out.
pub fn project_scene(scene: &Scene) -> Vec<ObjectBoundingBox> {
    let inverse = scene.camera_frame().world_inverse();
    let intrinsics = scene.intrinsics();
    let view_frame = intrinsics.view_frame();
    let resolution = intrinsics.resolution();

    scene
        .meshes
        .iter()
        .filter_map(|mesh| {
            let bbox = format_as_xywh(project_bounding_box(mesh, &inverse, &view_frame, resolution));
            if bbox.is_none() {
                tracing::debug!(object = %mesh.name, "object not visible");
            }
            bbox.map(|bbox| ObjectBoundingBox {
                name: mesh.name.clone(),
                pass_index: mesh.pass_index,
                bbox,
            })
        })
        .collect()
}

/// One box enclosing all per-object boxes, `None` when nothing is visible
pub fn union_bounding_box(boxes: &[ObjectBoundingBox]) -> Option<BoundingBox2D> {
    boxes
        .iter()
        .map(|object| object.bbox)
        .reduce(|acc, b| acc.union(&b))
}

fn fold_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn fold_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
