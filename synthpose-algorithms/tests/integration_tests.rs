//! Integration tests for synthpose-algorithms
//!
//! These tests run framing, orientation sampling and projection together the
//! way a capture session does.

use approx::assert_relative_eq;
use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::{FRAC_PI_2, PI};
use synthpose_algorithms::*;
use synthpose_core::{CameraIntrinsics, Mesh, Point3d, Scene, Transform3D, Vector3d};

/// Axis-aligned cube centered at the origin
fn create_cube(name: &str, half: f64) -> Mesh {
    let mut vertices = Vec::with_capacity(8);
    for x in [-half, half] {
        for y in [-half, half] {
            for z in [-half, half] {
                vertices.push(Point3d::new(x, y, z));
            }
        }
    }
    Mesh::from_vertices(name, vertices)
}

fn square_intrinsics() -> CameraIntrinsics {
    CameraIntrinsics::new(FRAC_PI_2, FRAC_PI_2, 100, 100)
}

#[test]
fn test_framed_object_stays_in_view_for_random_orientations() {
    let (width, height) = (640.0, 480.0);
    let mut scene = Scene::new(
        vec![create_cube("body", 1.0)],
        CameraIntrinsics::new(0.8, 0.6, 640, 480),
    );
    scene.assign_pass_indices();
    frame_scene(&mut scene).unwrap().unwrap();

    let mut sampler = OrientationSampler::from_seed(2024);
    for _ in 0..200 {
        let delta = sampler.sample();
        scene.rotate_rigs(&delta);

        let boxes = project_scene(&scene);
        assert_eq!(boxes.len(), 1);
        let bbox = boxes[0].bbox;
        assert!(bbox.width > 0.0 && bbox.height > 0.0);
        assert!(bbox.x >= 0.0 && bbox.x_max() <= width + 1e-9);
        assert!(bbox.y >= 0.0 && bbox.y_max() <= height + 1e-9);
    }
}

#[test]
fn test_offset_object_lands_on_matching_side() {
    let body = create_cube("body", 0.5)
        .with_transform(Transform3D::translation(Vector3d::new(2.0, 0.0, 0.0)));
    let mut scene = Scene::new(vec![body], square_intrinsics());
    scene.camera.location = Point3d::new(0.0, 0.0, 10.0);

    let front = union_bounding_box(&project_scene(&scene)).unwrap();
    assert!(front.x > 50.0);

    // half a turn around Y puts the camera behind the object, mirroring left and right
    scene.camera_axis.orientation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), PI);
    let back = union_bounding_box(&project_scene(&scene)).unwrap();
    assert!(back.x_max() < 50.0);
    assert_relative_eq!(back.width, front.width, epsilon = 1e-9);
}

#[test]
fn test_union_spans_every_visible_object() {
    let left = create_cube("left", 0.5)
        .with_transform(Transform3D::translation(Vector3d::new(-2.0, 0.0, 0.0)));
    let right = create_cube("right", 0.5)
        .with_transform(Transform3D::translation(Vector3d::new(2.0, 0.0, 0.0)));
    let mut scene = Scene::new(vec![left, right], square_intrinsics());
    scene.assign_pass_indices();
    scene.camera.location = Point3d::new(0.0, 0.0, 10.0);

    let boxes = project_scene(&scene);
    assert_eq!(boxes.iter().map(|b| b.pass_index).collect::<Vec<_>>(), vec![1, 2]);

    let union = union_bounding_box(&boxes).unwrap();
    assert_relative_eq!(union.x, boxes[0].bbox.x, epsilon = 1e-9);
    assert_relative_eq!(union.x_max(), boxes[1].bbox.x_max(), epsilon = 1e-9);
}

#[test]
fn test_object_behind_framed_camera_is_omitted() {
    let far_behind = create_cube("far", 0.5)
        .with_transform(Transform3D::translation(Vector3d::new(0.0, 0.0, 50.0)));
    let mut scene = Scene::new(vec![create_cube("body", 1.0), far_behind], square_intrinsics());
    scene.assign_pass_indices();
    frame_scene(&mut scene).unwrap();

    // standoff ignores depth, so the camera ends up between the two cubes
    assert!(scene.camera.location.z < 49.5);

    let boxes = project_scene(&scene);
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].name, "body");
}

#[test]
fn test_standoff_grows_with_object_size() {
    let intrinsics = CameraIntrinsics::new(0.8, 0.6, 640, 480);
    let mut previous = 0.0;
    for half in [0.1, 0.5, 1.0, 5.0] {
        let bounds = compute_world_bounds(&[create_cube("cube", half)]).unwrap();
        let distance = compute_standoff_distance(&bounds, intrinsics.fov_x, intrinsics.fov_y);
        assert!(distance > previous);
        previous = distance;
    }
}

#[test]
fn test_orientation_sequence_matches_rig_updates() {
    let deltas = OrientationSampler::from_seed(5).pre_sample(6);
    let expected = orientation_sequence(UnitQuaternion::identity(), &deltas);

    let mut scene = Scene::new(vec![create_cube("body", 1.0)], square_intrinsics());
    for (delta, orientation) in deltas.iter().zip(&expected) {
        scene.rotate_rigs(delta);
        assert_eq!(scene.camera_axis.orientation, *orientation);
        assert_eq!(scene.light.orientation, *orientation);
    }
}
