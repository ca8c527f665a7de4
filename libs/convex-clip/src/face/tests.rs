//! Tests for face construction, half-space queries and single-face clipping.

use super::*;
use approx::assert_relative_eq;

/// Square in the z = 0 plane, counter-clockwise seen from +Z.
fn square() -> Face {
    let mut face = Face::new();
    face.add_vertex(Vec3::new(0.0, 0.0, 0.0));
    face.add_vertex(Vec3::new(2.0, 0.0, 0.0));
    face.add_vertex(Vec3::new(2.0, 2.0, 0.0));
    face.add_vertex(Vec3::new(0.0, 2.0, 0.0));
    face
}

/// Half-space `x <= offset` as a face.
fn x_below(offset: f64) -> Face {
    Face::oriented(
        [
            Vec3::new(offset, 0.0, 0.0),
            Vec3::new(offset, 1.0, 0.0),
            Vec3::new(offset, 0.0, 1.0),
        ],
        Vec3::new(offset - 1.0, 0.0, 0.0),
    )
    .unwrap()
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn test_add_vertex_skips_exact_duplicates() {
    let mut face = square();
    face.add_vertex(Vec3::new(2.0, 0.0, 0.0));
    face.add_vertex(Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(face.vertex_count(), 4);
}

#[test]
fn test_add_vertex_keeps_nearby_points() {
    let mut face = square();
    face.add_vertex(Vec3::new(2.0 + 1e-12, 0.0, 0.0));
    assert_eq!(face.vertex_count(), 5);
}

#[test]
fn test_oriented_rejects_two_points() {
    let result = Face::oriented([Vec3::ZERO, Vec3::X, Vec3::X], Vec3::Y);
    assert_eq!(result, Err(ClipError::DegenerateFace { vertices: 2 }));
}

#[test]
fn test_edges_wrap_to_first_vertex() {
    let face = square();
    assert_eq!(face.edge_start(3), Some(Vec3::new(0.0, 2.0, 0.0)));
    assert_eq!(face.edge_end(3), Some(Vec3::new(0.0, 0.0, 0.0)));
    assert_eq!(face.edge_end(4), None);
    assert_eq!(face.edges().count(), 4);
}

// =============================================================================
// HALF-SPACE QUERIES
// =============================================================================

#[test]
fn test_plane_query_on_degenerate_face_fails() {
    let mut face = Face::new();
    face.add_vertex(Vec3::ZERO);
    face.add_vertex(Vec3::X);
    assert_eq!(
        face.plane_signed_distance(Vec3::Z),
        Err(ClipError::DegenerateFace { vertices: 2 })
    );
    assert!(face.is_inside(Vec3::Z).is_err());
    assert!(Face::new().plane().is_err());
}

#[test]
fn test_plane_query_on_collinear_face_fails() {
    let mut face = Face::new();
    face.add_vertex(Vec3::ZERO);
    face.add_vertex(Vec3::X);
    face.add_vertex(Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(face.plane(), Err(ClipError::DegenerateFace { vertices: 3 }));
}

/// Collinear leading vertices do not decide the plane.
#[test]
fn test_plane_skips_collinear_leading_vertices() {
    let mut face = Face::new();
    face.add_vertex(Vec3::new(0.0, 0.0, 0.0));
    face.add_vertex(Vec3::new(1.0, 0.0, 0.0));
    face.add_vertex(Vec3::new(2.0, 0.0, 0.0));
    face.add_vertex(Vec3::new(2.0, 2.0, 0.0));
    face.add_vertex(Vec3::new(0.0, 2.0, 0.0));

    assert!(face.normal().unwrap().normalize().abs_diff_eq(Vec3::Z, 1e-12));
    assert!(face.is_inside(Vec3::new(1.0, 1.0, -1.0)).unwrap());
    assert!(!face.is_inside(Vec3::new(1.0, 1.0, 1.0)).unwrap());
}

/// A clipped face keeps the plane of its parent even when rounding leaves
/// its own leading vertices collinear.
#[test]
fn test_clipped_face_keeps_parent_plane() {
    let lift = |x: f64, y: f64| Vec3::new(x, y, 0.3 * x - 0.7 * y);
    let parent = Face::oriented(
        [lift(-1.216, 1.109), lift(-1.693, 0.337), lift(0.3, -0.7), lift(0.8, 1.4)],
        Vec3::new(-5.0, 5.0, 5.0),
    )
    .unwrap();
    let cut = Face::oriented(
        [Vec3::new(-1.456, 0.0, 0.0), Vec3::new(-1.456, 1.0, 0.0), Vec3::new(-1.456, 0.0, 1.0)],
        Vec3::new(5.0, 0.0, 0.0),
    )
    .unwrap();

    let clipped = parent.clip_face(&cut).unwrap().unwrap();
    assert_eq!(clipped.plane().unwrap(), parent.plane().unwrap());

    // Rebuilt from bare vertices, the same polygon still spans a usable plane.
    let mut rebuilt = Face::new();
    clipped.vertices().iter().for_each(|&v| rebuilt.add_vertex(v));
    let n = rebuilt.normal().unwrap().normalize();
    assert!(n.dot(parent.normal().unwrap().normalize()) > 1.0 - 1e-9);
}

#[test]
fn test_rewind_flips_inherited_plane() {
    let clipped = square().clip_face(&x_below(1.0)).unwrap().unwrap();
    let mut flipped = clipped.clone();
    flipped.rewind(Vec3::new(0.5, 0.5, 1.0)).unwrap();

    assert_eq!(flipped.normal().unwrap(), -clipped.normal().unwrap());
    assert!(flipped.is_inside(Vec3::new(0.5, 0.5, 1.0)).unwrap());
}

/// Points on the plane are inside (closed half-space).
#[test]
fn test_point_on_plane_is_inside() {
    let face = square();
    assert!(face.is_inside(Vec3::new(5.0, -3.0, 0.0)).unwrap());
    assert!(face.is_inside(Vec3::new(1.0, 1.0, -0.5)).unwrap());
    assert!(!face.is_inside(Vec3::new(1.0, 1.0, 0.5)).unwrap());
}

#[test]
fn test_rewind_reverses_when_interior_outside() {
    let mut face = square();
    let interior = Vec3::new(1.0, 1.0, 3.0);
    assert!(!face.is_inside(interior).unwrap());

    face.rewind(interior).unwrap();

    assert!(face.is_inside(interior).unwrap());
    assert_eq!(face.vertex(0), Some(&Vec3::new(0.0, 2.0, 0.0)));
    assert_relative_eq!(face.normal().unwrap().z, -4.0);
}

#[test]
fn test_rewind_keeps_correct_winding() {
    let mut face = square();
    let before = face.clone();
    face.rewind(Vec3::new(1.0, 1.0, -3.0)).unwrap();
    assert_eq!(face, before);
}

#[test]
fn test_intersect_equal_distances_returns_midpoint() {
    let face = square();
    let hit = face
        .intersect(Vec3::new(0.0, 0.0, 1.0), Vec3::new(2.0, 2.0, 1.0))
        .unwrap();
    assert_eq!(hit, Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn test_coplanar_requires_same_orientation() {
    let face = square();
    let mut flipped = square();
    flipped.rewind(Vec3::new(1.0, 1.0, 1.0)).unwrap();

    assert!(face.is_coplanar_with(&square(), 1e-9).unwrap());
    assert!(!face.is_coplanar_with(&flipped, 1e-9).unwrap());
    assert!(!face.is_coplanar_with(&x_below(1.0), 1e-9).unwrap());
}

// =============================================================================
// CLIPPING
// =============================================================================

#[test]
fn test_clip_face_fully_inside_keeps_vertices() {
    let face = square();
    let clipped = face.clip_face(&x_below(5.0)).unwrap().unwrap();

    // Emission starts at the end of edge 0.
    assert_eq!(
        clipped.vertices(),
        &[
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        ]
    );
}

#[test]
fn test_clip_face_fully_outside_is_none() {
    assert_eq!(square().clip_face(&x_below(-1.0)).unwrap(), None);
}

#[test]
fn test_clip_face_spanning_emits_intersections() {
    let clipped = square().clip_face(&x_below(1.0)).unwrap().unwrap();
    assert_eq!(
        clipped.vertices(),
        &[
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        ]
    );
    assert_relative_eq!(clipped.area(), 2.0);
}

#[test]
fn test_clip_face_preserves_orientation() {
    let face = square();
    let clipped = face.clip_face(&x_below(1.5)).unwrap().unwrap();
    assert!(clipped.normal().unwrap().dot(face.normal().unwrap()) > 0.0);
}

/// Touching the plane along an edge leaves two points, which is no face.
#[test]
fn test_clip_face_touching_edge_is_none() {
    assert_eq!(square().clip_face(&x_below(0.0)).unwrap(), None);
}

#[test]
fn test_clip_face_does_not_mutate_inputs() {
    let face = square();
    let clipping = x_below(1.0);
    let (face_before, clipping_before) = (face.clone(), clipping.clone());
    let _ = face.clip_face(&clipping).unwrap();
    assert_eq!(face, face_before);
    assert_eq!(clipping, clipping_before);
}

#[test]
fn test_clip_face_against_degenerate_face_fails() {
    let mut degenerate = Face::new();
    degenerate.add_vertex(Vec3::ZERO);
    assert_eq!(
        square().clip_face(&degenerate),
        Err(ClipError::DegenerateFace { vertices: 1 })
    );
}

// =============================================================================
// MEASUREMENTS & DISPLAY
// =============================================================================

#[test]
fn test_area_and_centroid_of_square() {
    let face = square();
    assert_relative_eq!(face.area(), 4.0);
    assert_eq!(face.centroid(), Some(Vec3::new(1.0, 1.0, 0.0)));
    assert_eq!(Face::new().centroid(), None);
    assert_eq!(Face::new().area(), 0.0);
}

#[test]
fn test_display_lists_vertices_in_order() {
    let mut face = Face::new();
    face.add_vertex(Vec3::new(1.0, 2.0, 3.0));
    face.add_vertex(Vec3::new(-1.5, 0.0, 4.0));
    assert_eq!(face.to_string(), "Face([(1, 2, 3), (-1.5, 0, 4)])");
}
