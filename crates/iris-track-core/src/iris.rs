use log::debug;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::circle::{min_enclosing_circle, Circle};
use crate::error::IrisGeometryError;
use crate::landmark::{FaceLandmarks, REFINED_LANDMARK_COUNT};

/// Face-mesh indices of the four left-iris contour points.
///
/// These are fixed by the external mesh model's labeling and are only
/// valid when the mesh was run with iris refinement enabled.
pub const LEFT_IRIS: [usize; 4] = [474, 475, 476, 477];

/// Face-mesh indices of the four right-iris contour points.
pub const RIGHT_IRIS: [usize; 4] = [469, 470, 471, 472];

/// Which iris (or both) an operation applies to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrisSide {
    Left,
    Right,
    #[default]
    Both,
}

/// Fitted iris circles for one face, in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IrisCircles {
    pub left: Circle,
    pub right: Circle,
}

fn check_refined(face: &FaceLandmarks) -> Result<(), IrisGeometryError> {
    if face.len() < REFINED_LANDMARK_COUNT {
        return Err(IrisGeometryError::InsufficientLandmarks {
            got: face.len(),
            required: REFINED_LANDMARK_COUNT,
        });
    }
    Ok(())
}

fn check_dims(width: u32, height: u32) -> Result<(), IrisGeometryError> {
    if width == 0 || height == 0 {
        return Err(IrisGeometryError::InvalidImageSize { width, height });
    }
    Ok(())
}

/// Denormalize the four landmarks at `indices` to integer pixel coordinates.
///
/// Fails when the face lacks the iris refinement points or the frame
/// dimensions are degenerate; never indexes out of range.
pub fn iris_pixel_points(
    face: &FaceLandmarks,
    indices: [usize; 4],
    width: u32,
    height: u32,
) -> Result<[Point2<f32>; 4], IrisGeometryError> {
    check_refined(face)?;
    check_dims(width, height)?;

    // Index bounds are guaranteed by the length check above.
    Ok(indices.map(|i| face.points()[i].to_pixel(width, height)))
}

/// Fit the minimum enclosing circle of both iris contours.
///
/// Pure function of its inputs: same face and dimensions always yield the
/// same circles. Coincident contour points yield a zero-radius circle.
pub fn extract_iris_circles(
    face: &FaceLandmarks,
    width: u32,
    height: u32,
) -> Result<IrisCircles, IrisGeometryError> {
    let left_pts = iris_pixel_points(face, LEFT_IRIS, width, height)?;
    let right_pts = iris_pixel_points(face, RIGHT_IRIS, width, height)?;

    // Four valid points are present, so the fit cannot see an empty set.
    let left = min_enclosing_circle(&left_pts)?;
    let right = min_enclosing_circle(&right_pts)?;

    debug!(
        "iris circles: left=({:.1},{:.1} r={:.2}) right=({:.1},{:.1} r={:.2})",
        left.center.x, left.center.y, left.radius, right.center.x, right.center.y, right.radius
    );

    Ok(IrisCircles { left, right })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{NormalizedLandmark, BASE_LANDMARK_COUNT};

    fn face_with_irises(left: [(f32, f32); 4], right: [(f32, f32); 4]) -> FaceLandmarks {
        let mut pts = vec![NormalizedLandmark::new(0.5, 0.5); REFINED_LANDMARK_COUNT];
        for (k, &(x, y)) in left.iter().enumerate() {
            pts[LEFT_IRIS[k]] = NormalizedLandmark::new(x, y);
        }
        for (k, &(x, y)) in right.iter().enumerate() {
            pts[RIGHT_IRIS[k]] = NormalizedLandmark::new(x, y);
        }
        FaceLandmarks::new(pts)
    }

    fn assert_close(a: f32, b: f32, tol: f32) {
        assert!((a - b).abs() < tol, "expected {a} ~ {b} within {tol}");
    }

    #[test]
    fn base_mesh_without_refinement_is_rejected() {
        let face = FaceLandmarks::new(vec![
            NormalizedLandmark::new(0.5, 0.5);
            BASE_LANDMARK_COUNT
        ]);
        let err = extract_iris_circles(&face, 640, 480).unwrap_err();
        assert_eq!(
            err,
            IrisGeometryError::InsufficientLandmarks {
                got: BASE_LANDMARK_COUNT,
                required: REFINED_LANDMARK_COUNT,
            }
        );
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let face = face_with_irises([(0.5, 0.5); 4], [(0.5, 0.5); 4]);
        assert_eq!(
            extract_iris_circles(&face, 0, 480).unwrap_err(),
            IrisGeometryError::InvalidImageSize {
                width: 0,
                height: 480
            }
        );
    }

    #[test]
    fn coincident_iris_points_yield_zero_radius() {
        let face = face_with_irises([(0.25, 0.75); 4], [(0.5, 0.5); 4]);
        let circles = extract_iris_circles(&face, 100, 100).unwrap();
        assert_eq!(circles.left.radius, 0.0);
        assert_eq!((circles.left.center.x, circles.left.center.y), (25.0, 75.0));
    }

    #[test]
    fn centers_stay_within_frame_bounds() {
        let face = face_with_irises(
            [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)],
            [(0.9, 0.1), (1.0, 0.1), (0.9, 0.2), (1.0, 0.2)],
        );
        let circles = extract_iris_circles(&face, 640, 480).unwrap();
        for c in [circles.left, circles.right] {
            assert!(c.radius >= 0.0);
            assert!(c.center.x >= 0.0 && c.center.x <= 640.0);
            assert!(c.center.y >= 0.0 && c.center.y <= 480.0);
        }
    }

    #[test]
    fn extraction_is_idempotent() {
        let face = face_with_irises(
            [(0.70, 0.40), (0.71, 0.40), (0.70, 0.41), (0.71, 0.41)],
            [(0.30, 0.40), (0.31, 0.40), (0.30, 0.41), (0.31, 0.41)],
        );
        let a = extract_iris_circles(&face, 640, 480).unwrap();
        let b = extract_iris_circles(&face, 640, 480).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tight_left_iris_cluster_fits_small_circle() {
        // 0.70..0.71 normalized spans ~6px horizontally, ~5px vertically
        // on a 640x480 frame.
        let face = face_with_irises(
            [(0.70, 0.40), (0.71, 0.40), (0.70, 0.41), (0.71, 0.41)],
            [(0.30, 0.40), (0.31, 0.40), (0.30, 0.41), (0.31, 0.41)],
        );
        let circles = extract_iris_circles(&face, 640, 480).unwrap();
        assert_close(circles.left.center.x, 451.0, 1.5);
        assert_close(circles.left.center.y, 194.5, 1.5);
        assert!(circles.left.radius > 0.0 && circles.left.radius < 10.0);
    }

    #[test]
    fn side_labels_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&IrisSide::Both).unwrap(),
            "\"both\""
        );
        assert_eq!(
            serde_json::from_str::<IrisSide>("\"left\"").unwrap(),
            IrisSide::Left
        );
    }
}
