//! The rendering boundary.
//!
//! Drawing backends implement [`Canvas`] over whatever frame buffer they
//! own; the overlay logic here only decides *what* to draw. Nothing in
//! this module touches pixels.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use iris_track_core::{
    iris_pixel_points, min_enclosing_circle, FaceLandmarks, IrisCircles, IrisGeometryError,
    IrisSide, LEFT_IRIS, RIGHT_IRIS,
};

/// RGB drawing color.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };
}

/// Overlay appearance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub color: Color,
    pub thickness: i32,
    /// Font scale for landmark-id labels.
    pub label_scale: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: Color::RED,
            thickness: 1,
            label_scale: 0.5,
        }
    }
}

/// Primitive drawing operations onto a mutable frame buffer.
pub trait Canvas {
    fn draw_polyline(&mut self, points: &[Point2<f32>], closed: bool, color: Color, thickness: i32);
    fn draw_circle(&mut self, center: Point2<f32>, radius: f32, color: Color, thickness: i32);
    fn draw_text(&mut self, origin: Point2<f32>, text: &str, scale: f32, color: Color);
}

/// Draw the iris overlay for one face and return the fitted circles.
///
/// `Left` and `Right` trace the four contour points as a closed polyline;
/// `Both` draws the enclosing circle around each iris. The circles are
/// computed and returned in every mode so callers always get centers and
/// radii, independent of what was drawn.
pub fn draw_iris_overlay<C: Canvas>(
    canvas: &mut C,
    face: &FaceLandmarks,
    width: u32,
    height: u32,
    side: IrisSide,
    style: &OverlayStyle,
) -> Result<IrisCircles, IrisGeometryError> {
    let left_pts = iris_pixel_points(face, LEFT_IRIS, width, height)?;
    let right_pts = iris_pixel_points(face, RIGHT_IRIS, width, height)?;

    // Four points per side, so the fit cannot fail past this point.
    let circles = IrisCircles {
        left: min_enclosing_circle(&left_pts)?,
        right: min_enclosing_circle(&right_pts)?,
    };

    match side {
        IrisSide::Left => {
            canvas.draw_polyline(&left_pts, true, style.color, style.thickness);
        }
        IrisSide::Right => {
            canvas.draw_polyline(&right_pts, true, style.color, style.thickness);
        }
        IrisSide::Both => {
            canvas.draw_circle(
                circles.left.center,
                circles.left.radius,
                style.color,
                style.thickness,
            );
            canvas.draw_circle(
                circles.right.center,
                circles.right.radius,
                style.color,
                style.thickness,
            );
        }
    }

    Ok(circles)
}

/// Label every landmark with its mesh index.
///
/// Works on base and refined meshes alike; only the frame dimensions are
/// validated.
pub fn draw_landmark_ids<C: Canvas>(
    canvas: &mut C,
    face: &FaceLandmarks,
    width: u32,
    height: u32,
    style: &OverlayStyle,
) -> Result<(), IrisGeometryError> {
    if width == 0 || height == 0 {
        return Err(IrisGeometryError::InvalidImageSize { width, height });
    }

    for (id, lm) in face.points().iter().enumerate() {
        let p = lm.to_pixel(width, height);
        canvas.draw_text(p, &id.to_string(), style.label_scale, style.color);
    }
    Ok(())
}
