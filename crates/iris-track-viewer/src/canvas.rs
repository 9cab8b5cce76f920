//! `Canvas` implementation over an OpenCV `Mat`.

use nalgebra::Point2;
use opencv::core::{Mat, Point, Scalar, Vector};
use opencv::imgproc;

use iris_track::render::{Canvas, Color};

fn scalar(color: Color) -> Scalar {
    // OpenCV frames are BGR.
    Scalar::new(color.b as f64, color.g as f64, color.r as f64, 0.0)
}

fn point(p: Point2<f32>) -> Point {
    Point::new(p.x.round() as i32, p.y.round() as i32)
}

/// Draws overlay primitives onto a borrowed BGR frame.
pub struct MatCanvas<'a> {
    frame: &'a mut Mat,
}

impl<'a> MatCanvas<'a> {
    pub fn new(frame: &'a mut Mat) -> Self {
        Self { frame }
    }
}

impl Canvas for MatCanvas<'_> {
    fn draw_polyline(
        &mut self,
        points: &[Point2<f32>],
        closed: bool,
        color: Color,
        thickness: i32,
    ) {
        let pts: Vector<Point> = points.iter().map(|&p| point(p)).collect();
        let polys: Vector<Vector<Point>> = Vector::from_iter([pts]);
        let _ = imgproc::polylines(
            self.frame,
            &polys,
            closed,
            scalar(color),
            thickness,
            imgproc::LINE_AA,
            0,
        );
    }

    fn draw_circle(&mut self, center: Point2<f32>, radius: f32, color: Color, thickness: i32) {
        let _ = imgproc::circle(
            self.frame,
            point(center),
            radius.round() as i32,
            scalar(color),
            thickness,
            imgproc::LINE_AA,
            0,
        );
    }

    fn draw_text(&mut self, origin: Point2<f32>, text: &str, scale: f32, color: Color) {
        let _ = imgproc::put_text(
            self.frame,
            text,
            point(origin),
            imgproc::FONT_HERSHEY_COMPLEX_SMALL,
            scale as f64,
            scalar(color),
            1,
            imgproc::LINE_AA,
            false,
        );
    }
}
