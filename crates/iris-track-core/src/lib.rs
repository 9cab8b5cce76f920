//! Core landmark and iris-circle geometry.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete face-mesh backend, camera, or drawing layer:
//! it turns normalized face-mesh landmarks into pixel-space iris circles
//! and nothing else.

mod circle;
mod error;
mod frame;
mod iris;
mod landmark;
mod logger;

pub use circle::{min_enclosing_circle, Circle};
pub use error::IrisGeometryError;
pub use frame::FrameView;
pub use iris::{
    extract_iris_circles, iris_pixel_points, IrisCircles, IrisSide, LEFT_IRIS, RIGHT_IRIS,
};
pub use landmark::{
    FaceLandmarks, NormalizedLandmark, BASE_LANDMARK_COUNT, REFINED_LANDMARK_COUNT,
};

pub use logger::init_with_level;
