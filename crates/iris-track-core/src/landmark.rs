use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Landmark count of the base face mesh (no iris refinement).
pub const BASE_LANDMARK_COUNT: usize = 468;

/// Landmark count with iris refinement enabled (base + 10 iris points).
pub const REFINED_LANDMARK_COUNT: usize = 478;

/// One face-mesh landmark in normalized image coordinates.
///
/// Both components are in `[0, 1]` relative to the source frame. Index
/// semantics are fixed by the external mesh model's labeling convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    pub x: f32,
    pub y: f32,
}

impl NormalizedLandmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Map to pixel coordinates for the given frame size, rounding to the
    /// nearest integer pixel (kept as `f32` for downstream circle fitting).
    #[inline]
    pub fn to_pixel(self, width: u32, height: u32) -> Point2<f32> {
        Point2::new(
            (self.x * width as f32).round(),
            (self.y * height as f32).round(),
        )
    }
}

/// Ordered landmark sequence for one detected face.
///
/// Produced fresh by a mesh source on every inference call; nothing here
/// persists across frames.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceLandmarks(Vec<NormalizedLandmark>);

impl FaceLandmarks {
    pub fn new(points: Vec<NormalizedLandmark>) -> Self {
        Self(points)
    }

    /// Build from bare `(x, y)` pairs, mostly useful in tests and replays.
    pub fn from_pairs(pairs: &[(f32, f32)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|&(x, y)| NormalizedLandmark::new(x, y))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NormalizedLandmark> {
        self.0.get(index).copied()
    }

    pub fn points(&self) -> &[NormalizedLandmark] {
        &self.0
    }

    /// Whether the sequence is long enough to carry the iris refinement
    /// points.
    pub fn has_iris_refinement(&self) -> bool {
        self.0.len() >= REFINED_LANDMARK_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denormalization_rounds_to_nearest_pixel() {
        let lm = NormalizedLandmark::new(0.5, 0.5);
        let p = lm.to_pixel(100, 100);
        assert_eq!((p.x, p.y), (50.0, 50.0));

        let lm = NormalizedLandmark::new(0.333, 0.666);
        let p = lm.to_pixel(10, 10);
        assert_eq!((p.x, p.y), (3.0, 7.0));
    }

    #[test]
    fn refinement_flag_tracks_length() {
        let base = FaceLandmarks::new(vec![NormalizedLandmark::default(); BASE_LANDMARK_COUNT]);
        assert!(!base.has_iris_refinement());

        let refined =
            FaceLandmarks::new(vec![NormalizedLandmark::default(); REFINED_LANDMARK_COUNT]);
        assert!(refined.has_iris_refinement());
    }
}
