//! The landmark-source boundary.
//!
//! The face-mesh model is an external collaborator: anything that can
//! turn a frame into normalized landmark sequences implements
//! [`FaceMeshSource`]. The crate ships a JSON replay source for tests,
//! examples, and offline runs; real inference backends live outside
//! this workspace.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use iris_track_core::{FaceLandmarks, FrameView};

/// Configuration handed to a face-mesh backend.
///
/// The thresholds and the face cap are consumed by the backend, not by
/// the geometry layer. `refine_landmarks` must stay enabled for the iris
/// indices to be valid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceMeshConfig {
    /// Treat every call as an independent image instead of a video stream.
    pub static_image_mode: bool,
    pub max_faces: usize,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
    /// Enables the 10 extra iris points (indices 468..478).
    pub refine_landmarks: bool,
}

impl Default for FaceMeshConfig {
    fn default() -> Self {
        Self {
            static_image_mode: false,
            max_faces: 1,
            min_detection_confidence: 0.8,
            min_tracking_confidence: 0.8,
            refine_landmarks: true,
        }
    }
}

impl FaceMeshConfig {
    pub fn validate(&self) -> Result<(), SourceError> {
        if self.max_faces == 0 {
            return Err(SourceError::InvalidConfig {
                reason: "max_faces must be at least 1".into(),
            });
        }
        for (name, value) in [
            ("min_detection_confidence", self.min_detection_confidence),
            ("min_tracking_confidence", self.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SourceError::InvalidConfig {
                    reason: format!("{name} must be in [0, 1], got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Errors raised by landmark sources.
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("invalid face-mesh configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("failed to read landmark capture")]
    Io(#[from] std::io::Error),

    #[error("failed to decode landmark capture")]
    Decode(#[from] serde_json::Error),

    #[error("landmark source failed: {0}")]
    Backend(String),
}

/// Anything that turns a frame into zero or more landmark sequences.
///
/// Zero detected faces is a valid outcome, not an error.
pub trait FaceMeshSource {
    fn detect(&mut self, frame: &FrameView<'_>) -> Result<Vec<FaceLandmarks>, SourceError>;
}

/// Replays prerecorded per-frame landmark sets from a JSON capture.
///
/// The capture is an array of frames, each an array of faces, each a
/// flat landmark list. Once exhausted the source reports no faces,
/// mirroring a subject leaving the frame. The configured `max_faces`
/// caps how many faces a frame may report, like a live backend would.
#[derive(Clone, Debug, Default)]
pub struct RecordedLandmarkSource {
    config: FaceMeshConfig,
    frames: Vec<Vec<FaceLandmarks>>,
    cursor: usize,
}

impl RecordedLandmarkSource {
    /// Replay `frames` under a validated mesh configuration.
    pub fn with_config(
        config: FaceMeshConfig,
        frames: Vec<Vec<FaceLandmarks>>,
    ) -> Result<Self, SourceError> {
        config.validate()?;
        Ok(Self {
            config,
            frames,
            cursor: 0,
        })
    }

    pub fn from_frames(frames: Vec<Vec<FaceLandmarks>>) -> Self {
        Self {
            config: FaceMeshConfig::default(),
            frames,
            cursor: 0,
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SourceError> {
        let frames = serde_json::from_reader(reader)?;
        Ok(Self::from_frames(frames))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn config(&self) -> &FaceMeshConfig {
        &self.config
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.frames.len()
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl FaceMeshSource for RecordedLandmarkSource {
    fn detect(&mut self, _frame: &FrameView<'_>) -> Result<Vec<FaceLandmarks>, SourceError> {
        let mut faces = self.frames.get(self.cursor).cloned().unwrap_or_default();
        faces.truncate(self.config.max_faces);
        self.cursor = self.cursor.saturating_add(1);
        Ok(faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_track_core::NormalizedLandmark;

    #[test]
    fn default_config_is_valid() {
        assert!(FaceMeshConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_faces_cap_is_rejected() {
        let cfg = FaceMeshConfig {
            max_faces: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SourceError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn out_of_range_confidence_is_rejected() {
        let cfg = FaceMeshConfig {
            min_detection_confidence: 1.5,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = FaceMeshConfig {
            min_tracking_confidence: -0.1,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn replay_yields_frames_then_absence() {
        let face = FaceLandmarks::new(vec![NormalizedLandmark::new(0.5, 0.5); 478]);
        let mut src = RecordedLandmarkSource::from_frames(vec![vec![face], vec![]]);
        let frame = FrameView::empty(640, 480);

        assert_eq!(src.detect(&frame).unwrap().len(), 1);
        assert!(src.detect(&frame).unwrap().is_empty());
        assert!(src.is_exhausted());
        assert!(src.detect(&frame).unwrap().is_empty());
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let cfg = FaceMeshConfig {
            max_faces: 0,
            ..Default::default()
        };
        assert!(matches!(
            RecordedLandmarkSource::with_config(cfg, vec![]),
            Err(SourceError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn max_faces_caps_replayed_detections() {
        let face = FaceLandmarks::new(vec![NormalizedLandmark::new(0.5, 0.5); 478]);
        let cfg = FaceMeshConfig {
            max_faces: 1,
            ..Default::default()
        };
        let mut src =
            RecordedLandmarkSource::with_config(cfg, vec![vec![face.clone(), face]]).unwrap();

        let faces = src.detect(&FrameView::empty(640, 480)).unwrap();
        assert_eq!(faces.len(), 1);
        assert_eq!(src.config().max_faces, 1);
    }

    #[test]
    fn capture_round_trips_through_json() {
        let face = FaceLandmarks::from_pairs(&[(0.1, 0.2), (0.3, 0.4)]);
        let frames = vec![vec![face]];
        let json = serde_json::to_string(&frames).unwrap();
        let mut src = RecordedLandmarkSource::from_reader(json.as_bytes()).unwrap();
        let got = src.detect(&FrameView::empty(10, 10)).unwrap();
        assert_eq!(got, frames[0]);
    }
}
