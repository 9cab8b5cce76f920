//! High-level facade for the `iris-track-*` workspace.
//!
//! This crate wires the three boundaries of the pipeline together:
//! - [`source::FaceMeshSource`]: the external face-mesh landmark model,
//! - the geometric core ([`iris_track_core`], re-exported as [`core`]),
//! - [`render::Canvas`]: the external drawing backend.
//!
//! ## Quickstart
//!
//! ```
//! use iris_track::source::RecordedLandmarkSource;
//! use iris_track::track::process_frame;
//! use iris_track::core::{FaceLandmarks, FrameView, NormalizedLandmark};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let face = FaceLandmarks::new(vec![NormalizedLandmark::new(0.5, 0.5); 478]);
//! let mut source = RecordedLandmarkSource::from_frames(vec![vec![face]]);
//!
//! let report = process_frame(&mut source, &FrameView::empty(640, 480))?;
//! assert!(report.face_detected());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`core`]: landmark types, iris index tables, circle fitting.
//! - [`source`]: mesh configuration, the source trait, JSON replay.
//! - [`track`]: per-frame orchestration.
//! - [`render`]: canvas trait and overlay logic.

pub use iris_track_core as core;

pub mod render;
pub mod source;
pub mod track;

pub use iris_track_core::{Circle, FaceLandmarks, FrameView, IrisCircles, IrisSide};
pub use render::{draw_iris_overlay, draw_landmark_ids, Canvas, Color, OverlayStyle};
pub use source::{FaceMeshConfig, FaceMeshSource, RecordedLandmarkSource, SourceError};
pub use track::{process_frame, FrameReport, TrackError};
