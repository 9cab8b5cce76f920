//! Per-frame orchestration: source inference, then iris extraction.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use iris_track_core::{extract_iris_circles, FrameView, IrisCircles, IrisGeometryError};

use crate::source::{FaceMeshSource, SourceError};

/// Errors from one frame of the pipeline.
#[derive(thiserror::Error, Debug)]
pub enum TrackError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Geometry(#[from] IrisGeometryError),
}

/// Outcome of processing one frame.
///
/// `circles` is `None` when no face was detected; that is a valid result,
/// not an error. Reports carry no cross-frame state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// How many faces the source returned for this frame.
    pub faces_detected: usize,
    /// Iris circles of the first detected face, if any.
    pub circles: Option<IrisCircles>,
}

impl FrameReport {
    pub fn face_detected(&self) -> bool {
        self.circles.is_some()
    }
}

/// Run the landmark source on `frame` and fit iris circles for the first
/// detected face.
///
/// Each call is independent: a failure here leaves the source free to
/// succeed on the next frame.
pub fn process_frame<S: FaceMeshSource>(
    source: &mut S,
    frame: &FrameView<'_>,
) -> Result<FrameReport, TrackError> {
    let faces = source.detect(frame)?;
    trace!("frame {}x{}: {} face(s)", frame.width, frame.height, faces.len());

    let Some(face) = faces.first() else {
        return Ok(FrameReport {
            faces_detected: 0,
            circles: None,
        });
    };

    let circles = extract_iris_circles(face, frame.width, frame.height)?;
    debug!(
        "first face: left iris r={:.2}, right iris r={:.2}",
        circles.left.radius, circles.right.radius
    );

    Ok(FrameReport {
        faces_detected: faces.len(),
        circles: Some(circles),
    })
}
