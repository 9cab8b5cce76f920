//! Webcam iris-tracking viewer.
//!
//! Opens a camera device, runs the configured landmark source on every
//! frame, draws the iris overlay, and shows the horizontally mirrored
//! result until `q` is pressed. Without a `--replay` capture the viewer
//! has no inference backend and every frame reports no face; library
//! users plug a real backend into `FaceMeshSource`.

mod canvas;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{info, warn, LevelFilter};
use opencv::core::{flip, Mat};
use opencv::prelude::*;
use opencv::{highgui, videoio};

use iris_track::render::{draw_iris_overlay, draw_landmark_ids, Color, OverlayStyle};
use iris_track::source::{FaceMeshSource, RecordedLandmarkSource, SourceError};
use iris_track::track::TrackError;
use iris_track_core::{FrameView, IrisSide};

use canvas::MatCanvas;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SideArg {
    Left,
    Right,
    Both,
}

impl From<SideArg> for IrisSide {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Left => IrisSide::Left,
            SideArg::Right => IrisSide::Right,
            SideArg::Both => IrisSide::Both,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorArg {
    Red,
    Green,
    Blue,
}

impl From<ColorArg> for Color {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Red => Color::RED,
            ColorArg::Green => Color::GREEN,
            ColorArg::Blue => Color::BLUE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "iris-track-viewer", about = "Live iris-contour viewer")]
struct Args {
    /// Camera device index.
    #[arg(long, default_value_t = 0)]
    camera: i32,

    /// Which iris overlay to draw.
    #[arg(long, value_enum, default_value_t = SideArg::Both)]
    side: SideArg,

    /// Overlay color.
    #[arg(long, value_enum, default_value_t = ColorArg::Red)]
    color: ColorArg,

    /// JSON landmark capture to replay instead of running a model.
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Also label every landmark with its mesh index.
    #[arg(long)]
    ids: bool,

    /// Log level filter.
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(thiserror::Error, Debug)]
enum ViewerError {
    #[error("failed to open camera device {index}")]
    CameraUnavailable { index: i32 },

    #[error(transparent)]
    OpenCv(#[from] opencv::Error),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Track(#[from] TrackError),
}

fn build_source(args: &Args) -> Result<RecordedLandmarkSource, ViewerError> {
    match &args.replay {
        Some(path) => {
            info!("replaying landmarks from {}", path.display());
            Ok(RecordedLandmarkSource::from_path(path)?)
        }
        None => {
            warn!("no --replay capture given; running without a mesh backend");
            Ok(RecordedLandmarkSource::default())
        }
    }
}

fn run(args: &Args) -> Result<(), ViewerError> {
    let mut source = build_source(args)?;
    let side = IrisSide::from(args.side);
    let style = OverlayStyle {
        color: Color::from(args.color),
        ..OverlayStyle::default()
    };

    // Camera handle is scoped to this function and released on every
    // exit path when it drops.
    let mut cap = videoio::VideoCapture::new(args.camera, videoio::CAP_ANY)?;
    if !cap.is_opened()? {
        return Err(ViewerError::CameraUnavailable { index: args.camera });
    }

    let window = "iris-track";
    let mut frame = Mat::default();
    let mut mirrored = Mat::default();

    loop {
        if !cap.read(&mut frame)? || frame.empty()? {
            warn!("camera returned an empty frame, stopping");
            break;
        }

        let (width, height) = (frame.cols() as u32, frame.rows() as u32);
        let data = frame.data_bytes().unwrap_or(&[]);
        let faces = source.detect(&FrameView::new(width, height, data))?;

        if let Some(face) = faces.first() {
            let mut canvas = MatCanvas::new(&mut frame);
            let circles = draw_iris_overlay(&mut canvas, face, width, height, side, &style)
                .map_err(TrackError::Geometry)?;
            if args.ids {
                draw_landmark_ids(&mut canvas, face, width, height, &style)
                    .map_err(TrackError::Geometry)?;
            }
            log::debug!(
                "left center {:?}, right center {:?}",
                circles.left.center_rounded(),
                circles.right.center_rounded()
            );
        }

        flip(&frame, &mut mirrored, 1)?;
        highgui::imshow(window, &mirrored)?;

        let key = highgui::wait_key(1)?;
        if key == i32::from(b'q') || key == i32::from(b'Q') {
            break;
        }
    }

    Ok(())
}

fn main() -> Result<(), ViewerError> {
    let args = Args::parse();
    let _ = iris_track_core::init_with_level(args.log_level);
    run(&args)
}
