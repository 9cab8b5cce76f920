//! Replay a recorded landmark capture and print one report per frame.
//!
//! Usage: `cargo run -p iris-track --example replay -- capture.json [width] [height]`
//!
//! The capture is a JSON array of frames, each an array of faces, each a
//! flat list of `{"x": .., "y": ..}` landmarks.

use std::env;

use iris_track::core::FrameView;
use iris_track::source::RecordedLandmarkSource;
use iris_track::track::process_frame;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = iris_track::core::init_with_level(log::LevelFilter::Info);

    let mut args = env::args().skip(1);
    let path = args.next().ok_or("usage: replay <capture.json> [width] [height]")?;
    let width: u32 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(640);
    let height: u32 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(480);

    let mut source = RecordedLandmarkSource::from_path(&path)?;
    let frame = FrameView::empty(width, height);

    let mut index = 0usize;
    while !source.is_exhausted() {
        let report = process_frame(&mut source, &frame)?;
        println!(
            "{}",
            serde_json::to_string(&serde_json::json!({
                "frame": index,
                "report": report,
            }))?
        );
        index += 1;
    }

    Ok(())
}
