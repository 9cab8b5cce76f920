/// Borrowed view of one video frame handed to a mesh source.
///
/// Row-major packed BGR, `len = width * height * 3` (the layout camera
/// backends deliver). The geometry layer only ever reads the dimensions;
/// the pixel data is for mesh backends that run inference on the frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub width: u32,
    pub height: u32,
    pub data: &'a [u8],
}

impl<'a> FrameView<'a> {
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Dimensions-only view for sources that replay prerecorded landmarks.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: &[],
        }
    }

    pub fn dims(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
