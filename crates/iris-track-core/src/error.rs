/// Errors from the iris geometry layer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IrisGeometryError {
    #[error("face has {got} landmarks, iris indices need {required} (mesh run without iris refinement?)")]
    InsufficientLandmarks { got: usize, required: usize },

    #[error("invalid frame dimensions (width={width}, height={height})")]
    InvalidImageSize { width: u32, height: u32 },

    #[error("cannot fit an enclosing circle to an empty point set")]
    EmptyPointSet,
}
