use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FovError {
    #[error("failed to allocate field of view buffers for a {width}x{height} grid")]
    Allocation { width: u32, height: u32 },
}
