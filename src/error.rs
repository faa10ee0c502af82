use thiserror::Error;

/// Rejected level description.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("sector {sector}: wall range {start}..{end} exceeds {wall_count} walls")]
    WallRangeOutOfBounds {
        sector: usize,
        start: usize,
        end: usize,
        wall_count: usize,
    },
    #[error("sector {sector}: wall range {start}..{end} is inverted")]
    InvertedWallRange {
        sector: usize,
        start: usize,
        end: usize,
    },
}

/// A frame that could not be rendered at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("framebuffer has {len} pixels, expected {width}x{height}")]
    FramebufferSize {
        len: usize,
        width: usize,
        height: usize,
    },
    #[error("framebuffer has zero area")]
    EmptyFramebuffer,
}
