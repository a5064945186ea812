pub mod corner;
pub mod error;
pub mod format;
pub mod sequence;

// re-export selected public API
pub use corner::{Corner, apply_corner32, apply_corner64};
pub use error::CornerError;
pub use sequence::{ElementWidth, assemble};
