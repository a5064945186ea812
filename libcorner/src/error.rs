use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CornerError {
    #[error("unsupported element width: {0} bits (expected 32 or 64)")]
    UnsupportedWidth(u32),

    #[error("corner lane selector {setcorner} out of range: a {lanes}-lane pool accepts 0-{lanes}")]
    LaneOutOfRange { setcorner: u8, lanes: u8 },
}
