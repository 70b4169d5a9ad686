use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeoWireError {
    #[error("truncated record: header declares {needed} bytes, buffer has {len}")]
    TruncatedRecord { needed: usize, len: usize },

    #[error("invalid byte order marker {value:#04x} at offset 0")]
    InvalidByteOrder { value: u8 },

    #[error("unknown geometry type {code} (type word {raw_type:#010x} at offset 1)")]
    UnknownGeometryType { code: u32, raw_type: u32 },

    #[error("unsupported coordinate dimensions ({dimensions})")]
    UnsupportedDimensions { dimensions: &'static str },
}

pub type Result<T> = std::result::Result<T, GeoWireError>;
