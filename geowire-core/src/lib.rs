#![doc = include_str!("../../README.md")]
//! Crate-specific API surface for `geowire-core`.

pub mod byte_order;
pub mod convert;
pub mod error;
pub mod ewkb;
pub mod geom_type;
pub mod wkb;

pub use byte_order::ByteOrder;
pub use convert::{ewkb_bytes_to_wkb, ewkb_to_wkb, wkb_bytes_to_ewkb, wkb_to_ewkb};
pub use error::{GeoWireError, Result};
pub use ewkb::{decode_ewkb, encode_ewkb, EwkbRecord};
pub use wkb::{decode_wkb, encode_wkb, WkbRecord};
