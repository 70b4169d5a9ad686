//! ISO SQL/MM WKB header codec.
//!
//! Wire format:
//!   [0x01|0x00]   - byte order marker (little-endian or big-endian)
//!   [u32]         - geometry type (in the declared byte order);
//!                   Z geometries offset the base code by 1000 (1001-1007)
//!   ...           - geometry payload, opaque to this codec

use crate::byte_order::ByteOrder;
use crate::error::{GeoWireError, Result};
use crate::geom_type::{known_geom_type, WKB_GEOMETRYCOLLECTION, WKB_POINT};

/// Offset added to the core type codes for Z geometries (ISO SQL/MM).
pub const WKB_Z_OFFSET: u32 = 1000;

/// Decoded ISO WKB record: header fields plus the untouched payload.
///
/// Immutable value object. Built by [`decode_wkb`] or by field assignment,
/// consumed by [`encode_wkb`] or by the converters in [`crate::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WkbRecord<'a> {
    /// Byte order governing every multi-byte field of this record.
    pub byte_order: ByteOrder,
    /// Base geometry type code (1=Point, 2=LineString, ..., Z offset removed).
    pub geom_type: u32,
    /// Whether the type word carried the +1000 Z offset.
    pub has_z: bool,
    /// Geometry body following the header, never interpreted.
    pub payload: &'a [u8],
}

/// Decode the 5-byte ISO WKB header and borrow the remaining payload.
///
/// Only the +1000 Z window over the seven core codes (1001-1007) is
/// recognized as an ISO offset; +2000 (M) and +3000 (ZM) type words are
/// rejected as unknown.
///
/// # Example
///
/// ```
/// use geowire_core::geom_type::WKB_POINT;
/// use geowire_core::wkb::decode_wkb;
///
/// let mut buf = vec![0x01];
/// buf.extend_from_slice(&WKB_POINT.to_le_bytes());
/// buf.extend_from_slice(&1.0f64.to_le_bytes());
/// buf.extend_from_slice(&2.0f64.to_le_bytes());
///
/// let record = decode_wkb(&buf).unwrap();
/// assert_eq!(record.geom_type, WKB_POINT);
/// assert_eq!(record.payload.len(), 16);
/// ```
pub fn decode_wkb(buf: &[u8]) -> Result<WkbRecord<'_>> {
    if buf.len() < 5 {
        return Err(GeoWireError::TruncatedRecord {
            needed: 5,
            len: buf.len(),
        });
    }

    let byte_order = ByteOrder::from_marker(buf[0])?;
    let raw_type = byte_order.decode_u32([buf[1], buf[2], buf[3], buf[4]]);

    let has_z =
        (WKB_POINT + WKB_Z_OFFSET..=WKB_GEOMETRYCOLLECTION + WKB_Z_OFFSET).contains(&raw_type);
    let geom_type = if has_z {
        raw_type - WKB_Z_OFFSET
    } else {
        raw_type
    };
    if !known_geom_type(geom_type) {
        return Err(GeoWireError::UnknownGeometryType {
            code: geom_type,
            raw_type,
        });
    }

    Ok(WkbRecord {
        byte_order,
        geom_type,
        has_z,
        payload: &buf[5..],
    })
}

/// Encode a record back to ISO WKB bytes.
///
/// The payload is copied verbatim; output length is always payload + 5.
/// A `has_z` record re-applies the +1000 offset, so only core-code records
/// produce a type word [`decode_wkb`] recognizes as Z.
pub fn encode_wkb(record: &WkbRecord<'_>) -> Vec<u8> {
    let type_word = if record.has_z {
        record.geom_type + WKB_Z_OFFSET
    } else {
        record.geom_type
    };

    let mut out = Vec::with_capacity(5 + record.payload.len());
    out.push(record.byte_order.marker());
    out.extend_from_slice(&record.byte_order.encode_u32(type_word));
    out.extend_from_slice(record.payload);
    out
}
