//! Conversion between the ISO WKB and PostGIS EWKB header flavors.
//!
//! Both directions rewrite only the header; the geometry payload passes
//! through byte-for-byte.

use crate::error::{GeoWireError, Result};
use crate::ewkb::{decode_ewkb, encode_ewkb, EwkbRecord};
use crate::wkb::{decode_wkb, encode_wkb, WkbRecord};

fn dimensions_label(has_z: bool, has_m: bool) -> &'static str {
    match (has_z, has_m) {
        (true, true) => "ZM",
        (true, false) => "Z",
        (false, true) => "M",
        (false, false) => "XY",
    }
}

/// Re-tag an ISO WKB record as EWKB.
///
/// SRID 0 is the "no SRID" convention: the SRID field is written only for a
/// non-zero value. ISO WKB as modeled here carries no M signal, so the result
/// never has the M flag.
///
/// # Example
///
/// ```
/// use geowire_core::convert::wkb_to_ewkb;
/// use geowire_core::wkb::decode_wkb;
///
/// let mut buf = vec![0x01];
/// buf.extend_from_slice(&1u32.to_le_bytes());
/// buf.extend_from_slice(&1.0f64.to_le_bytes());
/// buf.extend_from_slice(&2.0f64.to_le_bytes());
///
/// let wkb = decode_wkb(&buf).unwrap();
/// assert_eq!(wkb_to_ewkb(&wkb, 4326).srid, Some(4326));
/// assert_eq!(wkb_to_ewkb(&wkb, 0).srid, None);
/// ```
pub fn wkb_to_ewkb<'a>(record: &WkbRecord<'a>, srid: u32) -> EwkbRecord<'a> {
    EwkbRecord {
        byte_order: record.byte_order,
        geom_type: record.geom_type,
        has_z: record.has_z,
        has_m: false,
        srid: (srid != 0).then_some(srid),
        payload: record.payload,
    }
}

/// Re-tag an EWKB record as ISO WKB, dropping the SRID.
///
/// Fails when the record carries the M flag: the ISO type-code scheme used
/// here has no slot for M, and dropping the ordinate silently would
/// misrepresent the record.
pub fn ewkb_to_wkb<'a>(record: &EwkbRecord<'a>) -> Result<WkbRecord<'a>> {
    if record.has_m {
        return Err(GeoWireError::UnsupportedDimensions {
            dimensions: dimensions_label(record.has_z, record.has_m),
        });
    }
    Ok(WkbRecord {
        byte_order: record.byte_order,
        geom_type: record.geom_type,
        has_z: record.has_z,
        payload: record.payload,
    })
}

/// Convert an ISO WKB blob to EWKB bytes in one call.
///
/// # Example
///
/// ```
/// use geowire_core::convert::wkb_bytes_to_ewkb;
/// use geowire_core::ewkb::extract_srid;
///
/// let mut wkb = vec![0x01];
/// wkb.extend_from_slice(&1u32.to_le_bytes());
/// wkb.extend_from_slice(&1.0f64.to_le_bytes());
/// wkb.extend_from_slice(&2.0f64.to_le_bytes());
///
/// let ewkb = wkb_bytes_to_ewkb(&wkb, 3857).unwrap();
/// assert_eq!(extract_srid(&ewkb), Some(3857));
/// ```
pub fn wkb_bytes_to_ewkb(wkb: &[u8], srid: u32) -> Result<Vec<u8>> {
    let record = decode_wkb(wkb)?;
    Ok(encode_ewkb(&wkb_to_ewkb(&record, srid)))
}

/// Convert an EWKB blob to ISO WKB bytes in one call (strips the SRID).
pub fn ewkb_bytes_to_wkb(ewkb: &[u8]) -> Result<Vec<u8>> {
    let record = decode_ewkb(ewkb)?;
    Ok(encode_wkb(&ewkb_to_wkb(&record)?))
}
