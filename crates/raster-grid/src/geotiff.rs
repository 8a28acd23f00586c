//! GeoTIFF decoding into [`RasterGrid`].
//!
//! Pixel data is read with the `tiff` crate. Georeferencing comes from the
//! GeoTIFF model tags:
//!
//! - `ModelTransformationTag` (34264): a 4x4 affine matrix, used when present
//! - otherwise `ModelPixelScaleTag` (33550) + `ModelTiepointTag` (33922)
//!
//! `GDAL_NODATA` (42113) supplies the no-data sentinel.

use std::io::Cursor;

use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::Tag;
use tracing::debug;

use crate::error::{RasterError, Result};
use crate::grid::{GeoTransform, RasterGrid};

/// Decode a complete GeoTIFF payload.
///
/// Multi-sample (chunky) images are split into one band per sample.
pub fn decode_geotiff(bytes: &[u8]) -> Result<RasterGrid> {
    let mut decoder = Decoder::new(Cursor::new(bytes))?;

    let (w, h) = decoder.dimensions()?;
    let (width, height) = (w as usize, h as usize);
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidDimensions { width, height });
    }

    let transform = read_transform(&mut decoder)?;
    let nodata = read_nodata(&mut decoder)?;

    let samples = widen(decoder.read_image()?)?;
    let bands = deinterleave(samples, width, height)?;

    debug!(
        width,
        height,
        bands = bands.len(),
        origin_x = transform.origin_x,
        origin_y = transform.origin_y,
        pixel_width = transform.pixel_width,
        pixel_height = transform.pixel_height,
        nodata = ?nodata,
        "Decoded GeoTIFF"
    );

    Ok(RasterGrid::new(transform, width, height, bands)?.with_nodata(nodata))
}

fn read_transform<R: std::io::Read + std::io::Seek>(
    decoder: &mut Decoder<R>,
) -> Result<GeoTransform> {
    if let Some(value) = decoder.find_tag(Tag::ModelTransformationTag)? {
        let m = value.into_f64_vec()?;
        if m.len() < 16 {
            return Err(RasterError::invalid_georeference(format!(
                "ModelTransformationTag has {} values, expected 16",
                m.len()
            )));
        }
        if m[1] != 0.0 || m[4] != 0.0 {
            return Err(RasterError::invalid_georeference(
                "rotated rasters are not supported",
            ));
        }
        return Ok(GeoTransform::new(m[3], m[7], m[0], m[5]));
    }

    let scale = decoder
        .find_tag(Tag::ModelPixelScaleTag)?
        .map(|v| v.into_f64_vec())
        .transpose()?
        .ok_or_else(|| RasterError::missing_georeference("ModelPixelScaleTag"))?;
    let tiepoint = decoder
        .find_tag(Tag::ModelTiepointTag)?
        .map(|v| v.into_f64_vec())
        .transpose()?
        .ok_or_else(|| RasterError::missing_georeference("ModelTiepointTag"))?;

    if scale.len() < 2 || tiepoint.len() < 6 {
        return Err(RasterError::invalid_georeference(format!(
            "pixel scale has {} values, tiepoint has {}",
            scale.len(),
            tiepoint.len()
        )));
    }

    // Tiepoint maps raster (i, j) to model (x, y); move it back to pixel (0, 0).
    let (i, j, x, y) = (tiepoint[0], tiepoint[1], tiepoint[3], tiepoint[4]);
    let (sx, sy) = (scale[0], scale[1]);
    Ok(GeoTransform::new(x - i * sx, y + j * sy, sx, -sy))
}

fn read_nodata<R: std::io::Read + std::io::Seek>(
    decoder: &mut Decoder<R>,
) -> Result<Option<f64>> {
    let Some(value) = decoder.find_tag(Tag::GdalNodata)? else {
        return Ok(None);
    };
    let text = value.into_string()?;
    let text = text.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    match text.parse::<f64>() {
        Ok(v) => Ok(Some(v)),
        Err(_) => {
            debug!(nodata = text, "Ignoring unparseable GDAL_NODATA");
            Ok(None)
        }
    }
}

fn widen(result: DecodingResult) -> Result<Vec<f64>> {
    let values = match result {
        DecodingResult::U8(v) => v.into_iter().map(f64::from).collect(),
        DecodingResult::U16(v) => v.into_iter().map(f64::from).collect(),
        DecodingResult::U32(v) => v.into_iter().map(f64::from).collect(),
        DecodingResult::U64(v) => v.into_iter().map(|x| x as f64).collect(),
        DecodingResult::I8(v) => v.into_iter().map(f64::from).collect(),
        DecodingResult::I16(v) => v.into_iter().map(f64::from).collect(),
        DecodingResult::I32(v) => v.into_iter().map(f64::from).collect(),
        DecodingResult::I64(v) => v.into_iter().map(|x| x as f64).collect(),
        DecodingResult::F32(v) => v.into_iter().map(f64::from).collect(),
        DecodingResult::F64(v) => v,
        #[allow(unreachable_patterns)]
        _ => {
            return Err(RasterError::UnsupportedSampleFormat(
                "sample type cannot be widened to f64".to_string(),
            ))
        }
    };
    Ok(values)
}

/// Split chunky `[p0s0, p0s1, .., p1s0, ..]` samples into one row-major vector per band.
fn deinterleave(samples: Vec<f64>, width: usize, height: usize) -> Result<Vec<Vec<f64>>> {
    let pixels = width * height;
    if samples.is_empty() || samples.len() % pixels != 0 {
        return Err(RasterError::BandSize {
            band: 0,
            expected: pixels,
            actual: samples.len(),
        });
    }

    let per_pixel = samples.len() / pixels;
    if per_pixel == 1 {
        return Ok(vec![samples]);
    }

    let mut bands = vec![Vec::with_capacity(pixels); per_pixel];
    for chunk in samples.chunks_exact(per_pixel) {
        for (band, v) in bands.iter_mut().zip(chunk) {
            band.push(*v);
        }
    }
    Ok(bands)
}
