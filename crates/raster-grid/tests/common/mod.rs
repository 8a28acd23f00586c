//! In-memory GeoTIFF builders for decode tests.

#![allow(dead_code)]

use std::io::Cursor;

use tiff::encoder::{colortype, TiffEncoder};
use tiff::tags::Tag;

/// Georeferencing written into a test image.
#[derive(Clone, Copy)]
pub enum Georef {
    /// ModelPixelScaleTag + ModelTiepointTag anchored at pixel (0, 0).
    ScaleTiepoint {
        origin_x: f64,
        origin_y: f64,
        dx: f64,
        dy: f64,
    },
    /// ModelTransformationTag.
    Matrix {
        origin_x: f64,
        origin_y: f64,
        dx: f64,
        dy: f64,
    },
    None,
}

/// NClimGrid-like georeferencing: 0.1 degree cells from (-83, 41).
pub const REFERENCE_GEOREF: Georef = Georef::ScaleTiepoint {
    origin_x: -83.0,
    origin_y: 41.0,
    dx: 0.1,
    dy: 0.1,
};

macro_rules! build_tiff {
    ($color:ty, $width:expr, $height:expr, $data:expr, $georef:expr, $nodata:expr) => {{
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = TiffEncoder::new(&mut buf).expect("encoder");
            let mut image = encoder
                .new_image::<$color>($width, $height)
                .expect("new image");
            for (tag, values) in $georef.tags() {
                image
                    .encoder()
                    .write_tag(tag, &values[..])
                    .expect("georef tag");
            }
            if let Some(nodata) = $nodata {
                image
                    .encoder()
                    .write_tag(Tag::GdalNodata, nodata)
                    .expect("nodata tag");
            }
            image.write_data($data).expect("write data");
        }
        buf.into_inner()
    }};
}

impl Georef {
    /// The `(tag, values)` pairs this georeferencing is written as.
    fn tags(self) -> Vec<(Tag, Vec<f64>)> {
        match self {
            Georef::ScaleTiepoint {
                origin_x,
                origin_y,
                dx,
                dy,
            } => vec![
                (Tag::ModelPixelScaleTag, vec![dx, dy, 0.0]),
                (
                    Tag::ModelTiepointTag,
                    vec![0.0, 0.0, 0.0, origin_x, origin_y, 0.0],
                ),
            ],
            Georef::Matrix {
                origin_x,
                origin_y,
                dx,
                dy,
            } => vec![(
                Tag::ModelTransformationTag,
                vec![
                    dx, 0.0, 0.0, origin_x, //
                    0.0, -dy, 0.0, origin_y, //
                    0.0, 0.0, 0.0, 0.0, //
                    0.0, 0.0, 0.0, 1.0,
                ],
            )],
            Georef::None => Vec::new(),
        }
    }
}

pub fn gray_f32(width: u32, height: u32, data: &[f32], georef: Georef, nodata: Option<&str>) -> Vec<u8> {
    build_tiff!(colortype::Gray32Float, width, height, data, georef, nodata)
}

pub fn gray_u16(width: u32, height: u32, data: &[u16], georef: Georef) -> Vec<u8> {
    build_tiff!(colortype::Gray16, width, height, data, georef, None::<&str>)
}

pub fn rgb_u8(width: u32, height: u32, data: &[u8], georef: Georef) -> Vec<u8> {
    build_tiff!(colortype::RGB8, width, height, data, georef, None::<&str>)
}
