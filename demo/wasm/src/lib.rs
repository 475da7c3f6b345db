use wasm_bindgen::prelude::*;

use heatmap_tiles::{render_paths, tile_bounds, HeatmapError, TileCoord};

mod decode;

fn js_error(message: impl AsRef<str>) -> JsValue {
    js_sys::Error::new(message.as_ref()).into()
}

fn to_js(e: HeatmapError) -> JsValue {
    js_error(e.to_string())
}

/// Geographic box `[west, south, east, north]` the host must fetch paths for
/// before calling [`render_tile`] with the same tile and line width.
#[wasm_bindgen]
pub fn tile_bbox(x: f64, y: f64, z: f64, line_width: f64) -> Result<Vec<f64>, JsValue> {
    let tile = TileCoord::from_f64(x, y, z).map_err(to_js)?;
    let options = decode::decode_options(1.0, line_width, &[]).map_err(js_error)?;
    options.validate().map_err(to_js)?;
    Ok(tile_bounds(tile, options.padding()).to_array().to_vec())
}

/// Render one heatmap tile into an RGBA pixel buffer.
///
/// `coords` holds interleaved `lon, lat` pairs for all paths back to back,
/// `path_lengths` the number of positions in each path. `gradient` holds
/// RGBA quadruples, or nothing for the default ramp. Returns 256 * 256 * 4
/// bytes, ready for an `ImageData`.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn render_tile(
    x: f64,
    y: f64,
    z: f64,
    coords: &[f64],
    path_lengths: &[u32],
    value_for_max_color: f64,
    line_width: f64,
    gradient: &[u8],
) -> Result<Vec<u8>, JsValue> {
    let tile = TileCoord::from_f64(x, y, z).map_err(to_js)?;
    let options =
        decode::decode_options(value_for_max_color, line_width, gradient).map_err(js_error)?;
    let paths = decode::decode_paths(coords, path_lengths).map_err(js_error)?;
    let buf = render_paths(&paths, tile, &options).map_err(to_js)?;
    Ok(buf.into_vec())
}

/// Get the library version string.
#[wasm_bindgen]
pub fn version() -> String {
    concat!("heatmap-tiles ", env!("CARGO_PKG_VERSION")).to_string()
}
