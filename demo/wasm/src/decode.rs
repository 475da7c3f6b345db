//! Decoding of the flat arrays handed over from JavaScript.
//!
//! Typed arrays are the cheapest way across the boundary, so paths arrive as
//! one `Float64Array` of interleaved `lon, lat` pairs plus a `Uint32Array` of
//! per-path position counts, and gradient stops as a `Uint8Array` of RGBA
//! quadruples.

use heatmap_tiles::{GeoPath, RenderingOptions, Rgba8};

/// Split `coords` into paths of `path_lengths` positions each.
pub fn decode_paths(coords: &[f64], path_lengths: &[u32]) -> Result<Vec<GeoPath>, String> {
    let total: usize = path_lengths.iter().map(|&n| n as usize).sum();
    if total * 2 != coords.len() {
        return Err(format!(
            "path lengths add up to {} positions but {} coordinates were given",
            total,
            coords.len()
        ));
    }

    let mut rest = coords;
    let mut paths = Vec::with_capacity(path_lengths.len());
    for &n in path_lengths {
        let (head, tail) = rest.split_at(n as usize * 2);
        paths.push(head.chunks_exact(2).map(|c| [c[0], c[1]]).collect());
        rest = tail;
    }
    Ok(paths)
}

/// Options from the scalar arguments; an empty `gradient` keeps the default
/// ramp.
pub fn decode_options(
    value_for_max_color: f64,
    line_width: f64,
    gradient: &[u8],
) -> Result<RenderingOptions, String> {
    let mut options = RenderingOptions::default()
        .with_value_for_max_color(value_for_max_color)
        .with_line_width(line_width);
    if !gradient.is_empty() {
        if gradient.len() % 4 != 0 {
            return Err(format!(
                "gradient must hold RGBA quadruples, got {} bytes",
                gradient.len()
            ));
        }
        options.gradient_colors = gradient
            .chunks_exact(4)
            .map(|c| Rgba8::new(c[0], c[1], c[2], c[3]))
            .collect();
    }
    Ok(options)
}
