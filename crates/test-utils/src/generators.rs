//! Synthetic RGB image generators with verifiable pixel patterns.

/// Create an RGB byte buffer where every pixel encodes its own
/// coordinates.
///
/// Pixel (x, y) has channels `(x % 256, y % 256, (x + y) % 256)`, so a
/// test can check that a crop took the right source box by inspecting
/// any output pixel.
///
/// # Example
///
/// ```
/// use test_utils::coordinate_image;
///
/// let data = coordinate_image(4, 2);
/// assert_eq!(data.len(), 4 * 2 * 3);
/// assert_eq!(&data[0..3], &[0, 0, 0]);        // pixel (0, 0)
/// assert_eq!(&data[(4 + 1) * 3..(4 + 1) * 3 + 3], &[1, 1, 2]); // (1, 1)
/// ```
pub fn coordinate_image(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            data.push((x % 256) as u8);
            data.push((y % 256) as u8);
            data.push(((x + y) % 256) as u8);
        }
    }
    data
}

/// The expected channel triple for pixel (x, y) of a coordinate image.
pub fn coordinate_pixel(x: usize, y: usize) -> [u8; 3] {
    [(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8]
}

/// Create an RGB byte buffer filled with a single color.
pub fn solid_image(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 3);
    for _ in 0..width * height {
        data.extend_from_slice(&rgb);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_image_encodes_positions() {
        let data = coordinate_image(8, 8);
        let idx = (3 * 8 + 5) * 3; // pixel (5, 3)
        assert_eq!(&data[idx..idx + 3], &coordinate_pixel(5, 3));
    }

    #[test]
    fn test_solid_image_is_uniform() {
        let data = solid_image(3, 3, [7, 8, 9]);
        assert_eq!(data.len(), 27);
        assert!(data.chunks(3).all(|px| px == [7, 8, 9]));
    }
}
