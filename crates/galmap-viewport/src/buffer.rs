//! RGB pixel buffers and integer-pixel box operations.

use galmap_common::Rot90;

/// An owned RGB8 image buffer in row-major order.
///
/// All cropping in the viewport pipelines is integer-pixel box
/// extraction on these buffers; there is no resampling anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// A zero-filled (black) buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }

    /// A buffer with every channel set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            data: vec![value; width * height * 3],
            width,
            height,
        }
    }

    /// Wrap an existing row-major RGB byte vector.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), width * height * 3, "raw buffer length mismatch");
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw channel data, row-major RGB.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// The RGB triple at (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = (y * self.width + x) * 3;
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    /// Extract the box `[x0, x1) x [y0, y1)`, clamped to the buffer.
    ///
    /// Ranges that fall outside the buffer (or are inverted) produce a
    /// degenerate, possibly empty buffer rather than an error.
    pub fn slice(&self, x0: i64, x1: i64, y0: i64, y1: i64) -> PixelBuffer {
        let cx0 = x0.clamp(0, self.width as i64) as usize;
        let cx1 = x1.clamp(0, self.width as i64) as usize;
        let cy0 = y0.clamp(0, self.height as i64) as usize;
        let cy1 = y1.clamp(0, self.height as i64) as usize;

        if cx1 <= cx0 || cy1 <= cy0 {
            return PixelBuffer::new(0, 0);
        }

        let out_w = cx1 - cx0;
        let out_h = cy1 - cy0;
        let mut data = Vec::with_capacity(out_w * out_h * 3);
        for y in cy0..cy1 {
            let start = (y * self.width + cx0) * 3;
            data.extend_from_slice(&self.data[start..start + out_w * 3]);
        }
        PixelBuffer::from_raw(out_w, out_h, data)
    }

    /// Copy all of `src` into this buffer with its top-left corner at
    /// `(dest_x, dest_y)`. The source must fit.
    pub fn copy_from(&mut self, src: &PixelBuffer, dest_x: usize, dest_y: usize) {
        if src.is_empty() {
            return;
        }
        assert!(dest_x + src.width <= self.width && dest_y + src.height <= self.height);
        for y in 0..src.height {
            let src_start = y * src.width * 3;
            let dst_start = ((dest_y + y) * self.width + dest_x) * 3;
            self.data[dst_start..dst_start + src.width * 3]
                .copy_from_slice(&src.data[src_start..src_start + src.width * 3]);
        }
    }

    /// Rotate counter-clockwise by the given number of quarter turns,
    /// producing a new buffer. Odd turns swap width and height.
    pub fn rot90(&self, rot: Rot90) -> PixelBuffer {
        let mut out = self.clone();
        for _ in 0..rot.steps() {
            out = out.quarter_turn();
        }
        out
    }

    /// One 90-degree counter-clockwise turn: output (i, j) reads input
    /// row j, column (width - 1 - i).
    fn quarter_turn(&self) -> PixelBuffer {
        let out_w = self.height;
        let out_h = self.width;
        let mut out = PixelBuffer::new(out_w, out_h);
        for i in 0..out_h {
            for j in 0..out_w {
                out.set_pixel(j, i, self.pixel(self.width - 1 - i, j));
            }
        }
        out
    }
}
