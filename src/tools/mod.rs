//! Helpers around the row decoder: image loading, whole-image row scanning and
//! synthetic symbols. These sit outside the decoder proper and make the
//! caller-level choices (which rows, which families, in what order).

pub mod synth;

use std::path::Path;

use rayon::prelude::*;
use thiserror::Error;

use crate::decoder::config::DecodeHints;
use crate::decoder::formats::UpcEanFormat;
use crate::decoder::reader::UpcEanReader;
use crate::detector::guard::find_start_guard_pattern;
use crate::error::DecodeError;
use crate::models::{RowSignal, UpcEanResult};
use crate::utils::binarization::otsu_binarize_row;

/// Failures of the tooling layer
#[derive(Debug, Error)]
pub enum ToolError {
    /// The image could not be opened, decoded or written
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    /// Pixel buffer does not match the stated dimensions
    #[error("buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize {
        /// width * height
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },
    /// A symbol could not be synthesized
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Owned 8-bit grayscale image, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaImage {
    /// Pixels, `width * height` bytes
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl LumaImage {
    /// Wrap a buffer, checking its length
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> Result<Self, ToolError> {
        if data.len() != width * height {
            return Err(ToolError::BufferSize {
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self { data, width, height })
    }

    /// Pixels of row `y`, or `None` past the last row
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }

    /// Stack `height` copies of one luminance row
    pub fn from_repeated_row(row: &[u8], height: usize) -> Self {
        let mut data = Vec::with_capacity(row.len() * height);
        for _ in 0..height {
            data.extend_from_slice(row);
        }
        Self {
            data,
            width: row.len(),
            height,
        }
    }
}

/// Load any format the `image` crate understands as grayscale
pub fn load_luma<P: AsRef<Path>>(path: P) -> Result<LumaImage, ToolError> {
    let gray = image::open(path)?.to_luma8();
    let (width, height) = gray.dimensions();
    Ok(LumaImage {
        data: gray.into_raw(),
        width: width as usize,
        height: height as usize,
    })
}

/// Save a grayscale image; the format follows the file extension
pub fn save_luma<P: AsRef<Path>>(path: P, img: &LumaImage) -> Result<(), ToolError> {
    let buffer = image::GrayImage::from_raw(img.width as u32, img.height as u32, img.data.clone())
        .ok_or(ToolError::BufferSize {
            expected: img.width * img.height,
            actual: img.data.len(),
        })?;
    buffer.save(path)?;
    Ok(())
}

/// A decode found while scanning an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanHit {
    /// Image row the symbol was read from
    pub row: usize,
    /// True if the row was read right to left; spans are then in mirrored coordinates
    pub reversed: bool,
    /// The decode itself
    pub result: UpcEanResult,
}

/// Rows to try, starting at the middle and alternating below and above it
pub fn scan_order(height: usize, try_harder: bool) -> Vec<usize> {
    if height == 0 {
        return Vec::new();
    }
    let middle = height / 2;
    let step = (height >> if try_harder { 8 } else { 5 }).max(1);
    let max_lines = if try_harder { height } else { 15 };

    let mut rows = Vec::new();
    for x in 0..max_lines {
        let steps_away = (x + 1) / 2;
        let offset = steps_away * step;
        let y = if x % 2 == 0 {
            middle.checked_add(offset)
        } else {
            middle.checked_sub(offset)
        };
        match y {
            Some(y) if y < height => rows.push(y),
            _ => break,
        }
    }
    rows
}

/// Find the start guard once and try each family on it
pub fn decode_line(
    row: &RowSignal,
    formats: &[UpcEanFormat],
    hints: &DecodeHints,
) -> Option<UpcEanResult> {
    let start = find_start_guard_pattern(row, &hints.tolerances()).ok()?;
    formats
        .iter()
        .find_map(|&format| UpcEanReader::new(format).decode_row_with_start(row, start, hints).ok())
}

/// Scan an image row by row and return the first decode in scan order
///
/// Rows are decoded in parallel; the result does not depend on thread timing.
/// With `try_harder`, rows are taken every `height / 256` pixels (every row for
/// images under 512 px) out to both edges, and each row is also read reversed.
pub fn scan_image(img: &LumaImage, formats: &[UpcEanFormat], hints: &DecodeHints) -> Option<ScanHit> {
    let rows = scan_order(img.height, hints.try_harder);
    let hit = rows.par_iter().find_map_first(|&y| {
        let signal = otsu_binarize_row(img.row(y)?);
        if let Some(result) = decode_line(&signal, formats, hints) {
            return Some(ScanHit {
                row: y,
                reversed: false,
                result,
            });
        }
        if !hints.try_harder {
            return None;
        }
        decode_line(&signal.reversed(), formats, hints).map(|result| ScanHit {
            row: y,
            reversed: true,
            result,
        })
    });

    match &hit {
        Some(h) => tracing::debug!(row = h.row, reversed = h.reversed, text = %h.result.text, "scan hit"),
        None => tracing::debug!(rows = rows.len(), "scan found nothing"),
    }
    hit
}
