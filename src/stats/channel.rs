//! Per-channel mean and variance in a single pass
//!
//! Samples are brought to the 0-255 range by truncation (16-bit samples are
//! shifted right by 8), then folded into a sum and a sum of squares per
//! channel. Variance uses E[X²] - E[X]², which is stable enough for values
//! bounded by 255.

use crate::error::StatsError;
use image::{DynamicImage, GenericImageView};

pub const RED: usize = 0;
pub const GREEN: usize = 1;
pub const BLUE: usize = 2;

/// Mean and population variance of the red, green and blue channels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStats {
    /// Number of pixels the statistics were computed from (always > 0)
    pub pixel_count: u64,
    /// [R, G, B] means on the 0-255 scale
    pub mean: [f64; 3],
    /// [R, G, B] population variances
    pub variance: [f64; 3],
}

/// Running sums for one image
///
/// f64 keeps sums of squares exact well past 4096x4096 images.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelAccumulator {
    count: u64,
    sum: [f64; 3],
    sum_sq: [f64; 3],
}

impl ChannelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pixel's [R, G, B] samples (already 0-255)
    #[inline]
    pub fn push(&mut self, rgb: [u8; 3]) {
        self.count += 1;
        for (channel, &sample) in rgb.iter().enumerate() {
            let value = f64::from(sample);
            self.sum[channel] += value;
            self.sum_sq[channel] += value * value;
        }
    }

    pub fn pixel_count(&self) -> u64 {
        self.count
    }

    /// Final statistics, or `None` if no pixel was pushed
    pub fn finish(&self) -> Option<ChannelStats> {
        if self.count == 0 {
            return None;
        }

        let n = self.count as f64;
        let mut mean = [0.0; 3];
        let mut variance = [0.0; 3];
        for channel in [RED, GREEN, BLUE] {
            mean[channel] = self.sum[channel] / n;
            variance[channel] = self.sum_sq[channel] / n - mean[channel] * mean[channel];
        }

        Some(ChannelStats {
            pixel_count: self.count,
            mean,
            variance,
        })
    }
}

impl FromIterator<[u8; 3]> for ChannelAccumulator {
    fn from_iter<T: IntoIterator<Item = [u8; 3]>>(iter: T) -> Self {
        let mut acc = ChannelAccumulator::new();
        for rgb in iter {
            acc.push(rgb);
        }
        acc
    }
}

/// Truncate a 16-bit sample to 8 bits
#[inline]
fn narrow(sample: u16) -> u8 {
    (sample >> 8) as u8
}

/// Compute per-channel statistics over every pixel of a decoded image
///
/// Alpha is ignored (no premultiplication). Zero-area images are rejected
/// with [`StatsError::EmptyImage`] instead of producing NaN.
pub fn compute_stats(image: &DynamicImage) -> Result<ChannelStats, StatsError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(StatsError::EmptyImage { width, height });
    }

    let acc: ChannelAccumulator = match image {
        // 8-bit buffers are already in range
        DynamicImage::ImageRgb8(buf) => buf.pixels().map(|p| [p[0], p[1], p[2]]).collect(),
        DynamicImage::ImageRgba8(buf) => buf.pixels().map(|p| [p[0], p[1], p[2]]).collect(),
        DynamicImage::ImageRgb16(buf) => buf
            .pixels()
            .map(|p| [narrow(p[0]), narrow(p[1]), narrow(p[2])])
            .collect(),
        DynamicImage::ImageRgba16(buf) => buf
            .pixels()
            .map(|p| [narrow(p[0]), narrow(p[1]), narrow(p[2])])
            .collect(),
        // Gray, gray+alpha and float images: widen to 16-bit RGBA first
        other => other
            .to_rgba16()
            .pixels()
            .map(|p| [narrow(p[0]), narrow(p[1]), narrow(p[2])])
            .collect(),
    };

    // Non-empty dimensions guarantee at least one pixel
    acc.finish()
        .ok_or(StatsError::EmptyImage { width, height })
}
