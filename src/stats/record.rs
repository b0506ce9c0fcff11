//! Per-image result record
//!
//! Serialized field names match the results.json layout consumed by the
//! texture tooling: `file_path`, `file_name`, `type`, `avg_*`, `var_*`.

use super::category::Category;
use super::channel::{compute_stats, ChannelStats, BLUE, GREEN, RED};
use crate::error::StatsError;
use image::DynamicImage;
use serde::Serialize;
use std::path::Path;

/// Statistics and tags for one decoded image
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ImageRecord {
    /// Path the image was read from, as given
    #[serde(rename = "file_path")]
    pub path: String,
    /// Display name: file stem with underscores turned into spaces
    #[serde(rename = "file_name")]
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(rename = "avg_r")]
    pub mean_r: f64,
    #[serde(rename = "avg_g")]
    pub mean_g: f64,
    #[serde(rename = "avg_b")]
    pub mean_b: f64,
    #[serde(rename = "var_r")]
    pub var_r: f64,
    #[serde(rename = "var_g")]
    pub var_g: f64,
    #[serde(rename = "var_b")]
    pub var_b: f64,
}

impl ImageRecord {
    /// Build the record for `path` from its already-decoded image
    pub fn assemble(path: &Path, image: &DynamicImage) -> Result<Self, StatsError> {
        let stats = compute_stats(image)?;
        Ok(Self::from_stats(path, &stats))
    }

    /// Build the record from precomputed statistics
    pub fn from_stats(path: &Path, stats: &ChannelStats) -> Self {
        let stem = file_stem(path);

        Self {
            path: path.to_string_lossy().to_string(),
            name: display_name(&stem),
            category: Category::classify(&stem),
            mean_r: stats.mean[RED],
            mean_g: stats.mean[GREEN],
            mean_b: stats.mean[BLUE],
            var_r: stats.variance[RED],
            var_g: stats.variance[GREEN],
            var_b: stats.variance[BLUE],
        }
    }
}

/// Base file name without its final extension
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// `redstone_lamp_on` -> `redstone lamp on`
pub fn display_name(stem: &str) -> String {
    stem.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_display_name_from_path() {
        let stem = file_stem(Path::new("public/block/redstone_lamp_on.png"));
        assert_eq!(stem, "redstone_lamp_on");
        assert_eq!(display_name(&stem), "redstone lamp on");
    }

    #[test]
    fn test_display_name_keeps_repeated_underscores_as_spaces() {
        assert_eq!(display_name("a__b"), "a  b");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_assemble_record() {
        let img = RgbImage::from_pixel(2, 2, Rgb([10, 20, 30]));
        let path = Path::new("textures/oak_log_top.png");

        let record = ImageRecord::assemble(path, &DynamicImage::ImageRgb8(img)).unwrap();

        assert_eq!(record.path, "textures/oak_log_top.png");
        assert_eq!(record.name, "oak log top");
        assert_eq!(record.category, Category::Top);
        assert_eq!((record.mean_r, record.mean_g, record.mean_b), (10.0, 20.0, 30.0));
        assert_eq!((record.var_r, record.var_g, record.var_b), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_assemble_untagged() {
        let img = RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]));
        let record =
            ImageRecord::assemble(Path::new("dirt.png"), &DynamicImage::ImageRgb8(img)).unwrap();

        assert_eq!(record.name, "dirt");
        assert_eq!(record.category, Category::None);
    }

    #[test]
    fn test_assemble_empty_image_fails() {
        let img = DynamicImage::new_rgb8(4, 0);
        let result = ImageRecord::assemble(Path::new("void_side.png"), &img);
        assert_eq!(result, Err(StatsError::EmptyImage { width: 4, height: 0 }));
    }

    #[test]
    fn test_serialized_field_names() {
        let img = RgbImage::from_pixel(1, 1, Rgb([255, 0, 0]));
        let record =
            ImageRecord::assemble(Path::new("grass_side.png"), &DynamicImage::ImageRgb8(img))
                .unwrap();

        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            ["avg_b", "avg_g", "avg_r", "file_name", "file_path", "type", "var_b", "var_g", "var_r"]
        );
        assert_eq!(object["type"], "side");
        assert_eq!(object["avg_r"], 255.0);
    }
}
