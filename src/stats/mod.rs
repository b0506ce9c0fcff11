//! Image statistics core
//!
//! This module handles:
//! - Orientation tagging from file names (category.rs)
//! - Single-pass per-channel mean/variance (channel.rs)
//! - Shaping both into the per-image output record (record.rs)
//!
//! Nothing here touches the filesystem; callers hand in decoded images.

pub mod category;
pub mod channel;
pub mod record;

pub use category::{classify, Category};
pub use channel::{compute_stats, ChannelAccumulator, ChannelStats};
pub use record::ImageRecord;
