//! Parsers for RTVE pages and API responses
//!
//! Contains modules for the video page (ID and title) and the subtitle catalog.

pub mod catalog;
pub mod metadata;
pub mod video_id;

pub use catalog::parse_subtitle_catalog;
pub use metadata::{
    GENERIC_BASE_FILENAME, base_filename_from_title, extract_title, parse_base_filename, slugify,
    split_episode_marker,
};
pub use video_id::parse_video_id;
