//! coco2pascal - COCO to Pascal VOC annotation converter
//!
//! Reads a COCO instances file and writes one Pascal VOC style XML file per
//! image, in the layout of the `COCO2014pascalformat` dataset.

pub mod config;
pub mod constants;
pub mod convert;
pub mod format;

pub use config::{ConvertConfig, LogLevel};
pub use convert::{ConvertSummary, Converter, annotation_path};
pub use format::FormatError;
