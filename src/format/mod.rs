//! Annotation format reading and writing.
//!
//! ## Formats
//!
//! - **COCO JSON** (input): instances file indexed in memory by [`CocoIndex`]
//! - **Pascal VOC XML** (output): one tag-per-line document per image,
//!   rendered by [`PascalVocWriter`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use coco2pascal::format::{CocoIndex, PascalVocWriter};
//!
//! let index = CocoIndex::load(path)?;
//! let writer = PascalVocWriter::new("COCO2014pascalformat", 3);
//! for image in index.load_images(index.image_ids())? {
//!     let anns = index.load_annotations(&index.annotation_ids(image.id, None))?;
//!     let xml = writer.render(image, &anns)?;
//! }
//! ```

mod coco;
mod error;
mod pascal_voc;

#[cfg(test)]
mod tests;

pub use coco::{CocoAnnotation, CocoCategory, CocoDataset, CocoImage, CocoIndex};
pub use error::FormatError;
pub use pascal_voc::{PascalVocWriter, corners, output_stem};
