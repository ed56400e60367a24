//! COCO JSON annotation index.
//!
//! Loads a COCO instances file (`instances_<split>.json`) into memory and
//! exposes id-based lookups for images, categories and annotations, plus the
//! image → annotation adjacency used by the converter.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::error::FormatError;

// COCO format structures

/// Top-level COCO instances document.
///
/// Only the three arrays used for conversion are required; `info` and
/// `licenses` are accepted and ignored.
#[derive(Debug, Serialize, Deserialize)]
pub struct CocoDataset {
    /// All images in the split.
    pub images: Vec<CocoImage>,
    /// All object instances in the split.
    pub annotations: Vec<CocoAnnotation>,
    /// Category definitions.
    pub categories: Vec<CocoCategory>,
}

/// An image record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoImage {
    /// Unique image ID.
    pub id: u64,
    /// File name relative to the image folder (e.g. `COCO_val2014_000000000042.jpg`).
    pub file_name: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

/// An object instance annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoAnnotation {
    /// Unique annotation ID.
    pub id: u64,
    /// ID of the image this annotation belongs to.
    pub image_id: u64,
    /// ID of the annotated category.
    pub category_id: u32,
    /// Bounding box as `[x, y, width, height]`.
    pub bbox: [f64; 4],
    /// Crowd flag; absent is treated as `0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iscrowd: Option<u8>,
}

impl CocoAnnotation {
    /// Whether this annotation is flagged as a crowd region.
    pub fn is_crowd(&self) -> bool {
        self.iscrowd.unwrap_or(0) != 0
    }
}

/// A category definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoCategory {
    /// Unique category ID.
    pub id: u32,
    /// Human-readable class name.
    pub name: String,
    /// Parent class name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supercategory: Option<String>,
}

/// In-memory index over a COCO dataset.
///
/// Built once at load time and read-only afterwards. Enumeration order of
/// images, categories and per-image annotations follows the document order.
/// When an ID appears more than once, its first position is kept in the
/// enumeration and the last record wins on lookup.
#[derive(Debug, Default)]
pub struct CocoIndex {
    image_ids: Vec<u64>,
    category_ids: Vec<u32>,
    images: HashMap<u64, CocoImage>,
    categories: HashMap<u32, CocoCategory>,
    annotations: HashMap<u64, CocoAnnotation>,
    image_to_annotations: HashMap<u64, Vec<u64>>,
}

impl CocoIndex {
    /// Load and index the COCO file at `path`.
    pub fn load(path: &Path) -> Result<Self, FormatError> {
        log::info!("Loading COCO annotations from {:?}", path);

        let file = File::open(path).map_err(|e| FormatError::read_annotations(path, e))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse and index a COCO document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, FormatError> {
        let dataset: CocoDataset = serde_json::from_reader(reader)?;
        Ok(Self::from_dataset(dataset))
    }

    /// Parse and index a COCO document from a string.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let dataset: CocoDataset = serde_json::from_str(json)?;
        Ok(Self::from_dataset(dataset))
    }

    /// Index an already-parsed dataset.
    pub fn from_dataset(dataset: CocoDataset) -> Self {
        let mut index = Self::default();

        for image in dataset.images {
            if !index.images.contains_key(&image.id) {
                index.image_ids.push(image.id);
            }
            index.images.insert(image.id, image);
        }

        for category in dataset.categories {
            if !index.categories.contains_key(&category.id) {
                index.category_ids.push(category.id);
            }
            index.categories.insert(category.id, category);
        }

        for ann in dataset.annotations {
            index
                .image_to_annotations
                .entry(ann.image_id)
                .or_default()
                .push(ann.id);
            index.annotations.insert(ann.id, ann);
        }

        log::info!(
            "Indexed {} images, {} annotations, {} categories",
            index.images.len(),
            index.annotations.len(),
            index.categories.len()
        );

        index
    }

    /// All image IDs, in document order.
    pub fn image_ids(&self) -> &[u64] {
        &self.image_ids
    }

    /// All category IDs, in document order.
    pub fn category_ids(&self) -> &[u32] {
        &self.category_ids
    }

    /// Look up categories by ID.
    pub fn load_categories(&self, ids: &[u32]) -> Result<Vec<&CocoCategory>, FormatError> {
        log::trace!("Loading {} categories", ids.len());
        ids.iter()
            .map(|&id| {
                self.categories
                    .get(&id)
                    .ok_or(FormatError::CategoryNotFound { id })
            })
            .collect()
    }

    /// Look up images by ID.
    pub fn load_images(&self, ids: &[u64]) -> Result<Vec<&CocoImage>, FormatError> {
        log::trace!("Loading images {:?}", ids);
        ids.iter()
            .map(|&id| self.images.get(&id).ok_or(FormatError::ImageNotFound { id }))
            .collect()
    }

    /// IDs of the annotations on `image_id`, in document order.
    ///
    /// `iscrowd` of `None` returns every annotation; `Some(flag)` keeps only
    /// those whose crowd flag equals `flag`.
    pub fn annotation_ids(&self, image_id: u64, iscrowd: Option<bool>) -> Vec<u64> {
        log::trace!("Annotation ids for image {} (iscrowd={:?})", image_id, iscrowd);
        let Some(ids) = self.image_to_annotations.get(&image_id) else {
            return Vec::new();
        };

        match iscrowd {
            None => ids.clone(),
            Some(flag) => ids
                .iter()
                .copied()
                .filter(|id| {
                    self.annotations
                        .get(id)
                        .is_some_and(|ann| ann.is_crowd() == flag)
                })
                .collect(),
        }
    }

    /// Look up annotations by ID.
    pub fn load_annotations(&self, ids: &[u64]) -> Result<Vec<&CocoAnnotation>, FormatError> {
        log::trace!("Loading annotations {:?}", ids);
        ids.iter()
            .map(|&id| {
                self.annotations
                    .get(&id)
                    .ok_or(FormatError::AnnotationNotFound { id })
            })
            .collect()
    }

    /// Number of indexed images.
    pub fn num_images(&self) -> usize {
        self.image_ids.len()
    }
}
