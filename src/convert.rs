//! COCO to Pascal VOC conversion pipeline.
//!
//! Loads `<data_dir>/annotations/instances_<data_type>.json`, then writes one
//! XML file per image into the configured output directory, reporting
//! `"<n> out of <total>"` after each image.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::ConvertConfig;
use crate::constants::{ANNOTATIONS_SUBDIR, INSTANCES_PREFIX};
use crate::format::{CocoIndex, FormatError, PascalVocWriter, output_stem};

/// Path of the COCO instances file for a split.
pub fn annotation_path(data_dir: &Path, data_type: &str) -> PathBuf {
    data_dir
        .join(ANNOTATIONS_SUBDIR)
        .join(format!("{}{}.json", INSTANCES_PREFIX, data_type))
}

/// Result of a conversion run.
#[derive(Debug, Default)]
pub struct ConvertSummary {
    /// Number of images converted.
    pub images_converted: usize,

    /// Number of annotations written as `<object>` blocks.
    pub annotations_converted: usize,

    /// Files written, in processing order.
    pub files_created: Vec<PathBuf>,
}

/// Converts a COCO annotation index into per-image XML files.
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConvertConfig,
    writer: PascalVocWriter,
}

impl Converter {
    /// Create a converter for the given settings.
    pub fn new(config: ConvertConfig) -> Self {
        let writer = PascalVocWriter::new(config.database_name.clone(), config.depth);
        Self { config, writer }
    }

    /// Convert the split `data_type` found under `data_dir`.
    ///
    /// The output directory is created before the annotation file is read,
    /// so a missing input leaves at most an empty output directory behind.
    pub fn run(
        &self,
        data_dir: &Path,
        data_type: &str,
        progress: &mut impl Write,
    ) -> Result<ConvertSummary, FormatError> {
        self.create_output_dir()?;

        let path = annotation_path(data_dir, data_type);
        let index = CocoIndex::load(&path)?;

        self.write_images(&index, progress)
    }

    /// Convert every image of an already-loaded index, creating the output
    /// directory first.
    pub fn convert(
        &self,
        index: &CocoIndex,
        progress: &mut impl Write,
    ) -> Result<ConvertSummary, FormatError> {
        self.create_output_dir()?;
        self.write_images(index, progress)
    }

    /// Write one XML file per image into the existing output directory.
    fn write_images(
        &self,
        index: &CocoIndex,
        progress: &mut impl Write,
    ) -> Result<ConvertSummary, FormatError> {
        let output_dir = &self.config.output_dir;

        let categories = index.load_categories(index.category_ids())?;
        log::debug!(
            "{} categories: {:?}",
            categories.len(),
            categories.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
        );

        let image_ids = index.image_ids();
        let total = image_ids.len();
        let mut summary = ConvertSummary::default();

        for (n, &image_id) in image_ids.iter().enumerate() {
            let images = index.load_images(&[image_id])?;
            let image = images[0];

            // Crowd annotations are kept.
            let ann_ids = index.annotation_ids(image.id, None);
            let annotations = index.load_annotations(&ann_ids)?;

            let xml = self.writer.render(image, &annotations)?;

            let stem = output_stem(&image.file_name, &self.config.image_suffix);
            let xml_path = output_dir.join(format!("{}.xml", stem));
            std::fs::write(&xml_path, xml).map_err(|e| FormatError::write_output(&xml_path, e))?;

            log::debug!(
                "Image {}: {:?} -> {:?} ({} annotations)",
                image.id,
                image.file_name,
                xml_path,
                annotations.len()
            );

            summary.images_converted += 1;
            summary.annotations_converted += annotations.len();
            summary.files_created.push(xml_path);

            writeln!(progress, "{} out of {}", n, total)?;
        }

        log::info!(
            "Converted {} images with {} annotations into {:?}",
            summary.images_converted,
            summary.annotations_converted,
            output_dir
        );

        Ok(summary)
    }

    fn create_output_dir(&self) -> Result<(), FormatError> {
        let dir = &self.config.output_dir;
        std::fs::create_dir_all(dir).map_err(|e| FormatError::write_output(dir, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_path() {
        let path = annotation_path(Path::new("/data/coco"), "val2014");
        assert_eq!(
            path,
            PathBuf::from("/data/coco/annotations/instances_val2014.json")
        );
    }
}
