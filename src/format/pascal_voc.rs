//! Pascal VOC XML output.
//!
//! Renders one image and its annotations into the fixed, tag-per-line XML
//! layout of the `COCO2014pascalformat` dataset. Every element value sits on
//! its own line between the start and end tags, with no indentation, no XML
//! declaration and no newline after the closing `</annotation>`.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::constants::FLAG_UNSET;
use crate::format::coco::{CocoAnnotation, CocoImage};
use crate::format::error::FormatError;

/// Writer for the `COCO2014pascalformat` XML layout.
#[derive(Debug, Clone)]
pub struct PascalVocWriter {
    database_name: String,
    depth: u32,
}

impl PascalVocWriter {
    /// Create a writer using `database_name` for `<folder>`/`<database>` and
    /// `depth` for `<depth>`.
    pub fn new(database_name: impl Into<String>, depth: u32) -> Self {
        Self {
            database_name: database_name.into(),
            depth,
        }
    }

    /// Build the XML document for `image` with one `<object>` per annotation,
    /// in the given order.
    pub fn render(
        &self,
        image: &CocoImage,
        annotations: &[&CocoAnnotation],
    ) -> Result<String, FormatError> {
        let mut writer = Writer::new(Vec::new());

        self.open(&mut writer, "annotation")?;
        self.write_text_element(&mut writer, "folder", &self.database_name)?;
        self.write_text_element(&mut writer, "filename", &image.file_name)?;

        self.open(&mut writer, "source")?;
        self.write_text_element(&mut writer, "database", &self.database_name)?;
        self.close(&mut writer, "source")?;

        self.open(&mut writer, "size")?;
        self.write_text_element(&mut writer, "width", &image.width.to_string())?;
        self.write_text_element(&mut writer, "height", &image.height.to_string())?;
        self.write_text_element(&mut writer, "depth", &self.depth.to_string())?;
        self.close(&mut writer, "size")?;

        self.write_text_element(&mut writer, "segmented", FLAG_UNSET)?;

        for ann in annotations {
            self.write_object(&mut writer, ann)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("annotation")))
            .map_err(|e| FormatError::Xml(e.into()))?;

        let result = writer.into_inner();
        String::from_utf8(result).map_err(|_| FormatError::invalid_format("Invalid UTF-8 in XML"))
    }

    /// Write one `<object>` block.
    fn write_object<W: Write>(
        &self,
        writer: &mut Writer<W>,
        ann: &CocoAnnotation,
    ) -> Result<(), FormatError> {
        let [xmin, ymin, xmax, ymax] = corners(&ann.bbox);

        self.open(writer, "object")?;
        self.write_text_element(writer, "name", &ann.category_id.to_string())?;

        self.open(writer, "bndbox")?;
        self.write_text_element(writer, "xmin", &xmin.to_string())?;
        self.write_text_element(writer, "ymin", &ymin.to_string())?;
        self.write_text_element(writer, "xmax", &xmax.to_string())?;
        self.write_text_element(writer, "ymax", &ymax.to_string())?;
        self.close(writer, "bndbox")?;

        self.write_text_element(writer, "truncated", FLAG_UNSET)?;
        self.write_text_element(writer, "difficult", FLAG_UNSET)?;
        self.close(writer, "object")
    }

    /// Write a start tag followed by a line break.
    fn open<W: Write>(&self, writer: &mut Writer<W>, name: &str) -> Result<(), FormatError> {
        writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(|e| FormatError::Xml(e.into()))?;
        self.newline(writer)
    }

    /// Write an end tag followed by a line break.
    fn close<W: Write>(&self, writer: &mut Writer<W>, name: &str) -> Result<(), FormatError> {
        writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(|e| FormatError::Xml(e.into()))?;
        self.newline(writer)
    }

    fn newline<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), FormatError> {
        writer
            .write_event(Event::Text(BytesText::new("\n")))
            .map_err(|e| FormatError::Xml(e.into()))
    }

    /// Write `<name>\nvalue\n</name>\n`.
    ///
    /// Only `&`, `<` and `>` are escaped; quotes stay as-is in text content.
    fn write_text_element<W: Write>(
        &self,
        writer: &mut Writer<W>,
        name: &str,
        value: &str,
    ) -> Result<(), FormatError> {
        writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(|e| FormatError::Xml(e.into()))?;
        let text = format!("\n{}\n", value);
        writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(&text))))
            .map_err(|e| FormatError::Xml(e.into()))?;
        self.close(writer, name)
    }
}

/// Convert a COCO `[x, y, w, h]` box into rounded `[xmin, ymin, xmax, ymax]`.
///
/// Rounds half away from zero, so `2.5` becomes `3`.
pub fn corners(bbox: &[f64; 4]) -> [i64; 4] {
    let [x, y, w, h] = *bbox;
    [
        x.round() as i64,
        y.round() as i64,
        (x + w).round() as i64,
        (y + h).round() as i64,
    ]
}

/// Output file stem: `file_name` up to the first occurrence of `suffix`.
///
/// Returns the whole name when `suffix` does not occur.
pub fn output_stem<'a>(file_name: &'a str, suffix: &str) -> &'a str {
    match file_name.find(suffix) {
        Some(pos) if !suffix.is_empty() => &file_name[..pos],
        _ => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        assert_eq!(corners(&[10.4, 20.6, 30.0, 40.0]), [10, 21, 40, 61]);
        assert_eq!(corners(&[0.0, 0.0, 0.0, 0.0]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_output_stem() {
        assert_eq!(output_stem("000001.jpg", ".jpg"), "000001");
        assert_eq!(output_stem("a.jpg.b.jpg", ".jpg"), "a");
        assert_eq!(output_stem("image.png", ".jpg"), "image.png");
    }
}
