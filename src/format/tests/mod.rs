//! Unit tests for the COCO index and the Pascal VOC writer.
