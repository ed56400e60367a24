//! Fixed constants for the COCO to Pascal VOC conversion

/// Directory (relative to the working directory) that receives the XML files
pub const OUTPUT_DIR: &str = "annotations_pascalformat";

/// Subdirectory of the data directory holding the COCO annotation files
pub const ANNOTATIONS_SUBDIR: &str = "annotations";

/// Prefix of the COCO instances file name, followed by the split name
pub const INSTANCES_PREFIX: &str = "instances_";

/// Image suffix stripped from `file_name` to get the output stem
pub const IMAGE_SUFFIX: &str = ".jpg";

/// Label written to both `<folder>` and `<database>`
pub const DATABASE_NAME: &str = "COCO2014pascalformat";

/// Value of `<depth>`
pub const IMAGE_DEPTH: u32 = 3;

/// Value of `<segmented>`, `<truncated>` and `<difficult>`
pub const FLAG_UNSET: &str = "0";
