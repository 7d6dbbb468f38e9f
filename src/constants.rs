//! Central constants for the sample-meta application

/// Placeholder written when a tag field cannot be found
pub const NOT_AVAILABLE: &str = r"N\A";

/// Values and labels used when reading sample tag strings
pub mod tags {
    /// Column of a source file holding the composite tag string
    pub const SAMPLE_TAGS_COLUMN: &str = "sample_tags";

    /// Separator between tag fragments
    pub const FRAGMENT_SEPARATOR: char = ',';

    /// Separator between a fragment's label and its value
    pub const VALUE_SEPARATOR: char = ':';

    pub const AGE_LABEL: &str = "Age (Range)";
    pub const SEX_LABEL: &str = "Biological Sex";
    pub const DIAGNOSIS_LABEL: &str = "Diagnosis";
    pub const SMOKING_LABEL: &str = "Smoking Status";
    pub const TISSUE_LABEL: &str = "Tissue Source";
    pub const STAGE_LABEL: &str = "stage";
}

/// Column names of the metadata table
pub mod metadata {
    pub const SAMPLE: &str = "Sample";
    pub const AGE: &str = "Age (Range)";
    pub const GENDER: &str = "Gender";
    pub const DIAGNOSIS: &str = "Diagnosis";
    pub const HAS_CANCER: &str = "hasCancer";
    pub const SMOKE_YEARS: &str = "Smoke Years";
    pub const TISSUE_SOURCE: &str = "Tissue Source";
    pub const DISEASE_STAGE: &str = "Disease Stage";

    /// Header row of the metadata table, in column order
    pub const HEADER: [&str; 8] = [
        SAMPLE,
        AGE,
        GENDER,
        DIAGNOSIS,
        HAS_CANCER,
        SMOKE_YEARS,
        TISSUE_SOURCE,
        DISEASE_STAGE,
    ];

    /// Cancer status value when a diagnosis fragment is present
    pub const CANCER_PRESENT: &str = "hasCancer";

    /// Cancer status value when no diagnosis fragment is present
    pub const CANCER_ABSENT: &str = "noCancer";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "sample-meta.yaml";

    /// Default extension of per-sample files
    pub const DEFAULT_EXTENSION: &str = "tsv";

    /// Default metadata table file name
    pub const DEFAULT_METADATA_FILE: &str = "metadata.tsv";
}

/// Delimited text format settings
pub mod tsv {
    pub const DELIMITER: u8 = b'\t';
    pub const QUOTE: u8 = b'"';
}
