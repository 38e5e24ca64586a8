/// Constants used by the missing-value fill step.
pub mod fill {
    /// Placeholder substituted for every missing cell before any
    /// column-specific cleaning runs.
    pub const SENTINEL: &str = "Unknown";
}

/// Canonical column names produced by flattening and enrichment.
pub mod columns {
    /// Dotted column holding the issued date, from which year/month are derived.
    pub const DATE_ISSUED: &str = "date.issued";
    /// Dotted column holding the available date (coerced, no derived parts).
    pub const DATE_AVAILABLE: &str = "date.available";
    /// Free-text column fed to length derivation and TF-IDF.
    pub const DESCRIPTION: &str = "description";
    /// Prefix for derived integer year columns (`year_issued`).
    pub const YEAR_PREFIX: &str = "year_";
    /// Prefix for derived integer month columns (`month_issued`).
    pub const MONTH_PREFIX: &str = "month_";
    /// Suffix for derived character-count columns (`description_length`).
    pub const LENGTH_SUFFIX: &str = "_length";
}

/// Constants used by TF-IDF vocabulary fitting.
pub mod vectorizer {
    /// Default cap on the number of vocabulary terms.
    pub const MAX_VOCABULARY: usize = 100;
    /// Minimum token length kept by the tokenizer, in characters.
    pub const MIN_TOKEN_CHARS: usize = 2;
}

/// Constants used by min-max scaling.
pub mod scaler {
    /// Columns rescaled into `[0.0, 1.0]` when present.
    pub const SCALED_COLUMNS: [&str; 3] = ["year_issued", "month_issued", "description_length"];
}

/// Constants used by pipeline input/output paths.
pub mod io {
    /// Default line-delimited JSON input path.
    pub const DEFAULT_INPUT_PATH: &str = "./test_records.jsonl";
    /// Default CSV output path.
    pub const DEFAULT_OUTPUT_PATH: &str = "preprocessed_nasa_logs.csv";
}

/// Constants used by table previews.
pub mod preview {
    /// Number of leading rows rendered in the flattened-table preview.
    pub const PREVIEW_ROWS: usize = 5;
}
