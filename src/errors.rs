use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unsupported image layout: expected 1 or 3 channels, got {channels}")]
    UnsupportedLayout { channels: u8 },

    #[error("Cannot align an empty set of images")]
    EmptyImageSet,

    #[error("Histogram has no counts; cannot normalize bar heights")]
    EmptyHistogram,

    #[error("Invalid histogram panel: columns {start_col}..{end_col}")]
    InvalidPanel { start_col: u32, end_col: u32 },

    #[error("Invalid report style: {message}")]
    InvalidStyle { message: String },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// Returns a user-friendly error message with a hint for fixing the input
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            ReportError::UnsupportedLayout { .. } => "Convert the image to RGB or single-channel grayscale before building the report.",
            ReportError::EmptyImageSet => "Pass at least one image to align.",
            ReportError::EmptyHistogram => "The source image has no pixels. Check that it was loaded correctly.",
            ReportError::InvalidPanel { .. } => "The panel end column must not be left of its start column.",
            ReportError::InvalidStyle { .. } => "Check the report style values; scales and thicknesses must be at least 1.",
            ReportError::JsonError { .. } => "The report style JSON is malformed.",
        };

        format!("{}\n\n{}", base_message, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ReportError::UnsupportedLayout { .. } => "UNSUPPORTED_LAYOUT",
            ReportError::EmptyImageSet => "EMPTY_IMAGE_SET",
            ReportError::EmptyHistogram => "EMPTY_HISTOGRAM",
            ReportError::InvalidPanel { .. } => "INVALID_PANEL",
            ReportError::InvalidStyle { .. } => "INVALID_STYLE",
            ReportError::JsonError { .. } => "JSON_ERROR",
        }
    }
}
