//! File processing API for WKT text
//!
//! Processing is described by a `<stage>-<format>` string: the stage picks what to extract
//! (the raw token stream or the parsed shape tree), the format picks how to render it.
//!
//! # Sample Sources
//!
//! The `wkt_sources` module gives tests access to the canonical WKT samples under
//! `docs/samples/`. Tests should read those files rather than inline copies so that
//! every suite exercises the same inputs.
//!
//! ## Example Usage
//!
//! ```rust
//! use geowkt::wkt::processor::wkt_sources::WktSources;
//!
//! let content = WktSources::get_string("000-point.wkt").unwrap();
//! let json = WktSources::get_processed("040-polygon-with-hole.wkt", "shape-json").unwrap();
//! ```

use crate::wkt::ast::ShapeBuilder;
use crate::wkt::config::WktConfig;
use crate::wkt::formats::to_wkt;
use crate::wkt::lexer::{tokenize, Token};
use crate::wkt::parser::{parse, parse_with_max_depth, ParseError};
use std::fmt;
use std::fs;
use std::path::Path;

/// What data to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Shape,
}

/// How to render the extracted data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Wkt,
    Yaml,
    Debug,
}

/// A complete processing specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "shape-wkt"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "shape" => ProcessingStage::Shape,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "wkt" => OutputFormat::Wkt,
            "yaml" => OutputFormat::Yaml,
            "debug" => OutputFormat::Debug,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "Format '{}' is not supported for the {} stage",
                spec.format.name(),
                spec.stage.name()
            )));
        }
        Ok(spec)
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let token = [OutputFormat::Simple, OutputFormat::Json]
            .into_iter()
            .map(|format| ProcessingSpec {
                stage: ProcessingStage::Token,
                format,
            });
        let shape = [
            OutputFormat::Wkt,
            OutputFormat::Json,
            OutputFormat::Yaml,
            OutputFormat::Debug,
        ]
        .into_iter()
        .map(|format| ProcessingSpec {
            stage: ProcessingStage::Shape,
            format,
        });
        token.chain(shape).collect()
    }
}

impl ProcessingStage {
    fn name(self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Shape => "shape",
        }
    }
}

impl OutputFormat {
    fn name(self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Wkt => "wkt",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Debug => "debug",
        }
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage.name(), self.format.name())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    InputTooLarge { len: usize, limit: usize },
    Parse(ParseError),
    IoError(String),
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::InputTooLarge { len, limit } => write!(
                f,
                "Input too large: {} bytes exceeds the limit of {} bytes",
                len, limit
            ),
            ProcessingError::Parse(e) => write!(f, "Parse error: {}", e),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl From<ParseError> for ProcessingError {
    fn from(e: ParseError) -> Self {
        ProcessingError::Parse(e)
    }
}

/// Process WKT text according to the given specification
pub fn process_text(
    text: &str,
    spec: &ProcessingSpec,
    config: &WktConfig,
) -> Result<String, ProcessingError> {
    if config.parser.exceeds_limit(text.len()) {
        tracing::warn!(
            len = text.len(),
            limit = config.parser.max_input_bytes,
            "rejecting oversized input"
        );
        return Err(ProcessingError::InputTooLarge {
            len: text.len(),
            limit: config.parser.max_input_bytes,
        });
    }

    tracing::debug!(spec = %spec, "processing WKT text");
    match spec.stage {
        ProcessingStage::Token => {
            let tokens: Vec<Token> = tokenize(text).into_iter().map(|(t, _)| t).collect();
            format_tokens(&tokens, spec.format, config)
        }
        ProcessingStage::Shape => {
            let shape = parse_with_max_depth(text, config.parser.max_depth)?;
            format_shape(shape.as_ref(), spec.format, config)
        }
    }
}

/// Process a WKT file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    config: &WktConfig,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(
            file_path.display().to_string(),
        ));
    }

    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_text(&content, spec, config)
}

fn to_json<T: serde::Serialize + ?Sized>(
    value: &T,
    config: &WktConfig,
) -> Result<String, ProcessingError> {
    let json = if config.output.pretty_json {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| ProcessingError::IoError(e.to_string()))
}

/// Format tokens according to the specified format
fn format_tokens(
    tokens: &[Token],
    format: OutputFormat,
    config: &WktConfig,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens.iter().map(Token::to_string).collect()),
        OutputFormat::Json => to_json(tokens, config),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{} format only works with shape stage",
            other.name()
        ))),
    }
}

/// Format a parsed shape; `None` is the EMPTY geometry
fn format_shape(
    shape: Option<&ShapeBuilder>,
    format: OutputFormat,
    config: &WktConfig,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Wkt => Ok(to_wkt(shape)),
        OutputFormat::Json => to_json(&shape, config),
        OutputFormat::Yaml => {
            serde_yaml::to_string(&shape).map_err(|e| ProcessingError::IoError(e.to_string()))
        }
        OutputFormat::Debug => Ok(format!("{:#?}", shape)),
        OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
            "simple format only works with token stage".to_string(),
        )),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::to_string)
        .collect()
}

/// Sample sources module for accessing the canonical WKT sample files
pub mod wkt_sources {
    use super::*;
    use std::path::PathBuf;

    /// Available sample files (canonical sources)
    pub const AVAILABLE_SAMPLES: &[&str] = &[
        "000-point.wkt",
        "010-multipoint.wkt",
        "020-linestring.wkt",
        "030-multilinestring.wkt",
        "040-polygon-with-hole.wkt",
        "050-multipolygon.wkt",
        "060-bbox.wkt",
        "070-geometrycollection.wkt",
        "080-commented-multiline.wkt",
        "090-empty.wkt",
    ];

    /// Format options for sample content
    #[derive(Debug, Clone, PartialEq)]
    pub enum SampleFormat {
        /// Raw string content
        String,
        /// Processed content using the specified format string
        Processed(String),
    }

    /// Main interface for accessing WKT sample files
    pub struct WktSources;

    impl WktSources {
        fn samples_dir() -> PathBuf {
            Path::new(env!("CARGO_MANIFEST_DIR")).join("docs/samples")
        }

        /// Get the full path to a sample file
        pub fn sample_path(filename: &str) -> PathBuf {
            Self::samples_dir().join(filename)
        }

        fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(ProcessingError::FileNotFound(format!(
                    "Sample '{}' is not available. Available samples: {:?}",
                    filename, AVAILABLE_SAMPLES
                )));
            }
            Ok(())
        }

        /// Get sample content in the specified format
        pub fn get_sample(filename: &str, format: SampleFormat) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;

            let path = Self::sample_path(filename);
            match format {
                SampleFormat::String => fs::read_to_string(&path).map_err(|e| {
                    ProcessingError::IoError(format!("Failed to read {}: {}", path.display(), e))
                }),
                SampleFormat::Processed(format_str) => {
                    let spec = ProcessingSpec::from_string(&format_str)?;
                    let config = crate::wkt::config::load_defaults()
                        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
                    process_file(&path, &spec, &config)
                }
            }
        }

        /// Get sample content as raw string
        pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::String)
        }

        /// Get sample content processed with the specified format
        pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::Processed(format.to_string()))
        }

        /// Parse a sample into its shape tree
        pub fn get_shape(filename: &str) -> Result<Option<ShapeBuilder>, ProcessingError> {
            let content = Self::get_string(filename)?;
            Ok(parse(&content)?)
        }

        /// List all available sample files
        pub fn list_samples() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }

        /// The leading `#` comment of a sample, if any
        pub fn get_description(filename: &str) -> Result<Option<String>, ProcessingError> {
            let content = Self::get_string(filename)?;
            Ok(content
                .lines()
                .next()
                .and_then(|line| line.strip_prefix('#'))
                .map(|text| text.trim().to_string()))
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wkt::config::load_defaults;

    fn run(text: &str, format: &str) -> Result<String, ProcessingError> {
        let spec = ProcessingSpec::from_string(format).unwrap();
        process_text(text, &spec, &load_defaults().unwrap())
    }

    #[test]
    fn test_processing_spec_parsing() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Token);
        assert_eq!(spec.format, OutputFormat::Simple);

        let spec = ProcessingSpec::from_string("shape-yaml").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Shape);
        assert_eq!(spec.format, OutputFormat::Yaml);

        assert_eq!(
            ProcessingSpec::from_string("invalid"),
            Err(ProcessingError::InvalidFormat("invalid".to_string()))
        );
        assert_eq!(
            ProcessingSpec::from_string("ast-json"),
            Err(ProcessingError::InvalidStage("ast".to_string()))
        );
        assert!(ProcessingSpec::from_string("token-invalid").is_err());
        assert!(ProcessingSpec::from_string("token-wkt").is_err());
        assert!(ProcessingSpec::from_string("shape-simple").is_err());
    }

    #[test]
    fn test_token_formatting() {
        assert_eq!(
            run("POINT (1 2)", "token-simple").unwrap(),
            "<word:POINT><lparen><word:1><word:2><rparen>"
        );
        let json = run("POINT (1 2)", "token-json").unwrap();
        assert!(json.contains("\"OpenParen\""));
        assert!(json.contains("\"Word\": \"POINT\""));
    }

    #[test]
    fn test_tokens_do_not_need_valid_geometry() {
        assert_eq!(run("; )", "token-simple").unwrap(), "<other:;><rparen>");
    }

    #[test]
    fn test_shape_formats() {
        assert_eq!(run("point (30 10)", "shape-wkt").unwrap(), "POINT (30 10)");
        assert_eq!(
            run("POINT EMPTY", "shape-wkt").unwrap(),
            "GEOMETRYCOLLECTION EMPTY"
        );
        assert_eq!(run("POINT EMPTY", "shape-json").unwrap(), "null");

        let yaml = run("LINESTRING (1 2, 3 4)", "shape-yaml").unwrap();
        assert!(yaml.starts_with("type: linestring"));

        let debug = run("POINT (1 2)", "shape-debug").unwrap();
        assert!(debug.contains("PointBuilder"));
    }

    #[test]
    fn test_compact_json() {
        let mut config = load_defaults().unwrap();
        config.output.pretty_json = false;
        let spec = ProcessingSpec::from_string("shape-json").unwrap();
        assert_eq!(
            process_text("POINT (30 10)", &spec, &config).unwrap(),
            r#"{"type":"point","coordinates":[30.0,10.0]}"#
        );
    }

    #[test]
    fn test_parse_errors_surface() {
        let err = run("POINT (1 2", "shape-wkt").unwrap_err();
        match err {
            ProcessingError::Parse(e) => assert_eq!(e.message(), "expected ) but found: END-OF-STREAM"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_input_limit() {
        let mut config = load_defaults().unwrap();
        config.parser.max_input_bytes = 8;
        let spec = ProcessingSpec::from_string("shape-wkt").unwrap();
        assert_eq!(
            process_text("POINT (30 10)", &spec, &config),
            Err(ProcessingError::InputTooLarge { len: 13, limit: 8 })
        );
    }

    #[test]
    fn test_depth_limit_from_config() {
        let mut config = load_defaults().unwrap();
        config.parser.max_depth = 2;
        let spec = ProcessingSpec::from_string("shape-wkt").unwrap();

        let shallow = "GEOMETRYCOLLECTION (POINT (1 2))";
        assert_eq!(
            process_text(shallow, &spec, &config).unwrap(),
            "GEOMETRYCOLLECTION (POINT (1 2))"
        );

        let deep = "GEOMETRYCOLLECTION (GEOMETRYCOLLECTION (POINT (1 2)))";
        match process_text(deep, &spec, &config).unwrap_err() {
            ProcessingError::Parse(e) => assert_eq!(
                e.message(),
                "geometry nesting exceeds the maximum depth of 2"
            ),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let spec = ProcessingSpec::from_string("shape-wkt").unwrap();
        let err = process_file("/nonexistent/file.wkt", &spec, &load_defaults().unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            ProcessingError::FileNotFound("/nonexistent/file.wkt".to_string())
        );
    }

    #[test]
    fn test_available_formats() {
        assert_eq!(
            available_formats(),
            vec![
                "token-simple",
                "token-json",
                "shape-wkt",
                "shape-json",
                "shape-yaml",
                "shape-debug",
            ]
        );
    }
}
