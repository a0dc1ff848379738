use std::error;
use std::fmt;

/// Which vital rate a configuration problem refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateKind {
    Survival,
    LitterSize,
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Survival => write!(f, "survival"),
            Self::LitterSize => write!(f, "litter size"),
        }
    }
}

/// Error returned when a simulation configuration fails validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The initial population vector was empty, so there are no age classes.
    NoAgeClasses,
    /// A per-class vector does not have one entry per age class.
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    /// `years` or `runs` was zero.
    ZeroCount(&'static str),
    /// A mean or standard deviation was NaN or infinite.
    NonFinite { kind: RateKind, class: usize },
    /// A survival mean fell outside `[0, 1]`.
    SurvivalOutOfRange { class: usize, mean: f64 },
    /// A standard deviation was negative.
    NegativeSd { kind: RateKind, class: usize, sd: f64 },
    /// A litter-size mean was negative.
    NegativeLitterSize { class: usize, mean: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAgeClasses => write!(f, "Initial population must define at least one age class"),
            Self::LengthMismatch {
                field,
                expected,
                found,
            } => write!(
                f,
                "Field '{field}' has {found} entries but there are {expected} age classes"
            ),
            Self::ZeroCount(field) => write!(f, "'{field}' must be greater than zero"),
            Self::NonFinite { kind, class } => {
                write!(f, "Non-finite {kind} parameter for age class {class}")
            }
            Self::SurvivalOutOfRange { class, mean } => write!(
                f,
                "Survival mean {mean} for age class {class} must be between 0.0 and 1.0"
            ),
            Self::NegativeSd { kind, class, sd } => write!(
                f,
                "Negative {kind} standard deviation {sd} for age class {class}"
            ),
            Self::NegativeLitterSize { class, mean } => {
                write!(f, "Negative litter size mean {mean} for age class {class}")
            }
        }
    }
}

impl error::Error for ConfigError {}

/// Errors that can occur during simulation building.
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderError {
    /// A required parameter is missing
    MissingRequired(&'static str),
    /// The assembled configuration is invalid
    InvalidConfig(ConfigError),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired(param) => write!(f, "Missing required parameter: {param}"),
            Self::InvalidConfig(e) => write!(f, "Invalid configuration: {e}"),
        }
    }
}

impl error::Error for BuilderError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            Self::MissingRequired(_) => None,
        }
    }
}

impl From<ConfigError> for BuilderError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}

/// Errors raised while unpacking a flat host request.
#[derive(Debug, Clone, PartialEq)]
pub enum InterfaceError {
    /// A flat rate array was not exactly two entries per age class.
    RateArrayLength {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    /// A count was negative.
    Negative { field: &'static str, value: i64 },
    /// The unpacked configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for InterfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateArrayLength {
                field,
                expected,
                found,
            } => write!(
                f,
                "'{field}' must hold means then sds ({expected} values), found {found}"
            ),
            Self::Negative { field, value } => write!(f, "'{field}' must not be negative (got {value})"),
            Self::Config(e) => write!(f, "{e}"),
        }
    }
}

impl error::Error for InterfaceError {}

impl From<ConfigError> for InterfaceError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Errors reading or writing result files.
#[derive(Debug)]
pub enum StorageError {
    /// IO error
    Io(std::io::Error),
    /// JSON (de)serialization error
    Json(serde_json::Error),
    /// The statistics block does not match the stored configuration
    ShapeMismatch {
        expected: (usize, usize, usize),
        found: (usize, usize, usize),
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::ShapeMismatch { expected, found } => write!(
                f,
                "Statistics shape {found:?} does not match configuration {expected:?}"
            ),
        }
    }
}

impl error::Error for StorageError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::ShapeMismatch { .. } => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
