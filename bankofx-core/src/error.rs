use std::path::PathBuf;

use thiserror::Error;

use crate::mapping::SemanticField;

/// Every way a conversion run can fail. All of them abort the run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not read input file {}", path.display())]
    InputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("row {row}: invalid {field} value {value:?}: {reason}")]
    Parse {
        row: usize,
        field: SemanticField,
        value: String,
        reason: String,
    },
    #[error("row {row}: missing column {column:?}")]
    MissingField { row: usize, column: String },
    #[error("could not parse CSV input")]
    Csv(#[from] csv::Error),
    #[error("no transactions found in input")]
    EmptyInput,
    #[error("could not write output file {}", path.display())]
    OutputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
