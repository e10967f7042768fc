use std::path::PathBuf;

use thiserror::Error;

use crate::widget::{WidgetId, WidgetKind};

/// Errors surfaced by the widget runtime.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("widget {0} is not registered in this tree")]
    UnknownWidget(WidgetId),

    #[error("widget {id} is a {found}, not a {expected}")]
    KindMismatch {
        id: WidgetId,
        expected: WidgetKind,
        found: WidgetKind,
    },

    #[error("the root panel cannot be removed")]
    RootRemoval,

    #[error("invalid value range {min}..={max}: min must be below max")]
    InvalidRange { min: i32, max: i32 },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UiError>;
