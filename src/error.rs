use std::io;

use thiserror::Error;

/// Faults that abort a tick. Empty query results never land here; they
/// degrade into stale or degenerate slot text instead.
#[derive(Error, Debug)]
pub enum PanelError {
    #[error("panel render failed: {0}")]
    Render(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PanelError>;
