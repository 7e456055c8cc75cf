//! Engine error types

use thiserror::Error;

use crate::registry::PopupHandle;

/// Errors surfaced by registry queries
///
/// Input feeds deliberately never error: a feed for a detached handle is
/// logged and dropped, matching how UI event streams outlive the widgets
/// they were aimed at. Queries, where the caller asked a direct question,
/// do report the miss.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PopupError {
    #[error("popup handle {0:?} is not attached")]
    Detached(PopupHandle),
}

pub type Result<T> = std::result::Result<T, PopupError>;
