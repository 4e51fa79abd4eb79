//! Error handling and exit codes.

use benchplot_core::constants::exit_codes;
use benchplot_core::PlotError;

/// Exit code for an error returned by [`crate::app::run`].
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PlotError>() {
        Some(PlotError::Config(_) | PlotError::InvalidMode(_)) => exit_codes::ERROR_CONFIG,
        Some(PlotError::Parse { .. } | PlotError::Io { .. } | PlotError::Render(_)) | None => {
            exit_codes::ERROR_GENERIC
        }
    }
}
