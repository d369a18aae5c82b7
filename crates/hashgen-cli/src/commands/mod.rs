//! Command handlers.

pub mod check;
pub mod derive;
pub mod init;
pub mod misc;
pub mod watch;

use hashgen_core::Digests;

use crate::errors::CliError;
use crate::output::render_digests;
use crate::ui::UiContext;

/// Placeholder triple shown when hashing is unavailable.
///
/// `None` for any other error, and in JSON mode where stdout stays empty and
/// the error alone is reported on stderr.
pub(crate) fn unavailable_output(ui: &UiContext, err: &anyhow::Error) -> Option<String> {
    if ui.mode.is_json() {
        return None;
    }
    let unavailable = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<CliError>())
        .any(|cause| matches!(cause, CliError::PrimitiveUnavailable(_)));
    unavailable.then(|| render_digests(ui, &Digests::empty()))
}
