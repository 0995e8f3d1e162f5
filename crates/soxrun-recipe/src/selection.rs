//! Sequential processing of a host selection.

use tracing::{info, warn};

use crate::command::{CommandBuilder, InvocationRequest};
use crate::error::{RecipeError, RecipeResult};
use crate::host::{Host, Severity};
use crate::operation::Operation;

/// Outcome of one pass over the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Requests handed to the executor, in order.
    pub submitted: Vec<InvocationRequest>,
    /// Set when processing stopped early.
    pub aborted: Option<RecipeError>,
}

impl BatchReport {
    /// Returns true if every selected file was submitted.
    pub fn is_complete(&self) -> bool {
        self.aborted.is_none()
    }
}

/// Applies `operation` to every selected file, in order.
///
/// Stops at the first file that does not exist, leaving the rest
/// unprocessed; files already submitted are not undone. Marks are cleared
/// exactly once either way.
pub fn process_selection<H: Host + ?Sized>(
    host: &mut H,
    operation: Operation,
    builder: &CommandBuilder,
) -> BatchReport {
    let mut report = BatchReport::default();

    for path in host.selection() {
        let request = match builder.build(operation, &path) {
            Ok(request) => request,
            Err(err) => {
                host.notify(&err.to_string(), Severity::Bad);
                report.aborted = Some(err);
                break;
            }
        };

        host.notify(
            &format!("Executing: {}", request.command_line),
            Severity::Normal,
        );
        info!(%operation, input = %path.display(), "dispatching");

        if let Err(err) = host.execute(&request.command_line, builder.options()) {
            warn!(command = %request.command_line, error = %err, "failed to dispatch command");
        }
        report.submitted.push(request);
    }

    host.clear_marks();
    report
}

/// Like [`process_selection`], resolving the operation by name first.
///
/// An unknown name fails before the host is touched.
pub fn process_selection_named<H: Host + ?Sized>(
    host: &mut H,
    operation_name: &str,
    builder: &CommandBuilder,
) -> RecipeResult<BatchReport> {
    let operation = Operation::from_name(operation_name)?;
    Ok(process_selection(host, operation, builder))
}
