/// Output rendering: one pure entry point from a typed response to bytes.
///
/// Each response type states which strategies it implements through the
/// `Renderable` accessors; `render` matches the requested format against them
/// and fails before producing any output if the capability is absent.
pub mod errors;
pub mod format;
pub mod query;
pub mod table;
pub mod text;
pub mod tree;

pub use errors::RenderError;
pub use format::{OutputFormat, RenderRequest};
pub use table::{Column, Row, TableView};
pub use text::{Field, TextView};
pub use tree::TreeView;

use tracing::debug;

/// A response value that supports one or more output formats.
pub trait Renderable {
    /// Type name used in error messages.
    fn type_name(&self) -> &'static str;

    /// Table capability.
    fn as_table(&self) -> Option<&dyn TableView> {
        None
    }

    /// Text capability.
    fn as_text(&self) -> Option<&dyn TextView> {
        None
    }

    /// JSON/YAML capability. YAML is always derived from the JSON tree.
    fn as_tree(&self) -> Option<&dyn TreeView> {
        None
    }
}

/// The formats a renderable type supports, known without a value in hand.
///
/// Commands check this before reading any input. `FORMATS` must agree with
/// the `as_*` accessors the type overrides.
pub trait Capabilities: Renderable {
    /// Name used in error messages.
    const TYPE_NAME: &'static str;

    /// Supported formats, in flag-help order.
    const FORMATS: &'static [OutputFormat];
}

/// Fail fast if `R` cannot be rendered as `format`.
///
/// # Errors
///
/// Returns `RenderError::CapabilityMissing` if `format` is not in `R::FORMATS`.
pub fn ensure_supported<R: Capabilities>(format: OutputFormat) -> Result<(), RenderError> {
    if R::FORMATS.contains(&format) {
        Ok(())
    } else {
        Err(RenderError::CapabilityMissing {
            type_name: R::TYPE_NAME,
            format,
        })
    }
}

/// Render `value` according to `request`.
///
/// All-or-nothing: on error no bytes are returned.
///
/// # Errors
///
/// - `RenderError::QueryNotApplicable` for a query with `table`/`text`.
/// - `RenderError::CapabilityMissing` if `value` lacks the requested format.
/// - `RenderError::Query` if the query fails to compile or evaluate.
/// - `RenderError::Encoding` if JSON/YAML encoding fails.
pub fn render(value: &dyn Renderable, request: &RenderRequest) -> Result<Vec<u8>, RenderError> {
    request.validate()?;

    let missing = || RenderError::CapabilityMissing {
        type_name: value.type_name(),
        format: request.format,
    };

    debug!(
        type_name = value.type_name(),
        format = %request.format,
        query = request.query.as_deref(),
        "rendering"
    );

    let out = match request.format {
        OutputFormat::Table => table::write_table(value.as_table().ok_or_else(missing)?),
        OutputFormat::Text => text::write_text(value.as_text().ok_or_else(missing)?),
        OutputFormat::Json => {
            let view = value.as_tree().ok_or_else(missing)?;
            tree::encode_json(&tree::filtered_tree(view, request.query.as_deref())?)?
        }
        OutputFormat::Yaml => {
            let view = value.as_tree().ok_or_else(missing)?;
            tree::encode_yaml(&tree::filtered_tree(view, request.query.as_deref())?)?
        }
    };

    Ok(out.into_bytes())
}
