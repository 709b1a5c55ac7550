//! Title decorator hook

use crate::error::{BoxError, Error, Result};

/// Type-erased decorator: path in, extra label text out
pub type DecoratorFn<'d> = dyn Fn(&str) -> std::result::Result<String, BoxError> + 'd;

/// Query the decorator for `path`, if one is set.
///
/// Errors are wrapped as `DecoratorFailure` with the original error kept as
/// the source; the call is never retried.
pub fn decorate(decorator: Option<&DecoratorFn<'_>>, path: &str) -> Result<String> {
    match decorator {
        Some(decorator) => decorator(path).map_err(|source| Error::decorator(path, source)),
        None => Ok(String::new()),
    }
}

/// Append `decoration` to `label`, space separated, when it is non-empty
pub fn append_decoration(label: &mut String, decoration: &str) {
    if !decoration.is_empty() {
        label.push(' ');
        label.push_str(decoration);
    }
}
