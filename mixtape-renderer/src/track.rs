//! [`Track`] — one compiled template bound to its variables.

use std::fmt;

use minijinja::{Template, Value};

use crate::error::RenderError;

/// A compiled template plus the variables it renders with.
///
/// Immutable once built; every [`Track::render`] call evaluates the template
/// again, so helpers such as `uuid()` or `now()` yield fresh values.
pub struct Track<'lib> {
    template: Template<'lib, 'lib>,
    vars: Value,
}

impl<'lib> Track<'lib> {
    pub fn new(template: Template<'lib, 'lib>, vars: Value) -> Self {
        Track { template, vars }
    }

    /// Name the template was registered or resolved under.
    pub fn name(&self) -> &str {
        self.template.name()
    }

    pub fn vars(&self) -> &Value {
        &self.vars
    }

    /// Evaluate the template against the bound variables and the helper
    /// functions of the owning library.
    pub fn render(&self) -> Result<String, RenderError> {
        self.template
            .render(&self.vars)
            .map_err(|source| RenderError::Render { name: self.name().to_string(), source })
    }
}

impl fmt::Debug for Track<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Track")
            .field("name", &self.name())
            .field("vars", &self.vars)
            .finish()
    }
}
