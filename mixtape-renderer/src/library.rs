//! Template library — a minijinja environment bound to a template search path.
//!
//! File templates are resolved lazily by name: each directory of the search
//! path is tried in order and the first regular file found wins. Inline
//! templates are registered up front under synthetic names.
//!
//! Every environment built here shares the same settings:
//! - undefined variables are an error (`UndefinedBehavior::Strict`);
//! - no auto-escaping, whatever the template extension;
//! - the helpers from [`crate::functions`] are registered as globals.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use mixtape_core::types::{TrackSource, Vars};

use crate::error::RenderError;
use crate::functions;
use crate::track::Track;

// ---------------------------------------------------------------------------
// Template naming
// ---------------------------------------------------------------------------

/// Template name for a file track: the relative path with `/` separators.
pub fn file_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Template name for the inline track at `index`.
pub fn inline_template_name(index: usize) -> String {
    format!("{INLINE_NAME_PREFIX}{index}>")
}

/// Inline names start with `<`; file names never may, so the two cannot
/// collide in the environment.
const INLINE_NAME_PREFIX: &str = "<inline #";

/// Rejects absolute names and `..` segments so lookups stay inside the
/// search path directories.
fn relative_template_path(name: &str) -> Option<PathBuf> {
    let path = Path::new(name);
    let mut rel = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => rel.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if rel.as_os_str().is_empty() {
        None
    } else {
        Some(rel)
    }
}

// ---------------------------------------------------------------------------
// Search path loader
// ---------------------------------------------------------------------------

fn search_path_loader(
    dirs: Vec<PathBuf>,
) -> impl Fn(&str) -> Result<Option<String>, minijinja::Error> + Send + Sync + 'static {
    move |name| {
        let Some(rel) = relative_template_path(name) else {
            return Ok(None);
        };
        for dir in &dirs {
            let path = dir.join(&rel);
            if !path.is_file() {
                continue;
            }
            match std::fs::read_to_string(&path) {
                Ok(source) => return Ok(Some(source)),
                // raced with a delete; keep searching
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(minijinja::Error::new(
                        minijinja::ErrorKind::InvalidOperation,
                        format!("could not read template file {}", path.display()),
                    )
                    .with_source(e))
                }
            }
        }
        Ok(None)
    }
}

// ---------------------------------------------------------------------------
// TemplateLibrary
// ---------------------------------------------------------------------------

/// Owns the rendering environment; hands out [`Track`]s that borrow it.
pub struct TemplateLibrary {
    env: Environment<'static>,
    search_path: Vec<PathBuf>,
}

impl TemplateLibrary {
    /// Build a library searching `search_path` in order for file templates.
    pub fn new(search_path: &[PathBuf]) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_loader(search_path_loader(search_path.to_vec()));
        functions::register(&mut env);
        TemplateLibrary { env, search_path: search_path.to_vec() }
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Compile an inline template and register it under `name`.
    pub fn add_inline(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
            .map_err(|source| RenderError::Load { name: name.to_string(), source })
    }

    /// Register every inline source of `sources`, named by position.
    ///
    /// Must run before [`TemplateLibrary::tracks`], which only borrows the
    /// library immutably.
    pub fn add_inline_sources<'a, I>(&mut self, sources: I) -> Result<(), RenderError>
    where
        I: IntoIterator<Item = &'a TrackSource>,
    {
        for (index, source) in sources.into_iter().enumerate() {
            if let TrackSource::Inline(text) = source {
                self.add_inline(&inline_template_name(index), text)?;
            }
        }
        Ok(())
    }

    /// Resolve and compile template `name`, binding `vars`.
    pub fn track(&self, name: &str, vars: &Vars) -> Result<Track<'_>, RenderError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|source| RenderError::Load { name: name.to_string(), source })?;
        Ok(Track::new(template, Value::from_serialize(vars)))
    }

    /// Resolve a file template on the search path. Names starting with `<`
    /// are reserved for inline templates and never resolve.
    pub fn file_track(&self, path: &Path, vars: &Vars) -> Result<Track<'_>, RenderError> {
        let name = file_template_name(path);
        if name.starts_with('<') {
            let source = minijinja::Error::new(
                minijinja::ErrorKind::TemplateNotFound,
                "file template names starting with '<' are reserved for inline templates",
            );
            return Err(RenderError::Load { name, source });
        }
        self.track(&name, vars)
    }

    /// Build one [`Track`] per `(source, vars)` pair, in order.
    ///
    /// Inline sources must already be registered with
    /// [`TemplateLibrary::add_inline_sources`] using the same ordering.
    pub fn tracks<'a, I>(&self, entries: I) -> Result<Vec<Track<'_>>, RenderError>
    where
        I: IntoIterator<Item = (&'a TrackSource, &'a Vars)>,
    {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (source, vars))| {
                match source {
                    TrackSource::Inline(_) => self.track(&inline_template_name(index), vars),
                    TrackSource::File(path) => self.file_track(path, vars),
                }
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
