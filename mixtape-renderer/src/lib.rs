//! # mixtape-renderer
//!
//! Minijinja-based rendering for playlist tracks: the helper functions
//! available in every template, the search-path [`TemplateLibrary`], and the
//! [`Track`] it produces.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use mixtape_core::Vars;
//! use mixtape_renderer::TemplateLibrary;
//!
//! fn render_alert() {
//!     let mut library = TemplateLibrary::new(&[PathBuf::from("templates")]);
//!     if library.add_inline("greeting", "id={{ uuid() }}").is_ok() {
//!         if let Ok(track) = library.track("greeting", &Vars::new()) {
//!             if let Ok(text) = track.render() {
//!                 println!("{text}");
//!             }
//!         }
//!     }
//! }
//! ```

pub mod error;
pub mod functions;
pub mod library;
pub mod track;

pub use error::RenderError;
pub use functions::HELPER_NAMES;
pub use library::TemplateLibrary;
pub use track::Track;
