//! # Shift Project - project tooling for Shift CSS
//!
//! Everything the `shift-css` CLI does to a project, as a library:
//!
//! - [`config`]: `shift.config.json` with per-field defaults
//! - [`scanner`]: finds the project's CSS files and its entry stylesheet
//! - [`detector`]: recognizes Bootstrap, Tailwind, Bulma and Foundation
//! - [`scaffold`]: layer order, the entry stylesheet and the `init` plan
//! - [`registry`]: the component manifest of `@shift-css/core`
//! - [`transformer`]: wraps ejected component CSS in a cascade layer
//! - [`typings`]: TypeScript declarations for the attribute API
//!
//! Operations return data; nothing here prints. Skipped files and similar
//! non-fatal conditions are reported through the `log` facade.

pub mod config;
pub mod detector;
mod error;
pub mod registry;
pub mod scaffold;
pub mod scanner;
pub mod transformer;
pub mod typings;

pub use config::{AddConfig, Hues, Mode, ShiftConfig, CONFIG_FILE};
pub use detector::{detect_frameworks, has_layer_declarations, DetectedFramework, FrameworkType};
pub use error::{CssError, ProjectError, Result};
pub use registry::{ComponentFramework, Registry, RegistryComponent, ResolvedComponent};
pub use scaffold::{plan_init, InitOptions, InitOutcome, InitPlan};
pub use scanner::{entry_point_candidates, find_entry_point, scan_css_files, CssFile};
pub use transformer::{transform_for_ejection, validate_css, wrap_in_layer, TransformOptions};
pub use typings::{detect_types_framework, generate_typings, TypesFramework};
