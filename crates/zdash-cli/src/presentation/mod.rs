//! # Presentation Layer
//!
//! User interface logic for the CLI, organised as MVVM.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                 ==(Text)==> [ View ]
//! ```
//!
//! The interactive dashboard routes keys through a component that owns the
//! scroll state and draws ratatui widgets from the same ViewModels:
//!
//! ```text
//! [ SessionSource ] --> [ TuiRenderer ] --> [ Component ] <-- key input
//!                                                |
//!                                                v
//!                                            [ Widget ]
//! ```
//!
//! ## Rules
//!
//! * ViewModels carry raw values (counts, ids, timestamps). Truncation,
//!   placeholders and colors belong to views.
//! * `--format json` always dumps the whole ViewModel.
//! * Scroll position and selection live in components, never in ViewModels.
//!   Components clamp their selection against the data before drawing.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, SessionSource, TuiRenderer};
pub use view_models::{CommandResultViewModel, CreateView, DisplayOptions, OutputFormat};
