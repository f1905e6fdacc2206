//! Derived views over a workspace's projects and styleguides.
//!
//! Everything here is a pure function of the fetched collections:
//!
//! ```text
//! [ Vec<Project> ] --+--> platform_counts()            (all projects)
//!                    |
//!                    +--> active_projects() --+--> link_partition()
//!                                             |
//! [ Vec<Styleguide> ] --> active_styleguides()--> StyleguideIndex --> build_display_rows()
//! ```
//!
//! [`Dashboard`] owns both collections and memoizes each derived view, and
//! [`Session`] tracks whether the collections have been loaded yet.

pub mod aggregate;
pub mod dashboard;
pub mod rows;
pub mod session;

pub use aggregate::{
    LinkPartition, PlatformCount, PlatformCounts, active_projects, active_styleguides,
    link_partition, platform_counts,
};
pub use dashboard::{Dashboard, DashboardSummary};
pub use rows::{DisplayRow, StyleguideIndex, build_display_rows};
pub use session::{Session, SessionFailure, SessionState, TransitionError};
