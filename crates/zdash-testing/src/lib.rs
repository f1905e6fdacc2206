//! Testing infrastructure for zdash.
//!
//! - `fixtures`: builders for projects and styleguides
//! - `fake`: an in-memory, paginated organization implementing `OrganizationApi`
//! - `world`: isolated environments for running the `zdash` binary

pub mod fake;
pub mod fixtures;
pub mod world;

pub use fake::FakeOrganization;
pub use fixtures::{ProjectBuilder, StyleguideBuilder, numbered_projects, project, styleguide};
pub use world::TestWorld;
