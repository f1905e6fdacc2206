//! Loading a workspace's projects and styleguides from the Zeplin API.
//!
//! The client is always constructed explicitly from a [`Config`] and handed
//! to the loader through the [`OrganizationApi`] trait, so tests can swap in
//! an in-memory organization.

pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod pagination;
pub mod zeplin;

pub use api::{OrganizationApi, fetch_projects, fetch_styleguides};
pub use config::{Config, ConfigFile, ConfigOverrides};
pub use error::{Error, Result};
pub use loader::{load_dashboard, load_session};
pub use pagination::{Fetched, PAGE_SIZE, PageRequest, Pagination, fetch_all_pages};
pub use zeplin::{DEFAULT_API_URL, ZeplinClient};
