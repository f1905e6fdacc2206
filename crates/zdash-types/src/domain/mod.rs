pub mod ids;
pub mod project;
pub mod status;
pub mod styleguide;

pub use ids::*;
pub use project::*;
pub use status::*;
pub use styleguide::*;
