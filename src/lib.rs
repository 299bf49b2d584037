pub mod cli;
pub mod error;
pub mod github;
pub mod graph;
pub mod logging;
pub mod model;
pub mod summary;
pub mod util;
