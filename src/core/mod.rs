pub mod anchor;
pub mod api;
pub mod config;
pub mod counter;
pub mod geometry;
pub mod notice;
pub mod style;
pub mod viewport;

pub use anchor::*;
pub use config::*;
pub use counter::*;
pub use geometry::*;
pub use notice::*;
pub use viewport::*;
