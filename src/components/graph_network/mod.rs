mod component;
mod parse;
mod render;
mod state;
mod types;

pub use component::GraphNetwork;
pub use parse::{DataError, parse_graph};
pub use types::Graph;
