mod component;
mod forces;
mod render;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use types::{ForceGraphHandle, ForceSettings, GraphData, GraphLink, GraphNode};
