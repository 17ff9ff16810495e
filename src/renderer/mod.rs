//! Rendering module
//!
//! Game objects paint onto an immediate-mode `Surface`. The frame loop
//! records into a `DrawList`, tessellates it into a `Frame` and hands that
//! to the WebGPU `RenderState`.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::Frame;
pub use surface::{DrawCommand, DrawList, Surface};
pub use vertex::Vertex;
