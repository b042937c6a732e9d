//! Draw command recording: what `RenderContext` hands to a backend.

mod billboard;
mod command;

pub use billboard::{build_quad, BillboardParams};
pub use command::{BillboardKind, BillboardQuad, CommandQueue, DrawCommand};
