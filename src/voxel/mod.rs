/// Core voxel data structures: packed cell positions, cuboid spans, and the
/// span-compressed chunk container
pub mod chunk;
pub mod face;
pub mod point;
pub mod span;

pub use chunk::{Chunk, CHUNK_SIZE, CHUNK_VOLUME};
pub use face::Face;
pub use point::Point;
pub use span::{BlockId, Span, SpanOrder, AIR};
