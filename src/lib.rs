pub mod meshing;
pub mod perf;
/// Span Voxel - 16x16x16 voxel chunk stored as coalesced cuboid spans
/// Built so surface extraction falls directly out of the storage layout
pub mod voxel;

pub use meshing::{Quad, SpanMesher};
pub use perf::{CounterSnapshot, FunctionCounters, FUNCTION_COUNTERS};
pub use voxel::{BlockId, Chunk, Face, Point, Span, SpanOrder, AIR, CHUNK_SIZE, CHUNK_VOLUME};
