use crate::count_call;
use crate::meshing::{Quad, SpanMesher};
use crate::perf::FUNCTION_COUNTERS;

use super::point::Point;
use super::span::{BlockId, Span, AIR};

/// Cells along each chunk axis.
pub const CHUNK_SIZE: usize = 16;
/// Total cells in a chunk.
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

/// A 16x16x16 voxel chunk stored as an unordered collection of cuboid
/// spans. Spatially coherent content collapses to a handful of spans
/// instead of a dense 4096-cell array.
///
/// Invariants held between public operations:
/// - no two stored spans intersect
/// - no stored span carries the air id; uncovered cells read as air
/// - every stored span lies inside the chunk bounds
///
/// The span set is not kept canonically minimal. A write coalesces its own
/// span with whatever chains through it, nothing more.
pub struct Chunk {
    spans: Vec<Span>,
    /// Reusable remainder buffer for the split pass; avoids an allocation
    /// per write once it has grown.
    scratch: Vec<Span>,
}

impl Chunk {
    /// Create an empty chunk; every cell reads as air.
    pub fn new() -> Self {
        Self {
            spans: Vec::new(),
            scratch: Vec::new(),
        }
    }

    /// Read one cell. Returns [`AIR`] for cells no span covers.
    ///
    /// Linear scan over the span collection; the non-overlap invariant
    /// guarantees at most one span can match.
    pub fn get_block(&self, p: Point) -> BlockId {
        count_call!(FUNCTION_COUNTERS.get_block_calls);

        self.spans
            .iter()
            .find(|span| span.contains(p))
            .map(Span::id)
            .unwrap_or(AIR)
    }

    /// Write one cell.
    #[inline]
    pub fn set_block(&mut self, p: Point, id: BlockId) {
        self.set_block_span(p, p, id);
    }

    /// Erase one cell.
    #[inline]
    pub fn remove_block(&mut self, p: Point) {
        self.set_block_span(p, p, AIR);
    }

    /// Erase a rectangular region, both corners inclusive.
    #[inline]
    pub fn remove_block_span(&mut self, start: Point, end: Point) {
        self.set_block_span(start, end, AIR);
    }

    /// Write a rectangular region, both corners inclusive. An inverted
    /// region is a caller bug.
    ///
    /// Three phases:
    /// 1. Split pass: every stored span intersecting the writer is removed
    ///    and replaced by its remainders outside the written region.
    /// 2. Erase early-out: writing air stops here.
    /// 3. Merge pass: the writer absorbs any face-adjacent, same-id,
    ///    extent-matching span, rescanning after each merge until a full
    ///    scan finds no candidate, then lands in the collection.
    pub fn set_block_span(&mut self, start: Point, end: Point, id: BlockId) {
        count_call!(FUNCTION_COUNTERS.set_span_calls);
        debug_assert!(
            start.x() <= end.x() && start.y() <= end.y() && start.z() <= end.z(),
            "inverted write region: {} .. {}",
            start,
            end
        );

        let mut writer = Span::new(id, start, end);
        let Self { spans, scratch } = self;

        // Split pass over the current spans only. Remainders land in the
        // scratch buffer and are appended afterwards; they cannot intersect
        // the writer, so they never need revisiting.
        spans.retain(|span| {
            if span.intersects(&writer) {
                count_call!(FUNCTION_COUNTERS.span_split_calls);
                span.split_into(&writer, scratch);
                false
            } else {
                true
            }
        });
        spans.append(scratch);

        if id == AIR {
            return;
        }

        // Merge pass: worklist of one. The writer stays out of the
        // collection while it grows; each merge invalidates the candidate
        // prefilter, so rescan from the top.
        loop {
            let probe = writer.expand();
            let candidate = spans
                .iter()
                .position(|span| probe.intersects(span) && writer.can_merge(span));

            match candidate {
                Some(index) => {
                    count_call!(FUNCTION_COUNTERS.span_merge_calls);
                    let neighbor = spans.swap_remove(index);
                    writer.merge(&neighbor);
                }
                None => break,
            }
        }

        spans.push(writer);
    }

    /// Drop every span; the chunk reads as all air afterwards.
    pub fn remove_all_blocks(&mut self) {
        self.spans.clear();
    }

    /// Current number of stored spans, for tests and diagnostics. The count
    /// depends on write history, not only on the cell contents.
    #[inline]
    pub fn debug_total_spans(&self) -> usize {
        self.spans.len()
    }

    /// True when no span is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Read-only view of the stored spans, in no particular order.
    #[inline]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Emit one quad per visible, exposed span face. See
    /// [`SpanMesher::mesh_chunk`] for the exposure rules.
    pub fn generate_quads(&self) -> Vec<Quad> {
        SpanMesher::mesh_chunk(self)
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Chunk {
    /// Rebuild through the public write path rather than copying the span
    /// collection verbatim. The clone's span layout may differ (the merge
    /// pass can coalesce further); its per-cell contents never do.
    fn clone(&self) -> Self {
        let mut copy = Chunk::new();
        for span in &self.spans {
            copy.set_block_span(span.start(), span.end(), span.id());
        }
        copy
    }
}
