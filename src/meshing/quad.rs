use glam::IVec3;

use crate::count_call;
use crate::perf::FUNCTION_COUNTERS;
use crate::voxel::{BlockId, Chunk, Face, Point, Span, AIR, CHUNK_SIZE};

/// One rectangular span face, ready for a downstream mesher.
///
/// Corners are chunk-local lattice coordinates (a cell at `c` occupies the
/// unit cube `[c, c+1]` per axis, so corner components run `0..=16`). The
/// winding is counter-clockwise seen from outside the span, so the cross
/// product of the first two edges recovers the outward normal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Quad {
    pub id: BlockId,
    pub corners: [IVec3; 4],
}

impl Quad {
    /// Build the quad for one face of a span.
    pub fn from_face(span: &Span, face: Face) -> Self {
        let s = span.start().as_ivec3();
        // Exclusive upper lattice corner of the cuboid.
        let e = span.end().as_ivec3() + IVec3::ONE;

        let corners = match face {
            Face::Up => [
                IVec3::new(s.x, e.y, s.z),
                IVec3::new(s.x, e.y, e.z),
                IVec3::new(e.x, e.y, e.z),
                IVec3::new(e.x, e.y, s.z),
            ],
            Face::Down => [
                IVec3::new(s.x, s.y, s.z),
                IVec3::new(e.x, s.y, s.z),
                IVec3::new(e.x, s.y, e.z),
                IVec3::new(s.x, s.y, e.z),
            ],
            Face::North => [
                IVec3::new(s.x, s.y, e.z),
                IVec3::new(e.x, s.y, e.z),
                IVec3::new(e.x, e.y, e.z),
                IVec3::new(s.x, e.y, e.z),
            ],
            Face::South => [
                IVec3::new(s.x, s.y, s.z),
                IVec3::new(s.x, e.y, s.z),
                IVec3::new(e.x, e.y, s.z),
                IVec3::new(e.x, s.y, s.z),
            ],
            Face::West => [
                IVec3::new(s.x, s.y, s.z),
                IVec3::new(s.x, s.y, e.z),
                IVec3::new(s.x, e.y, e.z),
                IVec3::new(s.x, e.y, s.z),
            ],
            Face::East => [
                IVec3::new(e.x, s.y, s.z),
                IVec3::new(e.x, e.y, s.z),
                IVec3::new(e.x, e.y, e.z),
                IVec3::new(e.x, s.y, e.z),
            ],
        };

        Self {
            id: span.id(),
            corners,
        }
    }

    /// Outward unit normal recovered from the winding.
    pub fn normal(&self) -> IVec3 {
        let a = self.corners[1] - self.corners[0];
        let b = self.corners[2] - self.corners[1];
        a.cross(b).signum()
    }
}

/// Extracts visible-face quads straight from the span collection; no
/// intermediate dense grid is built.
pub struct SpanMesher;

impl SpanMesher {
    /// Emit one quad per span face that is both flagged visible and
    /// exposed. A face is exposed when some cell directly across it lies
    /// outside the chunk or reads air. Exposure is recomputed from the span
    /// set on every call; the stored visibility bits act as a mask on top.
    //
    // TODO: clear hidden-face bits during writes so this scan can skip the
    // per-cell exposure probing entirely.
    pub fn mesh_chunk(chunk: &Chunk) -> Vec<Quad> {
        count_call!(FUNCTION_COUNTERS.mesh_chunk_calls);

        let mut quads = Vec::new();
        for span in chunk.spans() {
            for face in Face::ALL {
                if span.is_visible(face) && Self::face_exposed(chunk, span, face) {
                    count_call!(FUNCTION_COUNTERS.quads_emitted);
                    quads.push(Quad::from_face(span, face));
                } else {
                    count_call!(FUNCTION_COUNTERS.quads_culled);
                }
            }
        }
        quads
    }

    /// Probe the cell layer just beyond `face`. Faces on the chunk
    /// boundary are always exposed; interior faces are exposed as soon as
    /// one covering cell across them is air.
    fn face_exposed(chunk: &Chunk, span: &Span, face: Face) -> bool {
        let edge = (CHUNK_SIZE - 1) as u8;

        match face {
            Face::Up => {
                if span.end_y() == edge {
                    return true;
                }
                let y = span.end_y() + 1;
                Self::any_air_xz(chunk, span, y)
            }
            Face::Down => {
                if span.start_y() == 0 {
                    return true;
                }
                let y = span.start_y() - 1;
                Self::any_air_xz(chunk, span, y)
            }
            Face::North => {
                if span.end_z() == edge {
                    return true;
                }
                let z = span.end_z() + 1;
                Self::any_air_xy(chunk, span, z)
            }
            Face::South => {
                if span.start_z() == 0 {
                    return true;
                }
                let z = span.start_z() - 1;
                Self::any_air_xy(chunk, span, z)
            }
            Face::West => {
                if span.start_x() == 0 {
                    return true;
                }
                let x = span.start_x() - 1;
                Self::any_air_yz(chunk, span, x)
            }
            Face::East => {
                if span.end_x() == edge {
                    return true;
                }
                let x = span.end_x() + 1;
                Self::any_air_yz(chunk, span, x)
            }
        }
    }

    fn any_air_xz(chunk: &Chunk, span: &Span, y: u8) -> bool {
        for z in span.start_z()..=span.end_z() {
            for x in span.start_x()..=span.end_x() {
                if chunk.get_block(Point::new(x, y, z)) == AIR {
                    return true;
                }
            }
        }
        false
    }

    fn any_air_xy(chunk: &Chunk, span: &Span, z: u8) -> bool {
        for y in span.start_y()..=span.end_y() {
            for x in span.start_x()..=span.end_x() {
                if chunk.get_block(Point::new(x, y, z)) == AIR {
                    return true;
                }
            }
        }
        false
    }

    fn any_air_yz(chunk: &Chunk, span: &Span, x: u8) -> bool {
        for z in span.start_z()..=span.end_z() {
            for y in span.start_y()..=span.end_y() {
                if chunk.get_block(Point::new(x, y, z)) == AIR {
                    return true;
                }
            }
        }
        false
    }
}
