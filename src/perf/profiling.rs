/// Instrumentation infrastructure for the chunk write and meshing paths
/// Provides function call counting behind the `profiling` feature
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe performance counters for function call tracking
pub struct FunctionCounters {
    // Chunk read/write counters
    pub get_block_calls: AtomicU64,
    pub set_span_calls: AtomicU64,
    pub span_split_calls: AtomicU64,
    pub span_merge_calls: AtomicU64,

    // Meshing counters
    pub mesh_chunk_calls: AtomicU64,
    pub quads_emitted: AtomicU64,
    pub quads_culled: AtomicU64,
}

impl FunctionCounters {
    pub const fn new() -> Self {
        Self {
            get_block_calls: AtomicU64::new(0),
            set_span_calls: AtomicU64::new(0),
            span_split_calls: AtomicU64::new(0),
            span_merge_calls: AtomicU64::new(0),
            mesh_chunk_calls: AtomicU64::new(0),
            quads_emitted: AtomicU64::new(0),
            quads_culled: AtomicU64::new(0),
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.get_block_calls.store(0, Ordering::Relaxed);
        self.set_span_calls.store(0, Ordering::Relaxed);
        self.span_split_calls.store(0, Ordering::Relaxed);
        self.span_merge_calls.store(0, Ordering::Relaxed);
        self.mesh_chunk_calls.store(0, Ordering::Relaxed);
        self.quads_emitted.store(0, Ordering::Relaxed);
        self.quads_culled.store(0, Ordering::Relaxed);
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            get_block_calls: self.get_block_calls.load(Ordering::Relaxed),
            set_span_calls: self.set_span_calls.load(Ordering::Relaxed),
            span_split_calls: self.span_split_calls.load(Ordering::Relaxed),
            span_merge_calls: self.span_merge_calls.load(Ordering::Relaxed),
            mesh_chunk_calls: self.mesh_chunk_calls.load(Ordering::Relaxed),
            quads_emitted: self.quads_emitted.load(Ordering::Relaxed),
            quads_culled: self.quads_culled.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of counter values at a point in time
#[derive(Debug, Clone, Copy)]
pub struct CounterSnapshot {
    pub get_block_calls: u64,
    pub set_span_calls: u64,
    pub span_split_calls: u64,
    pub span_merge_calls: u64,
    pub mesh_chunk_calls: u64,
    pub quads_emitted: u64,
    pub quads_culled: u64,
}

impl CounterSnapshot {
    /// Print formatted report
    pub fn print_report(&self) {
        println!("\n=== Performance Counters Report ===");
        println!("\nChunk Operations:");
        println!("  get_block calls:            {:12}", self.get_block_calls);
        println!("  set_block_span calls:       {:12}", self.set_span_calls);
        println!("  spans split:                {:12}", self.span_split_calls);
        println!("  spans merged:               {:12}", self.span_merge_calls);

        println!("\nMeshing Operations:");
        println!("  mesh_chunk calls:           {:12}", self.mesh_chunk_calls);
        println!("  quads emitted:              {:12}", self.quads_emitted);
        println!("  quads culled:               {:12}", self.quads_culled);
        let tested = self.quads_emitted + self.quads_culled;
        if tested > 0 {
            let emit_rate = (self.quads_emitted as f64 / tested as f64) * 100.0;
            println!("  quad emit rate:             {:11.2}%", emit_rate);
        }

        println!();
    }
}

/// Global function counters instance
pub static FUNCTION_COUNTERS: FunctionCounters = FunctionCounters::new();

/// Macro for incrementing a counter (only when profiling feature is enabled)
#[macro_export]
macro_rules! count_call {
    ($counter:expr) => {
        #[cfg(feature = "profiling")]
        {
            $counter.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        }
    };
}

/// Macro for adding to a counter (only when profiling feature is enabled)
#[macro_export]
macro_rules! count_add {
    ($counter:expr, $value:expr) => {
        #[cfg(feature = "profiling")]
        {
            $counter.fetch_add($value, std::sync::atomic::Ordering::Relaxed);
        }
    };
}
