use anyhow::{anyhow, Context};
use tikv_jemalloc_ctl::{epoch, stats};

/// Heap usage around one measured search, in bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub before: usize,
    pub after: usize,
}

impl MemoryUsage {
    /// Bytes allocated while the search ran. Frees during the search can make `after` smaller
    /// than `before`, which counts as nothing allocated.
    pub fn delta(&self) -> usize {
        self.after.saturating_sub(self.before)
    }

    pub fn peak(&self) -> usize {
        self.before.max(self.after)
    }
}

/// A source of "bytes currently allocated" readings.
pub trait MemoryProbe {
    fn allocated(&self) -> anyhow::Result<usize>;
}

/// Reads jemalloc's allocation statistics.
///
/// Only meaningful when jemalloc is the global allocator. The `bisect` binary installs it; in any
/// other program the numbers describe jemalloc's own (mostly idle) arenas.
#[derive(Debug, Default, Clone, Copy)]
pub struct JemallocProbe;

impl MemoryProbe for JemallocProbe {
    fn allocated(&self) -> anyhow::Result<usize> {
        // jemalloc caches its statistics until the epoch moves.
        epoch::advance()
            .map_err(|e| anyhow!("{e}"))
            .context("Unable to refresh jemalloc statistics")?;

        stats::allocated::read()
            .map_err(|e| anyhow!("{e}"))
            .context("Unable to read jemalloc allocated bytes")
    }
}

/// Always reports zero. For callers that only care about time and steps.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProbe;

impl MemoryProbe for NoopProbe {
    fn allocated(&self) -> anyhow::Result<usize> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_saturates() {
        let grew = MemoryUsage {
            before: 100,
            after: 160,
        };
        assert_eq!(grew.delta(), 60);
        assert_eq!(grew.peak(), 160);

        let shrank = MemoryUsage {
            before: 160,
            after: 100,
        };
        assert_eq!(shrank.delta(), 0);
        assert_eq!(shrank.peak(), 160);
    }

    #[test]
    fn jemalloc_reads_statistics() {
        assert!(JemallocProbe.allocated().is_ok());
    }

    #[test]
    fn noop_is_zero() {
        assert_eq!(NoopProbe.allocated().unwrap(), 0);
    }
}
