//! Append-only storage backends for feedback records.

use crate::errors::{ArchmapError, Result};
use crate::feedback::FeedbackRecord;
use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Storage seam for [`crate::feedback::FeedbackTracker`].
///
/// Implementations must keep records in insertion order and never rewrite or
/// drop a record that `recent` could still return.
pub trait FeedbackStore: Send {
    fn append(&mut self, record: FeedbackRecord) -> Result<()>;

    /// The last `n` records, oldest first.
    fn recent(&self, n: usize) -> Vec<FeedbackRecord>;

    /// Number of records ever appended.
    fn total(&self) -> usize;
}

/// Unbounded in-memory history.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: im::Vector<FeedbackRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedbackStore for HistoryStore {
    fn append(&mut self, record: FeedbackRecord) -> Result<()> {
        self.records.push_back(record);
        Ok(())
    }

    fn recent(&self, n: usize) -> Vec<FeedbackRecord> {
        tail(self.records.iter(), self.records.len(), n)
    }

    fn total(&self) -> usize {
        self.records.len()
    }
}

/// Fixed-capacity buffer that forgets the oldest record once full. The
/// all-time count survives eviction.
#[derive(Debug, Clone)]
pub struct RingBufferStore {
    buffer: VecDeque<FeedbackRecord>,
    capacity: usize,
    total: usize,
}

impl RingBufferStore {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RingBufferStore {
    fn default() -> Self {
        Self::with_capacity(crate::config::thresholds::DEFAULT_FEEDBACK_WINDOW)
    }
}

impl FeedbackStore for RingBufferStore {
    fn append(&mut self, record: FeedbackRecord) -> Result<()> {
        if self.buffer.len() == self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(record);
        self.total += 1;
        Ok(())
    }

    fn recent(&self, n: usize) -> Vec<FeedbackRecord> {
        tail(self.buffer.iter(), self.buffer.len(), n)
    }

    fn total(&self) -> usize {
        self.total
    }
}

/// JSON-lines file store. Existing lines are replayed on open and every
/// append is flushed before returning.
#[derive(Debug)]
pub struct JsonlFeedbackStore {
    path: PathBuf,
    file: File,
    history: HistoryStore,
}

impl JsonlFeedbackStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let history = replay(&path)?;

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        log::debug!(
            "Opened feedback log {} with {} existing records",
            path.display(),
            history.total()
        );

        Ok(Self {
            path,
            file,
            history,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn replay(path: &Path) -> Result<HistoryStore> {
    let mut history = HistoryStore::new();
    if !path.exists() {
        return Ok(history);
    }

    let reader = BufReader::new(File::open(path)?);
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: FeedbackRecord = serde_json::from_str(&line).map_err(|e| {
            ArchmapError::internal(format!(
                "corrupt feedback log {} at line {}: {}",
                path.display(),
                index + 1,
                e
            ))
        })?;
        history.append(record)?;
    }
    Ok(history)
}

impl FeedbackStore for JsonlFeedbackStore {
    fn append(&mut self, record: FeedbackRecord) -> Result<()> {
        let line = serde_json::to_string(&record)?;
        writeln!(self.file, "{}", line)?;
        self.file.flush()?;
        self.history.append(record)
    }

    fn recent(&self, n: usize) -> Vec<FeedbackRecord> {
        self.history.recent(n)
    }

    fn total(&self) -> usize {
        self.history.total()
    }
}

fn tail<'a>(
    iter: impl Iterator<Item = &'a FeedbackRecord>,
    len: usize,
    n: usize,
) -> Vec<FeedbackRecord> {
    iter.skip(len.saturating_sub(n)).cloned().collect()
}
