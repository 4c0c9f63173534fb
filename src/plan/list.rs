use super::PlanEntry;
use anyhow::{Result, anyhow};
use std::path::PathBuf;

/// A row of the table as the user sees it: either a real entry or the
/// blank anchor that always trails the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRef {
    Entry(usize),
    Anchor,
}

/// Ordered plan entries. The anchor is never stored; it is the row at
/// index `len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanList {
    entries: Vec<PlanEntry>,
}

impl PlanList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<PlanEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlanEntry> {
        self.entries.get(index)
    }

    /// Number of table rows, anchor included.
    pub fn row_count(&self) -> usize {
        self.entries.len() + 1
    }

    pub fn row(&self, row_index: usize) -> Option<RowRef> {
        match row_index.cmp(&self.entries.len()) {
            std::cmp::Ordering::Less => Some(RowRef::Entry(row_index)),
            std::cmp::Ordering::Equal => Some(RowRef::Anchor),
            std::cmp::Ordering::Greater => None,
        }
    }

    /// Inserts immediately before the anchor and returns the new index.
    pub fn push(&mut self, entry: PlanEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    pub fn set_text(&mut self, index: usize, text: String) -> Result<()> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or_else(|| anyhow!("No plan at index {index}"))?;
        entry.text = text;
        Ok(())
    }

    pub fn set_file(&mut self, index: usize, file_path: PathBuf) -> Result<()> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or_else(|| anyhow!("No plan at index {index}"))?;
        entry.file_path = Some(file_path);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<PlanEntry> {
        if index >= self.entries.len() {
            return Err(anyhow!("No plan at index {index}"));
        }
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes the entry at `source` and reinserts it where `target`
    /// sits once the source is gone. Dropping onto the anchor appends.
    /// Returns the entry's new index.
    pub fn move_entry(&mut self, source: usize, target: RowRef) -> Result<usize> {
        if source >= self.entries.len() {
            return Err(anyhow!("No plan at index {source}"));
        }

        let insert_at = match target {
            RowRef::Anchor => None,
            RowRef::Entry(t) if t == source => return Ok(source),
            RowRef::Entry(t) if t >= self.entries.len() => {
                return Err(anyhow!("No plan at index {t}"));
            }
            RowRef::Entry(t) if t > source => Some(t - 1),
            RowRef::Entry(t) => Some(t),
        };

        let entry = self.entries.remove(source);
        match insert_at {
            Some(at) => {
                self.entries.insert(at, entry);
                Ok(at)
            }
            None => Ok(self.push(entry)),
        }
    }

    /// Text of the first `n` entries, in order.
    pub fn leading_texts(&self, n: usize) -> Vec<&str> {
        self.entries.iter().take(n).map(|e| e.text.as_str()).collect()
    }
}
