//! The labels still eligible to be drawn, and the record of those already drawn.

use crate::config::{TABLE_COLS, TABLE_ROWS};
use rand::seq::SliceRandom;

pub type Label = u32;

/// Ordered, duplicate-free labels still eligible to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawPool {
    labels: Vec<Label>,
}

impl DrawPool {
    /// A pool holding `1..=sections` in ascending order.
    pub fn full(sections: u32) -> Self {
        Self {
            labels: (1..=sections).collect(),
        }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: Label) -> bool {
        self.labels.contains(&label)
    }

    pub fn get(&self, index: usize) -> Option<Label> {
        self.labels.get(index).copied()
    }

    /// Remove the log's most recent winner. Returns the removed label, or
    /// `None` when the log is empty or the label is no longer in the pool.
    pub fn remove_last_winner(&mut self, log: &WinnerLog) -> Option<Label> {
        let label = log.last()?;
        let pos = self.labels.iter().position(|&l| l == label)?;
        Some(self.labels.remove(pos))
    }

    /// Uniformly random in-place permutation.
    pub fn reshuffle<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.labels.shuffle(rng);
    }

    pub fn reset_to_full(&mut self, sections: u32) {
        self.labels.clear();
        self.labels.extend(1..=sections);
    }
}

/// Append-only record of resolved winners, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinnerLog {
    entries: Vec<Label>,
}

impl WinnerLog {
    pub fn push(&mut self, label: Label) {
        self.entries.push(label);
    }

    pub fn last(&self) -> Option<Label> {
        self.entries.last().copied()
    }

    pub fn entries(&self) -> &[Label] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Row and column of the winner table cell holding log entry `index`.
pub fn table_cell(index: usize) -> (usize, usize) {
    (index / TABLE_COLS, index % TABLE_COLS)
}

/// One table row: `(log index, label)` per filled cell.
pub type TableRow = [Option<(usize, Label)>; TABLE_COLS];

/// Lay the log out row-major. Always at least [`TABLE_ROWS`] rows; more are
/// added once the log outgrows them.
pub fn winner_grid(entries: &[Label]) -> Vec<TableRow> {
    let rows = TABLE_ROWS.max(entries.len().div_ceil(TABLE_COLS));
    let mut grid = vec![[None; TABLE_COLS]; rows];
    for (index, &label) in entries.iter().enumerate() {
        let (row, col) = table_cell(index);
        grid[row][col] = Some((index, label));
    }
    grid
}
