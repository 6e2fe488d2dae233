//! Working-tree summary from `git status --porcelain`.

use std::fmt;

/// Index-column codes that count as staged
const STAGED_CODES: [char; 5] = ['M', 'A', 'D', 'R', 'C'];

/// Counts of changed paths by category
///
/// A path can land in more than one category: `M ` (modified and staged)
/// counts as both staged and modified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GitStatusSummary {
    pub staged: usize,
    pub modified: usize,
    pub untracked: usize,
}

impl GitStatusSummary {
    /// Classify porcelain status lines by their two status columns.
    ///
    /// | rule      | column 1          | column 2 |
    /// |-----------|-------------------|----------|
    /// | staged    | `M A D R C`       | any      |
    /// | modified  | `M`               | any      |
    /// | modified  | any               | `M`      |
    /// | untracked | `?`               | `?`      |
    pub fn from_porcelain(status: &str) -> Self {
        let mut summary = Self::default();

        for line in status.lines().filter(|l| !l.is_empty()) {
            let mut columns = line.chars();
            let index = columns.next();
            let worktree = columns.next();

            if index.is_some_and(|c| STAGED_CODES.contains(&c)) {
                summary.staged += 1;
            }
            if index == Some('M') || worktree == Some('M') {
                summary.modified += 1;
            }
            if index == Some('?') && worktree == Some('?') {
                summary.untracked += 1;
            }
        }

        summary
    }

    /// True when no category has any paths
    pub fn is_clean(&self) -> bool {
        self.staged == 0 && self.modified == 0 && self.untracked == 0
    }
}

/// Renders `[●staged ~modified +untracked]`, skipping zero counts.
///
/// Renders nothing when every count is zero.
impl fmt::Display for GitStatusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return Ok(());
        }

        let mut parts = Vec::with_capacity(3);
        if self.staged > 0 {
            parts.push(format!("●{}", self.staged));
        }
        if self.modified > 0 {
            parts.push(format!("~{}", self.modified));
        }
        if self.untracked > 0 {
            parts.push(format!("+{}", self.untracked));
        }
        write!(f, "[{}]", parts.join(" "))
    }
}
