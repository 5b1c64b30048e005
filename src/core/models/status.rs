//! Board status symbols
//!
//! Every registration and task cell on the board is one of four symbols.

use serde::{Deserialize, Serialize};

/// Status of a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not submitted, or submitted and closed without merge
    Pending,
    /// Pull request submitted before the deadline but not merged yet
    Unmerged,
    /// Merged within the deadline (rewarded)
    OnTime,
    /// Merged after the deadline, or not rewardable
    Late,
}

impl Status {
    /// Order in which the legend lists the symbols
    pub const LEGEND: [Self; 4] = [Self::Pending, Self::OnTime, Self::Unmerged, Self::Late];

    /// The emoji rendered in the board
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Pending => "🔴",
            Self::Unmerged => "🟡",
            Self::OnTime => "🟢",
            Self::Late => "🔵",
        }
    }

    /// Legend text explaining the symbol
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Pending => "尚未提交或未合并 PR",
            Self::OnTime => "截止日期内提交 PR 并被合并（有奖励）",
            Self::Unmerged => "截止日期内提交 PR 且未合并（有奖励）",
            Self::Late => "超过截止日期提交 PR 并被合并（无奖励）",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
