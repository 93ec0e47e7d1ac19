//! Option popularity ranking.

use crate::records::OptionRecord;

use super::reports::{RankedOption, TopOptionsReport};

/// Default ranking depth.
pub const TOP_OPTIONS: usize = 10;

/// Rank options by sale count, descending, keeping the top `n`.
///
/// The sort is stable: options with equal counts keep their original
/// row order — the documented, tested tie-break. Fewer than `n` rows
/// yields all of them.
#[tracing::instrument(skip_all, fields(options = options.len(), n))]
pub fn rank_options(options: &[OptionRecord], n: usize) -> TopOptionsReport {
    let mut sorted: Vec<&OptionRecord> = options.iter().collect();
    sorted.sort_by(|a, b| b.count.total_cmp(&a.count));

    let options = sorted
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, option)| RankedOption {
            rank: i + 1,
            label: option.label.clone(),
            count: option.count,
        })
        .collect();

    TopOptionsReport { options }
}
