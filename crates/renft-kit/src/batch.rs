//! Batch shaping for parallel argument arrays.
//!
//! The Azrael contract processes a batch NFT by NFT and groups consecutive
//! rows that share an NFT contract into a single ERC-1155 transfer. Rows are
//! therefore reordered so that equal NFT addresses are adjacent, with token
//! IDs ascending inside each group, before the batch is submitted.

use alloy_primitives::{Address, U256};

use crate::error::Error;

/// Check that every column has the same length as the first one.
///
/// Returns the common length.
pub(crate) fn check_lengths(columns: &[(&'static str, usize)]) -> Result<usize, Error> {
    let Some(&(_, expected)) = columns.first() else {
        return Ok(0);
    };
    for &(field, actual) in &columns[1..] {
        if actual != expected {
            return Err(Error::LengthMismatch {
                field,
                expected,
                actual,
            });
        }
    }
    Ok(expected)
}

/// Stable row order sorting by NFT address, then token ID.
///
/// `nfts` and `token_ids` must have equal length.
pub(crate) fn batch_order(nfts: &[Address], token_ids: &[U256]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..nfts.len()).collect();
    if order.len() > 1 {
        order.sort_by(|&a, &b| (nfts[a], token_ids[a]).cmp(&(nfts[b], token_ids[b])));
    }
    order
}

/// Reorder a column by a permutation from [`batch_order`].
pub(crate) fn permute<T: Clone>(column: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&i| column[i].clone()).collect()
}
