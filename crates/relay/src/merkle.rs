//! Merkle trees over state roots, as committed by the state commitment chain.
//!
//! The tree is padded with [`DEFAULT_LEAF`] to the next power of two. Leaves
//! are not hashed, and each node is `keccak256(left ++ right)`.

use alloy::primitives::{b256, keccak256, B256};

/// Padding leaf: `keccak256` of 32 zero bytes.
pub const DEFAULT_LEAF: B256 =
    b256!("0x290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563");

fn hash_pair(left: &B256, right: &B256) -> B256 {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(left.as_slice());
    buf[32..].copy_from_slice(right.as_slice());
    keccak256(buf)
}

fn padded(leaves: &[B256]) -> Vec<B256> {
    let mut level = leaves.to_vec();
    level.resize(leaves.len().next_power_of_two(), DEFAULT_LEAF);
    level
}

fn next_level(level: &[B256]) -> Vec<B256> {
    level.chunks(2).map(|pair| hash_pair(&pair[0], &pair[1])).collect()
}

/// Compute the root of a tree. `None` if there are no leaves.
pub fn merkle_root(leaves: &[B256]) -> Option<B256> {
    if leaves.is_empty() {
        return None;
    }
    let mut level = padded(leaves);
    while level.len() > 1 {
        level = next_level(&level);
    }
    level.first().copied()
}

/// Compute the sibling path of the leaf at `index`, bottom up. `None` if the
/// index is out of range.
pub fn merkle_proof(leaves: &[B256], index: usize) -> Option<Vec<B256>> {
    if index >= leaves.len() {
        return None;
    }
    let mut level = padded(leaves);
    let mut index = index;
    let mut siblings = Vec::new();
    while level.len() > 1 {
        siblings.push(level[index ^ 1]);
        level = next_level(&level);
        index /= 2;
    }
    Some(siblings)
}

/// Check a sibling path against a root.
pub fn verify_merkle_proof(root: B256, leaf: B256, index: usize, siblings: &[B256]) -> bool {
    let mut node = leaf;
    let mut index = index;
    for sibling in siblings {
        node = if index % 2 == 0 { hash_pair(&node, sibling) } else { hash_pair(sibling, &node) };
        index /= 2;
    }
    index == 0 && node == root
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_leaf_is_hash_of_zero_word() {
        assert_eq!(keccak256([0u8; 32]), DEFAULT_LEAF);
    }

    #[test]
    fn single_leaf() {
        let leaf = B256::repeat_byte(1);
        assert_eq!(merkle_root(&[leaf]), Some(leaf));
        assert_eq!(merkle_proof(&[leaf], 0), Some(vec![]));
        assert!(verify_merkle_proof(leaf, leaf, 0, &[]));
    }

    #[test]
    fn three_leaves_are_padded() {
        let leaves = [B256::repeat_byte(1), B256::repeat_byte(2), B256::repeat_byte(3)];
        let expected = hash_pair(
            &hash_pair(&leaves[0], &leaves[1]),
            &hash_pair(&leaves[2], &DEFAULT_LEAF),
        );
        assert_eq!(merkle_root(&leaves), Some(expected));
        assert_eq!(
            merkle_proof(&leaves, 2),
            Some(vec![DEFAULT_LEAF, hash_pair(&leaves[0], &leaves[1])])
        );
    }

    #[test]
    fn empty_and_out_of_range() {
        assert_eq!(merkle_root(&[]), None);
        assert_eq!(merkle_proof(&[B256::ZERO], 1), None);
    }

    proptest! {
        #[test]
        fn proofs_verify(
            leaves in prop::collection::vec(any::<[u8; 32]>().prop_map(B256::from), 1..40),
            index in any::<prop::sample::Index>(),
        ) {
            let index = index.index(leaves.len());
            let root = merkle_root(&leaves).unwrap();
            let siblings = merkle_proof(&leaves, index).unwrap();
            prop_assert!(verify_merkle_proof(root, leaves[index], index, &siblings));
            prop_assert!(!verify_merkle_proof(root, keccak256(leaves[index]), index, &siblings));
        }
    }
}
