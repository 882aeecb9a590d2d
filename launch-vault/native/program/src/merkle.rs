//! Whitelist Merkle proofs.
//!
//! Leaves are `keccak256(address bytes)` and every parent is the keccak256 of
//! its two children in ascending byte order, so a proof is just the list of
//! siblings from leaf to root with no position bits. This is the convention of
//! the off-chain candy-machine style builders (`sortPairs`, keccak leaves, odd
//! nodes promoted unchanged).

use solana_program::{keccak, pubkey::Pubkey};

pub type Node = [u8; 32];

/// Leaf committed for a whitelisted address.
pub fn whitelist_leaf(address: &Pubkey) -> Node {
    keccak::hash(address.as_ref()).to_bytes()
}

pub fn hash_pair(a: &Node, b: &Node) -> Node {
    if a <= b {
        keccak::hashv(&[&a[..], &b[..]]).to_bytes()
    } else {
        keccak::hashv(&[&b[..], &a[..]]).to_bytes()
    }
}

/// Folds `proof` over `leaf` and compares the result with `root`.
pub fn verify(root: &Node, proof: &[Node], leaf: &Node) -> bool {
    let computed = proof
        .iter()
        .fold(*leaf, |current, sibling| hash_pair(&current, sibling));
    computed == *root
}

/// Checks that `address` is whitelisted under `root`.
pub fn verify_address(root: &Node, proof: &[Node], address: &Pubkey) -> bool {
    verify(root, proof, &whitelist_leaf(address))
}

/// Builds every level of the tree, leaves first. An empty leaf set has a
/// single all-zero root.
fn levels(leaves: &[Node]) -> Vec<Vec<Node>> {
    let mut levels = vec![leaves.to_vec()];
    if leaves.is_empty() {
        levels.push(vec![[0u8; 32]]);
        return levels;
    }
    while levels[levels.len() - 1].len() > 1 {
        let next = levels[levels.len() - 1]
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => hash_pair(left, right),
                [single] => *single,
                _ => unreachable!("chunks(2) yields one or two nodes"),
            })
            .collect();
        levels.push(next);
    }
    levels
}

pub fn root(leaves: &[Node]) -> Node {
    levels(leaves)
        .last()
        .and_then(|level| level.first().copied())
        .unwrap_or([0u8; 32])
}

/// Sibling path for `leaves[index]`, or `None` when the index is out of range.
pub fn proof(leaves: &[Node], index: usize) -> Option<Vec<Node>> {
    if index >= leaves.len() {
        return None;
    }
    let levels = levels(leaves);
    let mut path = Vec::new();
    let mut position = index;
    for level in &levels[..levels.len() - 1] {
        let sibling = position ^ 1;
        // The last node of an odd level is promoted without a sibling.
        if let Some(node) = level.get(sibling) {
            path.push(*node);
        }
        position /= 2;
    }
    Some(path)
}

/// Root over a whitelist of addresses.
pub fn whitelist_root(addresses: &[Pubkey]) -> Node {
    let leaves: Vec<Node> = addresses.iter().map(whitelist_leaf).collect();
    root(&leaves)
}

/// Proof that `address` is in `addresses`, if it is.
pub fn whitelist_proof(addresses: &[Pubkey], address: &Pubkey) -> Option<Vec<Node>> {
    let index = addresses.iter().position(|a| a == address)?;
    let leaves: Vec<Node> = addresses.iter().map(whitelist_leaf).collect();
    proof(&leaves, index)
}
