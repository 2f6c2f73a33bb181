use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A block as reported by the remote chain service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: u64,
    pub location: String, // branch label, e.g. "Earth", "Mars1"
    pub hash: String,
    pub timestamp: i64, // unix millis
}

impl Block {
    /// Block timestamp as UTC time, `None` if the millis are out of range.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// First `len` characters of the hash.
    pub fn short_hash(&self, len: usize) -> &str {
        match self.hash.char_indices().nth(len) {
            Some((idx, _)) => &self.hash[..idx],
            None => &self.hash,
        }
    }
}

/// The named sub-chains exposed by the chain service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Main,
    Earth,
    Mars,
    Earth1,
    Venus,
    Mars1,
    Europa,
}

impl Branch {
    /// Every branch, parents before children, siblings in graft order.
    pub const ALL: [Branch; 7] = [
        Branch::Main,
        Branch::Earth,
        Branch::Mars,
        Branch::Earth1,
        Branch::Venus,
        Branch::Mars1,
        Branch::Europa,
    ];

    /// Key used in the chain service JSON.
    pub fn key(self) -> &'static str {
        match self {
            Branch::Main => "mainChain",
            Branch::Earth => "earthBranch",
            Branch::Mars => "marsBranch",
            Branch::Earth1 => "earth1Branch",
            Branch::Venus => "venusBranch",
            Branch::Mars1 => "mars1Branch",
            Branch::Europa => "europaBranch",
        }
    }

    /// Prefix of the node labels built from this branch.
    pub fn prefix(self) -> &'static str {
        match self {
            Branch::Main => "R",
            Branch::Earth => "E",
            Branch::Mars => "M",
            Branch::Earth1 => "E1",
            Branch::Venus => "V",
            Branch::Mars1 => "M1",
            Branch::Europa => "Eu",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Branch::Main => "Main Chain",
            Branch::Earth => "Earth Branch",
            Branch::Mars => "Mars Branch",
            Branch::Earth1 => "Earth1 Branch",
            Branch::Venus => "Venus Branch",
            Branch::Mars1 => "Mars1 Branch",
            Branch::Europa => "Europa Branch",
        }
    }

    /// Branch whose tail this one grafts onto. `None` for the main chain.
    pub fn parent(self) -> Option<Branch> {
        match self {
            Branch::Main => None,
            Branch::Earth | Branch::Mars => Some(Branch::Main),
            Branch::Earth1 | Branch::Venus => Some(Branch::Earth),
            Branch::Mars1 | Branch::Europa => Some(Branch::Mars),
        }
    }

    pub fn children(self) -> impl Iterator<Item = Branch> {
        Branch::ALL
            .into_iter()
            .filter(move |b| b.parent() == Some(self))
    }
}

/// Per-branch block lists, oldest first. Absent keys decode as empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChainSnapshot {
    pub main_chain: Vec<Block>,
    pub earth_branch: Vec<Block>,
    pub mars_branch: Vec<Block>,
    pub earth1_branch: Vec<Block>,
    pub venus_branch: Vec<Block>,
    pub mars1_branch: Vec<Block>,
    pub europa_branch: Vec<Block>,
}

impl ChainSnapshot {
    pub fn branch(&self, branch: Branch) -> &[Block] {
        match branch {
            Branch::Main => &self.main_chain,
            Branch::Earth => &self.earth_branch,
            Branch::Mars => &self.mars_branch,
            Branch::Earth1 => &self.earth1_branch,
            Branch::Venus => &self.venus_branch,
            Branch::Mars1 => &self.mars1_branch,
            Branch::Europa => &self.europa_branch,
        }
    }

    pub fn block_count(&self) -> usize {
        Branch::ALL.iter().map(|b| self.branch(*b).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.block_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_partial_snapshot() {
        let json = r#"{
            "mainChain": [{"id": 1, "location": "Earth", "hash": "abc", "timestamp": 1700000000000}],
            "earthBranch": [],
            "marsBranch": [],
            "somethingElse": 5
        }"#;
        let snapshot: ChainSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.main_chain.len(), 1);
        assert!(snapshot.venus_branch.is_empty());
        assert!(snapshot.europa_branch.is_empty());
        assert_eq!(snapshot.block_count(), 1);
    }

    #[test]
    fn empty_snapshot_emits_every_key() {
        let value = serde_json::to_value(ChainSnapshot::default()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), Branch::ALL.len());
        for branch in Branch::ALL {
            assert_eq!(obj[branch.key()], serde_json::json!([]), "{}", branch.key());
        }
    }

    #[test]
    fn branch_parents() {
        let earth_children: Vec<_> = Branch::Earth.children().collect();
        assert_eq!(earth_children, vec![Branch::Earth1, Branch::Venus]);
        let root_children: Vec<_> = Branch::Main.children().collect();
        assert_eq!(root_children, vec![Branch::Earth, Branch::Mars]);
        assert_eq!(Branch::Europa.parent(), Some(Branch::Mars));
    }

    #[test]
    fn short_hash_and_time() {
        let block = Block {
            id: 3,
            location: "Mars".to_string(),
            hash: "0123456789abcdef".to_string(),
            timestamp: 1_700_000_000_000,
        };
        assert_eq!(block.short_hash(8), "01234567");
        assert_eq!(block.short_hash(64), "0123456789abcdef");
        assert_eq!(block.timestamp_utc().unwrap().timestamp(), 1_700_000_000);
    }
}
