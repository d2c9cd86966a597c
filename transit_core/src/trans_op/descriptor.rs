//! Human-readable operation descriptors.

use serde::{Deserialize, Serialize};
use world_data::{LocPair, LocationCode};

use super::TransOp;
use crate::{KnowledgeBase, Result};

/// A [`TransOp`] with locations given by name, e.g.
/// `{"a": ["Highpool", "HighpoolCave"], "b": ["AgCenter", "AgCenterRootCellar"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransOpDesc {
    pub a: [String; 2],
    pub b: [String; 2],
}

impl TransOpDesc {
    /// Resolve names, ignoring case.
    pub fn resolve(&self, kb: &KnowledgeBase) -> Result<TransOp> {
        let pair = |names: &[String; 2]| -> Result<LocPair> {
            Ok(LocPair::new(
                kb.parse_location_no_case(&names[0])?,
                kb.parse_location_no_case(&names[1])?,
            ))
        };
        Ok(TransOp::new(pair(&self.a)?, pair(&self.b)?))
    }

    /// Name the locations of an op.
    pub fn from_op(op: TransOp, kb: &KnowledgeBase) -> Self {
        let names = |p: LocPair| [kb.location_string(p.from), kb.location_string(p.to)];
        Self {
            a: names(op.a),
            b: names(op.b),
        }
    }
}

/// Parse a JSON list of named operation descriptors.
pub fn parse_trans_ops(json: &str, kb: &KnowledgeBase) -> Result<Vec<TransOp>> {
    let descs: Vec<TransOpDesc> = serde_json::from_str(json)?;
    descs.iter().map(|d| d.resolve(kb)).collect()
}

fn loc_str(kb: &KnowledgeBase, loc: LocationCode) -> String {
    format!("{:<3} {}", loc.0, kb.location_string(loc))
}

fn pair_str(kb: &KnowledgeBase, pair: LocPair) -> String {
    format!(
        "{:<30} {:<30}",
        format!("[{}],", loc_str(kb, pair.from)),
        format!("[{}]", loc_str(kb, pair.to))
    )
}

/// One-line description used in op log lines: `B <-- A`.
pub fn describe_op(kb: &KnowledgeBase, op: TransOp) -> String {
    format!("{} <-- {}", pair_str(kb, op.b), pair_str(kb, op.a)).trim_end().to_string()
}
