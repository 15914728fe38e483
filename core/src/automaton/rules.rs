//! automaton/rules.rs
//! Elementary cellular-automaton rules supported by the cipher.
//!
//! Each rule is a boolean function of a 3-cell neighbourhood `(a, b, c)` =
//! (left, centre, right). The numeric id is the Wolfram code: bit `n` of the id
//! is the next state for the neighbourhood whose bits spell `n` as `abc`.

use std::fmt;
use num_enum::TryFromPrimitive;

use crate::constants::rule_ids;
use super::types::RuleError;

/// Closed set of supported rule identifiers.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum Rule {
    Rule51  = rule_ids::RULE_51,
    Rule85  = rule_ids::RULE_85,
    Rule86  = rule_ids::RULE_86,
    Rule102 = rule_ids::RULE_102,
    Rule105 = rule_ids::RULE_105,
    Rule150 = rule_ids::RULE_150,
    Rule153 = rule_ids::RULE_153,
    Rule165 = rule_ids::RULE_165,
    Rule240 = rule_ids::RULE_240,
}

impl Rule {
    pub const ALL: [Rule; 9] = [
        Rule::Rule51,
        Rule::Rule85,
        Rule::Rule86,
        Rule::Rule102,
        Rule::Rule105,
        Rule::Rule150,
        Rule::Rule153,
        Rule::Rule165,
        Rule::Rule240,
    ];

    /// Resolve a raw identifier. Unknown ids are rejected, never defaulted.
    pub fn from_id(raw: u8) -> Result<Self, RuleError> {
        Rule::try_from_primitive(raw).map_err(|_| RuleError::UnknownRule { raw })
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Next state of the centre cell. Inputs are bits; only their low bit is read.
    #[inline]
    pub fn evaluate(self, a: u8, b: u8, c: u8) -> u8 {
        let (a, b, c) = (a & 1 == 1, b & 1 == 1, c & 1 == 1);
        let next = match self {
            Rule::Rule51  => !b,
            Rule::Rule85  => !c,
            Rule::Rule86  => (a && !c) || (b && !c) || (c && !a && !b),
            Rule::Rule102 => (b && !c) || (c && !b),
            Rule::Rule105 => {
                (a && b && !c) || (a && c && !b) || (b && c && !a) || (!a && !b && !c)
            }
            Rule::Rule150 => {
                (a && b && c) || (a && !b && !c) || (b && !a && !c) || (c && !a && !b)
            }
            Rule::Rule153 => (b && c) || (!b && !c),
            // XNOR(a, c)
            Rule::Rule165 => (a && c) || (!a && !c),
            Rule::Rule240 => a,
        };
        next as u8
    }

    /// Outputs for neighbourhoods `000` through `111`, indexed by `abc` as a number.
    pub fn truth_table(self) -> [u8; 8] {
        let mut out = [0u8; 8];
        for (n, slot) in out.iter_mut().enumerate() {
            let n = n as u8;
            *slot = self.evaluate((n >> 2) & 1, (n >> 1) & 1, n & 1);
        }
        out
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}", self.id())
    }
}
