//! automaton/types.rs
//! Rule table and rule-level errors.

use std::fmt;
use std::ops::Index;

use crate::constants::RULE_TABLE_LEN;
use super::rules::Rule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    UnknownRule { raw: u8 },
    WrongTableLength { expected: usize, actual: usize },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::UnknownRule { raw } =>
                write!(f, "unsupported rule identifier: {}", raw),
            RuleError::WrongTableLength { expected, actual } =>
                write!(f, "rule table must hold {} rules, got {}", expected, actual),
        }
    }
}

impl std::error::Error for RuleError {}

/// One rule per bit position; index 0 drives the most significant bit.
///
/// Immutable once built, so it can be shared read-only across workers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RuleTable {
    rules: [Rule; RULE_TABLE_LEN],
}

impl RuleTable {
    pub fn new(rules: [Rule; RULE_TABLE_LEN]) -> Self {
        Self { rules }
    }

    /// Validate raw identifiers: exactly eight, each a supported rule.
    pub fn from_ids(ids: &[u8]) -> Result<Self, RuleError> {
        if ids.len() != RULE_TABLE_LEN {
            return Err(RuleError::WrongTableLength {
                expected: RULE_TABLE_LEN,
                actual: ids.len(),
            });
        }

        let mut rules = [Rule::Rule51; RULE_TABLE_LEN];
        for (slot, &raw) in rules.iter_mut().zip(ids) {
            *slot = Rule::from_id(raw)?;
        }
        Ok(Self { rules })
    }

    pub fn ids(&self) -> [u8; RULE_TABLE_LEN] {
        self.rules.map(Rule::id)
    }

    pub fn rules(&self) -> &[Rule; RULE_TABLE_LEN] {
        &self.rules
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}

impl Index<usize> for RuleTable {
    type Output = Rule;

    fn index(&self, position: usize) -> &Rule {
        &self.rules[position]
    }
}

impl TryFrom<&[u8]> for RuleTable {
    type Error = RuleError;

    fn try_from(ids: &[u8]) -> Result<Self, Self::Error> {
        RuleTable::from_ids(ids)
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.rules.iter().map(|r| r.id().to_string()).collect();
        write!(f, "[{}]", ids.join(", "))
    }
}
