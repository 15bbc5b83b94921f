use casefinding_core::models::answer::Answer;
use casefinding_core::models::intake::IntakeField;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// A test applied to one raw answer.
///
/// The numeric predicates compare like the form does: an answer that is not
/// numeric fails every comparison, so it only ever matches [`Predicate::NotAbove`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate {
    /// The answer is one of these concept codes.
    AnyOf(&'static [u32]),
    AtMost(f64),
    AtLeast(f64),
    Above(f64),
    Equals(f64),
    /// Inclusive on both ends.
    Within(f64, f64),
    /// The answer is not a number greater than the bound (missing counts).
    NotAbove(f64),
    /// The answer is a ticked checkbox.
    Checked,
}

impl Predicate {
    pub fn matches(&self, answer: &Answer) -> bool {
        match *self {
            Predicate::AnyOf(codes) => answer.concept().is_some_and(|c| codes.contains(&c)),
            Predicate::AtMost(max) => answer.number().is_some_and(|n| n <= max),
            Predicate::AtLeast(min) => answer.number().is_some_and(|n| n >= min),
            Predicate::Above(min) => answer.number().is_some_and(|n| n > min),
            Predicate::Equals(x) => answer.number().is_some_and(|n| n == x),
            Predicate::Within(lo, hi) => answer.number().is_some_and(|n| n >= lo && n <= hi),
            Predicate::NotAbove(bound) => !answer.number().is_some_and(|n| n > bound),
            Predicate::Checked => answer.is_checked(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub predicate: Predicate,
    pub flag: &'static str,
}

pub const fn rule(predicate: Predicate, flag: &'static str) -> Rule {
    Rule { predicate, flag }
}

/// A mutually exclusive group of indicators fed by one intake field.
///
/// Rules are tried in order and the first match wins. When nothing matches,
/// the fallback flag (the "not recorded" or "no" catch-all) is raised; a
/// category without a fallback leaves every indicator at zero.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: &'static str,
    pub field: IntakeField,
    pub rules: &'static [Rule],
    pub fallback: Option<&'static str>,
}

impl Category {
    pub fn resolve(&self, answer: &Answer) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|r| r.predicate.matches(answer))
            .map(|r| r.flag)
            .or(self.fallback)
    }

    /// Every indicator this category can raise, without duplicates.
    pub fn flags(&self) -> Vec<&'static str> {
        let mut flags: Vec<&'static str> = Vec::new();
        for flag in self.rules.iter().map(|r| r.flag).chain(self.fallback) {
            if !flags.contains(&flag) {
                flags.push(flag);
            }
        }
        flags
    }

    /// Whether every possible answer raises exactly one indicator.
    pub fn is_exhaustive(&self) -> bool {
        self.fallback.is_some()
    }
}

/// An exhaustive category whose indicators are not set exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct CategoryViolation {
    pub category_id: String,
    pub raised: Vec<String>,
    pub message: String,
}
