//! Combinators: AND, OR and exactly-one-of.
//!
//! Each combinator holds an ordered list of children plus an "own flag", a plain boolean
//! folded into its logic as an always-present pseudo-child. The own flag lets a gate be
//! forced on or off without restructuring its children.
//!
//! Defaults differ on purpose: `Conjunction` and `Disjunction` start with the own flag set,
//! `ExclusiveDisjunction` starts with it clear.

use std::fmt;

use log::trace;

use crate::condition::{Condition, Predicate};

/// AND over the children, gated by the own flag.
///
/// A clear own flag makes the whole conjunction false without looking at any child.
#[derive(Debug, Clone)]
pub struct Conjunction {
    own_flag: bool,
    children: Vec<Condition>,
}

impl Conjunction {
    /// Conjunction over `children` with the own flag set.
    pub fn new(children: Vec<Condition>) -> Conjunction {
        Conjunction::with_flag(true, children)
    }

    pub fn with_flag(own_flag: bool, children: Vec<Condition>) -> Conjunction {
        Conjunction { own_flag, children }
    }

    pub fn own_flag(&self) -> bool {
        self.own_flag
    }

    pub fn children(&self) -> &[Condition] {
        &self.children
    }
}

impl Default for Conjunction {
    fn default() -> Self {
        Conjunction::new(Vec::new())
    }
}

impl Predicate for Conjunction {
    fn evaluate(&self) -> bool {
        if !self.own_flag {
            trace!("conjunction switched off by own flag; {} children skipped", self.children.len());
            return false;
        }
        self.children.iter().all(Condition::evaluate)
    }
}

/// OR over the children, gated by the own flag.
///
/// A set own flag makes the whole disjunction true without looking at any child, so a
/// default-constructed disjunction is always satisfied. With the flag clear and no
/// children it is false.
#[derive(Debug, Clone)]
pub struct Disjunction {
    own_flag: bool,
    children: Vec<Condition>,
}

impl Disjunction {
    /// Disjunction over `children` with the own flag set (always true until restricted).
    pub fn new(children: Vec<Condition>) -> Disjunction {
        Disjunction::with_flag(true, children)
    }

    pub fn with_flag(own_flag: bool, children: Vec<Condition>) -> Disjunction {
        Disjunction { own_flag, children }
    }

    pub fn own_flag(&self) -> bool {
        self.own_flag
    }

    pub fn children(&self) -> &[Condition] {
        &self.children
    }
}

impl Default for Disjunction {
    fn default() -> Self {
        Disjunction::new(Vec::new())
    }
}

impl Predicate for Disjunction {
    fn evaluate(&self) -> bool {
        // own flag is checked first and on its own; it is not one more element of the fold
        if self.own_flag {
            trace!("disjunction satisfied by own flag; {} children skipped", self.children.len());
            return true;
        }
        self.children.iter().any(Condition::evaluate)
    }
}

/// True iff exactly one of {own flag, children...} holds.
///
/// Every child is evaluated on every query since the exact count decides the result.
#[derive(Debug, Clone)]
pub struct ExclusiveDisjunction {
    own_flag: bool,
    children: Vec<Condition>,
}

impl ExclusiveDisjunction {
    /// Exclusive disjunction over `children` with the own flag clear.
    pub fn new(children: Vec<Condition>) -> ExclusiveDisjunction {
        ExclusiveDisjunction::with_flag(false, children)
    }

    pub fn with_flag(own_flag: bool, children: Vec<Condition>) -> ExclusiveDisjunction {
        ExclusiveDisjunction { own_flag, children }
    }

    pub fn own_flag(&self) -> bool {
        self.own_flag
    }

    pub fn children(&self) -> &[Condition] {
        &self.children
    }

    /// Number of true entries among the own flag and the children.
    pub fn true_count(&self) -> usize {
        usize::from(self.own_flag) + self.children.iter().filter(|c| c.evaluate()).count()
    }
}

impl Default for ExclusiveDisjunction {
    fn default() -> Self {
        ExclusiveDisjunction::new(Vec::new())
    }
}

impl Predicate for ExclusiveDisjunction {
    fn evaluate(&self) -> bool {
        self.true_count() == 1
    }
}

/// Shared rendering: `name(own_flag; child, child, ...)`.
fn write_combinator(f: &mut fmt::Formatter<'_>, name: &str, own_flag: bool, children: &[Condition]) -> fmt::Result {
    write!(f, "{name}({own_flag}")?;
    for (i, child) in children.iter().enumerate() {
        let sep = if i == 0 { "; " } else { ", " };
        write!(f, "{sep}{child}")?;
    }
    f.write_str(")")
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_combinator(f, "and", self.own_flag, &self.children)
    }
}

impl fmt::Display for Disjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_combinator(f, "or", self.own_flag, &self.children)
    }
}

impl fmt::Display for ExclusiveDisjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_combinator(f, "xor", self.own_flag, &self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Comparison, Counter, Flag, NumericCondition};

    fn lits(values: &[bool]) -> Vec<Condition> {
        values.iter().map(|v| Flag::new(*v).into()).collect()
    }

    #[test]
    fn default_own_flags_are_asymmetric() {
        assert!(Conjunction::default().own_flag());
        assert!(Disjunction::default().own_flag());
        assert!(!ExclusiveDisjunction::default().own_flag());
    }

    #[test]
    fn empty_combinators_follow_their_own_flag() {
        assert!(Conjunction::default().evaluate());
        assert!(!Conjunction::with_flag(false, vec![]).evaluate());
        assert!(Disjunction::default().evaluate());
        assert!(!Disjunction::with_flag(false, vec![]).evaluate());
        assert!(!ExclusiveDisjunction::default().evaluate());
        assert!(ExclusiveDisjunction::with_flag(true, vec![]).evaluate());
    }

    #[test]
    fn conjunction_requires_every_child() {
        assert!(Conjunction::new(lits(&[true, true, true])).evaluate());
        assert!(!Conjunction::new(lits(&[true, false, true])).evaluate());
    }

    #[test]
    fn cleared_own_flag_disables_conjunction() {
        let and = Conjunction::with_flag(false, lits(&[true, true]));
        assert!(!and.evaluate());
    }

    #[test]
    fn disjunction_with_own_flag_ignores_children() {
        let or = Disjunction::new(lits(&[false, false]));
        assert!(or.evaluate());
    }

    #[test]
    fn restricted_disjunction_needs_a_true_child() {
        assert!(!Disjunction::with_flag(false, lits(&[false, false])).evaluate());
        assert!(Disjunction::with_flag(false, lits(&[false, true])).evaluate());
    }

    #[test]
    fn exclusive_disjunction_counts_own_flag_and_children() {
        let cases: [(bool, &[bool], bool); 8] = [
            (false, &[], false),
            (false, &[false, false], false),
            (false, &[true, false], true),
            (false, &[false, false, true], true),
            (false, &[true, true], false),
            (true, &[false, false], true),
            (true, &[true], false),
            (true, &[true, true, true], false),
        ];
        for (own, children, expected) in cases {
            let xor = ExclusiveDisjunction::with_flag(own, lits(children));
            assert_eq!(xor.evaluate(), expected, "own {own}, children {children:?}");
        }
    }

    #[test]
    fn true_count_tracks_leaf_changes() {
        let a = Flag::new(false);
        let b = Flag::new(false);
        let xor = ExclusiveDisjunction::new(vec![a.clone().into(), b.clone().into()]);
        assert_eq!(xor.true_count(), 0);
        a.raise();
        assert_eq!(xor.true_count(), 1);
        assert!(xor.evaluate());
        b.raise();
        assert_eq!(xor.true_count(), 2);
        assert!(!xor.evaluate());
    }

    #[test]
    fn combinators_reflect_counter_changes() {
        let visits = Counter::new(0);
        let and = Conjunction::new(vec![
            NumericCondition::new(visits.clone(), Comparison::GreaterThan, 1).into(),
            NumericCondition::new(visits.clone(), Comparison::LessThan, 4).into(),
        ]);
        assert!(!and.evaluate());
        visits.set(2);
        assert!(and.evaluate());
        visits.set(4);
        assert!(!and.evaluate());
    }

    #[test]
    fn children_are_kept_in_order() {
        let and = Conjunction::new(lits(&[true, false]));
        let rendered: Vec<String> = and.children().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["true", "false"]);
    }

    #[test]
    fn display_lists_own_flag_then_children() {
        assert_eq!(Conjunction::default().to_string(), "and(true)");
        assert_eq!(
            ExclusiveDisjunction::new(lits(&[true, false])).to_string(),
            "xor(false; true, false)"
        );
    }
}
