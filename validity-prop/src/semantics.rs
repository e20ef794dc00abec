/*! Implements truth assignments and decides the validity of arguments by truth tables.

An argument is valid if every assignment that makes all of its premises true also makes its
conclusion true. [`check`] decides validity by enumerating every assignment to the atoms of the
argument with [`Assignments`]. The number of assignments is 2<sup>n</sup> for an argument with
n distinct atoms.

**Example**:
```rust
use validity_prop::{parser::Parser, semantics::Verdict};

let parser = Parser::default();

// modus ponens:
let argument = parser.parse_argument(&["P > Q", "P"], "Q").unwrap();
assert_eq!(Verdict::Valid, argument.check());

// affirming the consequent:
let argument = parser.parse_argument(&["P > Q", "Q"], "P").unwrap();
assert_eq!(
    "invalid; consider {P: false, Q: true}",
    argument.check().to_string()
);
```
*/
use crate::syntax::{Argument, Formula, V};
use itertools::Itertools;
use std::{collections::BTreeMap, fmt, iter::FromIterator, ops::Index};

/// Is a mapping from variables to truth values.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Assignment(BTreeMap<V, bool>);

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Assigns `value` to `variable`, replacing its previous value.
    pub fn assign(&mut self, variable: V, value: bool) {
        self.0.insert(variable, value);
    }

    /// Returns the value of `variable` or `None` if `variable` is not assigned.
    pub fn get(&self, variable: &V) -> Option<bool> {
        self.0.get(variable).copied()
    }

    /// Returns the number of assigned variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no variable is assigned.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the variables and their values, ordered by variable.
    pub fn iter(&self) -> impl Iterator<Item = (&V, bool)> {
        self.0.iter().map(|(v, b)| (v, *b))
    }
}

impl Index<&V> for Assignment {
    type Output = bool;

    fn index(&self, variable: &V) -> &bool {
        self.0
            .get(variable)
            .unwrap_or_else(|| panic!("variable `{}` is not assigned", variable))
    }
}

impl FromIterator<(V, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (V, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let vs = self.iter().map(|(v, b)| format!("{}: {}", v, b)).collect_vec();
        write!(f, "{{{}}}", vs.join(", "))
    }
}

impl fmt::Debug for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Enumerates every assignment to a set of variables, each exactly once.
///
/// The enumeration order is fixed: the variables are sorted, the *k*-th variable reads bit *k*
/// of a counter that runs from 0 to 2<sup>n</sup> - 1, and a clear bit stands for `true`. The
/// first assignment maps every variable to `true` and the last maps every variable to `false`.
///
/// **Note**: at most 63 distinct variables are supported.
#[derive(Clone, Debug)]
pub struct Assignments {
    variables: Vec<V>,
    next: u64,
    count: u64,
}

impl Assignments {
    /// Creates an enumeration of the assignments to `variables`. Duplicate variables are
    /// ignored.
    pub fn new<I: IntoIterator<Item = V>>(variables: I) -> Self {
        let mut variables = variables.into_iter().collect_vec();
        variables.sort();
        variables.dedup();
        assert!(
            variables.len() < 64,
            "cannot enumerate the assignments of {} variables",
            variables.len()
        );
        let count = 1u64 << variables.len();
        Self {
            variables,
            next: 0,
            count,
        }
    }

    /// Returns the (sorted) variables of the receiver.
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// Returns the assignment at position `index` of the enumeration.
    pub fn assignment(&self, index: u64) -> Assignment {
        self.variables
            .iter()
            .enumerate()
            .map(|(k, v)| (*v, (index >> k) & 1 == 0))
            .collect()
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.count {
            let assignment = self.assignment(self.next);
            self.next += 1;
            Some(assignment)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}

/// Is the outcome of deciding the validity of an argument.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Verdict {
    /// The conclusion is true under every assignment that makes all premises true.
    Valid,

    /// The `counterexample` makes every premise true and the conclusion false.
    Invalid { counterexample: Assignment },
}

impl Verdict {
    /// Returns true if the receiver is [`Verdict::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the counterexample of an invalid verdict.
    pub fn counterexample(&self) -> Option<&Assignment> {
        match self {
            Self::Valid => None,
            Self::Invalid { counterexample } => Some(counterexample),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Invalid { counterexample } => write!(f, "invalid; consider {}", counterexample),
        }
    }
}

/// Decides the validity of `argument`.
///
/// The assignments to the atoms of `argument` are visited in the order of [`Assignments`].
/// For each assignment, the conclusion is evaluated first; the premises are evaluated in order
/// only if the conclusion is false, stopping at the first false premise. The first assignment
/// that makes every premise true and the conclusion false is returned as the counterexample.
pub fn check(argument: &Argument) -> Verdict {
    let span = span!(
        tracing::Level::INFO,
        crate::trace::CHECK,
        argument = %argument
    );
    let _enter = span.enter();

    let assignments = Assignments::new(argument.atoms().into_iter().cloned());
    let total = assignments.len() as u64;
    for (index, assignment) in assignments.enumerate() {
        let conclusion = argument.conclusion().evaluate(&assignment);
        debug!(
            event = crate::trace::EVALUATE,
            index = index as u64,
            assignment = %assignment,
            conclusion = conclusion,
        );
        if !conclusion && argument.premises().iter().all(|p| p.evaluate(&assignment)) {
            info!(
                event = crate::trace::INVALID,
                visited = index as u64 + 1,
                counterexample = %assignment,
            );
            return Verdict::Invalid {
                counterexample: assignment,
            };
        }
    }

    info!(event = crate::trace::VALID, visited = total);
    Verdict::Valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assignment, parser::Parser, stmt, v};
    use std::collections::HashSet;

    fn argument(premises: &[&str], conclusion: &str) -> Argument {
        Parser::default()
            .parse_argument(premises, conclusion)
            .unwrap()
    }

    #[test]
    fn test_assignment() {
        let mut a = Assignment::new();
        assert!(a.is_empty());
        a.assign(v!(Q), false);
        a.assign(v!(P), true);
        assert_eq!(2, a.len());
        assert_eq!(Some(true), a.get(&v!(P)));
        assert_eq!(Some(false), a.get(&v!(Q)));
        assert_eq!(None, a.get(&v!(R)));
        assert!(a[&v!(P)]);
        assert!(!a[&v!(Q)]);

        a.assign(v!(Q), true);
        assert_eq!(Some(true), a.get(&v!(Q)));
        assert_eq!(2, a.len());
    }

    #[test]
    #[should_panic(expected = "variable `R` is not assigned")]
    fn test_assignment_missing_variable() {
        let a = assignment! { P => true };
        let _ = a[&v!(R)];
    }

    #[test]
    fn test_assignment_to_string() {
        assert_eq!("{}", Assignment::new().to_string());
        assert_eq!(
            "{P: false, Q: true}",
            assignment! { Q => true, P => false }.to_string()
        );
    }

    #[test]
    fn test_assignments_empty() {
        let all = Assignments::new(vec![]).collect_vec();
        assert_eq!(vec![Assignment::new()], all);
    }

    #[test]
    fn test_assignments_order() {
        let all = Assignments::new(vec![v!(Q), v!(P)]).collect_vec();
        assert_eq!(
            vec![
                assignment! { P => true, Q => true },
                assignment! { P => false, Q => true },
                assignment! { P => true, Q => false },
                assignment! { P => false, Q => false },
            ],
            all
        );
    }

    #[test]
    fn test_assignments_exhaustive() {
        for n in 0..8 {
            let vars = "ABCDEFGH".chars().take(n).map(V::from).collect_vec();
            let assignments = Assignments::new(vars.clone());
            assert_eq!(&vars[..], assignments.variables());
            assert_eq!(1 << n, assignments.len());

            let all = assignments.collect_vec();
            assert_eq!(1 << n, all.len());
            assert!(all
                .iter()
                .all(|a| a.len() == n && vars.iter().all(|v| a.get(v).is_some())));
            assert_eq!(all.len(), all.iter().collect::<HashSet<_>>().len());
        }
    }

    #[test]
    fn test_assignments_duplicates() {
        let assignments = Assignments::new(vec![v!(P), v!(Q), v!(P)]);
        assert_eq!(&[v!(P), v!(Q)], assignments.variables());
        assert_eq!(4, assignments.count());
    }

    #[test]
    fn test_assignments_size_hint() {
        let mut assignments = Assignments::new(vec![v!(P), v!(Q), v!(R)]);
        assert_eq!(8, assignments.len());
        assignments.next();
        assignments.next();
        assert_eq!(6, assignments.len());
    }

    #[test]
    fn test_modus_ponens() {
        assert_eq!(Verdict::Valid, check(&argument(&["P>Q", "P"], "Q")));
    }

    #[test]
    fn test_disjunctive_syllogism() {
        assert_eq!(Verdict::Valid, check(&argument(&["P|Q", "~P"], "Q")));
    }

    #[test]
    fn test_converse() {
        assert_eq!(
            Verdict::Invalid {
                counterexample: assignment! { P => false, Q => true },
            },
            check(&argument(&["P>Q"], "Q>P"))
        );
    }

    #[test]
    fn test_tautology() {
        assert_eq!(Verdict::Valid, check(&argument(&[], "P|~P")));
        assert_eq!(
            Verdict::Invalid {
                counterexample: assignment! { P => false },
            },
            check(&argument(&[], "P"))
        );
    }

    #[test]
    fn test_no_premises_reduces_to_tautology() {
        for formula in ["P>P", "(P&Q)>P", "P=Q", "~(P&~P)", "(P>Q)|(Q>P)", "P&~P"].iter() {
            let statement = stmt!(*formula);
            let tautology = Assignments::new(statement.atoms().into_iter().cloned())
                .all(|a| statement.evaluate(&a));
            assert_eq!(tautology, check(&argument(&[], formula)).is_valid());
        }
    }

    #[test]
    fn test_contradictory_premises() {
        assert!(check(&argument(&["P", "~P"], "Q")).is_valid());
    }

    #[test]
    fn test_weakening() {
        let weak = check(&argument(&["P|Q"], "Q"));
        assert!(!weak.is_valid());
        let strong = check(&argument(&["P|Q", "~P"], "Q"));
        assert!(strong.is_valid());
    }

    #[test]
    fn test_counterexample_is_first_found() {
        let verdict = check(&argument(&[], "P&Q"));
        assert_eq!(
            Some(&assignment! { P => false, Q => true }),
            verdict.counterexample()
        );
    }

    #[test]
    fn test_counterexample_falsifies_argument() {
        let argument = argument(&["P>(Q|R)", "~R"], "Q&P");
        match check(&argument) {
            Verdict::Valid => panic!("expecting an invalid argument"),
            Verdict::Invalid { counterexample } => {
                assert!(argument
                    .premises()
                    .iter()
                    .all(|p| p.evaluate(&counterexample)));
                assert!(!argument.conclusion().evaluate(&counterexample));
                assert!(!argument.evaluate(&counterexample));
            }
        }
    }

    #[test]
    fn test_worked_example() {
        let argument = argument(&["~Q > ~R", "~(P & Q)", "~(~P & ~R)"], "~(P = R)");
        let verdict = check(&argument);
        let brute = Assignments::new(argument.atoms().into_iter().cloned())
            .all(|a| argument.evaluate(&a));
        assert_eq!(brute, verdict.is_valid());
        assert!(verdict.is_valid());
    }

    #[test]
    fn test_verdict_to_string() {
        assert_eq!("valid", Verdict::Valid.to_string());
        assert_eq!(
            "invalid; consider {P: false, Q: true}",
            Verdict::Invalid {
                counterexample: assignment! { P => false, Q => true },
            }
            .to_string()
        );
    }
}
