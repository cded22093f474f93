//! Turn records and their small inline container.

use crate::geometry::Point;
use crate::relate::SegmentRatio;

/// Classification of a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    None,
    Crosses,
    Touch,
    TouchInterior,
    Collinear,
    Equal,
    Start,
    /// A handler reached a configuration it cannot classify.
    Error,
}

impl Method {
    /// One-character code for compact output (`'-'` for none, `'!'` for error).
    pub fn as_char(self) -> char {
        match self {
            Method::None => '-',
            Method::Crosses => 'i',
            Method::Touch => 't',
            Method::TouchInterior => 'm',
            Method::Collinear => 'c',
            Method::Equal => 'e',
            Method::Start => 's',
            Method::Error => '!',
        }
    }
}

/// Traversal instruction for one side of a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Not assigned.
    #[default]
    None,
    Union,
    Intersection,
    Blocked,
    Continue,
    Opposite,
}

impl Operation {
    /// One-character code, as in the `ui`/`ix` notation of the handler tables.
    pub fn as_char(self) -> char {
        match self {
            Operation::None => '-',
            Operation::Union => 'u',
            Operation::Intersection => 'i',
            Operation::Blocked => 'x',
            Operation::Continue => 'c',
            Operation::Opposite => 'o',
        }
    }
}

/// Operation plus the position of the turn along the operand's own segment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TurnOperation {
    pub operation: Operation,
    pub fraction: SegmentRatio,
}

/// One of the two operands of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    P,
    Q,
}

impl Operand {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Operand::P => 0,
            Operand::Q => 1,
        }
    }
    #[inline]
    pub fn other(self) -> Operand {
        match self {
            Operand::P => Operand::Q,
            Operand::Q => Operand::P,
        }
    }
}

/// A classified intersection event.
///
/// `ext` carries caller fields; the dispatcher clones it from the template
/// into every emitted turn.
#[derive(Clone, Debug, PartialEq)]
pub struct Turn<E = ()> {
    pub point: Point,
    pub method: Method,
    /// `[P, Q]`.
    pub operations: [TurnOperation; 2],
    pub touch_only: bool,
    pub ext: E,
}

impl<E: Default> Default for Turn<E> {
    fn default() -> Self {
        Self {
            point: Point::zeros(),
            method: Method::None,
            operations: [TurnOperation::default(); 2],
            touch_only: false,
            ext: E::default(),
        }
    }
}

impl<E> Turn<E> {
    #[inline]
    pub fn op(&self, operand: Operand) -> Operation {
        self.operations[operand.index()].operation
    }
    #[inline]
    pub fn ops(&self) -> (Operation, Operation) {
        (self.operations[0].operation, self.operations[1].operation)
    }
    /// True if neither operation was assigned. Only a touch where one
    /// segment folds back onto the shared line is emitted this way.
    #[inline]
    pub fn is_undecided(&self) -> bool {
        self.ops() == (Operation::None, Operation::None)
    }
    /// Operation codes of P and Q, e.g. `"ui"`.
    pub fn ops_code(&self) -> String {
        self.operations
            .iter()
            .map(|o| o.operation.as_char())
            .collect()
    }
    #[inline]
    pub(crate) fn set_op(&mut self, operand: Operand, operation: Operation) {
        self.operations[operand.index()].operation = operation;
    }
}

/// Zero, one or two turns, stored inline.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnSet<E = ()> {
    turns: [Option<Turn<E>>; 2],
    len: usize,
}

impl<E> Default for TurnSet<E> {
    fn default() -> Self {
        Self {
            turns: [None, None],
            len: 0,
        }
    }
}

impl<E> TurnSet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre: fewer than two turns stored.
    pub(crate) fn push(&mut self, turn: Turn<E>) {
        assert!(self.len < 2, "a segment pair yields at most two turns");
        self.turns[self.len] = Some(turn);
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn get(&self, index: usize) -> Option<&Turn<E>> {
        self.turns.get(index).and_then(Option::as_ref)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Turn<E>> {
        self.turns.iter().flatten()
    }
}

impl<E> IntoIterator for TurnSet<E> {
    type Item = Turn<E>;
    type IntoIter = std::iter::Flatten<std::array::IntoIter<Option<Turn<E>>, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_set_holds_up_to_two() {
        let mut set: TurnSet = TurnSet::new();
        assert!(set.is_empty());
        let mut t = Turn::default();
        t.method = Method::Touch;
        set.push(t.clone());
        t.method = Method::Crosses;
        set.push(t);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).map(|t| t.method), Some(Method::Crosses));
        assert!(set.get(2).is_none());
        let methods: Vec<_> = set.into_iter().map(|t| t.method).collect();
        assert_eq!(methods, vec![Method::Touch, Method::Crosses]);
    }

    #[test]
    #[should_panic]
    fn third_turn_panics() {
        let mut set: TurnSet = TurnSet::new();
        for _ in 0..3 {
            set.push(Turn::default());
        }
    }

    #[test]
    fn operands() {
        assert_eq!(Operand::P.index(), 0);
        assert_eq!(Operand::Q.other(), Operand::P);
        let mut t: Turn = Turn::default();
        assert!(t.is_undecided());
        t.set_op(Operand::Q, Operation::Blocked);
        assert!(!t.is_undecided());
        assert_eq!(t.ops(), (Operation::None, Operation::Blocked));
        assert_eq!(t.op(Operand::Q), Operation::Blocked);
        assert_eq!(t.ops_code(), "-x");
    }

    #[test]
    fn codes() {
        assert_eq!(Method::TouchInterior.as_char(), 'm');
        assert_eq!(Method::Error.as_char(), '!');
        let mut t: Turn = Turn::default();
        t.set_op(Operand::P, Operation::Union);
        t.set_op(Operand::Q, Operation::Intersection);
        assert_eq!(t.ops_code(), "ui");
        assert_eq!(Operation::Opposite.as_char(), 'o');
    }
}
