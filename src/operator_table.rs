use crate::and::AndExt;
use crate::boxed::{BoxedExt, BoxedParser};
use crate::choice::choice;
use crate::cursor::Cursor;
use crate::error::BuildError;
use crate::many::ManyExt;
use crate::map::MapExt;
use crate::optional::OptionalExt;
use crate::parser::Parser;
use crate::zip::ZipExt;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use tracing::{trace, warn};

/// Priority used when a grammar has no reason to pick one
pub const DEFAULT_PRIORITY: i32 = 7;

/// How operators of one priority group with their operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assoc {
    /// `a op b op c` is `(a op b) op c`
    Left,
    /// `a op b op c` is `a op (b op c)`
    Right,
    /// At most one `a op b`, chains are left unparsed
    None,
    /// `op op a`, applied innermost first
    Prefix,
    /// `a op op`, applied left to right
    Postfix,
}

impl Assoc {
    pub fn is_unary(self) -> bool {
        matches!(self, Assoc::Prefix | Assoc::Postfix)
    }

    // Layering order inside one priority, innermost first
    fn layer_rank(self) -> u8 {
        match self {
            Assoc::Postfix => 0,
            Assoc::Prefix => 1,
            Assoc::None => 2,
            Assoc::Right => 3,
            Assoc::Left => 4,
        }
    }
}

impl fmt::Display for Assoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assoc::Left => write!(f, "left"),
            Assoc::Right => write!(f, "right"),
            Assoc::None => write!(f, "non-associative"),
            Assoc::Prefix => write!(f, "prefix"),
            Assoc::Postfix => write!(f, "postfix"),
        }
    }
}

/// What an operator does with its operands
///
/// `K` is the value produced by the operator parser itself, handed to the
/// function so one entry can cover a family of operators.
pub enum Combiner<'code, K, O> {
    Binary(Rc<dyn Fn(O, K, O) -> O + 'code>),
    Unary(Rc<dyn Fn(K, O) -> O + 'code>),
}

impl<'code, K, O> Combiner<'code, K, O>
where
    K: 'code,
    O: 'code,
{
    pub fn binary(f: impl Fn(O, O) -> O + 'code) -> Self {
        Combiner::Binary(Rc::new(move |left: O, _: K, right: O| f(left, right)))
    }

    pub fn binary_with(f: impl Fn(O, K, O) -> O + 'code) -> Self {
        Combiner::Binary(Rc::new(f))
    }

    pub fn unary(f: impl Fn(O) -> O + 'code) -> Self {
        Combiner::Unary(Rc::new(move |_: K, operand: O| f(operand)))
    }

    pub fn unary_with(f: impl Fn(K, O) -> O + 'code) -> Self {
        Combiner::Unary(Rc::new(f))
    }

    fn kind(&self) -> &'static str {
        match self {
            Combiner::Binary(_) => "binary",
            Combiner::Unary(_) => "unary",
        }
    }
}

type BinaryFn<'code, O> = Box<dyn FnOnce(O, O) -> O + 'code>;
type UnaryFn<'code, O> = Box<dyn FnOnce(O) -> O + 'code>;

// An operator parser whose value already carries its payload
enum Operator<'code, C, O> {
    Binary(BoxedParser<'code, C, BinaryFn<'code, O>>),
    Unary(BoxedParser<'code, C, UnaryFn<'code, O>>),
}

struct Entry<'code, C, O> {
    priority: i32,
    assoc: Assoc,
    description: String,
    kind: &'static str,
    operator: Operator<'code, C, O>,
}

/// Declarative precedence table compiled into a single expression parser
///
/// Entries are grouped by priority and associativity. Higher priorities bind
/// tighter. Within one bucket, operators are tried in declaration order.
///
/// ```
/// use combiparse::operator_table::{Assoc, OperatorTable};
/// use combiparse::parser::StrParser;
/// use combiparse::text::{decimal, lexeme, lexeme_char};
///
/// let expr = OperatorTable::new(lexeme(decimal()))
///     .binary(lexeme_char('+'), 2, Assoc::Left, |a, b| a + b)
///     .binary(lexeme_char('*'), 4, Assoc::Left, |a, b| a * b)
///     .build()
///     .unwrap();
/// assert_eq!(expr.parse_str("1 + 2 * 3").unwrap().0, 7);
/// ```
pub struct OperatorTable<'code, C, O> {
    operand: BoxedParser<'code, C, O>,
    entries: Vec<Entry<'code, C, O>>,
}

impl<'code, C, O> OperatorTable<'code, C, O>
where
    C: Cursor<'code> + 'code,
    O: 'code,
{
    pub fn new<P>(operand: P) -> Self
    where
        P: Parser<'code, Cursor = C, Output = O> + 'code,
    {
        OperatorTable {
            operand: operand.boxed(),
            entries: Vec::new(),
        }
    }

    /// Add an operator with an explicit combiner
    ///
    /// Unary combiners belong with prefix or postfix associativity, binary
    /// ones with the rest; a mismatch is reported by [`build`](Self::build).
    pub fn entry<P>(
        mut self,
        operator: P,
        priority: i32,
        assoc: Assoc,
        combiner: Combiner<'code, P::Output, O>,
    ) -> Self
    where
        P: Parser<'code, Cursor = C> + 'code,
        P::Output: 'code,
    {
        let description = operator.description();
        let kind = combiner.kind();
        let operator = match combiner {
            Combiner::Binary(f) => Operator::Binary(
                operator
                    .map(move |payload| {
                        let f = Rc::clone(&f);
                        Box::new(move |left: O, right: O| f(left, payload, right))
                            as BinaryFn<'code, O>
                    })
                    .boxed(),
            ),
            Combiner::Unary(f) => Operator::Unary(
                operator
                    .map(move |payload| {
                        let f = Rc::clone(&f);
                        Box::new(move |operand: O| f(payload, operand)) as UnaryFn<'code, O>
                    })
                    .boxed(),
            ),
        };
        self.entries.push(Entry {
            priority,
            assoc,
            description,
            kind,
            operator,
        });
        self
    }

    pub fn binary<P>(
        self,
        operator: P,
        priority: i32,
        assoc: Assoc,
        f: impl Fn(O, O) -> O + 'code,
    ) -> Self
    where
        P: Parser<'code, Cursor = C> + 'code,
        P::Output: 'code,
    {
        self.entry(operator, priority, assoc, Combiner::binary(f))
    }

    /// Binary operator whose combiner also sees the operator's parsed value
    pub fn binary_with<P>(
        self,
        operator: P,
        priority: i32,
        assoc: Assoc,
        f: impl Fn(O, P::Output, O) -> O + 'code,
    ) -> Self
    where
        P: Parser<'code, Cursor = C> + 'code,
        P::Output: 'code,
    {
        self.entry(operator, priority, assoc, Combiner::binary_with(f))
    }

    pub fn prefix<P>(self, operator: P, priority: i32, f: impl Fn(O) -> O + 'code) -> Self
    where
        P: Parser<'code, Cursor = C> + 'code,
        P::Output: 'code,
    {
        self.entry(operator, priority, Assoc::Prefix, Combiner::unary(f))
    }

    pub fn postfix<P>(self, operator: P, priority: i32, f: impl Fn(O) -> O + 'code) -> Self
    where
        P: Parser<'code, Cursor = C> + 'code,
        P::Output: 'code,
    {
        self.entry(operator, priority, Assoc::Postfix, Combiner::unary(f))
    }

    /// Declared entries as (priority, associativity, operator description)
    pub fn entries(&self) -> impl Iterator<Item = (i32, Assoc, &str)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.priority, entry.assoc, entry.description.as_str()))
    }

    /// Compile the table into one parser
    pub fn build(self) -> Result<BoxedParser<'code, C, O>, BuildError> {
        if self.entries.is_empty() {
            warn!("operator table built without entries");
            return Ok(self.operand);
        }

        let mut groups: BTreeMap<(Reverse<i32>, u8), (Assoc, Vec<Operator<'code, C, O>>)> =
            BTreeMap::new();
        for entry in self.entries {
            if entry.assoc.is_unary() != matches!(entry.operator, Operator::Unary(_)) {
                return Err(BuildError::CombinerMismatch {
                    operator: entry.description,
                    combiner: entry.kind,
                    assoc: entry.assoc,
                });
            }
            groups
                .entry((Reverse(entry.priority), entry.assoc.layer_rank()))
                .or_insert_with(|| (entry.assoc, Vec::new()))
                .1
                .push(entry.operator);
        }

        trace!(groups = groups.len(), "building operator table");
        let mut current = self.operand;
        for (assoc, operators) in groups.into_values() {
            current = layer(assoc, current, operators);
        }
        Ok(current)
    }
}

fn binaries<'code, C, O>(
    operators: Vec<Operator<'code, C, O>>,
) -> Vec<BoxedParser<'code, C, BinaryFn<'code, O>>> {
    operators
        .into_iter()
        .filter_map(|operator| match operator {
            Operator::Binary(parser) => Some(parser),
            Operator::Unary(_) => None,
        })
        .collect()
}

fn unaries<'code, C, O>(
    operators: Vec<Operator<'code, C, O>>,
) -> Vec<BoxedParser<'code, C, UnaryFn<'code, O>>> {
    operators
        .into_iter()
        .filter_map(|operator| match operator {
            Operator::Unary(parser) => Some(parser),
            Operator::Binary(_) => None,
        })
        .collect()
}

fn layer<'code, C, O>(
    assoc: Assoc,
    operand: BoxedParser<'code, C, O>,
    operators: Vec<Operator<'code, C, O>>,
) -> BoxedParser<'code, C, O>
where
    C: Cursor<'code> + 'code,
    O: 'code,
{
    match assoc {
        Assoc::Left => {
            let operator = choice(binaries(operators));
            operand
                .clone()
                .zip(operator.and(operand).many(), |first, rest| {
                    rest.into_iter()
                        .fold(first, |left, (apply, right)| apply(left, right))
                })
                .boxed()
        }
        Assoc::Right => {
            let operator = choice(binaries(operators));
            operand
                .clone()
                .and(operator)
                .many()
                .zip(operand, |rest, last| {
                    rest.into_iter()
                        .rev()
                        .fold(last, |right, (left, apply)| apply(left, right))
                })
                .boxed()
        }
        Assoc::None => {
            let operator = choice(binaries(operators));
            operand
                .clone()
                .zip(operator.and(operand).optional(), |left, rest| match rest {
                    Some((apply, right)) => apply(left, right),
                    None => left,
                })
                .boxed()
        }
        Assoc::Prefix => {
            let operator = choice(unaries(operators));
            operator
                .many()
                .zip(operand, |applies, value| {
                    applies.into_iter().rev().fold(value, |acc, apply| apply(acc))
                })
                .boxed()
        }
        Assoc::Postfix => {
            let operator = choice(unaries(operators));
            operand
                .zip(operator.many(), |value, applies| {
                    applies.into_iter().fold(value, |acc, apply| apply(acc))
                })
                .boxed()
        }
    }
}
