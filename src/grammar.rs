//! Named, mutually recursive rules with optional packrat memoization
//!
//! Rules are declared first and bound later, so they can refer to each other
//! in any order:
//!
//! ```
//! use combiparse::grammar::Grammar;
//! use combiparse::map::MapExt;
//! use combiparse::or::OrExt;
//! use combiparse::parser::StrParser;
//! use combiparse::skip::SkipExt;
//! use combiparse::text::char;
//! use combiparse::then::ThenExt;
//!
//! let mut grammar = Grammar::new();
//! let list = grammar.declare::<usize>("list").unwrap();
//! let item = grammar.declare::<usize>("item").unwrap();
//!
//! grammar
//!     .bind(&list, char('[').then(item.clone()).skip(char(']')).map(|n| n + 1))
//!     .unwrap();
//! grammar.bind(&item, list.clone().or(char('x').to(0))).unwrap();
//!
//! let parser = grammar.finish(&list).unwrap();
//! assert_eq!(parser.parse_str("[[x]]").unwrap().0, 2);
//! ```
//!
//! A packrat grammar ([`Grammar::packrat`]) caches every rule result per
//! input position. A rule that reaches itself again at the same position
//! without consuming input gets an `Error` ("left recursion detected")
//! instead of recursing forever.

use crate::boxed::{BoxedExt, BoxedParser};
use crate::cursor::{Cursor, InputId};
use crate::error::{BuildError, NoSuccess};
use crate::parser::{ParseResult, Parser};
use std::cell::{Cell, OnceCell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

// `None` marks a rule that is still being computed at that position
type MemoTable<'code, C, O> = HashMap<(InputId, usize), Option<ParseResult<'code, C, O>>>;

struct RuleSlot<'code, C, O>
where
    C: Cursor<'code>,
{
    name: Rc<str>,
    parser: OnceCell<BoxedParser<'code, C, O>>,
    memo: Option<RefCell<MemoTable<'code, C, O>>>,
    memo_input: Cell<Option<InputId>>,
}

// What the grammar needs to know about a rule regardless of its output type
trait ErasedRule {
    fn name(&self) -> &str;
    fn is_bound(&self) -> bool;
    fn clear_memo(&self);
    fn memo_len(&self) -> usize;
}

impl<'code, C, O> ErasedRule for RuleSlot<'code, C, O>
where
    C: Cursor<'code>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn is_bound(&self) -> bool {
        self.parser.get().is_some()
    }

    fn clear_memo(&self) {
        if let Some(memo) = &self.memo {
            memo.borrow_mut().clear();
        }
    }

    fn memo_len(&self) -> usize {
        self.memo.as_ref().map_or(0, |memo| memo.borrow().len())
    }
}

/// Handle to a declared non-terminal
///
/// Cheap to clone and usable as a parser anywhere, including inside its own
/// definition. The handle does not own the rule; the grammar (and later the
/// [`GrammarParser`]) does.
///
/// In a packrat grammar each rule keeps results for the last input it saw
/// only, so a handle used directly inside another parser stays bounded too.
///
/// # Panics
///
/// Parsing with a rule that has not been bound yet panics. Going through
/// [`Grammar::finish`] rules this out.
pub struct Rule<'code, C, O>
where
    C: Cursor<'code>,
{
    name: Rc<str>,
    slot: Weak<RuleSlot<'code, C, O>>,
}

impl<'code, C, O> Clone for Rule<'code, C, O>
where
    C: Cursor<'code>,
{
    fn clone(&self) -> Self {
        Rule {
            name: Rc::clone(&self.name),
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<'code, C, O> fmt::Debug for Rule<'code, C, O>
where
    C: Cursor<'code>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

impl<'code, C, O> Rule<'code, C, O>
where
    C: Cursor<'code>,
{
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<'code, C, O> Parser<'code> for Rule<'code, C, O>
where
    C: Cursor<'code>,
    O: Clone,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let Some(slot) = self.slot.upgrade() else {
            return Err(NoSuccess::error(
                format!("rule `{}` used after its grammar was dropped", self.name),
                cursor.location().clone(),
            ));
        };
        let Some(parser) = slot.parser.get() else {
            panic!("rule `{}` invoked before it was bound", self.name);
        };
        let Some(memo) = &slot.memo else {
            return parser.parse(cursor);
        };

        let key = (cursor.input_id(), cursor.position());
        if slot.memo_input.replace(Some(key.0)) != Some(key.0) {
            memo.borrow_mut().clear();
        }
        let cached = memo.borrow().get(&key).cloned();
        match cached {
            Some(Some(result)) => return result,
            Some(None) => {
                debug!(rule = %self.name, position = key.1, "left recursion detected");
                return Err(NoSuccess::error(
                    "left recursion detected",
                    cursor.location().clone(),
                ));
            }
            None => {}
        }

        memo.borrow_mut().insert(key, None);
        let result = parser.parse(cursor);
        memo.borrow_mut().insert(key, Some(result.clone()));
        result
    }

    fn description(&self) -> String {
        self.name.to_string()
    }
}

/// Registry of non-terminals under construction
pub struct Grammar<'code, C> {
    packrat: bool,
    rules: Vec<Rc<dyn ErasedRule + 'code>>,
    _cursor: PhantomData<fn() -> C>,
}

impl<'code, C> Default for Grammar<'code, C>
where
    C: Cursor<'code> + 'code,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, C> Grammar<'code, C>
where
    C: Cursor<'code> + 'code,
{
    /// Plain grammar: rules delegate straight to their bound parser
    pub fn new() -> Self {
        Grammar {
            packrat: false,
            rules: Vec::new(),
            _cursor: PhantomData,
        }
    }

    /// Grammar whose rules memoize results and detect left recursion
    pub fn packrat() -> Self {
        Grammar {
            packrat: true,
            ..Self::new()
        }
    }

    pub fn is_packrat(&self) -> bool {
        self.packrat
    }

    /// Introduce a rule that will be bound later
    pub fn declare<O>(&mut self, name: impl Into<String>) -> Result<Rule<'code, C, O>, BuildError>
    where
        O: Clone + 'code,
    {
        let name: String = name.into();
        if self.rules.iter().any(|rule| rule.name() == name) {
            return Err(BuildError::DuplicateRule { name });
        }
        let name: Rc<str> = name.into();
        let slot = Rc::new(RuleSlot {
            name: Rc::clone(&name),
            parser: OnceCell::new(),
            memo: self.packrat.then(|| RefCell::new(HashMap::new())),
            memo_input: Cell::new(None),
        });
        let rule = Rule {
            name,
            slot: Rc::downgrade(&slot),
        };
        self.rules.push(slot);
        Ok(rule)
    }

    /// Attach the real parser to a declared rule; each rule is bound once
    pub fn bind<O, P>(&self, rule: &Rule<'code, C, O>, parser: P) -> Result<(), BuildError>
    where
        O: Clone + 'code,
        P: Parser<'code, Cursor = C, Output = O> + 'code,
    {
        let bound = rule
            .slot
            .upgrade()
            .is_some_and(|slot| slot.parser.set(parser.boxed()).is_ok());
        if !bound {
            return Err(BuildError::AlreadyBound {
                name: rule.name.to_string(),
            });
        }
        trace!(rule = %rule.name, "rule bound");
        Ok(())
    }

    /// Check that every rule is bound and produce the top-level parser
    pub fn finish<O>(self, start: &Rule<'code, C, O>) -> Result<GrammarParser<'code, C, O>, BuildError>
    where
        O: Clone + 'code,
    {
        let unbound: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| !rule.is_bound())
            .map(|rule| rule.name().to_string())
            .collect();
        if !unbound.is_empty() {
            return Err(BuildError::Unbound { names: unbound });
        }
        debug!(
            rules = self.rules.len(),
            packrat = self.packrat,
            start = %start.name,
            "grammar finished"
        );
        Ok(GrammarParser {
            start: start.clone(),
            rules: self.rules,
            last_input: Cell::new(None),
        })
    }
}

/// A finished grammar, parsing from its start rule
///
/// Owns every rule of the grammar. When handed a cursor over an input it has
/// not seen last time, it drops all memoized results first, so the memo
/// never grows beyond one input.
pub struct GrammarParser<'code, C, O>
where
    C: Cursor<'code>,
{
    start: Rule<'code, C, O>,
    rules: Vec<Rc<dyn ErasedRule + 'code>>,
    last_input: Cell<Option<InputId>>,
}

impl<'code, C, O> GrammarParser<'code, C, O>
where
    C: Cursor<'code>,
{
    /// Drop every memoized result
    pub fn clear_memo(&self) {
        for rule in &self.rules {
            rule.clear_memo();
        }
        trace!("memo cleared");
    }

    /// Number of memoized (rule, position) results currently held
    pub fn memo_len(&self) -> usize {
        self.rules.iter().map(|rule| rule.memo_len()).sum()
    }
}

impl<'code, C, O> Parser<'code> for GrammarParser<'code, C, O>
where
    C: Cursor<'code>,
    O: Clone,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let input = cursor.input_id();
        if self.last_input.replace(Some(input)) != Some(input) {
            self.clear_memo();
        }
        self.start.parse(cursor)
    }

    fn description(&self) -> String {
        self.start.description()
    }
}
