use crate::boxed::BoxedParser;
use crate::cursor::Cursor;
use crate::error::NoSuccess;
use crate::parser::{ParseResult, Parser};
use std::cell::OnceCell;
use std::rc::{Rc, Weak};

type Slot<'code, C, O> = OnceCell<BoxedParser<'code, C, O>>;

enum Handle<'code, C, O> {
    Owned(Rc<Slot<'code, C, O>>),
    Inner(Weak<Slot<'code, C, O>>),
}

impl<C, O> Clone for Handle<'_, C, O> {
    fn clone(&self) -> Self {
        match self {
            Handle::Owned(slot) => Handle::Owned(Rc::clone(slot)),
            Handle::Inner(slot) => Handle::Inner(Weak::clone(slot)),
        }
    }
}

/// A parser that refers to itself
///
/// Built by [`recursive`]. The definition closure receives a handle to the
/// parser being defined and can embed it anywhere inside its own body. The
/// handle given to the closure is weak, so the finished parser does not keep
/// itself alive through a reference cycle.
pub struct Recursive<'code, C, O> {
    handle: Handle<'code, C, O>,
}

impl<C, O> Clone for Recursive<'_, C, O> {
    fn clone(&self) -> Self {
        Recursive {
            handle: self.handle.clone(),
        }
    }
}

impl<'code, C, O> Parser<'code> for Recursive<'code, C, O>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let slot = match &self.handle {
            Handle::Owned(slot) => Rc::clone(slot),
            Handle::Inner(slot) => match slot.upgrade() {
                Some(slot) => slot,
                None => {
                    return Err(NoSuccess::error(
                        "recursive parser used after it was dropped",
                        cursor.location().clone(),
                    ));
                }
            },
        };
        match slot.get() {
            Some(parser) => parser.parse(cursor),
            None => Err(NoSuccess::error(
                "recursive parser used before its definition finished",
                cursor.location().clone(),
            )),
        }
    }

    fn description(&self) -> String {
        "<recursive>".into()
    }
}

/// Define a parser in terms of itself
///
/// ```
/// use combiparse::map::MapExt;
/// use combiparse::or::OrExt;
/// use combiparse::parser::StrParser;
/// use combiparse::recursive::recursive;
/// use combiparse::skip::SkipExt;
/// use combiparse::text::char;
/// use combiparse::then::ThenExt;
///
/// let depth = recursive(|nested| {
///     char('[')
///         .then(nested)
///         .skip(char(']'))
///         .map(|d: usize| d + 1)
///         .or(char('.').to(0usize))
/// });
/// assert_eq!(depth.parse_str("[[.]]").unwrap().0, 2);
/// ```
pub fn recursive<'code, C, O, P, F>(define: F) -> Recursive<'code, C, O>
where
    C: Cursor<'code> + 'code,
    O: 'code,
    P: Parser<'code, Cursor = C, Output = O> + 'code,
    F: FnOnce(Recursive<'code, C, O>) -> P,
{
    let slot: Rc<Slot<'code, C, O>> = Rc::new(OnceCell::new());
    let inner = Recursive {
        handle: Handle::Inner(Rc::downgrade(&slot)),
    };
    // The cell is fresh, so this is the only assignment it sees.
    let _ = slot.set(BoxedParser::new(define(inner)));
    Recursive {
        handle: Handle::Owned(slot),
    }
}
