use crate::many::repeat_into;
use crate::parser::{ParseResult, Parser};
use std::ops::{Bound, RangeBounds};

/// Bounded repetition: between `min` and `max` occurrences, both inclusive
///
/// An empty range such as `0..0` succeeds at once, consuming nothing. With
/// fewer than `min` matches available the Failure of the last attempt is
/// reported.
pub struct Repeated<P> {
    parser: P,
    min: usize,
    max: Option<usize>,
    empty: bool,
}

impl<P> Repeated<P> {
    pub fn new(parser: P, range: impl RangeBounds<usize>) -> Self {
        let min = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let (max, empty) = match range.end_bound() {
            Bound::Included(&n) => (Some(n), n < min),
            Bound::Excluded(&n) => (n.checked_sub(1), n <= min),
            Bound::Unbounded => (None, false),
        };
        Repeated {
            parser,
            min,
            max,
            empty,
        }
    }
}

impl<'code, P> Parser<'code> for Repeated<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        if self.empty {
            return Ok((Vec::new(), cursor));
        }
        let mut results = Vec::new();
        let (stop, cursor) = repeat_into(&self.parser, cursor, &mut results, Some(self.min))?;
        if let Some(failure) = stop {
            return Err(failure);
        }
        let (_, cursor) = repeat_into(&self.parser, cursor, &mut results, self.max)?;
        Ok((results, cursor))
    }

    fn description(&self) -> String {
        match self.max {
            Some(max) => format!("({}){{{},{}}}", self.parser.description(), self.min, max),
            None => format!("({}){{{},}}", self.parser.description(), self.min),
        }
    }
}

pub fn repeated<'code, P>(parser: P, range: impl RangeBounds<usize>) -> Repeated<P>
where
    P: Parser<'code>,
{
    Repeated::new(parser, range)
}

pub trait RepeatedExt<'code>: Parser<'code> + Sized {
    /// Repeat a number of times within `range`, e.g. `2..=4`, `3..` or `..5`
    fn repeated(self, range: impl RangeBounds<usize>) -> Repeated<Self> {
        Repeated::new(self, range)
    }
}

impl<'code, P> RepeatedExt<'code> for P where P: Parser<'code> {}
