//! Property-based tests for the combinator algebra
//!
//! 1. **Functor law**: mapping twice equals mapping the composition
//! 2. **`many` is total**: always succeeds and never eats a failed attempt
//! 3. **`many_one` agrees with `many`** whenever the first attempt succeeds,
//!    even when it consumed nothing
//! 4. **Choice is ordered**: the first succeeding alternative wins
//! 5. **`eof` never consumes**
//! 6. **`repeated` honors its bounds**
//! 7. **Locations only move forward**

use proptest::prelude::*;

use crate::choice::choice;
use crate::cursor::Cursor;
use crate::eof::eof;
use crate::location::LineColumn;
use crate::many::ManyExt;
use crate::many_one::ManyOneExt;
use crate::map::MapExt;
use crate::optional::OptionalExt;
use crate::parser::{ParseResultExt, StrParser, TokenParser};
use crate::repeated::RepeatedExt;
use crate::satisfy::token;
use crate::text::{any_char, char, literal};

fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(256),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn map_composition_law(input in "[ab]{0,20}", offset in 0u32..1000) {
        let f = |c: char| c as u32;
        let g = move |n: u32| n + offset;

        let twice = any_char().map(f).map(g).parse_str(&input);
        let composed = any_char().map(move |c| g(f(c))).parse_str(&input);

        prop_assert_eq!(twice.is_ok(), composed.is_ok());
        if let (Ok((a, rest_a)), Ok((b, rest_b))) = (&twice, &composed) {
            prop_assert_eq!(a, b);
            prop_assert_eq!(rest_a.position(), rest_b.position());
        }
        if let (Err(a), Err(b)) = (&twice, &composed) {
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn mapping_a_failure_leaves_it_unchanged(input in "[0-9]{0,10}") {
        let raw = char('x').parse_str(&input);
        let mapped = char('x').parse_str(&input).map_value(|c| c.len_utf8());
        prop_assert_eq!(raw.unwrap_err(), mapped.unwrap_err());
    }

    #[test]
    fn many_always_succeeds(input in "[ab]{0,30}") {
        let (values, rest) = char('a').many().parse_str(&input).unwrap();
        let leading = input.chars().take_while(|&c| c == 'a').count();
        prop_assert_eq!(values.len(), leading);
        prop_assert_eq!(rest.position(), leading);
    }

    #[test]
    fn many_one_matches_many_after_first_success(input in "[ab]{0,30}") {
        let many = char('a').many().parse_str(&input);
        let many_one = char('a').many_one().parse_str(&input);
        if input.starts_with('a') {
            prop_assert_eq!(many.value(), many_one.value());
        } else {
            prop_assert!(many_one.is_failure());
            prop_assert!(many.is_ok());
        }
    }

    #[test]
    fn many_one_matches_many_when_nothing_is_consumed(input in "[ab]{0,30}") {
        let many = char('a').optional().many().parse_str(&input);
        let many_one = char('a').optional().many_one().parse_str(&input);
        prop_assert_eq!(many.value(), many_one.value());
    }

    #[test]
    fn choice_prefers_first_success(input in "a{1,5}b?") {
        let parser = choice([literal("a").map(str::len), literal("aa").map(str::len)]);
        let (consumed, rest) = parser.parse_str(&input).unwrap();
        prop_assert_eq!(consumed, 1);
        prop_assert_eq!(rest.position(), 1);
    }

    #[test]
    fn eof_never_consumes(tokens in prop::collection::vec(0u8..4, 0..10)) {
        match eof().parse_tokens(tokens.as_slice()) {
            Ok(((), rest)) => {
                prop_assert!(tokens.is_empty());
                prop_assert_eq!(rest.position(), 0);
            }
            Err(err) => {
                prop_assert!(!tokens.is_empty());
                prop_assert_eq!(err.location.0, 0);
            }
        }
    }

    #[test]
    fn repeated_respects_bounds(
        tokens in prop::collection::vec(0u8..2, 0..12),
        min in 0usize..5,
        extra in 0usize..5,
    ) {
        let max = min + extra;
        let available = tokens.iter().take_while(|&&t| t == 0).count();
        let result = token(0u8).repeated(min..=max).parse_tokens(tokens.as_slice());
        if available < min {
            prop_assert!(result.is_failure());
        } else {
            let (values, rest) = result.unwrap();
            prop_assert_eq!(values.len(), available.min(max));
            prop_assert_eq!(rest.position(), available.min(max));
        }
    }

    #[test]
    fn empty_repetition_range_consumes_nothing(tokens in prop::collection::vec(0u8..2, 0..6)) {
        let (values, rest) = token(0u8).repeated(0..0).parse_tokens(tokens.as_slice()).unwrap();
        prop_assert!(values.is_empty());
        prop_assert_eq!(rest.position(), 0);
    }

    #[test]
    fn locations_only_move_forward(input in "[a\n]{0,40}") {
        let mut cursor = crate::cursors::StrCursor::new(&input);
        let mut previous = LineColumn::default();
        while !cursor.is_empty() {
            cursor = cursor.next();
            prop_assert!(*cursor.location() > previous);
            previous = *cursor.location();
        }
    }
}
