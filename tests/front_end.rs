use deep_compare::command::{run, Outcome};
use deep_compare::config::Config;
use deep_compare::parse::{parse_command, parse_literal, ParseError};
use deep_compare::{compare, Kind};

fn eval(input: &str) -> Outcome {
    run(&parse_command(input).unwrap(), &Config::default()).unwrap()
}

#[test]
fn scalar_commands() {
    assert_eq!(eval("compare 5i8, 2i8"), Outcome::Ordering(3));
    assert_eq!(eval("compare 'a', 'A'"), Outcome::Ordering(32));
    assert_eq!(
        eval("compare -9223372036854775808i64, 9223372036854775807i64"),
        Outcome::Ordering(-1)
    );
    assert_eq!(eval("compare null, 0"), Outcome::Ordering(-1));
    assert_eq!(eval("compare NaN, NaN epsilon 0.5"), Outcome::Ordering(0));
    assert_eq!(eval("equals 100n, 100n"), Outcome::Equality(true));
    assert_eq!(eval("equals 1.50m, 1.5m"), Outcome::Equality(true));
    assert_eq!(
        eval("compare @2024-01-01T00:00:00Z, @2023-12-31T23:00:00-02:00"),
        Outcome::Ordering(-1)
    );
}

#[test]
fn composite_commands() {
    assert_eq!(
        eval("compare i8[0, -1, 1, -128, 127], i8[0, -1, 1, -128, 0]"),
        Outcome::Ordering(127)
    );
    assert_eq!(
        eval("equals [[true, false], [true]], [[true, false], [true]]"),
        Outcome::Equality(true)
    );
    assert_eq!(
        eval("equals ['a', 'B', 'c'], ['A', 'b', 'C'] ignore_case"),
        Outcome::Equality(true)
    );
    assert_eq!(eval("compare [1, 2], list(1, 2)"), Outcome::Ordering(0));
    assert_eq!(eval("compare [1], [[1]]"), Outcome::Ordering(-1));
    assert_eq!(
        eval("equals list(1.0, \"x\"), list(1.05, \"X\") epsilon 0.1 ignore_case"),
        Outcome::Equality(true)
    );
    assert_eq!(
        eval("compare ['a', 'b', 'c'], ['a', 'b', 'd'] prefix 2 2"),
        Outcome::Ordering(0)
    );
}

#[test]
fn literals_match_the_api() {
    let parsed = parse_literal("[1, 2, 3]").unwrap();
    assert_eq!(parsed.kind(), Kind::array_of(Kind::Int));
    assert_eq!(compare(&parsed, &vec![1, 2, 3].into()).unwrap(), 0);

    let mixed = parse_literal("[1, \"a\"]").unwrap();
    assert_eq!(mixed.kind(), Kind::array_of(Kind::GenericObject));

    let with_null = parse_literal("string[null, \"a\"]").unwrap();
    assert_eq!(with_null.kind(), Kind::array_of(Kind::String));

    assert_eq!(parse_literal("[1, 2]").unwrap().to_string(), "[1, 2]");
}

#[test]
fn errors_point_at_the_input() {
    let input = "compare 1,\n  2 bogus";
    match parse_command(input) {
        Err(err @ ParseError::UnknownKeyword(..)) => {
            assert_eq!(err.get_source_start(input), (2, 5));
        }
        other => panic!("unexpected {:?}", other),
    }

    assert!(matches!(
        parse_command("equals 'ab', 'a'"),
        Err(ParseError::InvalidLiteral(_))
    ));
    assert!(matches!(
        parse_command("equals @yesterday, null"),
        Err(ParseError::ParseToDate(..))
    ));
    assert!(matches!(
        parse_command("equals 1, 2 3"),
        Err(ParseError::UnexpectedToken(..))
    ));
}
