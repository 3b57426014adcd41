use std::rc::Rc;

use pretty_assertions::assert_eq;
use stacko::{
    ast::{Builtin, Statement},
    error::ParseError,
    interpreter::{
        lexer::{scan, tokenize},
        parser::core::{MAX_NESTING_DEPTH, parse_program},
        value::core::Value,
    },
};

fn words(source: &str) -> Vec<String> {
    tokenize(source, &Rc::from("test.stko")).into_iter().map(|t| t.text).collect()
}

fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
    parse_program(tokenize(source, &Rc::from("test.stko")))
}

#[test]
fn tokens_split_on_whitespace() {
    assert_eq!(words("1  2\t+\nprintLine"), ["1", "2", "+", "printLine"]);
    assert_eq!(words(""), Vec::<String>::new());
    assert_eq!(words("   \n\n  "), Vec::<String>::new());
}

#[test]
fn quoted_spans_are_one_token() {
    assert_eq!(words("\"a b  c\" print"), ["\"a b  c\"", "print"]);
    assert_eq!(words("x\"a b\"y"), ["x\"a b\"y"]);
    assert_eq!(words("\"\" print"), ["\"\"", "print"]);
}

#[test]
fn unmatched_quote_is_an_ordinary_character() {
    assert_eq!(words("\"open a"), ["\"open", "a"]);
    assert_eq!(words("say\" hi"), ["say\"", "hi"]);
}

#[test]
fn comments_drop_the_rest_of_the_line() {
    assert_eq!(words("1 # 2 3\n4"), ["1", "4"]);
    assert_eq!(words("1 #2 3"), ["1"]);
    assert_eq!(words("a#b c"), ["a#b", "c"]);
}

#[test]
fn tokens_record_their_line() {
    let tokens = tokenize("1\n\n2 3\n", &Rc::from("lines.stko"));
    let lines: Vec<usize> = tokens.iter().map(|t| t.location.line).collect();

    assert_eq!(lines, [1, 3, 3]);
    assert_eq!(tokens[0].location.to_string(), "lines.stko:1");
}

#[test]
fn file_lines_become_directives() {
    let scanned = scan("file a.stko\n1 printLine\nfile \"b c.stko\"\n  file\nx file y.stko",
                       &Rc::from("main.stko"));

    let paths: Vec<Option<&str>> = scanned.directives.iter().map(|d| d.path.as_deref()).collect();
    assert_eq!(paths, [Some("a.stko"), Some("b c.stko"), None]);
    assert_eq!(scanned.directives[1].location.line, 3);

    let words: Vec<&str> = scanned.tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(words, ["1", "printLine", "x", "file", "y.stko"]);
}

#[test]
fn plain_tokens_classify_as_literal_builtin_or_word() {
    let program = parse("\"s\" 12 -3.5 Yes dup - square").expect("parses");

    let literals: Vec<&Value> = program.iter()
                                       .filter_map(|s| match s {
                                           Statement::Literal { value, .. } => Some(value),
                                           _ => None,
                                       })
                                       .collect();
    assert_eq!(literals,
               [&Value::from("s"), &Value::Integer(12), &Value::Real(-3.5), &Value::Bool(true)]);

    assert!(matches!(program[4], Statement::Builtin { op: Builtin::Dup, .. }));
    assert!(matches!(program[5], Statement::Builtin { op: Builtin::Subtract, .. }));
    assert!(matches!(&program[6], Statement::Word { name, .. } if name == "square"));
}

#[test]
fn control_constructs_nest() {
    let program = parse("Yes if { No while { 1 } } else { 2 3 }").expect("parses");
    assert_eq!(program.len(), 2);

    let Statement::If { then_branch,
                        else_branch: Some(else_branch),
                        .. } = &program[1]
    else {
        panic!("expected an if with an else branch, got {:?}", program[1]);
    };
    assert_eq!(then_branch.len(), 2);
    assert!(matches!(&then_branch[1], Statement::While { body, .. } if body.len() == 1));
    assert_eq!(else_branch.len(), 2);
}

#[test]
fn definitions_take_the_next_token_as_name() {
    let program = parse("fnn double { 2 * } 1 const one var v 5 set v").expect("parses");

    assert!(matches!(&program[0], Statement::Function { name, body, .. }
                     if name == "double" && body.len() == 2));
    assert!(matches!(&program[2], Statement::Const { name, .. } if name == "one"));
    assert!(matches!(&program[3], Statement::Var { name, .. } if name == "v"));
    assert!(matches!(&program[5], Statement::Set { name, .. } if name == "v"));
}

#[test]
fn arrays_are_parsed_into_values() {
    let program = parse("[ 1 [ 2.0 \"x\" ] No ]").expect("parses");

    let expected = Value::from(vec![Value::Integer(1),
                                    Value::from(vec![Value::Real(2.0), Value::from("x")]),
                                    Value::Bool(false)]);
    assert!(matches!(&program[0], Statement::Literal { value, .. } if *value == expected));
}

#[test]
fn missing_tokens_name_what_was_expected() {
    assert_eq!(parse("while { 1").unwrap_err().to_string(),
               "test.stko:1: Expected '}', found nothing instead.");
    assert!(matches!(parse("if 1 { }"),
                     Err(ParseError::Expected { ref expected, ref found, .. })
                     if expected == "{" && found == "1"));
    assert!(matches!(parse("var"), Err(ParseError::UnexpectedEnd { .. })));
    assert!(matches!(parse("Yes if { } else"), Err(ParseError::UnexpectedEnd { .. })));
}

#[test]
fn stray_terminators_are_rejected() {
    assert!(matches!(parse("1 2 } 3"),
                     Err(ParseError::UnmatchedTerminator { ref token, .. }) if token == "}"));
    assert!(matches!(parse("]"), Err(ParseError::UnmatchedTerminator { .. })));
}

#[test]
fn deeply_nested_blocks_parse() {
    let depth = 500;
    let source = format!("{}{}", "Yes if { ".repeat(depth), "} ".repeat(depth));

    assert_eq!(parse(&source).map(|p| p.len()), Ok(2));
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let source = format!("{}{}", "[ ".repeat(MAX_NESTING_DEPTH), "] ".repeat(MAX_NESTING_DEPTH));

    assert_eq!(parse(&source).map(|p| p.len()), Ok(1));
}

#[test]
fn nesting_past_the_limit_is_an_error() {
    let depth = 100_000;

    let arrays = format!("{}{}", "[ ".repeat(depth), "] ".repeat(depth));
    assert!(matches!(parse(&arrays),
                     Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH, .. })));

    let blocks = format!("{}{}", "Yes if { ".repeat(depth), "} ".repeat(depth));
    assert!(matches!(parse(&blocks), Err(ParseError::NestingTooDeep { .. })));

    let unclosed = "fnn f { ".repeat(depth);
    let err = parse(&unclosed).expect_err("too deep");
    assert_eq!(err.to_string(), "test.stko:1: Nesting is deeper than 1000 levels.");
}
