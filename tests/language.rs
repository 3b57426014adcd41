use pretty_assertions::assert_eq;
use stacko::{
    config::Settings,
    error::{Error, ParseError, RuntimeError},
    interpreter::device::{HeadlessDevice, color::Rgb},
    run_source, run_source_with,
};

fn run_with_input(src: &str, input: &str) -> (Result<i32, Error>, String) {
    let mut output = Vec::new();
    let result = run_source(src, &mut output, &mut input.as_bytes());
    let output = String::from_utf8(output).expect("program output is UTF-8");
    (result, output)
}

fn run(src: &str) -> (Result<i32, Error>, String) {
    run_with_input(src, "")
}

fn assert_output(src: &str, expected: &str) {
    match run(src) {
        (Ok(0), output) => assert_eq!(output, expected, "output of {src:?}"),
        (Ok(code), _) => panic!("Script exited with {code}: {src:?}"),
        (Err(e), _) => panic!("Script failed: {e}\n{src:?}"),
    }
}

fn assert_success(src: &str) {
    assert_output(src, "");
}

fn failure(src: &str) -> Error {
    match run(src) {
        (Err(e), _) => e,
        (Ok(code), output) => {
            panic!("Script succeeded with {code} but was expected to fail: {src:?}\n{output}")
        },
    }
}

fn runtime_failure(src: &str) -> RuntimeError {
    match failure(src) {
        Error::Runtime(e) => e,
        other => panic!("Expected a runtime error from {src:?}, got: {other}"),
    }
}

fn parse_failure(src: &str) -> ParseError {
    match failure(src) {
        Error::Parse(e) => e,
        other => panic!("Expected a parse error from {src:?}, got: {other}"),
    }
}

#[test]
fn arithmetic_and_printing() {
    assert_output("5 3 + printLine", "8\n");
    assert_output("10 4 - printLine", "6\n");
    assert_output("6 7 * printLine", "42\n");
    assert_output("7 2 / printLine", "3.5\n");
    assert_output("6 2 / printLine", "3.0\n");
    assert_output("1.5 2.25 + printLine", "3.75\n");
    assert_output("-7 3 % printLine", "2\n");
    assert_output("7 -3 % printLine", "-2\n");
    assert_output("-9223372036854775808 -1 % printLine", "0\n");
}

#[test]
fn reals_never_print_like_integers() {
    assert_output("1000000000000000.0 printLine", "1000000000000000.0\n");
    assert_output("10000000000000000.0 printLine", "1e16\n");
    assert_output("100000000000000000000.0 toString printLine", "1e20\n");
    assert_output("0.0001 printLine", "0.0001\n");
    assert_output("0.00001 printLine", "1e-5\n");
    assert_success("10000000000000000.0 dup toString toNum assertEqual");
}

#[test]
fn print_without_newline() {
    assert_output("\"a\" print \"b\" print", "ab");
    assert_output("1 print \" \" print 2 printLine", "1 2\n");
}

#[test]
fn string_literals_keep_spaces_and_escapes() {
    assert_output("\"hello world\" printLine", "hello world\n");
    assert_output("\"tab\\there\" printLine", "tab\there\n");
    assert_output("\"ab\" \"cd\" + printLine", "abcd\n");
}

#[test]
fn comments_end_the_line() {
    assert_output("1 printLine # 2 printLine\n3 printLine", "1\n3\n");
    assert_output("# a whole line\n\"#not a comment\" printLine", "#not a comment\n");
}

#[test]
fn arrays_print_and_index() {
    assert_output("[ 1 [ \"a\" Yes ] 2.5 ] printLine", "[ 1 [ a Yes ] 2.5 ]\n");
    assert_output("[ ] printLine", "[ ]\n");
    assert_output("[ 1 2 3 ] 1 getElement printLine", "2\n");
    assert_output("[ 1 2 3 ] -1 getElement printLine", "3\n");
    assert_output("[ 1 2 ] [ 3 ] + printLine", "[ 1 2 3 ]\n");

    assert!(matches!(runtime_failure("[ 1 2 3 ] 3 getElement"),
                     RuntimeError::IndexOutOfBounds { index: 3, len: 3, .. }));
    assert!(matches!(runtime_failure("[ 1 2 3 ] 1.0 getElement"),
                     RuntimeError::UnexpectedType { expected: "Integer", .. }));
}

#[test]
fn booleans_and_conversions() {
    assert_output("\"Yes\" toBool printLine printLine", "Yes\nYes\n");
    assert_output("0 toBool printLine printLine", "No\nNo\n");
    assert_output("\"\" toBool pop printLine", "No\n");
    assert_output("Yes not printLine", "No\n");
    assert_output("\"42\" toNum printLine", "42.0\n");
    assert_output("7 toNum printLine", "7.0\n");
    assert_output("Yes toNum printLine", "1.0\n");
    assert_output("3 toString \"x\" + printLine", "3x\n");
    assert_output("1.5 toString printLine", "1.5\n");

    assert!(matches!(runtime_failure("\"abc\" toNum"), RuntimeError::InvalidNumber { .. }));
    assert!(matches!(runtime_failure("1 not"), RuntimeError::UnexpectedType { .. }));
}

#[test]
fn equality_and_ordering() {
    assert_output("1 1 = printLine", "Yes\n");
    assert_output("\"a\" \"b\" = printLine", "No\n");
    assert_output("1.0 2.0 < printLine", "Yes\n");
    assert_output("2.0 2.0 >= printLine", "Yes\n");
    assert_output("3.0 2.0 <= printLine", "No\n");
    assert_output("3.0 2.0 > printLine", "Yes\n");

    assert!(matches!(runtime_failure("1 2 <"),
                     RuntimeError::UnexpectedType { expected: "Real",
                                                    found: "Integer",
                                                    .. }));
    assert!(matches!(runtime_failure("1 1.0 ="), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn type_mismatch_and_unsupported_operations() {
    assert!(matches!(runtime_failure("1 2.0 +"),
                     RuntimeError::TypeMismatch { left: "Integer",
                                                  right: "Real",
                                                  .. }));
    assert!(matches!(runtime_failure("\"a\" \"b\" -"),
                     RuntimeError::UnsupportedOperation { op: "-", .. }));
    assert!(matches!(runtime_failure("Yes No +"), RuntimeError::UnsupportedOperation { .. }));
    assert!(matches!(runtime_failure("1 0 /"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_failure("1 0 %"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_failure("9223372036854775807 1 +"), RuntimeError::Overflow { .. }));
}

#[test]
fn stack_manipulation() {
    assert_output("7 dup * printLine", "49\n");
    assert_output("1 2 pop printLine", "1\n");

    assert!(matches!(runtime_failure("+"),
                     RuntimeError::StackUnderflow { required: 2,
                                                    found: 0,
                                                    .. }));
    assert!(matches!(runtime_failure("1 +"),
                     RuntimeError::StackUnderflow { required: 2,
                                                    found: 1,
                                                    .. }));
    assert!(matches!(runtime_failure("dup"), RuntimeError::StackUnderflow { .. }));
    assert!(matches!(runtime_failure("printLine"), RuntimeError::StackUnderflow { .. }));
}

#[test]
fn if_and_else() {
    assert_output("1 1 = if { \"eq\" printLine } else { \"ne\" printLine }", "eq\n");
    assert_output("1 2 = if { \"eq\" printLine } else { \"ne\" printLine }", "ne\n");
    assert_output("No if { \"skipped\" printLine } \"after\" printLine", "after\n");

    assert!(matches!(runtime_failure("1 if { }"), RuntimeError::UnexpectedType { .. }));
    assert!(matches!(runtime_failure("if { }"), RuntimeError::StackUnderflow { .. }));
}

#[test]
fn while_loops() {
    assert_output("No while { \"never\" printLine } \"done\" printLine", "done\n");
    assert_output("var i 0.0 set i i 3.0 < while { i printLine i 1.0 + set i i 3.0 < }",
                  "0.0\n1.0\n2.0\n");
}

#[test]
fn functions_share_the_stack() {
    assert_output("fnn square { dup * } 5 square printLine", "25\n");
    assert_output("fnn twice { dup + } fnn quad { twice twice } 3 quad printLine", "12\n");
    assert_output("fnn greet { \"hi\" printLine } greet greet", "hi\nhi\n");
}

#[test]
fn constants_and_variables() {
    assert_output("42 const answer answer answer + printLine", "84\n");
    assert_output("var x 10 set x x printLine", "10\n");
    assert_output("var x 1 set x 2 set x x printLine", "2\n");
    assert_output("var x 1 set x \"now a string\" set x x printLine", "now a string\n");

    assert!(matches!(runtime_failure("var x x"), RuntimeError::UnsetVariable { .. }));
    assert!(matches!(runtime_failure("1 set y"), RuntimeError::UndeclaredVariable { .. }));
    assert!(matches!(runtime_failure("1 const c 2 set c"),
                     RuntimeError::UndeclaredVariable { .. }));
    assert!(matches!(runtime_failure("set y"), RuntimeError::StackUnderflow { .. }));
    assert!(matches!(runtime_failure("const c"), RuntimeError::StackUnderflow { .. }));
}

#[test]
fn names_are_bound_once_across_categories() {
    for src in ["var x var x",
                "1 const c 2 const c",
                "fnn f { } fnn f { }",
                "fnn f { } 1 const f",
                "1 const c var c",
                "var v fnn v { }"]
    {
        assert!(matches!(runtime_failure(src), RuntimeError::NameTaken { .. }), "{src}");
    }
}

#[test]
fn unknown_words_fail() {
    let err = failure("foo printLine");
    assert_eq!(err.exit_code(), 1);
    assert!(matches!(err, Error::Runtime(RuntimeError::UnknownToken { ref name, .. }) if name == "foo"));
}

#[test]
fn errors_name_file_and_line() {
    let err = failure("1 printLine\n\nfoo");
    assert_eq!(err.to_string(), "<source>:3: Unknown token 'foo'.");
}

#[test]
fn output_before_an_error_is_kept() {
    let (result, output) = run("\"before\" printLine 1 0 / \"after\" printLine");
    assert!(result.is_err());
    assert_eq!(output, "before\n");
}

#[test]
fn assertions() {
    assert_success("Yes assert 1 1 assertEqual 1 2 assertNotEqual");

    for src in ["No assert", "1 2 assertEqual", "\"a\" \"a\" assertNotEqual"] {
        let err = failure(src);
        assert!(matches!(err, Error::Runtime(RuntimeError::AssertionFailed { .. })), "{src}");
        assert_eq!(err.exit_code(), 2, "{src}");
    }

    let err = failure("1 \"1\" assertEqual");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn exit_stops_the_program() {
    let (result, output) = run("\"before\" printLine 3 exit \"after\" printLine");
    assert_eq!(result.ok(), Some(3));
    assert_eq!(output, "before\n");
    assert_eq!(run("fnn quit { 4 exit } Yes while { quit }").0.ok(), Some(4));
    assert_eq!(run("0 exit").0.ok(), Some(0));

    assert!(matches!(runtime_failure("4294967296 exit"), RuntimeError::InvalidExitCode { .. }));
    assert!(matches!(runtime_failure("1.0 exit"), RuntimeError::UnexpectedType { .. }));
}

#[test]
fn read_line_from_input() {
    let (result, output) =
        run_with_input("\"name? \" print readLine printLine readLine printLine", "alice\r\nbob\n");
    assert!(matches!(result, Ok(0)));
    assert_eq!(output, "name? alice\nbob\n");

    let (result, _) = run_with_input("readLine", "");
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::EndOfInput { .. }))));
}

#[test]
fn wait_more() {
    assert_success("0.0 waitMore");
    assert!(matches!(runtime_failure("-1.0 waitMore"), RuntimeError::InvalidDuration { .. }));
    assert!(matches!(runtime_failure("1 waitMore"), RuntimeError::UnexpectedType { .. }));
}

#[test]
fn random_is_a_non_negative_integer() {
    assert_success("random toNum 0.0 >= assert");

    let settings = Settings { seed: Some(7),
                              ..Settings::default() };
    let mut first = Vec::new();
    let mut second = Vec::new();
    for output in [&mut first, &mut second] {
        run_source_with("random printLine", output, &mut "".as_bytes(), HeadlessDevice::new(), &settings)
            .expect("seeded run succeeds");
    }
    assert_eq!(first, second);
}

#[test]
fn recursion_is_bounded() {
    let settings = Settings { max_call_depth: 64,
                              ..Settings::default() };
    let result = run_source_with("fnn forever { forever } forever",
                                 &mut Vec::new(),
                                 &mut "".as_bytes(),
                                 HeadlessDevice::new(),
                                 &settings);

    assert!(matches!(result, Err(Error::Runtime(RuntimeError::RecursionLimit { limit: 64, .. }))));
}

#[test]
fn deep_recursion_within_the_limit() {
    assert_output("var n 0 set n \
                   fnn count { n 1 + set n n 5000 = not if { count } } \
                   count n printLine",
                  "5000\n");
}

#[test]
fn parse_errors() {
    assert!(matches!(parse_failure("if { 1"), ParseError::UnexpectedEnd { .. }));
    assert!(matches!(parse_failure("while 1"), ParseError::Expected { .. }));
    assert!(matches!(parse_failure("fnn"), ParseError::UnexpectedEnd { .. }));
    assert!(matches!(parse_failure("1 }"), ParseError::UnmatchedTerminator { .. }));
    assert!(matches!(parse_failure("1 ]"), ParseError::UnmatchedTerminator { .. }));
    assert!(matches!(parse_failure("[ 1 foo ]"), ParseError::NotALiteral { .. }));
    assert!(matches!(parse_failure("[ 1 }"), ParseError::Expected { .. }));
    assert!(matches!(parse_failure("99999999999999999999"), ParseError::LiteralOutOfRange { .. }));

    assert_eq!(failure("if { 1").exit_code(), 1);
}

#[test]
fn deep_nesting_fails_cleanly() {
    let src = format!("\"early\" printLine {}", "Yes if { ".repeat(100_000));
    let (result, output) = run(&src);

    let err = result.expect_err("nesting is too deep");
    assert!(matches!(err, Error::Parse(ParseError::NestingTooDeep { .. })));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(output, "");
}

#[test]
fn parse_errors_stop_before_anything_runs() {
    let (result, output) = run("\"early\" printLine }");
    assert!(result.is_err());
    assert_eq!(output, "");
}

#[test]
fn window_lifecycle() {
    let mut device = HeadlessDevice::with_close_after(3);
    let src = "createWindow windowRunning while { \"red\" setWindowColor windowUpdate windowRunning } \
               closeWindow";

    let result = run_source_with(src,
                                 &mut Vec::new(),
                                 &mut "".as_bytes(),
                                 &mut device,
                                 &Settings::default());

    assert!(matches!(result, Ok(0)));
    assert_eq!(device.frames_presented(), 3);
    assert_eq!(device.presented_color(), Some(Rgb::new(255, 0, 0)));
    assert!(!device.is_open());
}

#[test]
fn window_errors() {
    assert!(matches!(runtime_failure("windowUpdate"), RuntimeError::WindowNotOpen { .. }));
    assert!(matches!(runtime_failure("closeWindow"), RuntimeError::WindowNotOpen { .. }));
    assert!(matches!(runtime_failure("createWindow closeWindow windowRunning"),
                     RuntimeError::WindowNotOpen { .. }));
    assert!(matches!(runtime_failure("createWindow createWindow"),
                     RuntimeError::WindowAlreadyOpen { .. }));
    assert!(matches!(runtime_failure("createWindow \"notacolor\" setWindowColor"),
                     RuntimeError::Device { .. }));
    assert!(matches!(runtime_failure("createWindow 1 setWindowColor"),
                     RuntimeError::UnexpectedType { .. }));
    assert_success("createWindow \"#00ff00\" setWindowColor windowUpdate closeWindow");
}
