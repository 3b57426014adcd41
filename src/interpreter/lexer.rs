use std::rc::Rc;

use logos::Logos;

use crate::{ast::Location, interpreter::value::literal::is_string_literal};

/// Keyword introducing a dependency line.
pub const FILE_DIRECTIVE: &str = "file";
/// Prefix that turns a token and the rest of its line into a comment.
pub const COMMENT_PREFIX: char = '#';

/// A lexical piece of a line.
///
/// Tokens of the language are whitespace-separated words, but a double-quoted
/// span may contain whitespace. The lexer therefore produces pieces (quoted
/// spans, bare runs and stray quotes) that [`scan`] glues back together when
/// they touch.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum Piece {
    /// `"..."` on a single line.
    #[regex(r#""[^"\n]*""#, allow_greedy = true)]
    Quoted,
    /// A run of characters that are neither whitespace nor quotes.
    #[regex(r#"[^\s"]+"#, allow_greedy = true)]
    Bare,
    /// A quote with no closing partner on its line.
    #[token("\"")]
    LoneQuote,
    /// Line terminator.
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    NewLine,
    /// Whitespace other than newlines.
    #[regex(r"[^\S\n]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// A token of the language: its exact source text and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text, quotes included for string literals.
    pub text:     String,
    /// The file and line the token was read from.
    pub location: Location,
}

/// A `file <path>` line, reported instead of being tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// The dependency path with any surrounding quotes removed, or `None`
    /// when the line holds nothing after `file`.
    pub path:     Option<String>,
    /// Where the directive appeared.
    pub location: Location,
}

/// The result of scanning one source file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Program tokens in source order, comments and directive lines removed.
    pub tokens:     Vec<Token>,
    /// Dependency directives in source order.
    pub directives: Vec<Directive>,
}

/// Splits the text of one file into tokens and `file` directives.
///
/// Rules, applied line by line:
/// - a token is a maximal run of non-whitespace characters, where a quoted
///   span counts as non-whitespace,
/// - a token starting with `#` ends the line; earlier tokens are kept,
/// - a line whose first token is `file` is reported as a directive.
///
/// Scanning never fails: text that is not valid program syntax is left for
/// the parser and evaluator to reject.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use stacko::interpreter::lexer::scan;
///
/// let scanned = scan("\"hello world\" printLine # greet\nfile lib.stko\n", &Rc::from("main.stko"));
/// let words: Vec<_> = scanned.tokens.iter().map(|t| t.text.as_str()).collect();
///
/// assert_eq!(words, ["\"hello world\"", "printLine"]);
/// assert_eq!(scanned.directives[0].path.as_deref(), Some("lib.stko"));
/// ```
#[must_use]
pub fn scan(source: &str, file: &Rc<str>) -> ScannedFile {
    let mut scanned = ScannedFile::default();
    let mut line_words: Vec<(String, usize)> = Vec::new();
    // The word being assembled and the byte offset where its last piece ended.
    let mut word: Option<(String, usize, usize)> = None;

    let mut lexer = Piece::lexer(source);

    while let Some(piece) = lexer.next() {
        let span = lexer.span();
        let line = lexer.extras.line;

        if piece == Ok(Piece::NewLine) {
            flush_word(&mut word, &mut line_words);
            flush_line(&mut line_words, file, &mut scanned);
            continue;
        }

        // Anything logos cannot classify is still non-whitespace text.
        let touches = matches!(&word, Some((_, _, end)) if *end == span.start);
        if let (true, Some((text, _, end))) = (touches, word.as_mut()) {
            text.push_str(lexer.slice());
            *end = span.end;
        } else {
            flush_word(&mut word, &mut line_words);
            word = Some((lexer.slice().to_string(), line, span.end));
        }
    }

    flush_word(&mut word, &mut line_words);
    flush_line(&mut line_words, file, &mut scanned);

    scanned
}

/// Tokenizes one file, discarding its directives.
#[must_use]
pub fn tokenize(source: &str, file: &Rc<str>) -> Vec<Token> {
    scan(source, file).tokens
}

fn flush_word(word: &mut Option<(String, usize, usize)>, line_words: &mut Vec<(String, usize)>) {
    if let Some((text, line, _)) = word.take() {
        line_words.push((text, line));
    }
}

fn flush_line(line_words: &mut Vec<(String, usize)>, file: &Rc<str>, scanned: &mut ScannedFile) {
    let mut words = line_words.drain(..);

    let Some((first, line)) = words.next() else {
        return;
    };

    if first == FILE_DIRECTIVE {
        let path = words.next().map(|(path, _)| {
                                   if is_string_literal(&path) {
                                       path[1..path.len() - 1].to_string()
                                   } else {
                                       path
                                   }
                               });
        scanned.directives.push(Directive { path,
                                            location: Location::new(file, line) });
        return;
    }

    for (text, line) in std::iter::once((first, line)).chain(words) {
        if text.starts_with(COMMENT_PREFIX) {
            break;
        }
        scanned.tokens.push(Token { text,
                                    location: Location::new(file, line) });
    }
}
