use std::rc::Rc;

use crate::{
    ast::{Block, Builtin, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            array::parse_array,
            block::parse_block,
            core::{
                BLOCK_CLOSE, BLOCK_OPEN, CONST, ELSE, FUNCTION, IF, ParseResult, SET, TokenStream,
                VAR, WHILE,
            },
        },
        value::literal::{ARRAY_OPEN, parse_scalar},
    },
};

/// Parses a single statement.
///
/// A statement is one of:
/// - a control construct: `if { .. } [else { .. }]` or `while { .. }`,
/// - a definition: `fnn name { .. }`, `const name`, `var name`, `set name`,
/// - an array literal `[ .. ]`,
/// - a single token: a scalar literal, a built-in opcode or a word.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the statement's first token.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let token = tokens.expect_any("statement")?;

    match token.text.as_str() {
        IF => parse_if(tokens, token),
        WHILE => {
            let body = parse_body(tokens)?;
            Ok(Statement::While { body,
                                  location: token.location })
        },
        FUNCTION => {
            let name = tokens.expect_any("function name")?;
            let body = parse_body(tokens)?;
            Ok(Statement::Function { name:     name.text,
                                     body:     Rc::new(body),
                                     location: token.location, })
        },
        CONST => {
            let name = tokens.expect_any("constant name")?;
            Ok(Statement::Const { name:     name.text,
                                  location: token.location, })
        },
        VAR => {
            let name = tokens.expect_any("variable name")?;
            Ok(Statement::Var { name:     name.text,
                                location: token.location, })
        },
        SET => {
            let name = tokens.expect_any("variable name")?;
            Ok(Statement::Set { name:     name.text,
                                location: token.location, })
        },
        ARRAY_OPEN => {
            let value =
                tokens.nested(&token.location, |tokens| parse_array(tokens, &token.location))?;
            Ok(Statement::Literal { value,
                                    location: token.location })
        },
        _ => parse_single(token),
    }
}

/// Parses `{ .. } [else { .. }]` after an `if` keyword.
fn parse_if(tokens: &mut TokenStream, keyword: Token) -> ParseResult<Statement> {
    let then_branch = parse_body(tokens)?;

    let else_branch = if tokens.peek_text() == Some(ELSE) {
        tokens.next_token();
        Some(parse_body(tokens)?)
    } else {
        None
    };

    Ok(Statement::If { then_branch,
                       else_branch,
                       location: keyword.location })
}

/// Parses a braced body: `{ statement* }`.
fn parse_body(tokens: &mut TokenStream) -> ParseResult<Block> {
    let open = tokens.expect(BLOCK_OPEN)?;
    let body = tokens.nested(&open.location, parse_block)?;
    tokens.expect(BLOCK_CLOSE)?;

    Ok(body)
}

/// Classifies a token that forms a statement on its own.
///
/// Literals win over opcodes, and opcodes win over words, so `+5` is a
/// number and `+` is addition.
fn parse_single(token: Token) -> ParseResult<Statement> {
    if let Some(value) = parse_scalar(&token.text, &token.location) {
        return Ok(Statement::Literal { value:    value?,
                                       location: token.location, });
    }

    if let Some(op) = Builtin::from_word(&token.text) {
        return Ok(Statement::Builtin { op,
                                       location: token.location });
    }

    Ok(Statement::Word { name:     token.text,
                         location: token.location, })
}
