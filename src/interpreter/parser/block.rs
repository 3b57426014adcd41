use crate::{
    ast::Block,
    interpreter::parser::{
        core::{ParseResult, TokenStream},
        statement::parse_statement,
    },
};

/// Parses statements until the end of input or a block terminator.
///
/// The terminator (`}` or `]`) is left in the stream: the construct that
/// opened the block decides which one it expects.
///
/// Grammar: `block := statement*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first statement of the block.
///
/// # Returns
/// The statements in source order.
pub fn parse_block(tokens: &mut TokenStream) -> ParseResult<Block> {
    let mut statements = Vec::new();

    while !tokens.at_block_end() {
        statements.push(parse_statement(tokens)?);
    }

    Ok(statements)
}
