/// Position of the virtual start-of-line token.
const START_OF_LINE: Position = -1;

/// Parse an expression string into its AST.
///
/// This is the main public entrypoint: it tokenizes `expression` and hands the tokens to
/// [`parse_tokens`].
///
/// ## Errors
/// Returns the first [`SyntaxError`] from the tokenizer or parser. No partial tree is returned.
#[tracing::instrument(skip_all, fields(expression_len = expression.len()))]
pub fn parse(expression: &str) -> Result<Node, SyntaxError> {
    let tokens = lexer::lex(expression)?;
    parse_tokens(&tokens)
}

/// Parse an existing token stream into its AST.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `cukex_syntax::lexer`, without virtual boundary tokens.
///
/// ## Errors
/// Returns `MissingEndToken` for an unterminated `{` or `(`. The internal kinds
/// (`NoEligibleParsers`, `UnconsumedTokens`) signal a grammar defect, not a user error.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_tokens(tokens: &[Token]) -> Result<Node, SyntaxError> {
    let stream = TokenStream::new(tokens);
    // Every real token plus both virtual boundaries.
    let expected = tokens.len() + 2;

    match EXPRESSION.parse(stream, START_OF_LINE)? {
        Parsed::Consumed { count, node } if count == expected => Ok(node),
        Parsed::Consumed { count, .. } => Err(SyntaxError::unconsumed_tokens(
            count,
            expected,
            stream.span_at(count as Position - 1),
        )),
        Parsed::Declined => Err(SyntaxError::unconsumed_tokens(0, expected, stream.span_at(0))),
    }
}
