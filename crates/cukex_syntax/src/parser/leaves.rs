/// text := token
///
/// Accepts any real token; callers only reach it once every other rule has declined.
fn parse_text(stream: TokenStream<'_>, at: Position) -> ParseResult {
    let Some(token) = stream.get(at) else {
        return Ok(Parsed::Declined);
    };
    Ok(Parsed::Consumed {
        count: 1,
        node: Node::leaf(NodeKind::Text, token.span, token.text.clone()),
    })
}

/// Separator marker inside an alternation.
///
/// Emits an [`NodeKind::Alternative`] node spanning the `/`. The marker only lives until
/// [`split_alternatives`] replaces it with properly spanned alternatives.
fn parse_alternative_separator(stream: TokenStream<'_>, at: Position) -> ParseResult {
    if !stream.looking_at(at, TokenKind::Alternation) {
        return Ok(Parsed::Declined);
    }
    Ok(Parsed::Consumed {
        count: 1,
        node: Node::branch(NodeKind::Alternative, stream.span_at(at), Vec::new()),
    })
}
