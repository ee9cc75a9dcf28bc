/// Outcome of applying one rule at a position.
///
/// ## Notes
/// - `Declined` is not an error: it lets the caller fall through to the next rule in its list.
///   Only real grammar violations travel through the `Err` side of [`ParseResult`].
#[derive(Debug, Clone, PartialEq)]
enum Parsed {
    /// The rule does not apply here; nothing was consumed.
    Declined,
    /// The rule consumed `count` tokens (virtual boundaries included) and produced `node`.
    Consumed { count: usize, node: Node },
}

type ParseResult = Result<Parsed, SyntaxError>;

/// Grammar rules, one per parser.
///
/// Rule lists are ordered by priority; see the grammar in the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Text,
    AlternativeSeparator,
    Parameter,
    Optional,
    Alternation,
}

impl Rule {
    fn parse(self, stream: TokenStream<'_>, at: Position) -> ParseResult {
        match self {
            Rule::Text => parse_text(stream, at),
            Rule::AlternativeSeparator => parse_alternative_separator(stream, at),
            Rule::Parameter => PARAMETER.parse(stream, at),
            Rule::Optional => OPTIONAL.parse(stream, at),
            Rule::Alternation => parse_alternation(stream, at),
        }
    }
}

/// Try `rules` in order at `at` and return the first result that consumed anything.
///
/// ## Errors
/// Returns `NoEligibleParsers` if every rule declines. With the rule lists below this cannot
/// happen because each list ends in [`Rule::Text`], which accepts any real token.
fn parse_token(rules: &[Rule], stream: TokenStream<'_>, at: Position) -> Result<(usize, Node), SyntaxError> {
    for rule in rules {
        match rule.parse(stream, at)? {
            Parsed::Consumed { count, node } if count > 0 => return Ok((count, node)),
            _ => {}
        }
    }
    Err(SyntaxError::no_eligible_parsers(stream.kind_at(at), stream.span_at(at)))
}

/// Parse nodes from `start` until the stream ends or the current token is one of `stop`.
///
/// The stop token is not consumed. Returns the number of tokens consumed and the nodes produced.
fn parse_tokens_until(
    rules: &[Rule],
    stream: TokenStream<'_>,
    start: Position,
    stop: &[TokenKind],
) -> Result<(usize, Vec<Node>), SyntaxError> {
    let mut nodes = Vec::new();
    let mut current = start;
    while current < stream.end_position() && !stream.looking_at_any(current, stop) {
        // `parse_token` never returns a zero count, so the loop always makes progress.
        let (consumed, node) = parse_token(rules, stream, current)?;
        current += consumed as Position;
        nodes.push(node);
    }
    Ok(((current - start) as usize, nodes))
}
