/// Rules tried inside an alternation run.
const ALTERNATIVE_RULES: &[Rule] = &[
    Rule::AlternativeSeparator,
    Rule::Optional,
    Rule::Parameter,
    Rule::Text,
];

/// alternation := (?<=boundary) + alternative* + ( '/' + alternative* )+ + (?=boundary)
///
/// ## Notes
/// - Declines unless the previous token is start-of-line or whitespace, so a `/` in the middle
///   of a word is never the start of an alternation.
/// - Declines if the run up to the next boundary contains no separator.
/// - Does not consume the right-hand boundary; it belongs to the enclosing expression.
fn parse_alternation(stream: TokenStream<'_>, at: Position) -> ParseResult {
    if !stream.looking_at_any(at - 1, &[TokenKind::StartOfLine, TokenKind::WhiteSpace]) {
        return Ok(Parsed::Declined);
    }

    let (consumed, items) = parse_tokens_until(
        ALTERNATIVE_RULES,
        stream,
        at,
        &[TokenKind::WhiteSpace, TokenKind::EndOfLine],
    )?;

    if !items.iter().any(|node| node.kind() == NodeKind::Alternative) {
        tracing::trace!(position = at, "run has no separator, not an alternation");
        return Ok(Parsed::Declined);
    }

    let boundary = at + consumed as Position;
    let span = Span::new(stream.span_at(at).start, stream.span_at(boundary).start);
    Ok(Parsed::Consumed {
        count: consumed,
        node: Node::branch(NodeKind::Alternation, span, split_alternatives(span, items)),
    })
}

/// One element of a flat alternation run.
enum AlternationItem {
    Separator(Span),
    Content(Node),
}

impl From<Node> for AlternationItem {
    fn from(node: Node) -> Self {
        // Inside a run, the only `Alternative` nodes are separator markers.
        if node.kind() == NodeKind::Alternative {
            AlternationItem::Separator(node.span())
        } else {
            AlternationItem::Content(node)
        }
    }
}

/// Group a flat run into `Alternative` nodes, one per separator-delimited group.
///
/// Spans run from the alternation start (or the previous separator's end) to the next
/// separator's start (or the alternation end). The separators themselves are dropped.
fn split_alternatives(span: Span, items: Vec<Node>) -> Vec<Node> {
    let mut alternatives = Vec::new();
    let mut group = Vec::new();
    let mut group_start = span.start;

    for item in items.into_iter().map(AlternationItem::from) {
        match item {
            AlternationItem::Separator(separator) => {
                alternatives.push(Node::branch(
                    NodeKind::Alternative,
                    Span::new(group_start, separator.start),
                    std::mem::take(&mut group),
                ));
                group_start = separator.end;
            }
            AlternationItem::Content(node) => group.push(node),
        }
    }

    alternatives.push(Node::branch(
        NodeKind::Alternative,
        Span::new(group_start, span.end),
        group,
    ));
    alternatives
}
