/// A bracketed construct: `begin`, any number of `rules`, then `end`.
///
/// Used for parameters, optionals, and the whole expression (bounded by the virtual
/// start-of-line and end-of-line tokens).
#[derive(Debug, Clone, Copy)]
struct Between {
    kind: NodeKind,
    begin: TokenKind,
    end: TokenKind,
    rules: &'static [Rule],
}

/// parameter := '{' + text* + '}'
const PARAMETER: Between = Between {
    kind: NodeKind::Parameter,
    begin: TokenKind::BeginParameter,
    end: TokenKind::EndParameter,
    rules: &[Rule::Text],
};

/// optional := '(' + option* + ')'
/// option := parameter | text
const OPTIONAL: Between = Between {
    kind: NodeKind::Optional,
    begin: TokenKind::BeginOptional,
    end: TokenKind::EndOptional,
    rules: &[Rule::Parameter, Rule::Text],
};

/// cucumber-expression := ( alternation | optional | parameter | text )*
const EXPRESSION: Between = Between {
    kind: NodeKind::Expression,
    begin: TokenKind::StartOfLine,
    end: TokenKind::EndOfLine,
    rules: &[Rule::Alternation, Rule::Optional, Rule::Parameter, Rule::Text],
};

impl Between {
    fn parse(&self, stream: TokenStream<'_>, at: Position) -> ParseResult {
        if !stream.looking_at(at, self.begin) {
            return Ok(Parsed::Declined);
        }

        let mut current = at + 1;
        let (consumed, children) = parse_tokens_until(self.rules, stream, current, &[self.end])?;
        current += consumed as Position;

        if !stream.looking_at(current, self.end) {
            return Err(SyntaxError::missing_end_token(self.begin, self.end, stream.span_at(at)));
        }

        // Consumes the end token.
        let span = Span::new(stream.span_at(at).start, stream.span_at(current).end);
        Ok(Parsed::Consumed {
            count: (current + 1 - at) as usize,
            node: Node::branch(self.kind, span, children),
        })
    }
}
