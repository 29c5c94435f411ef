//! Builds a [`Stylesheet`] from CSS text using cssparser's tokenizer.

use cssparser::{BasicParseError, ParseError, Parser, ParserInput, SourcePosition, Token};

use crate::tree::{NodeId, NodeKind, Stylesheet};

type CssParseError<'i> = ParseError<'i, ()>;

/// What the next token means for the construct being scanned.
enum Step {
    Block,
    Semicolon,
    Comment,
    Other,
    End,
}

fn classify(next: Result<&Token<'_>, BasicParseError<'_>>) -> Step {
    match next {
        Ok(Token::CurlyBracketBlock) => Step::Block,
        Ok(Token::Semicolon) => Step::Semicolon,
        Ok(Token::Comment(_)) => Step::Comment,
        Ok(_) => Step::Other,
        Err(_) => Step::End,
    }
}

impl Stylesheet {
    /// Parses CSS text. Parsing is lenient: anything that can't be read as a
    /// rule, at-rule, declaration or comment is dropped.
    #[must_use]
    pub fn parse(css: &str) -> Self {
        let mut sheet = Self::new();
        let root = sheet.root();

        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        parse_block_contents(&mut parser, &mut sheet, root);

        sheet
    }
}

fn parse_block_contents(parser: &mut Parser<'_, '_>, sheet: &mut Stylesheet, parent: NodeId) {
    loop {
        let start = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_)
            | Token::Semicolon
            | Token::CDO
            | Token::CDC
            | Token::CloseCurlyBracket
            | Token::CloseParenthesis
            | Token::CloseSquareBracket => {}
            Token::Comment(text) => {
                sheet.append(parent, NodeKind::comment(text.trim()));
            }
            Token::AtKeyword(name) => parse_at_rule(parser, sheet, parent, &name),
            // A block with no prelude; its contents are skipped by the next read.
            Token::CurlyBracketBlock => {}
            _ => parse_rule_or_declaration(parser, sheet, parent, start),
        }
    }
}

fn parse_at_rule(parser: &mut Parser<'_, '_>, sheet: &mut Stylesheet, parent: NodeId, name: &str) {
    let mut params = String::new();

    loop {
        let before = parser.position();
        let step = classify(parser.next_including_whitespace_and_comments());
        let has_block = match step {
            Step::Block => true,
            Step::Semicolon | Step::End => false,
            Step::Comment => continue,
            Step::Other => {
                push_params_piece(&mut params, parser.slice(before..parser.position()));
                continue;
            }
        };

        let at_rule = sheet.append(
            parent,
            NodeKind::AtRule {
                name: name.to_string(),
                params: params.trim().to_string(),
                has_block,
            },
        );

        if has_block {
            parse_nested(parser, sheet, at_rule);
        }
        return;
    }
}

/// Appends raw param text, collapsing whitespace runs to a single space.
fn push_params_piece(params: &mut String, piece: &str) {
    if piece.trim().is_empty() {
        if !params.ends_with(' ') {
            params.push(' ');
        }
    } else {
        params.push_str(piece);
    }
}

fn parse_rule_or_declaration(
    parser: &mut Parser<'_, '_>,
    sheet: &mut Stylesheet,
    parent: NodeId,
    start: SourcePosition,
) {
    let end = loop {
        let before = parser.position();
        match classify(parser.next_including_whitespace_and_comments()) {
            Step::Block => {
                let selector = parser.slice(start..before).trim().to_string();
                let rule = sheet.append(parent, NodeKind::Rule { selector });
                parse_nested(parser, sheet, rule);
                return;
            }
            Step::Semicolon => break before,
            Step::Comment | Step::Other => {}
            Step::End => break parser.position(),
        }
    };

    // Declarations only live inside blocks.
    if parent == sheet.root() {
        return;
    }

    if let Some(declaration) = parse_declaration(parser.slice(start..end)) {
        sheet.append(parent, declaration);
    }
}

fn parse_nested(parser: &mut Parser<'_, '_>, sheet: &mut Stylesheet, parent: NodeId) {
    let _ = parser.parse_nested_block(|p| {
        parse_block_contents(p, sheet, parent);
        Ok::<_, CssParseError>(())
    });
}

fn parse_declaration(text: &str) -> Option<NodeKind> {
    let (property, value) = text.split_once(':')?;
    let property = property.trim();
    if property.is_empty() || property.contains(char::is_whitespace) {
        return None;
    }

    let mut value = value.trim();
    let mut important = false;
    if let Some(bang) = value.rfind('!') {
        let (head, tail) = value.split_at(bang);
        if tail.get(1..).is_some_and(|t| t.trim().eq_ignore_ascii_case("important")) {
            value = head.trim_end();
            important = true;
        }
    }

    Some(NodeKind::Declaration {
        property: property.to_string(),
        value: value.to_string(),
        important,
    })
}
