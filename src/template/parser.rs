use nom::{
    branch::alt,
    bytes::complete::{escaped_transform, tag, take_until},
    character::complete::{alpha1, alphanumeric1, char, multispace0, multispace1, none_of},
    combinator::{cut, eof, map, not, opt, peek, recognize, rest, value},
    error::{context, ContextError, ErrorKind, ParseError},
    multi::many0,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

use crate::{
    error::{Position, TemplateError},
    template::{Argument, Call, Node},
};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const TRIM_CLOSE: &str = "-}}";

/// How many parenthesized calls may be nested inside each other.
pub(crate) const MAX_DEPTH: usize = 32;

/// A parse failure: where it happened and, once known, what went wrong.
#[derive(Debug)]
struct SyntaxError<'a> {
    input: &'a str,
    message: Option<String>,
}

impl<'a> ParseError<&'a str> for SyntaxError<'a> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        Self {
            input,
            message: None,
        }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> ContextError<&'a str> for SyntaxError<'a> {
    // The innermost context names the failure and its start is reported
    fn add_context(input: &'a str, ctx: &'static str, other: Self) -> Self {
        match other.message {
            Some(_) => other,
            None => Self {
                input,
                message: Some(ctx.to_string()),
            },
        }
    }
}

type Res<'a, T> = IResult<&'a str, T, SyntaxError<'a>>;

fn failure<S: Into<String>>(input: &str, message: S) -> nom::Err<SyntaxError<'_>> {
    nom::Err::Failure(SyntaxError {
        input,
        message: Some(message.into()),
    })
}

/// `remaining` must be a suffix of `source`.
fn position(source: &str, remaining: &str) -> Position {
    let consumed = &source[..source.len() - remaining.len()];
    let line = consumed.matches('\n').count() + 1;
    let column = consumed.chars().rev().take_while(|c| *c != '\n').count() + 1;
    Position::new(line, column)
}

fn syntax_error(source: &str, err: nom::Err<SyntaxError<'_>>) -> TemplateError {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let message = e.message.unwrap_or_else(|| match e.input.chars().next() {
                Some(c) => format!("unexpected {:?}", c),
                None => "unexpected end of template".to_string(),
            });
            TemplateError::syntax(position(source, e.input), message)
        },
        nom::Err::Incomplete(_) => TemplateError::syntax(position(source, ""), "incomplete template"),
    }
}

// ============================================================================
// Literals
// ============================================================================

fn unknown_escape(input: &str) -> Res<'_, char> {
    match input.chars().next() {
        Some(c) => Err(failure(input, format!("unknown escape sequence \\{}", c))),
        None => Err(nom::Err::Error(SyntaxError::from_error_kind(input, ErrorKind::EscapedTransform))),
    }
}

fn quoted(input: &str) -> Res<'_, String> {
    preceded(
        peek(char('"')),
        cut(context(
            "unterminated quoted string",
            delimited(
                char('"'),
                // escaped_transform refuses empty content
                map(
                    opt(escaped_transform(
                        none_of("\"\\\n"),
                        '\\',
                        alt((
                            value('"', char('"')),
                            value('\\', char('\\')),
                            value('\n', char('n')),
                            value('\t', char('t')),
                            value('\r', char('r')),
                            unknown_escape,
                        )),
                    )),
                    Option::unwrap_or_default,
                ),
                char('"'),
            ),
        )),
    )(input)
}

fn raw(input: &str) -> Res<'_, String> {
    preceded(
        peek(char('`')),
        cut(context(
            "unterminated raw string",
            map(delimited(char('`'), take_until("`"), char('`')), str::to_string),
        )),
    )(input)
}

// ============================================================================
// Calls
// ============================================================================

fn identifier(input: &str) -> Res<'_, &str> {
    recognize(pair(alt((alpha1, tag("_"))), many0(alt((alphanumeric1, tag("_"))))))(input)
}

fn missing_name(input: &str) -> Res<'_, &str> {
    let message = match input.chars().next() {
        None => "unclosed action".to_string(),
        Some(')') => "missing function name".to_string(),
        Some(_) if input.starts_with(CLOSE) || input.starts_with(TRIM_CLOSE) => "missing function name".to_string(),
        Some(c) => format!("unexpected {:?} where a function name was expected", c),
    };
    Err(failure(input, message))
}

/// Succeeds without consuming anything in front of whatever may follow the
/// last argument of a call. `-}}` only counts when whitespace separates it.
fn end_of_call(input: &str) -> Res<'_, ()> {
    peek(alt((
        value((), preceded(multispace1, tag(TRIM_CLOSE))),
        value((), preceded(multispace0, alt((tag(")"), tag(CLOSE), eof)))),
    )))(input)
}

fn unexpected<'a>(input: &'a str, name: &str) -> Res<'a, ()> {
    let remaining = input.trim_start();
    let separated = remaining.len() != input.len();

    let message = match remaining.chars().next() {
        Some('|') => "pipelines are not supported".to_string(),
        Some('$') => "variables are not supported".to_string(),
        Some(c) if !separated => format!("missing space before {:?}", c),
        Some(c) => format!("unexpected {:?} in arguments of {}", c, name),
        None => "unclosed action".to_string(),
    };
    Err(failure(remaining, message))
}

fn nested<'a>(input: &'a str, source: &'a str, depth: usize) -> Res<'a, Call> {
    let (remaining, _) = char('(')(input)?;

    if depth >= MAX_DEPTH {
        return Err(failure(input, "nesting too deep"));
    }

    cut(terminated(
        |i| function_call(i, source, depth + 1),
        preceded(multispace0, context("unclosed left paren", char(')'))),
    ))(remaining)
}

fn argument<'a>(input: &'a str, source: &'a str, depth: usize) -> Res<'a, Argument> {
    alt((
        map(quoted, Argument::Literal),
        map(raw, Argument::Literal),
        map(|i| nested(i, source, depth), Argument::Call),
    ))(input)
}

/// Parses `name arg...` and stops in front of the terminator of the enclosing
/// action or parenthesis.
fn function_call<'a>(input: &'a str, source: &'a str, depth: usize) -> Res<'a, Call> {
    let (input, _) = multispace0(input)?;
    let position = position(source, input);
    let (input, name) = alt((identifier, missing_name))(input)?;
    let (input, args) = many0(preceded(multispace1, |i| argument(i, source, depth)))(input)?;
    let (input, _) = alt((end_of_call, |i| unexpected(i, name)))(input)?;

    Ok((input, Call::new(name.to_string(), args, position)))
}

// ============================================================================
// Actions
// ============================================================================

struct Action {
    trim_left: bool,
    call: Option<Call>,
    trim_right: bool,
}

fn comment(input: &str) -> Res<'_, &str> {
    preceded(
        peek(tag("/*")),
        cut(context("unclosed comment", delimited(tag("/*"), take_until("*/"), tag("*/")))),
    )(input)
}

/// `}}`, or ` -}}` which also trims the text that follows.
fn close(input: &str) -> Res<'_, bool> {
    alt((
        value(true, preceded(multispace1, tag(TRIM_CLOSE))),
        value(false, preceded(multispace0, tag(CLOSE))),
    ))(input)
}

fn action<'a>(input: &'a str, source: &'a str) -> Res<'a, Action> {
    let (input, _) = tag(OPEN)(input)?;
    // "{{- " trims the preceding text
    let (input, trim_left) = map(opt(terminated(char('-'), peek(multispace1))), |trim| trim.is_some())(input)?;
    let (input, _) = multispace0(input)?;

    if let (input, Some(_)) = opt(comment)(input)? {
        let (input, trim_right) = cut(context("comment ends before closing delimiter", close))(input)?;

        return Ok((
            input,
            Action {
                trim_left,
                call: None,
                trim_right,
            },
        ));
    }

    let (input, call) = function_call(input, source, 0)?;
    let (input, _) = peek(preceded(multispace0, cut(context("unexpected right paren", not(char(')'))))))(input)?;
    let (input, trim_right) = cut(context("unclosed action", close))(input)?;

    Ok((
        input,
        Action {
            trim_left,
            call: Some(call),
            trim_right,
        },
    ))
}

fn text(input: &str) -> Res<'_, &str> {
    alt((take_until(OPEN), rest))(input)
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        nodes.push(Node::Text(text.to_string()));
    }
}

/// Split `input` into text and actions.
pub(crate) fn parse(input: &str) -> Result<Vec<Node>, TemplateError> {
    let mut nodes = Vec::new();
    let mut remaining = input;
    let mut trim_next = false;

    while !remaining.is_empty() {
        let (tail, mut chunk) = text(remaining).map_err(|e| syntax_error(input, e))?;

        if trim_next {
            chunk = chunk.trim_start();
        }

        if tail.is_empty() {
            push_text(&mut nodes, chunk);
            break;
        }

        let (tail, action) = action(tail, input).map_err(|e| syntax_error(input, e))?;

        if action.trim_left {
            chunk = chunk.trim_end();
        }

        push_text(&mut nodes, chunk);
        nodes.extend(action.call.map(Node::Action));
        trim_next = action.trim_right;
        remaining = tail;
    }

    Ok(nodes)
}
