use crate::{
    misc::log::targets::{self},
    structures::expression::Expression,
    types::err::{self, ParseError},
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Name(String),
    And,
    Or,
    Not,
    Equivalence,
    Open,
    Close,
}

/// Reads an expression from a string, with each name read as the expression returned by `lookup`.
///
/// See [builder](crate::builder) for the grammar.
///
/// ```rust
/// # use otter_tseytin::builder::parse_expression;
/// # use otter_tseytin::structures::expression::Expression;
/// let expression = parse_expression("p | q & !p", |name| match name {
///     "p" => Ok(Expression::Atom(1)),
///     _ => Ok(Expression::Atom(2)),
/// });
///
/// assert_eq!(expression.unwrap().to_string(), "(1 | (2 & !1))");
/// ```
pub fn parse_expression<F>(string: &str, lookup: F) -> Result<Expression, err::ErrorKind>
where
    F: FnMut(&str) -> Result<Expression, err::ErrorKind>,
{
    let characters = string.chars().collect::<Vec<_>>();
    let tokens = tokenise(&characters)?;

    if tokens.is_empty() {
        return Err(err::ErrorKind::from(ParseError::Empty));
    }

    let mut parser = Parser {
        tokens,
        position: 0,
        end: characters.len(),
        lookup,
    };

    let expression = parser.equivalence()?;

    match parser.tokens.get(parser.position) {
        None => {
            log::trace!(target: targets::PARSE, "Read {expression} from {string}");
            Ok(expression)
        }

        Some((at, Token::Close)) => Err(err::ErrorKind::from(ParseError::UnbalancedParenthesis(*at))),

        Some((at, _)) => Err(err::ErrorKind::from(ParseError::UnexpectedCharacter(
            *at,
            characters[*at],
        ))),
    }
}

fn tokenise(characters: &[char]) -> Result<Vec<(usize, Token)>, ParseError> {
    let mut tokens = Vec::default();
    let mut index = 0;

    while let Some(character) = characters.get(index) {
        let at = index;
        index += 1;

        let token = match character {
            c if c.is_whitespace() => continue,

            '&' => {
                if characters.get(index) == Some(&'&') {
                    index += 1;
                }
                Token::And
            }

            '|' => {
                if characters.get(index) == Some(&'|') {
                    index += 1;
                }
                Token::Or
            }

            '!' | '-' => Token::Not,

            '=' => Token::Equivalence,

            '<' => match (characters.get(index), characters.get(index + 1)) {
                (Some('-'), Some('>')) => {
                    index += 2;
                    Token::Equivalence
                }
                _ => return Err(ParseError::UnexpectedCharacter(at, '<')),
            },

            '(' => Token::Open,

            ')' => Token::Close,

            c if c.is_ascii_alphanumeric() || *c == '_' => {
                while characters
                    .get(index)
                    .is_some_and(|c| c.is_ascii_alphanumeric() || *c == '_')
                {
                    index += 1;
                }
                Token::Name(characters[at..index].iter().collect())
            }

            c => return Err(ParseError::UnexpectedCharacter(at, *c)),
        };

        tokens.push((at, token));
    }

    Ok(tokens)
}

struct Parser<F> {
    tokens: Vec<(usize, Token)>,
    position: usize,
    end: usize,
    lookup: F,
}

impl<F> Parser<F>
where
    F: FnMut(&str) -> Result<Expression, err::ErrorKind>,
{
    fn next_if(&mut self, token: &Token) -> bool {
        match self.tokens.get(self.position) {
            Some((_, next)) if next == token => {
                self.position += 1;
                true
            }
            _ => false,
        }
    }

    fn equivalence(&mut self) -> Result<Expression, err::ErrorKind> {
        let mut expression = self.disjunction()?;
        while self.next_if(&Token::Equivalence) {
            expression = Expression::equivalence(expression, self.disjunction()?);
        }
        Ok(expression)
    }

    fn disjunction(&mut self) -> Result<Expression, err::ErrorKind> {
        let mut expression = self.conjunction()?;
        while self.next_if(&Token::Or) {
            expression = Expression::or(expression, self.conjunction()?);
        }
        Ok(expression)
    }

    fn conjunction(&mut self) -> Result<Expression, err::ErrorKind> {
        let mut expression = self.unary()?;
        while self.next_if(&Token::And) {
            expression = Expression::and(expression, self.unary()?);
        }
        Ok(expression)
    }

    fn unary(&mut self) -> Result<Expression, err::ErrorKind> {
        let Some((at, token)) = self.tokens.get(self.position).cloned() else {
            return Err(err::ErrorKind::from(ParseError::MissingNode(self.end)));
        };
        self.position += 1;

        match token {
            Token::Not => Ok(Expression::negation(self.unary()?)),

            Token::Open => {
                let expression = self.equivalence()?;
                match self.next_if(&Token::Close) {
                    true => Ok(expression),
                    false => Err(err::ErrorKind::from(ParseError::UnbalancedParenthesis(at))),
                }
            }

            Token::Name(name) => (self.lookup)(&name),

            Token::And | Token::Or | Token::Equivalence | Token::Close => {
                Err(err::ErrorKind::from(ParseError::MissingNode(at)))
            }
        }
    }
}
