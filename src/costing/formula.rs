//! Recipe cost formulas
//!
//! A cost formula is a linear combination of ingredient references, e.g.
//! `=2*A + 3*B`, `flour + egg` or `0.5 * [olive oil] - water/4`. Each term
//! names exactly one ingredient (by name or by its alias in the
//! `dish_ingredient` sheet) with an optional numeric weight. Nothing else
//! (parentheses, functions, products of references) is accepted.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error raised when a formula is not a weighted sum of references.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} at position {position}")]
pub struct FormulaError {
    /// Byte offset into the formula text (after the optional `=`).
    pub position: usize,
    pub message: String,
}

impl FormulaError {
    fn new(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

/// A single weighted reference: `coefficient * reference`.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    /// Reference text as written (trimmed), not normalized.
    pub reference: String,
}

/// Parsed cost formula.
///
/// An empty formula has no terms; the evaluator treats it as the plain sum of
/// every ingredient the dish uses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Formula {
    terms: Vec<Term>,
}

impl Formula {
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Referenced names in formula order (may repeat).
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.reference.as_str())
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(s)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            let sign = if term.coefficient < 0.0 { "-" } else { "+" };
            if i == 0 {
                if sign == "-" {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {} ", sign)?;
            }
            write!(f, "{}*[{}]", term.coefficient.abs(), term.reference)?;
        }
        Ok(())
    }
}

/// Parse a cost formula.
///
/// A leading `=` is optional and blank input yields an empty formula.
///
/// # Example
/// ```rust
/// use recipe_summary_rs::costing::parse_formula;
///
/// let formula = parse_formula("=2*A + 3*B").unwrap();
/// assert_eq!(formula.terms().len(), 2);
/// ```
pub fn parse_formula(text: &str) -> Result<Formula, FormulaError> {
    let text = text.trim();
    let text = text.strip_prefix('=').unwrap_or(text);

    let mut parser = FormulaParser::new(text);
    if parser.peek_token()? == Token::Eof {
        return Ok(Formula::default());
    }

    let terms = parser.parse_sum()?;
    Ok(Formula { terms })
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Reference(String),
    Plus,
    Minus,
    Star,
    Slash,
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {}", n),
            Token::Reference(r) => write!(f, "reference '{}'", r),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::Eof => write!(f, "end of formula"),
        }
    }
}

struct FormulaParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> FormulaParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    // === Grammar ===

    fn parse_sum(&mut self) -> Result<Vec<Term>, FormulaError> {
        let mut terms = Vec::new();

        let mut sign = match self.peek_token()? {
            Token::Plus => {
                self.next_token()?;
                1.0
            }
            Token::Minus => {
                self.next_token()?;
                -1.0
            }
            _ => 1.0,
        };

        loop {
            terms.push(self.parse_term(sign)?);

            let start = self.token_start();
            sign = match self.next_token()? {
                Token::Plus => 1.0,
                Token::Minus => -1.0,
                Token::Eof => return Ok(terms),
                other => {
                    return Err(FormulaError::new(
                        start,
                        format!("expected '+', '-' or end of formula, found {}", other),
                    ))
                }
            };
        }
    }

    fn parse_term(&mut self, sign: f64) -> Result<Term, FormulaError> {
        let term_start = self.token_start();
        let mut coefficient = sign;
        let mut reference: Option<String> = None;

        self.parse_factor(&mut coefficient, &mut reference)?;

        loop {
            match self.peek_token()? {
                Token::Star => {
                    self.next_token()?;
                    self.parse_factor(&mut coefficient, &mut reference)?;
                }
                Token::Slash => {
                    self.next_token()?;
                    let start = self.token_start();
                    match self.next_token()? {
                        Token::Number(n) if n != 0.0 => coefficient /= n,
                        Token::Number(_) => {
                            return Err(FormulaError::new(start, "division by zero"));
                        }
                        other => {
                            return Err(FormulaError::new(
                                start,
                                format!("can only divide by a number, found {}", other),
                            ));
                        }
                    }
                }
                _ => break,
            }
        }

        if !coefficient.is_finite() {
            return Err(FormulaError::new(term_start, "weight is out of range"));
        }

        match reference {
            Some(reference) => Ok(Term {
                coefficient,
                reference,
            }),
            None => Err(FormulaError::new(
                term_start,
                "term has no ingredient reference",
            )),
        }
    }

    fn parse_factor(
        &mut self,
        coefficient: &mut f64,
        reference: &mut Option<String>,
    ) -> Result<(), FormulaError> {
        let start = self.token_start();
        match self.next_token()? {
            Token::Number(n) => {
                *coefficient *= n;
                Ok(())
            }
            Token::Reference(name) => {
                if let Some(existing) = reference {
                    return Err(FormulaError::new(
                        start,
                        format!("'{}' multiplies another reference '{}'", name, existing),
                    ));
                }
                *reference = Some(name);
                Ok(())
            }
            other => Err(FormulaError::new(
                start,
                format!("expected a number or reference, found {}", other),
            )),
        }
    }

    // === Token scanning ===

    fn peek_token(&mut self) -> Result<Token, FormulaError> {
        let saved = self.pos;
        let token = self.next_token();
        self.pos = saved;
        token
    }

    fn token_start(&mut self) -> usize {
        self.skip_whitespace();
        self.pos
    }

    fn next_token(&mut self) -> Result<Token, FormulaError> {
        self.skip_whitespace();

        let Some(c) = self.peek_char() else {
            return Ok(Token::Eof);
        };

        match c {
            '+' => {
                self.advance();
                Ok(Token::Plus)
            }
            '-' => {
                self.advance();
                Ok(Token::Minus)
            }
            '*' => {
                self.advance();
                Ok(Token::Star)
            }
            '/' => {
                self.advance();
                Ok(Token::Slash)
            }
            '[' => self.scan_bracketed(),
            c if c.is_ascii_digit() || c == '.' => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.scan_identifier()),
            other => Err(FormulaError::new(
                self.pos,
                format!("unexpected character '{}'", other),
            )),
        }
    }

    fn scan_number(&mut self) -> Result<Token, FormulaError> {
        let start = self.pos;

        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek_char() == Some('.') {
            self.advance();
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // Exponent only when digits follow, so `2e` stays a number then a name.
        if self.peek_char().is_some_and(|c| c == 'e' || c == 'E') {
            let rest = &self.input[self.pos + 1..];
            let digits = rest.strip_prefix(['+', '-']).unwrap_or(rest);
            if digits.starts_with(|c: char| c.is_ascii_digit()) {
                self.advance();
                if self.peek_char().is_some_and(|c| c == '+' || c == '-') {
                    self.advance();
                }
                while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        let text = &self.input[start..self.pos];
        match text.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Token::Number(n)),
            Ok(_) => Err(FormulaError::new(start, format!("number '{}' is out of range", text))),
            Err(_) => Err(FormulaError::new(start, format!("invalid number '{}'", text))),
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.pos;
        while self
            .peek_char()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.advance();
        }
        Token::Reference(self.input[start..self.pos].to_string())
    }

    fn scan_bracketed(&mut self) -> Result<Token, FormulaError> {
        let start = self.pos;
        self.advance(); // Skip '['

        let rest = &self.input[self.pos..];
        let Some(end) = rest.find(']') else {
            return Err(FormulaError::new(start, "unclosed '['"));
        };

        let name = rest[..end].trim().to_string();
        self.pos += end + 1;

        if name.is_empty() {
            return Err(FormulaError::new(start, "empty reference '[]'"));
        }
        Ok(Token::Reference(name))
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(coefficient: f64, reference: &str) -> Term {
        Term {
            coefficient,
            reference: reference.to_string(),
        }
    }

    #[test]
    fn test_parse_aliases_with_weights() {
        let formula = parse_formula("=2*A + 3*B").unwrap();
        assert_eq!(formula.terms(), &[term(2.0, "A"), term(3.0, "B")]);
    }

    #[test]
    fn test_parse_names_without_weights() {
        let formula = parse_formula("flour + egg").unwrap();
        assert_eq!(formula.terms(), &[term(1.0, "flour"), term(1.0, "egg")]);
        assert_eq!(formula.references().collect::<Vec<_>>(), vec!["flour", "egg"]);
    }

    #[test]
    fn test_parse_trailing_weight_and_division() {
        let formula = parse_formula("A*2*1.5 - B/4").unwrap();
        assert_eq!(formula.terms(), &[term(3.0, "A"), term(-0.25, "B")]);
    }

    #[test]
    fn test_parse_leading_sign() {
        let formula = parse_formula("-A + B").unwrap();
        assert_eq!(formula.terms(), &[term(-1.0, "A"), term(1.0, "B")]);
    }

    #[test]
    fn test_parse_bracketed_and_unicode_names() {
        let formula = parse_formula("0.5*[olive oil] + crème_fraîche").unwrap();
        assert_eq!(
            formula.terms(),
            &[term(0.5, "olive oil"), term(1.0, "crème_fraîche")]
        );
    }

    #[test]
    fn test_parse_exponent_number() {
        let formula = parse_formula("1e2*A").unwrap();
        assert_eq!(formula.terms(), &[term(100.0, "A")]);
    }

    #[test]
    fn test_blank_formula_is_empty() {
        assert!(parse_formula("").unwrap().is_empty());
        assert!(parse_formula("  =  ").unwrap().is_empty());
    }

    #[test]
    fn test_reject_constant_term() {
        let err = parse_formula("A + 2").unwrap_err();
        assert_eq!(err.position, 4);
        assert!(err.message.contains("no ingredient reference"));
    }

    #[test]
    fn test_reject_product_of_references() {
        let err = parse_formula("A*B").unwrap_err();
        assert!(err.message.contains("multiplies another reference"));
    }

    #[test]
    fn test_reject_parentheses_and_functions() {
        assert!(parse_formula("2*(A+B)").is_err());
        assert!(parse_formula("SUM(A)").is_err());
    }

    #[test]
    fn test_reject_dangling_operator() {
        assert!(parse_formula("A +").is_err());
        assert!(parse_formula("A B").is_err());
        assert!(parse_formula("A/B").is_err());
        assert!(parse_formula("A/0").is_err());
    }

    #[test]
    fn test_reject_overflowing_number() {
        let err = parse_formula("1e400*A").unwrap_err();
        assert_eq!(err.position, 0);
        assert!(err.message.contains("out of range"));
    }

    #[test]
    fn test_reject_overflowing_weight() {
        let err = parse_formula("B + 1e200*1e200*A").unwrap_err();
        assert_eq!(err.position, 4);
        assert!(err.message.contains("weight is out of range"));
    }

    #[test]
    fn test_reject_unclosed_bracket() {
        let err = parse_formula("[olive oil").unwrap_err();
        assert_eq!(err.position, 0);
    }

    #[test]
    fn test_from_str() {
        let formula: Formula = "A + B".parse().unwrap();
        assert_eq!(formula.terms().len(), 2);
    }

    #[test]
    fn test_display_reparses() {
        let formula = parse_formula("-2*A + 0.5*[olive oil]").unwrap();
        let reparsed = parse_formula(&formula.to_string()).unwrap();
        assert_eq!(formula, reparsed);
    }
}
