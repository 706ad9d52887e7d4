//! Expression engine for the keypad calculator.
//!
//! The formula string the keypad builds (`12.5×(3+4)÷-2`) is tokenized with a
//! logos-generated lexer and evaluated by a small recursive-descent parser
//! with the usual precedence: unary minus, then `×`/`÷`, then `+`/`-`.
//! Both the keypad glyphs (`×`, `÷`) and their ASCII forms (`*`, `/`) are
//! accepted so the same engine backs the CLI.

use logos::Logos;

use super::error::ExprError;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t]+")]
enum Token {
    #[regex(r"[0-9]+(\.[0-9]*)?|\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[token("+")]
    Plus,

    #[token("-")]
    #[token("−")]
    Minus,

    #[token("×")]
    #[token("*")]
    Multiply,

    #[token("÷")]
    #[token("/")]
    Divide,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    // expr := term (("+" | "-") term)*
    fn expr(&mut self) -> Result<f64, ExprError> {
        let mut acc = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Plus => {
                    self.advance();
                    acc += self.term()?;
                }
                Token::Minus => {
                    self.advance();
                    acc -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    // term := factor (("×" | "÷") factor)*
    fn term(&mut self) -> Result<f64, ExprError> {
        let mut acc = self.factor()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Multiply => {
                    self.advance();
                    acc *= self.factor()?;
                }
                Token::Divide => {
                    self.advance();
                    let rhs = self.factor()?;
                    if rhs == 0.0 {
                        return Err(ExprError::DivisionByZero);
                    }
                    acc /= rhs;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    // factor := "-" factor | "(" expr ")" | number
    fn factor(&mut self) -> Result<f64, ExprError> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::Minus) => Ok(-self.factor()?),
            Some(Token::LParen) => {
                let inner = self.expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(ExprError::UnbalancedParens),
                }
            }
            _ => Err(ExprError::Syntax),
        }
    }
}

/// Evaluates a formula string to a single value.
pub fn evaluate(input: &str) -> Result<f64, ExprError> {
    if input.trim().is_empty() {
        return Err(ExprError::Empty);
    }

    let tokens: Vec<Token> = Token::lexer(input)
        .collect::<Result<_, _>>()
        .map_err(|()| ExprError::BadToken)?;
    if tokens.is_empty() {
        return Err(ExprError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;
    if parser.pos != parser.tokens.len() {
        return Err(ExprError::Syntax);
    }
    if !value.is_finite() {
        return Err(ExprError::DivisionByZero);
    }
    Ok(value)
}

/// Formats an evaluation result the way the keypad display expects:
/// integers without a trailing `.0`, everything else trimmed of zeros.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let s = format!("{value:.10}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(evaluate("1+2"), Ok(3.0));
        assert_eq!(evaluate("7-10"), Ok(-3.0));
        assert_eq!(evaluate("6×7"), Ok(42.0));
        assert_eq!(evaluate("15÷4"), Ok(3.75));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2+3×4"), Ok(14.0));
        assert_eq!(evaluate("2×3+4"), Ok(10.0));
        assert_eq!(evaluate("10-4÷2"), Ok(8.0));
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(evaluate("(2+3)×4"), Ok(20.0));
        assert_eq!(evaluate("((1+1))"), Ok(2.0));
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate("-5"), Ok(-5.0));
        assert_eq!(evaluate("-5+3"), Ok(-2.0));
        assert_eq!(evaluate("2×-3"), Ok(-6.0));
        assert_eq!(evaluate("-(2+3)"), Ok(-5.0));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(evaluate("0.5+0.25"), Ok(0.75));
        assert_eq!(evaluate(".5×2"), Ok(1.0));
    }

    #[test]
    fn test_ascii_operators() {
        assert_eq!(evaluate("6*7"), Ok(42.0));
        assert_eq!(evaluate("15/4"), Ok(3.75));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("1÷0"), Err(ExprError::DivisionByZero));
        assert_eq!(evaluate("1÷(2-2)"), Err(ExprError::DivisionByZero));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(evaluate(""), Err(ExprError::Empty));
        assert_eq!(evaluate("   "), Err(ExprError::Empty));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(evaluate("1+"), Err(ExprError::Syntax));
        assert_eq!(evaluate("×3"), Err(ExprError::Syntax));
        assert_eq!(evaluate("(1+2"), Err(ExprError::UnbalancedParens));
        assert_eq!(evaluate("1 2"), Err(ExprError::Syntax));
        assert_eq!(evaluate("abc"), Err(ExprError::BadToken));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(3.75), "3.75");
        assert_eq!(format_value(-0.5), "-0.5");
        assert_eq!(format_value(1.0 / 3.0), "0.3333333333");
    }
}
