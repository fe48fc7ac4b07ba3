//! Minimal CQL reader for raw and batch statement text.
//!
//! Covers the subset the adapter emits: `SELECT`, `INSERT`, `UPDATE` and
//! `DELETE` with `WHERE` comparisons, `IN`, `ORDER BY`, `LIMIT`, and `?`
//! placeholders bound positionally. Anything outside the subset is an
//! execution error naming the offending token.

use cassata_core::{stmt, Error, Result};

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Ident(String),
    Number(String),
    Text(String),
    Placeholder,
    Comma,
    Dot,
    Star,
    Plus,
    Minus,
    OpenParen,
    CloseParen,
    Semicolon,
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(name) => name.fmt(f),
            Token::Number(lexeme) => lexeme.fmt(f),
            Token::Text(text) => write!(f, "'{text}'"),
            Token::Placeholder => "?".fmt(f),
            Token::Comma => ",".fmt(f),
            Token::Dot => ".".fmt(f),
            Token::Star => "*".fmt(f),
            Token::Plus => "+".fmt(f),
            Token::Minus => "-".fmt(f),
            Token::OpenParen => "(".fmt(f),
            Token::CloseParen => ")".fmt(f),
            Token::Semicolon => ";".fmt(f),
            Token::Eq => "=".fmt(f),
            Token::Gt => ">".fmt(f),
            Token::Gte => ">=".fmt(f),
            Token::Lt => "<".fmt(f),
            Token::Lte => "<=".fmt(f),
        }
    }
}

/// Tokenizes query text.
///
/// Lexing is the prepare step: a batch lexes its template once and reads
/// it against each bound tuple.
pub(crate) fn lex(src: &str) -> Result<Vec<Token>> {
    let mut tokens = vec![];
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            ',' => tokens.push(Token::Comma),
            '.' => tokens.push(Token::Dot),
            '*' => tokens.push(Token::Star),
            '+' => tokens.push(Token::Plus),
            '-' => tokens.push(Token::Minus),
            '(' => tokens.push(Token::OpenParen),
            ')' => tokens.push(Token::CloseParen),
            ';' => tokens.push(Token::Semicolon),
            '?' => tokens.push(Token::Placeholder),
            '=' => tokens.push(Token::Eq),
            '>' => {
                if chars.next_if_eq(&'=').is_some() {
                    tokens.push(Token::Gte);
                } else {
                    tokens.push(Token::Gt);
                }
            }
            '<' => {
                if chars.next_if_eq(&'=').is_some() {
                    tokens.push(Token::Lte);
                } else {
                    tokens.push(Token::Lt);
                }
            }
            '\'' => tokens.push(Token::Text(quoted(&mut chars, '\'')?)),
            '"' => tokens.push(Token::Ident(quoted(&mut chars, '"')?)),
            c if c.is_ascii_digit() => {
                let mut lexeme = String::from(c);
                while let Some(c) = chars.next_if(|c| c.is_ascii_digit() || *c == '.') {
                    lexeme.push(c);
                }
                tokens.push(Token::Number(lexeme));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut lexeme = String::from(c);
                while let Some(c) = chars.next_if(|c| c.is_ascii_alphanumeric() || *c == '_') {
                    lexeme.push(c);
                }
                tokens.push(Token::Ident(lexeme));
            }
            c => {
                return Err(Error::execution(format!(
                    "unexpected character `{c}` in query"
                )))
            }
        }
    }

    Ok(tokens)
}

/// Consumes a quoted literal. A doubled quote escapes itself.
fn quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> Result<String> {
    let mut lexeme = String::new();

    loop {
        match chars.next() {
            Some(c) if c == quote => {
                if chars.next_if_eq(&quote).is_some() {
                    lexeme.push(quote);
                } else {
                    return Ok(lexeme);
                }
            }
            Some(c) => lexeme.push(c),
            None => return Err(Error::execution("unterminated quote in query")),
        }
    }
}

/// Reads one statement, binding placeholders against `bindings` in order.
pub(crate) fn read(tokens: &[Token], bindings: &[stmt::Value]) -> Result<stmt::Statement> {
    let mut reader = Reader {
        tokens,
        pos: 0,
        bindings,
        bound: 0,
    };

    let statement = reader.statement()?;

    reader.eat(&Token::Semicolon);
    if let Some(token) = reader.peek() {
        return Err(Error::execution(format!(
            "unexpected token `{token}` after statement"
        )));
    }
    if reader.bound < bindings.len() {
        return Err(Error::execution(format!(
            "statement binds {} values but {} were provided",
            reader.bound,
            bindings.len()
        )));
    }

    Ok(statement)
}

struct Reader<'a> {
    tokens: &'a [Token],
    pos: usize,
    bindings: &'a [stmt::Value],
    bound: usize,
}

impl<'a> Reader<'a> {
    fn statement(&mut self) -> Result<stmt::Statement> {
        if self.eat_kw("SELECT") {
            self.select().map(Into::into)
        } else if self.eat_kw("INSERT") {
            self.insert().map(Into::into)
        } else if self.eat_kw("UPDATE") {
            self.update().map(Into::into)
        } else if self.eat_kw("DELETE") {
            self.delete().map(Into::into)
        } else {
            Err(self.unexpected("`SELECT`, `INSERT`, `UPDATE` or `DELETE`"))
        }
    }

    fn select(&mut self) -> Result<stmt::Select> {
        let columns = if self.eat(&Token::Star) {
            stmt::Columns::All
        } else {
            stmt::Columns::Named(self.idents()?)
        };

        self.expect_kw("FROM")?;

        let mut select = stmt::Select::all(self.table_ref()?);
        select.columns = columns;

        if self.eat_kw("WHERE") {
            select.filter = self.filter()?;
        }

        if self.eat_kw("ORDER") {
            self.expect_kw("BY")?;
            let column = self.ident()?;
            let direction = if self.eat_kw("DESC") {
                stmt::Direction::Desc
            } else {
                self.eat_kw("ASC");
                stmt::Direction::Asc
            };
            select.order_by = Some(stmt::OrderBy::new(column, direction));
        }

        if self.eat_kw("LIMIT") {
            select.limit = Some(self.limit()?);
        }

        Ok(select)
    }

    fn insert(&mut self) -> Result<stmt::Insert> {
        self.expect_kw("INTO")?;
        let mut insert = stmt::Insert::new(self.table_ref()?);

        self.expect(&Token::OpenParen)?;
        let columns = self.idents()?;
        self.expect(&Token::CloseParen)?;

        self.expect_kw("VALUES")?;
        self.expect(&Token::OpenParen)?;
        let values = self.values()?;
        self.expect(&Token::CloseParen)?;

        if columns.len() != values.len() {
            return Err(Error::execution(format!(
                "INSERT names {} columns but provides {} values",
                columns.len(),
                values.len()
            )));
        }

        for (column, value) in columns.into_iter().zip(values) {
            insert.values.set(column, value);
        }

        Ok(insert)
    }

    fn update(&mut self) -> Result<stmt::Update> {
        let mut update = stmt::Update::new(self.table_ref()?);

        self.expect_kw("SET")?;
        loop {
            self.assignment(&mut update.assignments)?;
            if !self.eat(&Token::Comma) {
                break;
            }
        }

        if self.eat_kw("WHERE") {
            update.filter = self.filter()?;
        }

        Ok(update)
    }

    /// `col = ?`, or the counter forms `col = col + ?` / `col = col - ?`.
    fn assignment(&mut self, assignments: &mut stmt::Assignments) -> Result<()> {
        let column = self.ident()?;
        self.expect(&Token::Eq)?;

        if let Some(Token::Ident(name)) = self.peek() {
            if *name == column {
                self.advance();
                let add = match self.peek() {
                    Some(Token::Plus) => true,
                    Some(Token::Minus) => false,
                    _ => return Err(self.unexpected("`+` or `-`")),
                };
                self.advance();

                let delta = self.value()?;
                if add {
                    assignments.add(column, delta);
                } else {
                    assignments.sub(column, delta);
                }
                return Ok(());
            }
        }

        let value = self.value()?;
        assignments.set(column, value);
        Ok(())
    }

    fn delete(&mut self) -> Result<stmt::Delete> {
        let columns = if self.peek_kw("FROM") {
            stmt::Columns::All
        } else {
            stmt::Columns::Named(self.idents()?)
        };

        self.expect_kw("FROM")?;

        let mut delete = stmt::Delete::rows(self.table_ref()?);
        delete.columns = columns;

        if self.eat_kw("WHERE") {
            delete.filter = self.filter()?;
        }

        Ok(delete)
    }

    fn filter(&mut self) -> Result<stmt::Filter> {
        let mut filter = stmt::Filter::default();

        loop {
            let column = self.ident()?;

            if self.eat_kw("IN") {
                self.expect(&Token::OpenParen)?;
                let candidates = self.values()?;
                self.expect(&Token::CloseParen)?;
                filter.apply(column, stmt::Value::List(candidates), stmt::Operator::In);
            } else {
                let op = match self.peek() {
                    Some(Token::Eq) => stmt::Operator::Eq,
                    Some(Token::Gt) => stmt::Operator::Gt,
                    Some(Token::Gte) => stmt::Operator::Gte,
                    Some(Token::Lt) => stmt::Operator::Lt,
                    Some(Token::Lte) => stmt::Operator::Lte,
                    _ => return Err(self.unexpected("a comparison operator")),
                };
                self.advance();

                let value = self.value()?;
                filter.apply(column, value, op);
            }

            if !self.eat_kw("AND") {
                return Ok(filter);
            }
        }
    }

    fn value(&mut self) -> Result<stmt::Value> {
        let value = match self.peek() {
            Some(Token::Placeholder) => {
                let value = self
                    .bindings
                    .get(self.bound)
                    .cloned()
                    .ok_or_else(|| Error::execution("no value bound for placeholder"))?;
                self.bound += 1;
                value
            }
            Some(Token::Number(lexeme)) => number(lexeme, false)?,
            Some(Token::Minus) => {
                self.advance();
                match self.peek() {
                    Some(Token::Number(lexeme)) => number(lexeme, true)?,
                    _ => return Err(self.unexpected("a number")),
                }
            }
            Some(Token::Text(text)) => stmt::Value::Text(text.clone()),
            Some(Token::Ident(word)) if word.eq_ignore_ascii_case("true") => {
                stmt::Value::Bool(true)
            }
            Some(Token::Ident(word)) if word.eq_ignore_ascii_case("false") => {
                stmt::Value::Bool(false)
            }
            Some(Token::Ident(word)) if word.eq_ignore_ascii_case("null") => stmt::Value::Null,
            _ => return Err(self.unexpected("a value")),
        };
        self.advance();

        Ok(value)
    }

    fn values(&mut self) -> Result<Vec<stmt::Value>> {
        let mut values = vec![self.value()?];
        while self.eat(&Token::Comma) {
            values.push(self.value()?);
        }
        Ok(values)
    }

    fn ident(&mut self) -> Result<String> {
        match self.peek() {
            Some(Token::Ident(name)) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("an identifier")),
        }
    }

    fn idents(&mut self) -> Result<Vec<String>> {
        let mut idents = vec![self.ident()?];
        while self.eat(&Token::Comma) {
            idents.push(self.ident()?);
        }
        Ok(idents)
    }

    fn table_ref(&mut self) -> Result<stmt::TableRef> {
        let first = self.ident()?;
        if self.eat(&Token::Dot) {
            Ok(stmt::TableRef::new(first, self.ident()?))
        } else {
            Ok(stmt::TableRef::unqualified(first))
        }
    }

    fn limit(&mut self) -> Result<u64> {
        match self.peek() {
            Some(Token::Number(lexeme)) => {
                let limit = lexeme
                    .parse::<u64>()
                    .map_err(|_| Error::execution(format!("malformed LIMIT `{lexeme}`")))?;
                self.advance();
                Ok(limit)
            }
            _ => Err(self.unexpected("a row count")),
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kw(&self, kw: &str) -> bool {
        matches!(self.peek(), Some(Token::Ident(word)) if word.eq_ignore_ascii_case(kw))
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_kw(&mut self, kw: &str) -> bool {
        if self.peek_kw(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &Token) -> Result<()> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("`{token}`")))
        }
    }

    fn expect_kw(&mut self, kw: &str) -> Result<()> {
        if self.eat_kw(kw) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("`{kw}`")))
        }
    }

    fn unexpected(&self, expected: &str) -> Error {
        match self.peek() {
            Some(token) => Error::execution(format!("expected {expected}, found `{token}`")),
            None => Error::execution(format!("expected {expected}, found the end of the query")),
        }
    }
}

fn number(lexeme: &str, negate: bool) -> Result<stmt::Value> {
    if let Ok(v) = lexeme.parse::<i64>() {
        return Ok(stmt::Value::I64(if negate { -v } else { v }));
    }
    if let Ok(v) = lexeme.parse::<f64>() {
        return Ok(stmt::Value::F64(if negate { -v } else { v }));
    }
    Err(Error::execution(format!(
        "malformed number `{lexeme}` in query"
    )))
}
