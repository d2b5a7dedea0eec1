//! Parser for declared type expressions as written in model files.
//!
//! Grammar:
//!
//! ```text
//! type  := name ('<' arg (',' arg)* '>')? ('[' ']')*
//! name  := ident ('.' ident)*
//! arg   := type | '?' (('extends' | 'super') type)?
//! ```

use thiserror::Error;

use crate::Primitive;

/// Error raised for a malformed type expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at offset {offset}")]
pub struct TypeParseError {
    /// What went wrong.
    pub message: String,
    /// Byte offset into the expression.
    pub offset: usize,
}

/// Bound keyword of a wildcard argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Extends,
    Super,
}

/// A type argument as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgExpr {
    Type(TypeExpr),
    Wildcard(Option<(Bound, TypeExpr)>),
}

/// An unresolved type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr {
    /// The name as written, dotted or simple.
    pub name: String,
    /// Type arguments, if parameterized.
    pub args: Vec<ArgExpr>,
    /// Number of trailing `[]`.
    pub dims: usize,
}

impl TypeExpr {
    /// The primitive this expression names, ignoring array dimensions.
    pub fn primitive(&self) -> Option<Primitive> {
        if self.args.is_empty() {
            Primitive::from_keyword(&self.name)
        } else {
            None
        }
    }
}

/// Parse a type expression such as `java.util.List<Role>` or `byte[]`.
pub fn parse_type(src: &str) -> Result<TypeExpr, TypeParseError> {
    let mut parser = Parser { src, pos: 0 };
    let ty = parser.ty()?;
    parser.skip_ws();
    if parser.pos < src.len() {
        return Err(parser.error("unexpected trailing input"));
    }
    Ok(ty)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn error(&self, message: impl Into<String>) -> TypeParseError {
        TypeParseError {
            message: message.into(),
            offset: self.pos,
        }
    }

    fn ident(&mut self) -> Result<&'a str, TypeParseError> {
        self.skip_ws();
        let start = self.pos;
        let mut chars = self.src[start..].char_indices();
        match chars.next() {
            Some((_, c)) if c.is_alphabetic() || c == '_' || c == '$' => {}
            _ => return Err(self.error("expected a type name")),
        }
        let len = chars
            .find(|(_, c)| !(c.is_alphanumeric() || *c == '_' || *c == '$'))
            .map(|(i, _)| i)
            .unwrap_or(self.src.len() - start);
        self.pos = start + len;
        let src: &'a str = self.src;
        Ok(&src[start..self.pos])
    }

    fn qualified(&mut self) -> Result<String, TypeParseError> {
        let mut name = self.ident()?.to_string();
        while self.eat('.') {
            name.push('.');
            name.push_str(self.ident()?);
        }
        Ok(name)
    }

    fn ty(&mut self) -> Result<TypeExpr, TypeParseError> {
        let name = self.qualified()?;
        let mut args = Vec::new();
        if self.eat('<') {
            if Primitive::from_keyword(&name).is_some() {
                return Err(self.error(format!("primitive type '{name}' takes no type arguments")));
            }
            loop {
                args.push(self.arg()?);
                if self.eat(',') {
                    continue;
                }
                if self.eat('>') {
                    break;
                }
                return Err(self.error("expected ',' or '>'"));
            }
        }
        let mut dims = 0;
        while self.eat('[') {
            if !self.eat(']') {
                return Err(self.error("expected ']'"));
            }
            dims += 1;
        }
        Ok(TypeExpr { name, args, dims })
    }

    fn arg(&mut self) -> Result<ArgExpr, TypeParseError> {
        if self.eat('?') {
            self.skip_ws();
            if matches!(self.peek(), Some(',') | Some('>')) {
                return Ok(ArgExpr::Wildcard(None));
            }
            let bound = match self.ident()? {
                "extends" => Bound::Extends,
                "super" => Bound::Super,
                other => {
                    return Err(self.error(format!("expected 'extends' or 'super', found '{other}'")));
                }
            };
            let ty = self.type_argument()?;
            return Ok(ArgExpr::Wildcard(Some((bound, ty))));
        }
        Ok(ArgExpr::Type(self.type_argument()?))
    }

    fn type_argument(&mut self) -> Result<TypeExpr, TypeParseError> {
        self.skip_ws();
        let start = self.pos;
        let ty = self.ty()?;
        if ty.dims == 0 && ty.primitive().is_some() {
            return Err(TypeParseError {
                message: format!("primitive type '{}' cannot be a type argument", ty.name),
                offset: start,
            });
        }
        Ok(ty)
    }
}
