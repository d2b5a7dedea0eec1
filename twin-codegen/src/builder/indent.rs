/// Indentation unit of generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Indent {
    pub const JAVA: Self = Self::Spaces(4);

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_four_spaces() {
        assert_eq!(Indent::default().as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
    }
}
