//! Java annotation builder.

/// An annotation such as `@Getter` or `@GetMapping(value = "/x", params = {"a"})`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    name: String,
    members: Vec<(String, String)>,
}

impl Annotation {
    /// `name` is the annotation type as spelled in the file, without `@`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a member; `value` is a Java expression, e.g. `"\"/api\""`.
    pub fn member(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((key.into(), value.into()));
        self
    }

    /// Shorthand for a single string `value` member.
    pub fn value_str(self, value: &str) -> Self {
        self.member("value", string_literal(value))
    }

    pub fn render(&self) -> String {
        match self.members.as_slice() {
            [] => format!("@{}", self.name),
            [(key, value)] if key == "value" => format!("@{}({})", self.name, value),
            members => {
                let members = members
                    .iter()
                    .map(|(key, value)| format!("{key} = {value}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("@{}({})", self.name, members)
            }
        }
    }
}

/// A Java string literal.
pub fn string_literal(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// A Java array initializer of string literals, e.g. `{"page", "size"}`.
pub fn string_array(values: &[&str]) -> String {
    let items = values
        .iter()
        .map(|v| string_literal(v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{items}}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_annotation() {
        assert_eq!(Annotation::new("Getter").render(), "@Getter");
    }

    #[test]
    fn test_single_value_is_unnamed() {
        let a = Annotation::new("RequestMapping").value_str("/api/v1/customer");
        assert_eq!(a.render(), r#"@RequestMapping("/api/v1/customer")"#);
    }

    #[test]
    fn test_named_members() {
        let a = Annotation::new("GetMapping")
            .value_str("/findAll")
            .member("params", string_array(&["page", "size"]));
        assert_eq!(
            a.render(),
            r#"@GetMapping(value = "/findAll", params = {"page", "size"})"#
        );
    }

    #[test]
    fn test_string_literal_escapes_quotes() {
        assert_eq!(string_literal(r#"say "hi""#), r#""say \"hi\"""#);
    }
}
