//! JavaFile abstraction for structured Java file generation.

use twin_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::JavaImports;

/// A Java compilation unit: package clause, imports and top-level types.
///
/// # Example
///
/// ```ignore
/// let code = JavaFile::new(&imports)
///     .add(transfer_class)
///     .render();
/// ```
pub struct JavaFile {
    package: String,
    imports: Vec<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl JavaFile {
    /// Take the package and import statements from the file's resolved
    /// imports.
    pub fn new(imports: &JavaImports) -> Self {
        Self {
            package: imports.package().to_string(),
            imports: imports.lines(),
            body: Vec::new(),
        }
    }

    /// Add a top-level element.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::JAVA);
        let mut sections = 0;

        if !self.package.is_empty() {
            builder.push_line(&format!("package {};", self.package));
            sections += 1;
        }

        if !self.imports.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.push_line(import);
            }
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            sections += 1;
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JavaClass;

    #[test]
    fn test_default_package_has_no_clause() {
        let imports = JavaImports::new("");
        let code = JavaFile::new(&imports).add(JavaClass::new("Money")).render();
        assert_eq!(code, "public class Money {\n}\n");
    }

    #[test]
    fn test_package_imports_and_body() {
        let mut imports = JavaImports::new("com.acme.transfer");
        imports.use_qualified("lombok.Getter");
        let code = JavaFile::new(&imports)
            .add(JavaClass::new("CustomerTransfer"))
            .render();
        assert_eq!(
            code,
            "package com.acme.transfer;\n\nimport lombok.Getter;\n\npublic class CustomerTransfer {\n}\n"
        );
    }
}
