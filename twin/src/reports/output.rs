//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports say *what* to print through these methods; implementations decide
/// *how* it looks.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render an indented key-value pair.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// Render a file that was created.
    fn added_item(&mut self, text: &str);

    /// Render a file that was left alone because it already exists.
    fn kept_item(&mut self, text: &str);

    /// Render a failure, with its detail lines indented below.
    fn failure(&mut self, msg: &str, detail: &[String]);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn kept_item(&mut self, text: &str) {
        println!("  = {}", text);
    }

    fn failure(&mut self, msg: &str, detail: &[String]) {
        eprintln!("error: {}", msg);
        for line in detail {
            eprintln!("  {}", line);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Records every call as one line; used by the report tests.
#[cfg(test)]
#[derive(Default)]
pub struct Recorded(pub Vec<String>);

#[cfg(test)]
impl Recorded {
    pub fn text(&self) -> String {
        self.0.join("\n")
    }
}

#[cfg(test)]
impl Output for Recorded {
    fn section(&mut self, name: &str) {
        self.0.push(format!("{name}:"));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.0.push(format!("  {key}: {value}"));
    }

    fn added_item(&mut self, text: &str) {
        self.0.push(format!("  + {text}"));
    }

    fn kept_item(&mut self, text: &str) {
        self.0.push(format!("  = {text}"));
    }

    fn failure(&mut self, msg: &str, detail: &[String]) {
        self.0.push(format!("error: {msg}"));
        self.0.extend(detail.iter().map(|line| format!("  {line}")));
    }

    fn warning(&mut self, msg: &str) {
        self.0.push(format!("warning: {msg}"));
    }

    fn divider(&mut self, label: &str) {
        self.0.push(format!("── {label} ──"));
    }

    fn preformatted(&mut self, text: &str) {
        self.0.push(text.to_string());
    }

    fn newline(&mut self) {
        self.0.push(String::new());
    }
}
