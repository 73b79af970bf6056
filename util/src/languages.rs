use serde::{Deserialize, Serialize};
use std::path::Path;

/// Languages a graded submission may be written in.
/// Serialized/deserialized in `lowercase` for the tasks document.
/// Common aliases are accepted (e.g., "py", "sh", "js").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[serde(alias = "py", alias = "python3")]
    Python,                             // "python"
    #[serde(alias = "sh", alias = "bash")]
    Shell,                              // "shell"
    #[serde(alias = "js", alias = "node")]
    JavaScript,                         // "javascript"
}

/// A program plus its argument vector. Never passed through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    fn new(program: &str, args: &[&str], file: &Path) -> Self {
        let mut args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        args.push(file.display().to_string());
        Self {
            program: program.to_string(),
            args,
        }
    }
}

pub trait LanguageExt {
    /// Interpreter used to run a submission, e.g. `python3`.
    fn interpreter(&self) -> &'static str;

    /// Command that runs `file` as a standalone program.
    fn run_command(&self, file: &Path) -> CommandLine;

    /// Command that only checks `file` parses. Exits non-zero on a syntax error.
    fn syntax_check_command(&self, file: &Path) -> CommandLine;
}

impl LanguageExt for Language {
    fn interpreter(&self) -> &'static str {
        match self {
            Language::Python     => "python3",
            Language::Shell      => "sh",
            Language::JavaScript => "node",
        }
    }

    fn run_command(&self, file: &Path) -> CommandLine {
        CommandLine::new(self.interpreter(), &[], file)
    }

    fn syntax_check_command(&self, file: &Path) -> CommandLine {
        match self {
            Language::Python     => CommandLine::new(self.interpreter(), &["-m", "py_compile"], file),
            Language::Shell      => CommandLine::new(self.interpreter(), &["-n"], file),
            Language::JavaScript => CommandLine::new(self.interpreter(), &["--check"], file),
        }
    }
}
