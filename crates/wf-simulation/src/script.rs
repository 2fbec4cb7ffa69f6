use std::path::Path;

use crate::error::{SimError, SimResult};

/// An ordered list of player commands to replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    commands: Vec<String>,
}

impl Script {
    /// Build a script from commands.
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the text format: one command per line. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn parse_text(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Parse the JSON format: an array of command strings.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let commands: Vec<String> = serde_json::from_str(json)
            .map_err(|e| SimError::Script(format!("expected a JSON array of strings: {e}")))?;
        Ok(Self { commands })
    }

    /// Load a script file. Files ending in `.json` use the JSON format,
    /// everything else the text format.
    pub fn load(path: &Path) -> SimResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Ok(Self::parse_text(&content))
        }
    }

    /// The commands, in order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the script has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_skips_comments_and_blanks() {
        let script = Script::parse_text("# header\ngo east\n\n   \n  take key  \n#go west\n");
        assert_eq!(script.commands(), ["go east", "take key"]);
    }

    #[test]
    fn json_array() {
        let script = Script::from_json(r#"["go east", "go west"]"#).unwrap();
        assert_eq!(script.len(), 2);
        assert_eq!(script, Script::new(["go east", "go west"]));
    }

    #[test]
    fn json_must_be_string_array() {
        let err = Script::from_json(r#"{"commands": []}"#).unwrap_err();
        assert!(matches!(err, SimError::Script(_)));
        assert!(Script::from_json("[1, 2]").is_err());
    }

    #[test]
    fn bundled_scripts_parse() {
        let win = Script::parse_text(include_str!("../../../worlds/scripts/win.txt"));
        assert_eq!(win.len(), 22);
        assert_eq!(win.commands()[0], "go east");
        assert_eq!(win.commands()[21], "drop lucky mug");

        let lose = Script::parse_text(include_str!("../../../worlds/scripts/lose.txt"));
        assert_eq!(lose.len(), 40);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Script::load(Path::new("/nonexistent/script.txt")).unwrap_err();
        assert!(matches!(err, SimError::Io { .. }));
    }
}
