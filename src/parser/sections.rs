//! sections.go parser
//!
//! Config structs declare their options through struct tags, one field per
//! line:
//!
//! ```text
//! Level string `json:"level" s-cli:"log-level" s-def:"info" s-desc:"Log level"`
//! ```
//!
//! Lines lacking any of the markers (nested sections, comments, braces) are
//! not options and are skipped.

use regex::Regex;

use crate::parser::types::ConfigOption;

/// Parser for option declarations
pub struct SectionsParser {
    /// Regex for the command line flag: `s-cli:"log-level" `
    cli_re: Regex,
    /// Regex for the JSON key: `json:"level" `
    json_re: Regex,
    /// Regex for the description: `s-desc:"Log level"`
    desc_re: Regex,
}

impl SectionsParser {
    pub fn new() -> Self {
        Self {
            cli_re: Regex::new(r#"s-cli:"([^"]*)" "#).unwrap(),
            json_re: Regex::new(r#"json:"([^"]*)" "#).unwrap(),
            desc_re: Regex::new(r#"s-desc:"([^"]*)""#).unwrap(),
        }
    }

    /// Parse a single line, returning the option it declares if any
    pub fn parse_line(&self, line: &str) -> Option<ConfigOption> {
        let cli = capture(&self.cli_re, line)?;
        let json = capture(&self.json_re, line)?;
        let description = capture(&self.desc_re, line)?;
        Some(ConfigOption {
            cli: cli.to_string(),
            json: json.to_string(),
            description: description.to_string(),
        })
    }

    /// Extract every fully declared option, in source order
    pub fn parse(&self, content: &str) -> Vec<ConfigOption> {
        content
            .split('\n')
            .filter_map(|line| self.parse_line(line))
            .collect()
    }

    /// Extract every command line flag, in source order.
    ///
    /// Only the `s-cli` marker is required here.
    pub fn parse_flags(&self, content: &str) -> Vec<String> {
        content
            .split('\n')
            .filter_map(|line| capture(&self.cli_re, line))
            .map(str::to_string)
            .collect()
    }
}

impl Default for SectionsParser {
    fn default() -> Self {
        Self::new()
    }
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CONTENT: &str = r#"package conf

// Logging configuration options
type Logging struct {
	Level             string `json:"level" s-cli:"log-level" s-def:"info" s-desc:"Log level (error|warning|info|debug|verbose)"`
	Output            string `json:"output" s-cli:"log-output" s-def:"stdout" s-desc:"Where to output logs (defaults to stdout)"`
}

// Admin configuration options
type Admin struct {
	Host     string `json:"host" s-cli:"admin-host" s-def:"0.0.0.0" s-desc:"Host where the admin server will listen"`
	TLS      TLS    `json:"tls" s-nested:"true" s-cli-prefix:"admin"`
}
"#;

    #[test]
    fn parse_extracts_fully_declared_options() {
        let parser = SectionsParser::new();

        let result = parser.parse(CONTENT);

        assert_eq!(result.len(), 3);
        assert_eq!(
            result[0],
            ConfigOption {
                cli: "log-level".to_string(),
                json: "level".to_string(),
                description: "Log level (error|warning|info|debug|verbose)".to_string(),
            }
        );
        assert_eq!(result[1].cli, "log-output");
        assert_eq!(result[2].json, "host");
    }

    #[test]
    fn parse_flags_extracts_cli_names_in_order() {
        let parser = SectionsParser::new();

        let result = parser.parse_flags(CONTENT);

        assert_eq!(result, vec!["log-level", "log-output", "admin-host"]);
    }

    #[rstest]
    // s-cli-prefix is not s-cli
    #[case(r#"TLS TLS `json:"tls" s-nested:"true" s-cli-prefix:"admin"`"#)]
    // missing description
    #[case(r#"Port int64 `json:"port" s-cli:"admin-port" s-def:"3010"`"#)]
    // markers need the trailing space
    #[case(r#"Port int64 `json:"port"`s-cli:"admin-port"` s-desc:"x"`"#)]
    #[case("")]
    fn parse_line_skips_incomplete_declarations(#[case] line: &str) {
        assert_eq!(SectionsParser::new().parse_line(line), None);
    }

    #[test]
    fn parse_line_accepts_empty_values() {
        let line = r#"Username string `json:"username" s-cli:"admin-username" s-def:"" s-desc:""`"#;

        let option = SectionsParser::new().parse_line(line).unwrap();

        assert_eq!(option.cli, "admin-username");
        assert_eq!(option.description, "");
    }
}
