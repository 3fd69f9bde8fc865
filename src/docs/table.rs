//! Markdown table of configuration options

use crate::parser::types::ConfigOption;
use crate::release::template::escape_pipes;

const TABLE_HEADER: [&str; 2] = [
    "| **Command line option** | **JSON option** | **Environment variable** (container-only) | **Description** |",
    "| --- | --- | --- | --- |",
];

/// Build the container environment variable for a command line option.
///
/// `cli_to_env("SPLIT_SYNC", "log-level")` -> `SPLIT_SYNC_LOG_LEVEL`
pub fn cli_to_env(prefix: &str, cli: &str) -> String {
    format!("{}_{}", prefix, cli.to_uppercase().replace('-', "_"))
}

/// Format a single option as a table row
pub fn table_row(prefix: &str, option: &ConfigOption) -> String {
    let cli = escape_pipes(&option.cli);
    format!(
        "| {} | {} | {} | {} |",
        cli,
        escape_pipes(&option.json),
        cli_to_env(prefix, &cli),
        escape_pipes(&option.description)
    )
}

/// Render the full options table, one line per option
pub fn render_options_table(prefix: &str, options: &[ConfigOption]) -> String {
    TABLE_HEADER
        .iter()
        .map(|line| line.to_string())
        .chain(options.iter().map(|option| table_row(prefix, option)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn option(cli: &str, json: &str, description: &str) -> ConfigOption {
        ConfigOption {
            cli: cli.to_string(),
            json: json.to_string(),
            description: description.to_string(),
        }
    }

    #[rstest]
    #[case("SPLIT_SYNC", "log-level", "SPLIT_SYNC_LOG_LEVEL")]
    #[case("SPLIT_PROXY", "admin-secure-hc", "SPLIT_PROXY_ADMIN_SECURE_HC")]
    #[case("SPLIT_SYNC", "apikey", "SPLIT_SYNC_APIKEY")]
    fn cli_to_env_returns_expected(#[case] prefix: &str, #[case] cli: &str, #[case] expected: &str) {
        assert_eq!(cli_to_env(prefix, cli), expected);
    }

    #[test]
    fn table_row_escapes_pipes_in_description() {
        let row = table_row(
            "SPLIT_SYNC",
            &option("log-level", "level", "Log level (error|warning|info)"),
        );

        assert_eq!(
            row,
            "| log-level | level | SPLIT_SYNC_LOG_LEVEL | Log level (error&#124;warning&#124;info) |"
        );
    }

    #[test]
    fn render_options_table_starts_with_header() {
        let table = render_options_table(
            "SPLIT_PROXY",
            &[
                option("admin-host", "host", "Admin host"),
                option("admin-port", "port", "Admin port"),
            ],
        );

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], TABLE_HEADER[0]);
        assert_eq!(lines[1], "| --- | --- | --- | --- |");
        assert_eq!(lines[2], "| admin-host | host | SPLIT_PROXY_ADMIN_HOST | Admin host |");
        assert_eq!(lines[3], "| admin-port | port | SPLIT_PROXY_ADMIN_PORT | Admin port |");
    }

    #[test]
    fn render_options_table_without_options_is_header_only() {
        assert_eq!(render_options_table("X", &[]), TABLE_HEADER.join("\n"));
    }
}
