use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation only manages configuration and should skip
/// the fetch pipeline entirely.
pub fn is_config_mode(args: &Args) -> bool {
    args.new_api_domain.is_some() || args.list_config
}

/// Football Match Snapshot Exporter
///
/// Aggregates competitions, teams and matches from a remote stats provider
/// into a single denormalized JSON export covering a four-day window:
/// yesterday, today, tomorrow and the day after tomorrow.
///
/// Provider requests are issued strictly sequentially with a pacing delay to
/// respect upstream rate limits; a full run takes roughly two seconds per
/// competition plus the four date fetches.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Anchor date for the export window in YYYY-MM-DD format.
    /// Defaults to today; the window always spans anchor-1 through anchor+2.
    #[arg(long = "date", short = 'd', help_heading = "Export Options")]
    pub date: Option<String>,

    /// Destination file for the JSON export. Overrides the configured
    /// output file. The destination is overwritten unconditionally.
    #[arg(long = "output", short = 'o', help_heading = "Export Options")]
    pub output: Option<String>,

    /// Update API domain in config and exit.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN"
    )]
    pub new_api_domain: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: info logs are mirrored to stderr in addition to
    /// the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs are written to
    /// the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["matchsnap"]);
        assert_eq!(args.date, None);
        assert_eq!(args.output, None);
        assert!(!args.list_config);
        assert!(!args.debug);
    }

    #[test]
    fn test_date_and_output_flags() {
        let args = Args::parse_from([
            "matchsnap",
            "--date",
            "2024-01-15",
            "--output",
            "/tmp/snapshot.json",
        ]);
        assert_eq!(args.date.as_deref(), Some("2024-01-15"));
        assert_eq!(args.output.as_deref(), Some("/tmp/snapshot.json"));
    }

    #[test]
    fn test_config_mode_detection() {
        let args = Args::parse_from(["matchsnap", "--config", "https://api.example.com"]);
        assert!(is_config_mode(&args));

        let args = Args::parse_from(["matchsnap", "--list-config"]);
        assert!(is_config_mode(&args));

        let args = Args::parse_from(["matchsnap"]);
        assert!(!is_config_mode(&args));
    }
}
