use std::path::PathBuf;

use clap::Parser;
use termfocus_core::constants::DEFAULT_PORT;

/// Collects terminal session events over HTTP and shows which sessions have
/// news.
#[derive(Parser, Debug)]
#[command(name = "termfocus", version)]
pub struct Args {
    /// HTTP port to listen on (loopback only)
    #[arg(short, long, env = "TERMFOCUS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Show an interactive session list in this terminal instead of logging it
    #[arg(long)]
    pub tui: bool,

    /// Directory for log files in tui mode
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["termfocus"]).unwrap();
        assert_eq!(args.port, 9876);
        assert!(!args.tui);
        assert_eq!(args.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_port_flag() {
        let args = Args::try_parse_from(["termfocus", "-p", "7000", "--tui"]).unwrap();
        assert_eq!(args.port, 7000);
        assert!(args.tui);
        assert!(Args::try_parse_from(["termfocus", "--port", "not-a-port"]).is_err());
    }
}
