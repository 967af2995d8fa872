use clap::{Parser, Subcommand};
use termfocus_core::{constants::DEFAULT_PORT, events::WindowId, messages::EventRequest};

/// Report terminal session events to a running termfocus daemon.
#[derive(Parser, Debug)]
#[command(name = "termfocus-cli", version)]
pub struct Args {
    /// Port the daemon listens on
    #[arg(short, long, env = "TERMFOCUS_PORT", default_value_t = DEFAULT_PORT, global = true)]
    pub port: u16,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register or update a session
    Notify {
        #[arg(short = 'w', long = "window-id", value_parser = WindowId::parse)]
        window_id: WindowId,
        #[arg(short, long)]
        title: String,
        #[arg(short, long, default_value = "")]
        message: String,
    },
    /// Remove a session
    Terminate {
        #[arg(short = 'w', long = "window-id", value_parser = WindowId::parse)]
        window_id: WindowId,
    },
    /// Print the sessions the daemon is tracking
    List,
}

impl Commands {
    pub fn into_request(self) -> Option<EventRequest> {
        match self {
            Self::Notify {
                window_id,
                title,
                message,
            } => Some(EventRequest::new(window_id, title, message)),
            Self::Terminate { window_id } => Some(EventRequest::terminate(window_id)),
            Self::List => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_notify() {
        let args = Args::try_parse_from([
            "termfocus-cli",
            "notify",
            "-w",
            "12345",
            "--title",
            "build",
            "--message",
            "started",
        ])
        .unwrap();
        assert_eq!(args.port, 9876);
        let req = args.command.into_request().unwrap();
        assert_eq!(req.window_id.as_str(), "12345");
        assert_eq!(req.event_title, "build");
        assert_eq!(req.event_msg, "started");
    }

    #[test]
    fn test_terminate() {
        let args = Args::try_parse_from(["termfocus-cli", "terminate", "--window-id", "7", "-p", "7000"]).unwrap();
        assert_eq!(args.port, 7000);
        let req = args.command.into_request().unwrap();
        assert_eq!(req.event_title, "terminate");
        assert_eq!(req.event_msg, "");
    }

    #[test]
    fn test_window_id_validated_before_sending() {
        assert!(Args::try_parse_from(["termfocus-cli", "terminate", "-w", "abc"]).is_err());
        assert!(Args::try_parse_from(["termfocus-cli", "notify", "-w", "1"]).is_err());
    }

    #[test]
    fn test_list() {
        let args = Args::try_parse_from(["termfocus-cli", "list"]).unwrap();
        assert!(args.command.into_request().is_none());
    }
}
