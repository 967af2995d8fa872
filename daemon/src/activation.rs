use std::{future::Future, process::Stdio, time::Duration};

use termfocus_core::{constants::ACTIVATION_TIMEOUT, events::WindowId};
use tokio::{process::Command, time::timeout};

use crate::prelude::*;

/// Brings the OS window behind a session to the foreground.
///
/// Best effort: implementations swallow every failure, the caller only waits
/// for the attempt to finish.
pub trait WindowActivator {
    fn activate(&self, window_id: &WindowId) -> impl Future<Output = ()> + Send;
}

/// Focuses a Terminal.app window by id through `osascript`.
#[derive(Debug, Clone)]
pub struct OsaScriptActivator {
    program: String,
    // replaces `-e <script>` when set
    args: Option<Vec<String>>,
    timeout: Duration,
}

impl Default for OsaScriptActivator {
    fn default() -> Self {
        Self {
            program: "osascript".to_string(),
            args: None,
            timeout: ACTIVATION_TIMEOUT,
        }
    }
}

impl OsaScriptActivator {
    #[cfg(test)]
    fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    #[cfg(test)]
    fn with_args(mut self, args: &[&str]) -> Self {
        self.args = Some(args.iter().map(|arg| arg.to_string()).collect());
        self
    }

    #[cfg(test)]
    fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn run(&self, window_id: &WindowId) -> Result<()> {
        let args = match &self.args {
            Some(args) => args.clone(),
            None => vec!["-e".to_string(), focus_script(window_id)],
        };
        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        // dropping the wait future on timeout drops the child, which kills it
        let output = timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| Error::ActivationTimeout(self.timeout))??;

        if !output.status.success() {
            return Err(Error::ActivationFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl WindowActivator for OsaScriptActivator {
    #[instrument(skip(self), fields(program = %self.program))]
    async fn activate(&self, window_id: &WindowId) {
        match self.run(window_id).await {
            Ok(()) => debug!("Window activated"),
            Err(e) => warn!("Window activation failed: {e}"),
        }
    }
}

/// AppleScript that raises the Terminal window with the given id.
///
/// `WindowId` is digits only, which is what makes the interpolation safe.
pub fn focus_script(window_id: &WindowId) -> String {
    format!(
        r#"
        tell application "Terminal"
            activate
            set targetWindow to missing value
            repeat with w in windows
                if id of w is {window_id} then
                    set targetWindow to w
                    exit repeat
                end if
            end repeat
            if targetWindow is not missing value then
                set index of targetWindow to 1
            end if
        end tell
    "#
    )
}
