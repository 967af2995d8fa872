mod activation;
mod actors;
mod args;
mod daemon;
mod error;
mod macros;
mod prelude;
mod presenters;
mod routes;
mod tasks;

use clap::Parser;
use termfocus_core::{refresh, store::SessionStore};
use tokio_util::sync::CancellationToken;
use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    activation::OsaScriptActivator,
    actors::ui::Ui,
    args::Args,
    daemon::TermFocusDaemon,
    prelude::*,
    presenters::{LogPresenter, TerminalPresenter},
    tasks::{input::start_input_listener, shutdown::watch_ctrl_c},
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let _guard = setup_logging(&args)?;
    run(args).await?;
    Ok(())
}

fn setup_logging(args: &Args) -> Result<Option<WorkerGuard>> {
    use tracing_appender::{non_blocking, rolling};
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // the tui owns the terminal, so logs go to a file there
    if args.tui {
        let file_appender = rolling::daily(&args.log_dir, "termfocus.log");
        let (non_blocking, guard) = non_blocking(file_appender);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
            .with(ErrorLayer::default())
            .try_init()?;
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(ErrorLayer::default())
            .try_init()?;
        Ok(None)
    }
}

#[instrument(skip_all, fields(port = args.port, tui = args.tui))]
async fn run(args: Args) -> Result<()> {
    let store = SessionStore::new();
    let (notifier, watcher) = refresh::channel();
    let shutdown = CancellationToken::new();

    // bind before touching the terminal so a busy port fails cleanly
    let daemon = TermFocusDaemon::new(args.port, store.clone(), notifier);
    let listener = daemon.bind().await?;

    let activator = OsaScriptActivator::default();
    let (ui, ui_task, input_task) = if args.tui {
        let (ui, ui_task) = Ui::spawn(store, watcher, TerminalPresenter::init()?, activator);
        let input_task = start_input_listener(ui.clone(), shutdown.clone());
        (ui, ui_task, Some(input_task))
    } else {
        let (ui, ui_task) = Ui::spawn(store, watcher, LogPresenter::default(), activator);
        (ui, ui_task, None)
    };
    tokio::spawn(watch_ctrl_c(shutdown.clone()));

    let served = daemon.listen(listener, shutdown.clone()).await;

    if let Some(input_task) = input_task {
        input_task.abort();
    }
    ui.kill().await?;
    ui_task.await??;
    served
}
