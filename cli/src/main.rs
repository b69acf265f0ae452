mod command;
mod console;
mod transport;

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};
use clap::Parser;
use employee_core::{
    Dialogs, EmployeeApp, EmployeeClient, PageView, SubmitOutcome, Transport, DEFAULT_BASE_URL,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::command::{Command, HELP};
use crate::console::Console;
use crate::transport::UreqTransport;

#[derive(Parser, Debug)]
#[command(name = "employee-cli", version, about = "Manage employee records from the terminal")]
struct Cli {
    /// Collection URL of the employee service.
    #[arg(long, env = "EMPLOYEE_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Log filter; logs go to stderr.
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log)?;
    info!(base_url = %cli.base_url, "starting");

    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut app = EmployeeApp::new(
        EmployeeClient::new(&cli.base_url),
        UreqTransport::new(),
        console,
    );
    app.load();
    run(&mut app);
    Ok(())
}

fn init_tracing(filter: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("installing tracing subscriber: {e}"))
}

/// Render, prompt, act, until `quit` or end of input.
fn run<T, R, W>(app: &mut EmployeeApp<T, Console<R, W>>)
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    let mut notice: Option<String> = None;
    loop {
        let page = PageView::of(app).render();
        let notice_text = notice.take().map(|n| format!("{n}\n")).unwrap_or_default();
        app.dialogs_mut().print(&format!("\n{page}\n{notice_text}> "));

        let Some(line) = app.dialogs_mut().read_line() else {
            break;
        };
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => notice = dispatch(app, command),
            Err(err) => notice = Some(err.to_string()),
        }
    }
}

/// Apply one command. Returns a line to show under the page, if any.
fn dispatch<T: Transport, D: Dialogs>(
    app: &mut EmployeeApp<T, D>,
    command: Command,
) -> Option<String> {
    match command {
        Command::Set(field, value) => app.update_field(field, &value),
        Command::Submit => {
            if let SubmitOutcome::Blocked(err) = app.submit() {
                return Some(format!("Please fill out the form: {err}"));
            }
        }
        Command::Edit(id) => match app.find(id).cloned() {
            Some(employee) => app.begin_edit(&employee),
            None => return Some(format!("No employee with id {id} in the list.")),
        },
        Command::Cancel => app.cancel_edit(),
        Command::Delete(id) => {
            app.delete(id);
        }
        Command::Refresh => app.load(),
        Command::Help => return Some(HELP.trim_end().to_string()),
        Command::Quit => {}
    }
    None
}
