use std::io::{self, BufRead, Write};

use console::style;
use drill_core::model::{FrontEnd, practice_summary};
use services::{DrillError, DrillService, DrillStep};
use thiserror::Error;
use tokio::runtime::Runtime;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TerminalError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Drill(#[from] DrillError),
}

/// Which front end the user picked at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Window,
    Terminal,
}

/// Ask `Open GUI mode? (y/n): `. Only an exact `y` picks the window.
///
/// # Errors
///
/// Returns `io::Error` if the prompt cannot be written or the answer read.
pub fn prompt_mode(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Mode> {
    write!(out, "Open GUI mode? (y/n): ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    if FrontEnd::Terminal.normalize_input(&answer) == "y" {
        Ok(Mode::Window)
    } else {
        Ok(Mode::Terminal)
    }
}

/// Read-eval loop on a line-based input. Ends on `finish practice` or end of input.
///
/// Returns the number of words practiced.
///
/// # Errors
///
/// Returns `TerminalError::Drill` when a translation lookup fails and
/// `TerminalError::Io` for console failures.
pub fn run(
    runtime: &Runtime,
    service: &DrillService,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<u32, TerminalError> {
    let mut drill = runtime.block_on(service.start(FrontEnd::Terminal))?;
    writeln!(out, "{}", style(drill.prompt()).blue())?;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            tracing::info!("terminal reached end of input");
            let practiced = service.finish(&mut drill);
            writeln!(out, "{}", style(practice_summary(practiced)).yellow())?;
            return Ok(practiced);
        }

        match runtime.block_on(service.answer(&mut drill, &line))? {
            DrillStep::Correct { speed, next, .. } => {
                writeln!(out, "{}", style(format!("correct! {speed}")).green())?;
                writeln!(out, "{}", style(&next).blue())?;
            }
            DrillStep::Wrong => {
                writeln!(out, "{}", style("wrong!").red())?;
            }
            DrillStep::Finished { practiced } => {
                tracing::debug!(practiced, "finish command received");
                writeln!(out, "{}", style(practice_summary(practiced)).yellow())?;
                return Ok(practiced);
            }
        }
    }
}
