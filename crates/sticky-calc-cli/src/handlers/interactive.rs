//! Interactive command handler: raw-mode terminal calculator

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyEvent};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, queue};
use sticky_calc::driver::{CalculatorDriver, EngineDriver};
use sticky_calc::keys::terminal as keys;
use tracing::{debug, trace};

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::render_lcd;

/// What the session wants after a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Redraw with the given line
    Redraw(String),
    /// Key was not a calculator key
    Ignore,
    /// Leave the session
    Quit,
}

/// Terminal-independent session state
#[derive(Debug)]
pub struct Session {
    driver: EngineDriver,
    use_color: bool,
}

impl Session {
    /// Creates a session from the CLI configuration
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            driver: EngineDriver::with_display(config.display.clone()),
            use_color: config.color.should_color(),
        }
    }

    /// Returns the current calculator line
    #[must_use]
    pub fn line(&self) -> String {
        render_lcd(
            &self.driver.display(),
            self.driver.pending_operator(),
            self.use_color,
        )
    }

    /// Handles one key event
    pub fn handle(&mut self, event: KeyEvent) -> SessionAction {
        if keys::is_quit(event) {
            return SessionAction::Quit;
        }
        match keys::translate(event) {
            Some(key) => {
                self.driver.press(key);
                SessionAction::Redraw(self.line())
            }
            None => {
                trace!(?event, "ignored key");
                SessionAction::Ignore
            }
        }
    }
}

/// Restores cooked mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn draw(out: &mut impl Write, line: &str) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine)
    )?;
    write!(out, "{line}")?;
    out.flush()
}

/// Runs the interactive calculator until `q` or Ctrl+C
pub fn execute_interactive(config: &CliConfig) -> CliResult<()> {
    let mut session = Session::new(config);
    let mut stdout = io::stdout();

    if !config.verbosity.is_quiet() {
        println!("digits . + - * / = Enter | % percent | _ or Alt+- sign | c/Esc clear | q quit");
    }

    let guard = RawModeGuard::enable()?;
    debug!("raw mode enabled");
    draw(&mut stdout, &session.line())?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match session.handle(key) {
            SessionAction::Redraw(line) => draw(&mut stdout, &line)?,
            SessionAction::Ignore => {}
            SessionAction::Quit => break,
        }
    }

    drop(guard);
    println!();
    debug!("raw mode disabled");
    Ok(())
}
