// Interactive session.
//
// The session owns the single current image. Every command runs to
// completion before the next line is read; a failed command is reported and
// the loop carries on. Only `X` or end of input stops it.

use std::io::{BufRead, Write};

use log::{debug, info, warn};

use super::command::{Command, HELP};
use super::config::SessionConfig;
use crate::canvas::Grid;
use crate::core::{EditorError, Result};
use crate::draw;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Output(String),
    Exit,
}

#[derive(Debug, Default)]
pub struct Session {
    config: SessionConfig,
    grid: Option<Grid>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self { config, grid: None }
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    fn grid_mut(&mut self) -> Result<&mut Grid> {
        self.grid.as_mut().ok_or(EditorError::UninitializedGrid)
    }

    pub fn execute(&mut self, cmd: Command) -> Result<Outcome> {
        if cmd.needs_grid() && self.grid.is_none() {
            return Err(EditorError::UninitializedGrid);
        }
        let default_color = self.config.default_color;
        match cmd {
            Command::Create { width, height } => {
                if width > 0 && height > 0 && (width as u128 * height as u128) > self.config.max_cells as u128 {
                    warn!("refusing {}x{} image, limit is {} cells", width, height, self.config.max_cells);
                    return Err(EditorError::InvalidDimensions { height, width });
                }
                self.grid = Some(Grid::create(height, width, default_color)?);
            }
            Command::Clear => self.grid_mut()?.clear(default_color)?,
            Command::Pixel { x, y, color } => self.grid_mut()?.set_cell(x, y, &color)?,
            Command::Vertical { x, y1, y2, color } => {
                draw::draw_vertical_segment(self.grid_mut()?, x, y1, y2, &color)?
            }
            Command::Horizontal { x1, x2, y, color } => {
                draw::draw_horizontal_segment(self.grid_mut()?, x1, x2, y, &color)?
            }
            Command::Fill { x, y, color } => {
                let n = draw::fill_area(self.grid_mut()?, x, y, &color)?;
                debug!("filled {} cells", n);
            }
            Command::Rect { x1, y1, x2, y2, color } => {
                draw::fill_rect(self.grid_mut()?, x1, y1, x2, y2, &color)?;
            }
            Command::Show => {
                let grid = self.grid.as_ref().ok_or(EditorError::UninitializedGrid)?;
                return Ok(Outcome::Output(grid.to_string()));
            }
            Command::Help => return Ok(Outcome::Output(format!("{}\n", HELP))),
            Command::Exit => return Ok(Outcome::Exit),
        }
        Ok(Outcome::Continue)
    }

    /// Parses and runs one line.
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome> {
        match Command::parse(line)? {
            Some(cmd) => {
                debug!("command {:?}", cmd);
                self.execute(cmd)
            }
            None => Ok(Outcome::Continue),
        }
    }

    /// Reads commands from `input` until `X` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        info!("session started");
        write!(output, "{}", self.config.prompt)?;
        output.flush()?;
        for line in input.lines() {
            let line = line?;
            match self.execute_line(&line) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Output(text)) => write!(output, "{}", text)?,
                Ok(Outcome::Exit) => {
                    info!("session terminated by user");
                    return Ok(());
                }
                Err(e) => {
                    debug!("command {:?} failed: {}", line, e);
                    writeln!(output, "\n{}\n", e)?;
                    if self.config.help_on_error {
                        writeln!(output, "{}", HELP)?;
                    }
                }
            }
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;
        }
        info!("end of input");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(config: SessionConfig, script: &str) -> (Session, String) {
        let mut session = Session::new(config);
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    fn quiet() -> SessionConfig {
        SessionConfig { prompt: String::new(), help_on_error: false, ..SessionConfig::default() }
    }

    #[test]
    fn draws_and_shows() {
        let (_, out) = run_script(quiet(), "I 5 6\nL 0 2 A\nV 1 2 5 W\nH 2 3 1 Z\nS\nX\nS\n");
        assert_eq!(out, "OOOOO\nOOZZO\nAWOOO\nOWOOO\nOWOOO\nOWOOO\n");
    }

    #[test]
    fn fill_and_clear() {
        let mut s = Session::new(quiet());
        s.execute_line("I 3 3").unwrap();
        s.execute_line("V 1 0 2 X").unwrap();
        s.execute_line("F 0 0 B").unwrap();
        assert_eq!(s.grid().unwrap().rows(), vec!["BXO", "BXO", "BXO"]);
        s.execute_line("Q 0 0 1 1 R").unwrap();
        assert_eq!(s.grid().unwrap().rows(), vec!["RRO", "RRO", "BXO"]);
        s.execute_line("C").unwrap();
        assert_eq!(s.grid().unwrap().rows(), vec!["OOO", "OOO", "OOO"]);
    }

    #[test]
    fn commands_before_create_fail() {
        let mut s = Session::default();
        for line in ["C", "L 0 0 A", "V 0 0 0 A", "H 0 0 0 A", "F 0 0 A", "Q 0 0 0 0 A", "S"] {
            assert_eq!(s.execute_line(line), Err(EditorError::UninitializedGrid), "{}", line);
        }
        assert!(matches!(s.execute_line("?"), Ok(Outcome::Output(_))));
    }

    #[test]
    fn create_replaces_image() {
        let mut s = Session::default();
        s.execute_line("I 2 2").unwrap();
        s.execute_line("L 0 0 K").unwrap();
        s.execute_line("I 3 1").unwrap();
        assert_eq!(s.grid().unwrap().rows(), vec!["OOO"]);
    }

    #[test]
    fn failed_create_keeps_previous_image() {
        let mut s = Session::default();
        s.execute_line("I 2 2").unwrap();
        assert_eq!(
            s.execute_line("I 0 4"),
            Err(EditorError::InvalidDimensions { height: 4, width: 0 })
        );
        assert_eq!(s.grid().unwrap().rows(), vec!["OO", "OO"]);
    }

    #[test]
    fn max_cells_is_enforced() {
        let mut s = Session::new(SessionConfig { max_cells: 100, ..SessionConfig::default() });
        assert!(s.execute_line("I 10 10").is_ok());
        assert!(matches!(s.execute_line("I 11 10"), Err(EditorError::InvalidDimensions { .. })));
    }

    #[test]
    fn configured_default_color() {
        let mut s = Session::new(SessionConfig { default_color: crate::core::Color::WHITE, ..quiet() });
        s.execute_line("I 1 1").unwrap();
        assert_eq!(s.grid().unwrap().rows(), vec!["O"]);

        let cfg = SessionConfig::from_json(r#"{"default_color": "W"}"#).unwrap();
        let mut s = Session::new(cfg);
        s.execute_line("I 2 1").unwrap();
        s.execute_line("L 0 0 A").unwrap();
        s.execute_line("C").unwrap();
        assert_eq!(s.grid().unwrap().rows(), vec!["WW"]);
    }

    #[test_log::test]
    fn errors_are_reported_and_loop_continues() {
        let (session, out) = run_script(quiet(), "S\nI 2 2\nL 5 0 A\nL 0 0 a\nbogus\nL 1 1 A\nS\n");
        assert!(out.contains("image hasn't been created yet"));
        assert!(out.contains("X value 5 is out of range [0, 2)"));
        assert!(out.contains("color not recognized: \"a\""));
        assert!(out.contains("command not recognized: \"bogus\""));
        assert!(out.ends_with("OO\nOA\n"));
        assert_eq!(session.grid().unwrap().rows(), vec!["OO", "OA"]);
    }

    #[test]
    fn help_follows_errors_when_enabled() {
        let (_, out) = run_script(SessionConfig::default(), "S\nX\n");
        assert!(out.starts_with("> "));
        assert!(out.contains("image hasn't been created yet"));
        assert!(out.contains("Supported commands are:"));

        let (_, out) = run_script(quiet(), "S\n");
        assert!(!out.contains("Supported commands are:"));
    }

    #[test]
    fn exit_stops_reading() {
        let (session, _) = run_script(quiet(), "X\nI 2 2\n");
        assert!(session.grid().is_none());
    }
}
