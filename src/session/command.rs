// Line-oriented command vocabulary.
//
// A line is split on whitespace; the first token selects the command and the
// rest are its arguments. Colours stay as raw text so the grid reports
// invalid ones with the same error it uses everywhere else.

use crate::core::{EditorError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `I M N`: new image, `M` columns by `N` rows.
    Create { width: i64, height: i64 },
    Clear,
    Pixel { x: i64, y: i64, color: String },
    Vertical { x: i64, y1: i64, y2: i64, color: String },
    Horizontal { x1: i64, x2: i64, y: i64, color: String },
    Fill { x: i64, y: i64, color: String },
    Rect { x1: i64, y1: i64, x2: i64, y2: i64, color: String },
    Show,
    Help,
    Exit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else { return Ok(None) };
        let args: Vec<&str> = tokens.collect();

        let cmd = match name {
            "I" => {
                let [m, n] = arity::<2>(name, &args)?;
                Command::Create { width: int(m)?, height: int(n)? }
            }
            "C" => {
                arity::<0>(name, &args)?;
                Command::Clear
            }
            "L" => {
                let [x, y, c] = arity::<3>(name, &args)?;
                Command::Pixel { x: int(x)?, y: int(y)?, color: c.to_string() }
            }
            "V" => {
                let [x, y1, y2, c] = arity::<4>(name, &args)?;
                Command::Vertical { x: int(x)?, y1: int(y1)?, y2: int(y2)?, color: c.to_string() }
            }
            "H" => {
                let [x1, x2, y, c] = arity::<4>(name, &args)?;
                Command::Horizontal { x1: int(x1)?, x2: int(x2)?, y: int(y)?, color: c.to_string() }
            }
            "F" => {
                let [x, y, c] = arity::<3>(name, &args)?;
                Command::Fill { x: int(x)?, y: int(y)?, color: c.to_string() }
            }
            "Q" => {
                let [x1, y1, x2, y2, c] = arity::<5>(name, &args)?;
                Command::Rect { x1: int(x1)?, y1: int(y1)?, x2: int(x2)?, y2: int(y2)?, color: c.to_string() }
            }
            "S" => {
                arity::<0>(name, &args)?;
                Command::Show
            }
            "?" => Command::Help,
            "X" => Command::Exit,
            other => return Err(EditorError::UnrecognizedCommand(other.to_string())),
        };
        Ok(Some(cmd))
    }

    /// Whether the command needs an existing image.
    pub fn needs_grid(&self) -> bool {
        !matches!(self, Command::Create { .. } | Command::Help | Command::Exit)
    }
}

fn arity<'a, const N: usize>(name: &str, args: &[&'a str]) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| {
        EditorError::InvalidArgument(format!("{} takes {} argument(s), got {}", name, N, args.len()))
    })
}

fn int(tok: &str) -> Result<i64> {
    tok.parse()
        .map_err(|_| EditorError::InvalidArgument(format!("expected an integer, got {:?}", tok)))
}

pub const HELP: &str = "\
Supported commands are:
I M N to create a new M x N image with all pixels coloured white (O).
C to clear the table.
L X Y C to colour the pixel in position (X,Y) with colour C.
V X Y1 Y2 C to draw a vertical line of colour C in column X between rows Y1 and Y2.
H X1 X2 Y C to draw a horizontal segment of colour C in row Y between columns X1 and X2.
F X Y C to fill the region R with the colour C.
Q X1 Y1 X2 Y2 C to fill the rectangle between (X1,Y1) and (X2,Y2) with colour C.
S to show the current image.
? to show this help.
X to terminate the session.
Coordinates start at 0.";
