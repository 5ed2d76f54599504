#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::core::{
    config::{BOARD_SIZE, TURN_LIMIT},
    Board, Cell, Statistics,
};

use super::{Presenter, Selection};

/// Terminal front end reading commands from `input` and drawing to `output`.
pub struct CliPresenter<R, W> {
    input: R,
    output: W,
}

impl CliPresenter<io::StdinLock<'static>, io::Stdout> {
    /// Presenter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was drawn.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn draw_board(&mut self, board: &Board) -> io::Result<()> {
        let out = &mut self.output;
        writeln!(out)?;
        write!(out, "    ")?;
        for c in 0..BOARD_SIZE as usize {
            write!(out, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(out)?;
        for (r, row) in board.cells().iter().enumerate() {
            write!(out, "  {:2}", r + 1)?;
            for cell in row {
                let ch = match cell {
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                    Cell::Unguessed => '.',
                };
                write!(out, " {}", ch)?;
            }
            writeln!(out)?;
        }
        writeln!(out, "    Legend: X=Hit  o=Miss  .=Unknown")
    }

    fn report(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            log::warn!("failed to write to terminal: {}", e);
        }
    }
}

fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

fn last_column() -> char {
    (b'A' + BOARD_SIZE - 1) as char
}

/// Parse a coordinate such as `B3` into zero-based (row, col).
fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or_else(|| "Empty input".to_string())?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!(
            "Invalid column '{}' - must be a letter A-{}",
            col_ch,
            last_column()
        ));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE as usize {
        return Err(format!(
            "Column '{}' out of bounds - must be A-{}",
            col_ch,
            last_column()
        ));
    }
    let row_str = chars.as_str();
    let row: usize = row_str.parse().map_err(|_| {
        format!(
            "Invalid row '{}' - must be a number 1-{}",
            row_str, BOARD_SIZE
        )
    })?;
    if row == 0 || row > BOARD_SIZE as usize {
        return Err(format!(
            "Row {} out of bounds - must be 1-{}",
            row, BOARD_SIZE
        ));
    }
    Ok((row - 1, col))
}

/// Parse a pixel click written as `@x,y`.
fn parse_pixel(input: &str) -> Result<(u32, u32), String> {
    let body = input.trim_start_matches('@');
    let (x, y) = body
        .split_once(',')
        .ok_or_else(|| format!("Invalid click '{}' - expected @x,y", input))?;
    let x = x
        .trim()
        .parse()
        .map_err(|_| format!("Invalid x '{}'", x.trim()))?;
    let y = y
        .trim()
        .parse()
        .map_err(|_| format!("Invalid y '{}'", y.trim()))?;
    Ok((x, y))
}

/// Parse one line of player input. `Ok(None)` asks to quit.
fn parse_selection(input: &str) -> Result<Option<Selection>, String> {
    match input {
        "q" | "Q" | "quit" | "exit" => Ok(None),
        s if s.starts_with('@') => parse_pixel(s).map(|(x, y)| Some(Selection::Pixel(x, y))),
        s => parse_coord(s).map(|(r, c)| Some(Selection::Cell(r, c))),
    }
}

impl<R: BufRead, W: Write> Presenter for CliPresenter<R, W> {
    fn render_board(&mut self, board: &Board) {
        let res = self.draw_board(board);
        self.report(res);
    }

    fn render_turn(&mut self, turns: u8) {
        let shown = turns.saturating_add(1).min(TURN_LIMIT);
        let res = writeln!(self.output, "Turn: {} of {}", shown, TURN_LIMIT);
        self.report(res);
    }

    fn render_result_message(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let res = writeln!(self.output, "{}", text);
        self.report(res);
    }

    fn render_statistics_summary(&mut self, stats: &Statistics) {
        let res = writeln!(self.output, "{}", stats);
        self.report(res);
    }

    fn next_selection(&mut self) -> Option<Selection> {
        loop {
            let line = match self.read_line("Enter guess (e.g. B3, or @x,y to click, q to quit): ") {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    log::warn!("failed to read guess: {}", e);
                    return None;
                }
            };
            if line.is_empty() {
                continue;
            }
            match parse_selection(&line) {
                Ok(Some(selection)) => {
                    if let Selection::Cell(r, c) = selection {
                        log::debug!("selected {}", coord_to_string(r, c));
                    }
                    return Some(selection);
                }
                Ok(None) => return None,
                Err(msg) => {
                    let res = writeln!(self.output, "{}", msg);
                    self.report(res);
                }
            }
        }
    }

    fn confirm_rematch(&mut self) -> bool {
        loop {
            let line = match self.read_line("Do you want to play again? [y/n]: ") {
                Ok(Some(line)) => line,
                Ok(None) => return false,
                Err(e) => {
                    log::warn!("failed to read answer: {}", e);
                    return false;
                }
            };
            match line.to_ascii_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => {
                    let res = writeln!(self.output, "Please answer y or n.");
                    self.report(res);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_coordinates() {
        assert_eq!(parse_coord("A1"), Ok((0, 0)));
        assert_eq!(parse_coord("e5"), Ok((4, 4)));
        assert_eq!(parse_coord("C2"), Ok((1, 2)));
        assert!(parse_coord("F1").is_err());
        assert!(parse_coord("A0").is_err());
        assert!(parse_coord("A6").is_err());
        assert!(parse_coord("1A").is_err());
        assert!(parse_coord("").is_err());
    }

    #[test]
    fn parses_selections() {
        assert_eq!(parse_selection("B3"), Ok(Some(Selection::Cell(2, 1))));
        assert_eq!(parse_selection("@35, 105"), Ok(Some(Selection::Pixel(35, 105))));
        assert_eq!(parse_selection("q"), Ok(None));
        assert!(parse_selection("@35").is_err());
    }

    #[test]
    fn skips_invalid_input_until_valid() {
        let input = Cursor::new("Z9\n\nb2\n");
        let mut ui = CliPresenter::new(input, Vec::new());
        assert_eq!(ui.next_selection(), Some(Selection::Cell(1, 1)));
        assert_eq!(ui.next_selection(), None);
        let out = String::from_utf8(ui.into_output()).unwrap();
        assert!(out.contains("Invalid column 'Z'"));
    }

    #[test]
    fn rematch_answers() {
        let mut ui = CliPresenter::new(Cursor::new("maybe\nY\nn\n"), Vec::new());
        assert!(ui.confirm_rematch());
        assert!(!ui.confirm_rematch());
        assert!(!ui.confirm_rematch());
    }

    #[test]
    fn draws_board_cells() {
        let mut board = Board::new();
        board.record(0, 1, true).unwrap();
        board.record(4, 0, false).unwrap();
        let mut ui = CliPresenter::new(Cursor::new(""), Vec::new());
        ui.render_board(&board);
        ui.render_turn(2);
        let out = String::from_utf8(ui.into_output()).unwrap();
        assert!(out.contains("   1 . X . . ."));
        assert!(out.contains("   5 o . . . ."));
        assert!(out.contains("Turn: 3 of 10"));
    }
}
