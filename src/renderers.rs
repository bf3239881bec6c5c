use crossterm::style::Stylize;
use std::io::Write;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::grid::SquareGrid;

/// Everything a renderer needs for one frame of the maze view.
#[derive(Debug, Copy, Clone)]
pub struct Frame<'a> {
    pub grid: &'a SquareGrid,
    pub start: GridCoordinate,
    pub end: GridCoordinate,
    pub player: Option<GridCoordinate>,
    pub steps: usize,
}

/// Render collaborator contract: the game loop hands over a frame after every state
/// change and rendering has no effect on game state.
pub trait Renderer {
    fn frame(&mut self, frame: &Frame) -> Result<()>;
}

/// Colour strategy, decided once at startup (tty capability or `--no-colour`) and
/// never re-checked per line.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum ColourMode {
    Plain,
    Coloured,
}

/// Writes frames to a terminal-like sink.
pub struct TerminalRenderer<W: Write> {
    out: W,
    colour: ColourMode,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, colour: ColourMode) -> TerminalRenderer<W> {
        TerminalRenderer { out, colour }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn frame(&mut self, frame: &Frame) -> Result<()> {
        // Raw terminal mode does not translate LF to CRLF, so emit the CR explicitly.
        for line in render_lines(frame, self.colour) {
            write!(self.out, "{}\r\n", line)?;
        }
        write!(self.out, "Steps: {}\r\n\r\n", frame.steps)?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
enum Glyph {
    Player,
    Start,
    End,
    Boundary,
    Wall,
    Passage,
}

/// Each cell as one glyph plus a trailing space for readability, trailing
/// whitespace stripped per line. The player marker wins over start/end, which win
/// over the wall/passage states; the outer ring always shows as boundary.
pub fn render_lines(frame: &Frame, colour: ColourMode) -> Vec<String> {
    let grid = frame.grid;
    let dim = grid.dimension();
    let mut lines = Vec::with_capacity(dim);

    for row in 0..dim {
        let mut line = String::new();
        for col in 0..dim {
            let coord = GridCoordinate::new(row, col);
            line.push_str(&paint(glyph_at(frame, coord), colour));
            line.push(' ');
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

/// Plain single-string rendering, used by tests and anywhere a frame is wanted
/// without a sink.
pub fn render_to_string(frame: &Frame, colour: ColourMode) -> String {
    let mut text = render_lines(frame, colour).join("\n");
    text.push_str(&format!("\nSteps: {}\n", frame.steps));
    text
}

fn glyph_at(frame: &Frame, coord: GridCoordinate) -> Glyph {
    if frame.player == Some(coord) {
        Glyph::Player
    } else if coord == frame.start {
        Glyph::Start
    } else if coord == frame.end {
        Glyph::End
    } else if frame.grid.is_boundary(&coord) {
        Glyph::Boundary
    } else if frame.grid.is_passage(coord) {
        Glyph::Passage
    } else {
        Glyph::Wall
    }
}

fn paint(glyph: Glyph, colour: ColourMode) -> String {
    if colour == ColourMode::Plain {
        let plain = match glyph {
            Glyph::Player => "P",
            Glyph::Start => "S",
            Glyph::End => "E",
            Glyph::Boundary => "#",
            Glyph::Wall => "█",
            Glyph::Passage => " ",
        };
        return plain.to_string();
    }
    match glyph {
        Glyph::Player => "P".magenta().to_string(),
        Glyph::Start => "S".green().to_string(),
        Glyph::End => "E".yellow().to_string(),
        Glyph::Boundary => "#".cyan().to_string(),
        Glyph::Wall => "█".red().to_string(),
        Glyph::Passage => " ".to_string(),
    }
}
