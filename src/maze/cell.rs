use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// State of a single grid cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Impassable cell. Every cell starts out as a wall before generation.
    #[default]
    Wall,
    /// A carved, passable cell that is not part of the current route.
    Blank,
    /// A passable cell on the route found by the last successful solve.
    Path,
}

/// Which marker a rendered cell shows. Start and target markers take precedence
/// over the underlying cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Start,
    Target,
    Cell(CellState),
}

impl Glyph {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: usize = 2;

    /// Plain-text symbol for this glyph.
    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Start => "S ",
            Glyph::Target => "G ",
            Glyph::Cell(CellState::Wall) => "##",
            Glyph::Cell(CellState::Blank) => "  ",
            Glyph::Cell(CellState::Path) => "**",
        }
    }

    /// Symbol with terminal colours applied.
    pub fn styled(&self) -> StyledContent<&'static str> {
        let symbol = self.symbol();
        match self {
            Glyph::Start => symbol.with(Color::Green),
            Glyph::Target => symbol.with(Color::Red),
            Glyph::Cell(CellState::Wall) => symbol.with(Color::DarkGrey),
            Glyph::Cell(CellState::Blank) => symbol.with(Color::Reset),
            Glyph::Cell(CellState::Path) => symbol.with(Color::Yellow),
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                symbol.width(),
                Glyph::CELL_WIDTH,
                "Each cell must occupy exactly two character widths."
            );
        }

        f.write_str(symbol)
    }
}
