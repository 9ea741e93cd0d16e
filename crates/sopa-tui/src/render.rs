use crate::theme::Theme;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use sopa_core::{letter_positions, Grid, PlacementSet, Position, Solution};
use std::collections::HashSet;
use std::io::{self, Write};

/// Per-call rendering switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub highlight: bool,
}

/// Print the grid as space-separated rows surrounded by blank lines.
///
/// With highlighting on, cells covered by `placements` use the theme's
/// highlight color.
pub fn render_grid<W: Write>(
    out: &mut W,
    grid: &Grid,
    placements: Option<&PlacementSet>,
    options: RenderOptions,
    theme: &Theme,
) -> io::Result<()> {
    let highlighted: HashSet<Position> = match placements {
        Some(placements) if options.highlight => placements
            .iter()
            .flat_map(letter_positions)
            .map(|(pos, _)| pos)
            .collect(),
        _ => HashSet::new(),
    };

    writeln!(out)?;
    for (row, letters) in grid.rows().iter().enumerate() {
        for (col, &letter) in letters.iter().enumerate() {
            if col > 0 {
                write!(out, " ")?;
            }
            if highlighted.contains(&Position::new(row, col)) {
                queue!(
                    out,
                    SetForegroundColor(theme.highlight),
                    Print(letter),
                    ResetColor
                )?;
            } else {
                write!(out, "{letter}")?;
            }
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    out.flush()
}

/// Print found placements and every missing word
pub fn render_solution_report<W: Write>(
    out: &mut W,
    solution: &Solution,
    theme: &Theme,
) -> io::Result<()> {
    for (word, placement) in solution.results() {
        match placement {
            Some(placement) => render_line(out, theme.info, &format!("Found {placement}"))?,
            None => render_line(out, theme.error, &format!("Word not found: {word}"))?,
        }
    }
    Ok(())
}

pub fn render_error<W: Write>(out: &mut W, theme: &Theme, msg: &str) -> io::Result<()> {
    render_line(out, theme.error, msg)
}

pub fn render_message<W: Write>(out: &mut W, theme: &Theme, msg: &str) -> io::Result<()> {
    render_line(out, theme.success, msg)
}

fn render_line<W: Write>(out: &mut W, color: Color, msg: &str) -> io::Result<()> {
    queue!(out, SetForegroundColor(color), Print(msg), ResetColor, Print("\n"))?;
    out.flush()
}
