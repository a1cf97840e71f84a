use core::fmt::Write;
use demineur_core::{Cell, Clock, Outcome, Session, format_clock};

/// Character shown for a cell. Wrong flags are only told apart once the board is opened at the end.
pub(crate) fn glyph(cell: Cell) -> char {
    match (cell.is_revealed(), cell.is_flagged(), cell.is_mine()) {
        (false, true, _) => 'F',
        (false, false, _) => '#',
        (true, true, true) => 'F',
        (true, true, false) => 'X',
        (true, false, true) => '*',
        (true, false, false) => match cell.adjacent_mines() {
            0 => '.',
            count => char::from_digit(count.into(), 10).unwrap_or('?'),
        },
    }
}

/// Board with a column ruler on top and row numbers on the left.
pub(crate) fn board<C: Clock>(session: &Session<C>) -> String {
    let grid = session.grid();
    let (width, height) = grid.size();
    let mut out = String::new();

    out.push_str("    ");
    for x in 0..width {
        out.push(char::from(b'0' + x % 10));
    }
    out.push('\n');

    for y in 0..height {
        // writing into a String cannot fail
        let _ = write!(out, "{y:>3} ");
        for x in 0..width {
            out.push(glyph(grid.cell_at((x, y))));
        }
        out.push('\n');
    }
    out
}

pub(crate) fn status<C: Clock>(label: &str, session: &Session<C>) -> String {
    let state = match session.outcome() {
        Outcome::Running => "playing",
        Outcome::Won => "won",
        Outcome::Lost => "lost",
    };
    format!(
        "{} | mines left: {} | {} | {}",
        label,
        session.mines_left(),
        format_clock(session.elapsed()),
        state
    )
}
