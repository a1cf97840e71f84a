/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and covered-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// `ndarray` index of a cell, `[x, y]`.
pub(crate) fn ix((x, y): Coord2) -> [usize; 2] {
    [x.into(), y.into()]
}

/// Number of cells in a `width x height` grid. Cannot overflow since both axes are `u8`.
pub const fn area((width, height): Coord2) -> CellCount {
    width as CellCount * height as CellCount
}

/// Cells of the 3x3 window around `center`, clamped to a grid of `size` and without the center itself.
///
/// Rows span `max(0, x - 1)..=min(width - 1, x + 1)`, same for columns, so edges never wrap around. Yields
/// column-major like [`Grid::iter_coords`](crate::Grid::iter_coords). `size` must be non-empty.
pub(crate) fn window(center: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> + use<> {
    let (x, y) = center;
    let (width, height) = size;
    let xs = x.saturating_sub(1)..=x.saturating_add(1).min(width - 1);
    let ys = y.saturating_sub(1)..=y.saturating_add(1).min(height - 1);
    xs.flat_map(move |nx| ys.clone().map(move |ny| (nx, ny)))
        .filter(move |&pos| pos != center)
}
