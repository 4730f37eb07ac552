use tracing::trace;

use crate::grid::Grid;
use crate::rules;

/// Offsets of the 8 neighbors of a cell, row above first.
///
///   (-1,-1) (0,-1) (1,-1)
///   (-1, 0)        (1, 0)
///   (-1, 1) (0, 1) (1, 1)
///
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count the alive neighbors of `(x, y)`.
///
/// Positions past any edge of the grid are dead. They do not wrap around.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut n = 0;

    for (dx, dy) in NEIGHBORS {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };

        if grid.get(nx, ny) == Some(true) {
            n += 1;
        }
    }

    n
}

/// Compute the next generation of `grid`.
///
/// The result is a new grid of the same dimensions. `grid` is only read, so every cell sees the
/// neighbors of the current generation.
pub fn step(grid: &Grid) -> Grid {
    let (w, h) = (grid.width(), grid.height());
    let mut next = Vec::with_capacity(grid.len());

    for y in 0..h {
        for x in 0..w {
            let alive = grid.cells()[x + y * w];
            next.push(rules::next_state(alive, live_neighbors(grid, x, y)));
        }
    }

    trace!(width = w, height = h, "stepped grid");

    grid.with_cells(next)
}

/// Apply [`step`] `n` times. `advance(grid, 0)` is a copy of `grid`.
pub fn advance(grid: &Grid, n: usize) -> Grid {
    let mut current = grid.clone();

    for _ in 0..n {
        current = step(&current);
    }

    current
}

#[cfg(test)]
mod tests {
    use super::advance;
    use super::live_neighbors;
    use super::step;
    use crate::grid::Grid;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn counts_all_eight_neighbors() {
        let g = grid(
            "
            ###
            ###
            ###
            ",
        );

        assert_eq!(live_neighbors(&g, 1, 1), 8);
    }

    #[test]
    fn corner_sees_three_neighbors() {
        let g = grid(
            "
            ###
            ###
            ###
            ",
        );

        assert_eq!(live_neighbors(&g, 0, 0), 3);
        assert_eq!(live_neighbors(&g, 2, 0), 3);
        assert_eq!(live_neighbors(&g, 0, 2), 3);
        assert_eq!(live_neighbors(&g, 2, 2), 3);
        assert_eq!(live_neighbors(&g, 1, 0), 5);
    }

    #[test]
    fn center_is_not_counted() {
        let g = grid(
            "
            ...
            .#.
            ...
            ",
        );

        assert_eq!(live_neighbors(&g, 1, 1), 0);
    }

    #[test]
    fn single_cell_grid() {
        let alive = grid("#");

        assert_eq!(live_neighbors(&alive, 0, 0), 0);
        assert_eq!(step(&alive), grid("."));
    }

    #[test]
    fn underpopulation() {
        let g = grid(
            "
            .....
            .#...
            ...#.
            ...#.
            .....
            ",
        );

        let next = step(&g);

        assert_eq!(next.get(1, 1), Some(false));
        assert_eq!(next.get(3, 2), Some(false));
        assert_eq!(next.get(3, 3), Some(false));
    }

    #[test]
    fn survival() {
        // (2, 1) has 2 neighbors, (2, 2) has 3
        let g = grid(
            "
            .....
            .##..
            ..#..
            ...#.
            .....
            ",
        );

        let next = step(&g);

        assert_eq!(next.get(2, 2), Some(true));
        assert_eq!(next.get(2, 1), Some(true));
    }

    #[test]
    fn overpopulation() {
        let g = grid(
            "
            .....
            .###.
            .##..
            .....
            ",
        );

        assert_eq!(live_neighbors(&g, 2, 1), 4);
        assert_eq!(step(&g).get(2, 1), Some(false));
    }

    #[test]
    fn reproduction() {
        let g = grid(
            "
            #.#
            ...
            .#.
            ",
        );

        assert_eq!(step(&g).get(1, 1), Some(true));

        let g = grid(
            "
            #.#
            ...
            ...
            ",
        );

        assert_eq!(step(&g).get(1, 1), Some(false));
    }

    #[test]
    fn empty_grid_is_fixed() {
        let g = Grid::new(7, 4).unwrap();

        assert_eq!(step(&g), g);
    }

    #[test]
    fn block_is_still() {
        let g = grid(
            "
            ......
            ......
            ..##..
            ..##..
            ......
            ......
            ",
        );

        assert_eq!(step(&g), g);
        assert_eq!(advance(&g, 25), g);
    }

    #[test]
    fn block_in_corner_is_still() {
        let g = grid(
            "
            ##.
            ##.
            ...
            ",
        );

        assert_eq!(step(&g), g);
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = grid(
            "
            .....
            .....
            .###.
            .....
            .....
            ",
        );

        let vertical = grid(
            "
            .....
            ..#..
            ..#..
            ..#..
            .....
            ",
        );

        assert_eq!(step(&horizontal), vertical);
        assert_eq!(step(&vertical), horizontal);
    }

    #[test]
    fn blinker_on_edge_dies_out() {
        // Against the top edge, the vertical phase would need row -1
        let g = grid(
            "
            ###
            ...
            ",
        );

        assert_eq!(step(&g), grid(".#.\n.#."));
        assert_eq!(advance(&g, 2), Grid::new(3, 2).unwrap());
    }

    #[test]
    fn input_is_untouched() {
        let g = grid(
            "
            .#.
            .#.
            .#.
            ",
        );
        let before = g.clone();

        let _ = step(&g);

        assert_eq!(g, before);
    }

    #[test]
    fn advance_zero_is_identity() {
        let g = grid("#.\n##");

        assert_eq!(advance(&g, 0), g);
    }
}
