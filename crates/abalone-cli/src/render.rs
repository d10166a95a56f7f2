//! ASCII rendering of the board.

use abalone_core::{Board, Color, HexCoord, BOARD_RADIUS};

const FRAME: &str = "  -------------------------";

/// Draw the board row by row, top row first, followed by the scores.
///
/// Each row is indented by its distance from the middle row so the cells
/// line up as a hexagon.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(FRAME);
    out.push('\n');

    for r in -BOARD_RADIUS..=BOARD_RADIUS {
        let mut line = " ".repeat(r.unsigned_abs() as usize);
        let min_q = (-BOARD_RADIUS).max(-BOARD_RADIUS - r);
        let max_q = BOARD_RADIUS.min(BOARD_RADIUS - r);

        for q in min_q..=max_q {
            let cell = match board.occupant_at(HexCoord::new(q, r)) {
                Some(color) => color.symbol(),
                None => '.',
            };
            line.push(' ');
            line.push(cell);
            line.push(' ');
        }

        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str(FRAME);
    out.push('\n');
    out.push_str(&format!(
        "  Ejected - Black: {}  White: {}\n",
        board.ejected_count(Color::Black),
        board.ejected_count(Color::White)
    ));
    out
}
