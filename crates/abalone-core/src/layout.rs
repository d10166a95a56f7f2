//! Conversion between hex cells and screen pixels.
//!
//! Uses pointy-top orientation: rows of cells are horizontal and each row is
//! shifted half a cell relative to the one above.

use crate::hex::HexCoord;
use serde::{Deserialize, Serialize};

/// Pixel geometry of a rendered board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexLayout {
    /// Distance from a cell centre to a corner
    pub size: f64,
    /// Pixel position of the centre cell (0, 0)
    pub origin_x: f64,
    pub origin_y: f64,
}

impl HexLayout {
    pub fn new(size: f64, origin_x: f64, origin_y: f64) -> Self {
        Self {
            size,
            origin_x,
            origin_y,
        }
    }

    /// Pixel centre of a cell
    pub fn hex_to_pixel(&self, hex: HexCoord) -> (f64, f64) {
        let x = self.size * 3.0_f64.sqrt() * (hex.q as f64 + hex.r as f64 / 2.0);
        let y = self.size * 3.0 / 2.0 * hex.r as f64;
        (x + self.origin_x, y + self.origin_y)
    }

    /// Cell containing a pixel. The result may be off the board.
    pub fn pixel_to_hex(&self, x: f64, y: f64) -> HexCoord {
        let x = x - self.origin_x;
        let y = y - self.origin_y;

        let q = (3.0_f64.sqrt() / 3.0 * x - 1.0 / 3.0 * y) / self.size;
        let r = (2.0 / 3.0 * y) / self.size;
        axial_round(q, r)
    }
}

/// Round fractional axial coordinates to nearest hex
fn axial_round(q: f64, r: f64) -> HexCoord {
    let s = -q - r;

    let mut rq = q.round();
    let mut rr = r.round();
    let rs = s.round();

    let q_diff = (rq - q).abs();
    let r_diff = (rr - r).abs();
    let s_diff = (rs - s).abs();

    if q_diff > r_diff && q_diff > s_diff {
        rq = -rr - rs;
    } else if r_diff > s_diff {
        rr = -rq - rs;
    }

    HexCoord::new(rq as i32, rr as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_maps_to_origin() {
        let layout = HexLayout::new(30.0, 300.0, 250.0);
        assert_eq!(layout.hex_to_pixel(HexCoord::new(0, 0)), (300.0, 250.0));
        assert_eq!(layout.pixel_to_hex(300.0, 250.0), HexCoord::new(0, 0));
    }

    #[test]
    fn test_every_cell_centre_maps_back() {
        let layout = HexLayout::new(30.0, 300.0, 250.0);
        for hex in HexCoord::all_on_board() {
            let (x, y) = layout.hex_to_pixel(hex);
            assert_eq!(layout.pixel_to_hex(x, y), hex);
        }
    }

    #[test]
    fn test_points_near_centre_round_to_cell() {
        let layout = HexLayout::new(30.0, 0.0, 0.0);
        let hex = HexCoord::new(2, -1);
        let (x, y) = layout.hex_to_pixel(hex);
        assert_eq!(layout.pixel_to_hex(x + 10.0, y - 8.0), hex);
        assert_eq!(layout.pixel_to_hex(x - 12.0, y + 5.0), hex);
    }

    #[test]
    fn test_far_pixel_is_off_board() {
        let layout = HexLayout::new(30.0, 0.0, 0.0);
        assert!(!layout.pixel_to_hex(1000.0, 0.0).is_on_board());
    }
}
