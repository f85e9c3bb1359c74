use image::RgbImage;
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use crate::common::{
    color::{RgbColor, BLACK},
    matrix::{ModuleMatrix, FINDER_WIDTH},
};

/// Concentric square in module units: `(x, y, side, color)`.
pub type FinderSquare = (usize, usize, usize, RgbColor);

/// The dark 7x7, light 5x5, dark 3x3 squares of all three finder patterns, in
/// painting order.
pub fn finder_squares(matrix: &ModuleMatrix, background: RgbColor) -> Vec<FinderSquare> {
    matrix
        .finder_origins()
        .into_iter()
        .flat_map(|(x, y)| {
            [
                (x, y, FINDER_WIDTH, BLACK),
                (x + 1, y + 1, FINDER_WIDTH - 2, background),
                (x + 2, y + 2, FINDER_WIDTH - 4, BLACK),
            ]
        })
        .collect()
}

/// Overdraws the finder patterns with pure dark/light/dark squares, whatever the
/// fill strategy painted there.
pub fn reinforce_finders(
    canvas: &mut RgbImage,
    matrix: &ModuleMatrix,
    module_px: u32,
    background: RgbColor,
) {
    for (x, y, side, clr) in finder_squares(matrix, background) {
        let p = module_px as usize;
        let rect = Rect::at((x * p) as i32, (y * p) as i32)
            .of_size((side * p) as u32, (side * p) as u32);
        draw_filled_rect_mut(canvas, rect, clr);
    }
}

#[cfg(test)]
mod finder_tests {
    use image::Rgb;

    use super::{finder_squares, reinforce_finders};
    use crate::builder::{FillMode, StyleBuilder};
    use crate::common::matrix::{ECLevel, ModuleMatrix};
    use crate::render::rasterize;

    #[test]
    fn test_squares_layout() {
        let m = ModuleMatrix::from_rows(&vec![vec![false; 21]; 21], 0).unwrap();
        let squares = finder_squares(&m, Rgb([1, 2, 3]));
        assert_eq!(squares.len(), 9);
        assert_eq!(squares[0], (0, 0, 7, Rgb([0, 0, 0])));
        assert_eq!(squares[1], (1, 1, 5, Rgb([1, 2, 3])));
        assert_eq!(squares[2], (2, 2, 3, Rgb([0, 0, 0])));
        assert_eq!(squares[3].0, 14);
        assert_eq!(squares[6].1, 14);
    }

    #[test]
    fn test_reinforce_blank_canvas() {
        let m = ModuleMatrix::from_rows(&vec![vec![false; 25]; 25], 2).unwrap();
        let bg = Rgb([200, 220, 240]);
        let mut canvas = image::RgbImage::from_pixel(50, 50, bg);
        reinforce_finders(&mut canvas, &m, 2, bg);

        // Top-left finder starts at module (2, 2) -> pixel (4, 4)
        assert_eq!(*canvas.get_pixel(3, 3), bg);
        assert_eq!(*canvas.get_pixel(4, 4), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(6, 6), bg);
        assert_eq!(*canvas.get_pixel(8, 8), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(9, 9), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(14, 14), bg);
        assert_eq!(*canvas.get_pixel(17, 17), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(18, 18), bg);
        // Bottom-left finder ends on the last symbol row
        assert_eq!(*canvas.get_pixel(4, 45), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(4, 46), bg);
    }

    #[test]
    fn test_reinforce_is_idempotent() {
        let m = ModuleMatrix::encode("https://example.com", ECLevel::H, 4).unwrap();
        let params = StyleBuilder::new()
            .primary("#4B1AA3")
            .secondary("#F77618")
            .fill(FillMode::TwoTone)
            .build()
            .unwrap();
        let mut once = rasterize(&m, &params, 5);
        reinforce_finders(&mut once, &m, 5, params.background);
        let mut twice = once.clone();
        reinforce_finders(&mut twice, &m, 5, params.background);
        assert_eq!(once, twice);
    }
}
