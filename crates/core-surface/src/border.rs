//! Border glyph sets and perimeter drawing.

use crate::Grid;

/// The six glyphs of a rectangular border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderGlyphs {
    pub const PLAIN: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };

    /// Preset lookup by configuration name.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(Self::PLAIN),
            "rounded" => Some(Self::ROUNDED),
            "double" => Some(Self::DOUBLE),
            "ascii" => Some(Self::ASCII),
            _ => None,
        }
    }
}

impl Default for BorderGlyphs {
    fn default() -> Self {
        Self::PLAIN
    }
}

impl Grid {
    /// Paint a border on the grid perimeter: corners first, then edges.
    /// Grids smaller than 2x2 have no room for a border and are left as-is.
    pub fn draw_border(&mut self, glyphs: &BorderGlyphs) {
        let (rows, cols) = (self.rows(), self.cols());
        if rows < 2 || cols < 2 {
            return;
        }
        let bottom = rows - 1;
        let right = cols - 1;

        let mut put = |row: u16, col: u16, ch: char| {
            let mut buf = [0u8; 4];
            self.set_cluster(row, col, ch.encode_utf8(&mut buf), 1);
        };

        put(0, 0, glyphs.top_left);
        put(0, right, glyphs.top_right);
        put(bottom, 0, glyphs.bottom_left);
        put(bottom, right, glyphs.bottom_right);

        for col in 1..right {
            put(0, col, glyphs.horizontal);
            put(bottom, col, glyphs.horizontal);
        }
        for row in 1..bottom {
            put(row, 0, glyphs.vertical);
            put(row, right, glyphs.vertical);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_paints_perimeter() {
        let mut g = Grid::new(3, 4);
        g.draw_border(&BorderGlyphs::PLAIN);
        assert_eq!(g.row_text(0), "┌──┐");
        assert_eq!(g.row_text(1), "│  │");
        assert_eq!(g.row_text(2), "└──┘");
    }

    #[test]
    fn ascii_border() {
        let mut g = Grid::new(2, 2);
        g.draw_border(&BorderGlyphs::ASCII);
        assert_eq!(g.row_text(0), "++");
        assert_eq!(g.row_text(1), "++");
    }

    #[test]
    fn degenerate_grid_is_untouched() {
        let mut g = Grid::new(1, 5);
        g.draw_border(&BorderGlyphs::PLAIN);
        assert_eq!(g.row_text(0), "     ");
    }

    #[test]
    fn named_presets_resolve() {
        assert_eq!(BorderGlyphs::named("rounded"), Some(BorderGlyphs::ROUNDED));
        assert_eq!(BorderGlyphs::named("gothic"), None);
    }
}
