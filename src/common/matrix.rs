use qrcode::{EcLevel, QrCode};

use super::error::{QRError, QRResult};

/// Side length of the smallest normal QR symbol (version 1).
pub const MIN_SYMBOL_WIDTH: usize = 21;

/// Side length of a finder pattern, in modules.
pub const FINDER_WIDTH: usize = 7;

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ECLevel {
    L,
    M,
    Q,
    #[default]
    H,
}

impl From<ECLevel> for EcLevel {
    fn from(ecl: ECLevel) -> Self {
        match ecl {
            ECLevel::L => EcLevel::L,
            ECLevel::M => EcLevel::M,
            ECLevel::Q => EcLevel::Q,
            ECLevel::H => EcLevel::H,
        }
    }
}

// Module matrix
//------------------------------------------------------------------------------

/// Square grid of modules including the quiet zone border. `true` is dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    grid: Vec<bool>,
    w: usize,
    qz: usize,
}

impl ModuleMatrix {
    /// Encodes `text` at the smallest version that fits and surrounds it with a
    /// quiet zone `quiet_zone` modules wide. Blank text is rejected.
    pub fn encode(text: &str, ecl: ECLevel, quiet_zone: usize) -> QRResult<Self> {
        if text.trim().is_empty() {
            return Err(QRError::EmptyData);
        }

        let code = QrCode::with_error_correction_level(text.as_bytes(), ecl.into())?;
        let sym_w = code.width();
        let w = sym_w + 2 * quiet_zone;
        log::debug!("Encoded {} bytes into {sym_w}x{sym_w} symbol ({ecl:?})", text.len());

        let mut grid = vec![false; w * w];
        for (i, clr) in code.to_colors().into_iter().enumerate() {
            let (r, c) = (i / sym_w + quiet_zone, i % sym_w + quiet_zone);
            grid[r * w + c] = clr == qrcode::Color::Dark;
        }

        Ok(Self { grid, w, qz: quiet_zone })
    }

    /// Builds a matrix from caller-supplied rows, which must already include the
    /// quiet zone border.
    pub fn from_rows(rows: &[Vec<bool>], quiet_zone: usize) -> QRResult<Self> {
        let w = rows.len();
        if rows.iter().any(|r| r.len() != w) {
            return Err(QRError::InvalidMatrix("matrix is not square".into()));
        }
        if w < MIN_SYMBOL_WIDTH + 2 * quiet_zone {
            return Err(QRError::InvalidMatrix(format!(
                "width {w} is below {MIN_SYMBOL_WIDTH} plus a {quiet_zone} module border"
            )));
        }

        Ok(Self { grid: rows.concat(), w, qz: quiet_zone })
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn quiet_zone(&self) -> usize {
        self.qz
    }

    pub fn symbol_width(&self) -> usize {
        self.w - 2 * self.qz
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&&m| m).count()
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be less than width");
        debug_assert!(-w <= c && c < w, "column should be less than width");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    /// Negative coordinates wrap from the far edge.
    pub fn get(&self, r: i16, c: i16) -> bool {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.grid.chunks_exact(self.w)
    }

    /// Top-left module of each finder pattern as `(x, y)`: top-left, top-right,
    /// bottom-left.
    pub fn finder_origins(&self) -> [(usize, usize); 3] {
        let (qz, far) = (self.qz, self.w - self.qz - FINDER_WIDTH);
        [(qz, qz), (far, qz), (qz, far)]
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.w * (self.w + 1) + 1);
        res.push('\n');
        for row in self.rows() {
            res.extend(row.iter().map(|&m| if m { '#' } else { '.' }));
            res.push('\n');
        }
        res
    }
}
