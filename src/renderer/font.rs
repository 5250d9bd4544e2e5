//! 3x5 bitmap font for debug text

pub const GLYPH_WIDTH: u32 = 3;
pub const GLYPH_HEIGHT: u32 = 5;

/// Rows top to bottom; bit 2 is the leftmost column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub rows: [u8; GLYPH_HEIGHT as usize],
}

impl Glyph {
    /// Lit cells as (column, row)
    pub fn cells(self) -> impl Iterator<Item = (u32, u32)> {
        (0..GLYPH_HEIGHT).flat_map(move |row| {
            let bits = self.rows[row as usize];
            (0..GLYPH_WIDTH)
                .filter(move |col| (bits & (1 << (GLYPH_WIDTH - 1 - col))) != 0)
                .map(move |col| (col, row))
        })
    }
}

const fn g(rows: [u8; 5]) -> Glyph {
    Glyph { rows }
}

pub const SPACE: Glyph = g([0, 0, 0, 0, 0]);
pub const FALLBACK: Glyph = g([0b111, 0b001, 0b011, 0b000, 0b010]);

/// ' ' through '_'
const ASCII_UPPER: [Glyph; 64] = [
    SPACE,
    g([0b010, 0b010, 0b010, 0b000, 0b010]), // !
    g([0b101, 0b101, 0b000, 0b000, 0b000]), // "
    g([0b101, 0b111, 0b101, 0b111, 0b101]), // #
    g([0b111, 0b110, 0b111, 0b011, 0b111]), // $
    g([0b101, 0b001, 0b010, 0b100, 0b101]), // %
    g([0b010, 0b101, 0b010, 0b101, 0b011]), // &
    g([0b010, 0b010, 0b000, 0b000, 0b000]), // '
    g([0b001, 0b010, 0b010, 0b010, 0b001]), // (
    g([0b100, 0b010, 0b010, 0b010, 0b100]), // )
    g([0b000, 0b101, 0b010, 0b101, 0b000]), // *
    g([0b000, 0b010, 0b111, 0b010, 0b000]), // +
    g([0b000, 0b000, 0b000, 0b010, 0b100]), // ,
    g([0b000, 0b000, 0b111, 0b000, 0b000]), // -
    g([0b000, 0b000, 0b000, 0b000, 0b010]), // .
    g([0b001, 0b001, 0b010, 0b100, 0b100]), // /
    g([0b111, 0b101, 0b101, 0b101, 0b111]), // 0
    g([0b010, 0b110, 0b010, 0b010, 0b111]), // 1
    g([0b111, 0b001, 0b111, 0b100, 0b111]), // 2
    g([0b111, 0b001, 0b111, 0b001, 0b111]), // 3
    g([0b101, 0b101, 0b111, 0b001, 0b001]), // 4
    g([0b111, 0b100, 0b111, 0b001, 0b111]), // 5
    g([0b111, 0b100, 0b111, 0b101, 0b111]), // 6
    g([0b111, 0b001, 0b010, 0b010, 0b010]), // 7
    g([0b111, 0b101, 0b111, 0b101, 0b111]), // 8
    g([0b111, 0b101, 0b111, 0b001, 0b111]), // 9
    g([0b000, 0b010, 0b000, 0b010, 0b000]), // :
    g([0b000, 0b010, 0b000, 0b010, 0b100]), // ;
    g([0b001, 0b010, 0b100, 0b010, 0b001]), // <
    g([0b000, 0b111, 0b000, 0b111, 0b000]), // =
    g([0b100, 0b010, 0b001, 0b010, 0b100]), // >
    FALLBACK,                               // ?
    g([0b010, 0b101, 0b111, 0b100, 0b011]), // @
    g([0b010, 0b101, 0b111, 0b101, 0b101]), // A
    g([0b110, 0b101, 0b110, 0b101, 0b110]), // B
    g([0b011, 0b100, 0b100, 0b100, 0b011]), // C
    g([0b110, 0b101, 0b101, 0b101, 0b110]), // D
    g([0b111, 0b100, 0b110, 0b100, 0b111]), // E
    g([0b111, 0b100, 0b110, 0b100, 0b100]), // F
    g([0b011, 0b100, 0b101, 0b101, 0b011]), // G
    g([0b101, 0b101, 0b111, 0b101, 0b101]), // H
    g([0b111, 0b010, 0b010, 0b010, 0b111]), // I
    g([0b001, 0b001, 0b001, 0b101, 0b010]), // J
    g([0b101, 0b101, 0b110, 0b101, 0b101]), // K
    g([0b100, 0b100, 0b100, 0b100, 0b111]), // L
    g([0b101, 0b111, 0b111, 0b101, 0b101]), // M
    g([0b110, 0b101, 0b101, 0b101, 0b101]), // N
    g([0b010, 0b101, 0b101, 0b101, 0b010]), // O
    g([0b110, 0b101, 0b110, 0b100, 0b100]), // P
    g([0b010, 0b101, 0b101, 0b110, 0b011]), // Q
    g([0b110, 0b101, 0b110, 0b101, 0b101]), // R
    g([0b011, 0b100, 0b010, 0b001, 0b110]), // S
    g([0b111, 0b010, 0b010, 0b010, 0b010]), // T
    g([0b101, 0b101, 0b101, 0b101, 0b111]), // U
    g([0b101, 0b101, 0b101, 0b101, 0b010]), // V
    g([0b101, 0b101, 0b111, 0b111, 0b101]), // W
    g([0b101, 0b101, 0b010, 0b101, 0b101]), // X
    g([0b101, 0b101, 0b010, 0b010, 0b010]), // Y
    g([0b111, 0b001, 0b010, 0b100, 0b111]), // Z
    g([0b011, 0b010, 0b010, 0b010, 0b011]), // [
    g([0b100, 0b100, 0b010, 0b001, 0b001]), // \
    g([0b110, 0b010, 0b010, 0b010, 0b110]), // ]
    g([0b010, 0b101, 0b000, 0b000, 0b000]), // ^
    g([0b000, 0b000, 0b000, 0b000, 0b111]), // _
];

/// Glyph for a printable ASCII character. Lowercase letters share the
/// uppercase shapes.
pub fn glyph_for(ch: char) -> Option<Glyph> {
    match ch {
        ' '..='_' => Some(ASCII_UPPER[ch as usize - ' ' as usize]),
        'a'..='z' => glyph_for(ch.to_ascii_uppercase()),
        '`' => Some(g([0b100, 0b010, 0b000, 0b000, 0b000])),
        '{' => Some(g([0b011, 0b010, 0b110, 0b010, 0b011])),
        '|' => Some(g([0b010, 0b010, 0b010, 0b010, 0b010])),
        '}' => Some(g([0b110, 0b010, 0b011, 0b010, 0b110])),
        '~' => Some(g([0b000, 0b011, 0b110, 0b000, 0b000])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_lookup_covers_ascii_printable_range() {
        for code in 0x20u8..=0x7e {
            let ch = code as char;
            assert!(glyph_for(ch).is_some(), "missing glyph for '{ch}'");
        }
    }

    #[test]
    fn test_non_ascii_has_no_glyph() {
        assert!(glyph_for('é').is_none());
        assert!(glyph_for('\u{7f}').is_none());
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        assert_eq!(glyph_for('m'), glyph_for('M'));
    }

    #[test]
    fn test_cells() {
        let cells: Vec<_> = glyph_for('1').unwrap().cells().collect();
        assert_eq!(cells[0], (1, 0));
        assert_eq!(cells.len(), 8);
        assert_eq!(SPACE.cells().count(), 0);
    }
}
