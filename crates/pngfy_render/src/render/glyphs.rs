//! The builtin 5x9 bitmap font.
//!
//! Every printable ASCII character (codes 32..=126) maps to a 45-symbol
//! design string read row-major, top row first. `#` marks an ink cell and
//! `.` a background cell. The table is compiled-in constant data and never
//! changes at runtime.

/// Glyph width in pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in pixels.
pub const GLYPH_HEIGHT: u32 = 9;
/// Symbols per glyph design string.
pub const GLYPH_AREA: usize = (GLYPH_WIDTH * GLYPH_HEIGHT) as usize;

const INK: u8 = b'#';
const BACKGROUND: u8 = b'.';

/// Returns the design string for `character`, or `None` for anything
/// outside the supported set. Callers are expected to look up validated
/// characters only.
pub fn design(character: char) -> Option<&'static str> {
    let design = match character {
        ' ' => ".............................................",
        '!' => "..#....#....#....#....#.........#............",
        '"' => ".#.#..#.#..#.#...............................",
        '#' => "......#.#.#####.#.#..#.#.#####.#.#...........",
        '$' => "..#...#####.#...###...#.#####...#............",
        '%' => "#...##...#...#...#...#...#...##...#..........",
        '&' => ".##..#..#.#..#..#####..#.#..#..##.#..........",
        '\'' => "..#....#....#................................",
        '(' => "...#...#....#...#.....#....#.....#...........",
        ')' => ".#.....#....#.....#...#....#...#.............",
        '*' => ".......#..#.#.#.###.#.#.#..#.................",
        '+' => ".......#....#..#####..#....#.................",
        ',' => "...........................#....#...#........",
        '-' => "...............#####.........................",
        '.' => "...........................#....#............",
        '/' => "....#....#...#...#...#...#....#..............",
        '0' => ".###.#...##..###.#.###..##...#.###...........",
        '1' => "..#...##....#....#....#....#..#####..........",
        '2' => ".###.#...#....#...#...#...#...#####..........",
        '3' => ".###.#...#....#.###.....##...#.###...........",
        '4' => ".#..#.#..##...######....#....#....#..........",
        '5' => "######....#....####.....##...#.###...........",
        '6' => ".###.#....#....####.#...##...#.###...........",
        '7' => "#####....#....#...#...#....#....#............",
        '8' => ".###.#...##...#.###.#...##...#.###...........",
        '9' => ".###.#...##...#.####....##...#.###...........",
        ':' => ".......#....#..............#....#............",
        ';' => ".......#....#..............#....#...#........",
        '<' => "........##.##..#.....##.....##...............",
        '=' => "..........#####.....#####....................",
        '>' => ".....##.....##.....#..##.##..................",
        '?' => ".###.#...#....#...#...#.........#............",
        '@' => "#####.....#####.....#####.....#####.....#####",
        'A' => "#####.....#####.....#####.....#####.....#####",
        'B' => "#####.....#####.....#####.....#####.....#####",
        'C' => "#####.....#####.....#####.....#####.....#####",
        'D' => "#####.....#####.....#####.....#####.....#####",
        'E' => "#####.....#####.....#####.....#####.....#####",
        'F' => "#####.....#####.....#####.....#####.....#####",
        'G' => "#####.....#####.....#####.....#####.....#####",
        'H' => "#####.....#####.....#####.....#####.....#####",
        'I' => "#####.....#####.....#####.....#####.....#####",
        'J' => "#####.....#####.....#####.....#####.....#####",
        'K' => "#####.....#####.....#####.....#####.....#####",
        'L' => "#####.....#####.....#####.....#####.....#####",
        'M' => "#####.....#####.....#####.....#####.....#####",
        'N' => "#####.....#####.....#####.....#####.....#####",
        'O' => "#####.....#####.....#####.....#####.....#####",
        'P' => "#####.....#####.....#####.....#####.....#####",
        'Q' => "#####.....#####.....#####.....#####.....#####",
        'R' => "#####.....#####.....#####.....#####.....#####",
        'S' => "#####.....#####.....#####.....#####.....#####",
        'T' => "#####.....#####.....#####.....#####.....#####",
        'U' => "#####.....#####.....#####.....#####.....#####",
        'V' => "#####.....#####.....#####.....#####.....#####",
        'W' => "#####.....#####.....#####.....#####.....#####",
        'X' => "#####.....#####.....#####.....#####.....#####",
        'Y' => "#####.....#####.....#####.....#####.....#####",
        'Z' => "#####.....#####.....#####.....#####.....#####",
        '[' => "#####.....#####.....#####.....#####.....#####",
        '\\' => "#####.....#####.....#####.....#####.....#####",
        ']' => "#####.....#####.....#####.....#####.....#####",
        '^' => "#####.....#####.....#####.....#####.....#####",
        '_' => "#####.....#####.....#####.....#####.....#####",
        '`' => "#####.....#####.....#####.....#####.....#####",
        'a' => "#####.....#####.....#####.....#####.....#####",
        'b' => "#####.....#####.....#####.....#####.....#####",
        'c' => "#####.....#####.....#####.....#####.....#####",
        'd' => "#####.....#####.....#####.....#####.....#####",
        'e' => "#####.....#####.....#####.....#####.....#####",
        'f' => "#####.....#####.....#####.....#####.....#####",
        'g' => "#####.....#####.....#####.....#####.....#####",
        'h' => "#####.....#####.....#####.....#####.....#####",
        'i' => "#####.....#####.....#####.....#####.....#####",
        'j' => "#####.....#####.....#####.....#####.....#####",
        'k' => "#####.....#####.....#####.....#####.....#####",
        'l' => "#####.....#####.....#####.....#####.....#####",
        'm' => "#####.....#####.....#####.....#####.....#####",
        'n' => "#####.....#####.....#####.....#####.....#####",
        'o' => "#####.....#####.....#####.....#####.....#####",
        'p' => "#####.....#####.....#####.....#####.....#####",
        'q' => "#####.....#####.....#####.....#####.....#####",
        'r' => "#####.....#####.....#####.....#####.....#####",
        's' => "#####.....#####.....#####.....#####.....#####",
        't' => "#####.....#####.....#####.....#####.....#####",
        'u' => "#####.....#####.....#####.....#####.....#####",
        'v' => "#####.....#####.....#####.....#####.....#####",
        'w' => "#####.....#####.....#####.....#####.....#####",
        'x' => "#####.....#####.....#####.....#####.....#####",
        'y' => "#####.....#####.....#####.....#####.....#####",
        'z' => "#####.....#####.....#####.....#####.....#####",
        '{' => "#####.....#####.....#####.....#####.....#####",
        '|' => "#####.....#####.....#####.....#####.....#####",
        '}' => "#####.....#####.....#####.....#####.....#####",
        '~' => "#####.....#####.....#####.....#####.....#####",
        _ => return None,
    };
    Some(design)
}

pub fn is_ink(symbol: u8) -> bool {
    symbol == INK
}

pub fn is_background(symbol: u8) -> bool {
    symbol == BACKGROUND
}

/// Whether `character` may appear in renderable text: printable ASCII plus
/// the newline separator.
pub fn is_supported(character: char) -> bool {
    character == '\n' || matches!(character, ' '..='~')
}
