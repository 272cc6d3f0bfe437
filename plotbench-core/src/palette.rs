use plotdoc::{Color, Rgb};

/// Ten-color categorical palette assigned to new series, in order.
pub const PALETTE: [Color; 10] = [
    Color::Custom(Rgb {
        r: 0x1f,
        g: 0x77,
        b: 0xb4,
    }),
    Color::Custom(Rgb {
        r: 0xff,
        g: 0x7f,
        b: 0x0e,
    }),
    Color::Custom(Rgb {
        r: 0x2c,
        g: 0xa0,
        b: 0x2c,
    }),
    Color::Custom(Rgb {
        r: 0xd6,
        g: 0x27,
        b: 0x28,
    }),
    Color::Custom(Rgb {
        r: 0x94,
        g: 0x67,
        b: 0xbd,
    }),
    Color::Custom(Rgb {
        r: 0x8c,
        g: 0x56,
        b: 0x4b,
    }),
    Color::Custom(Rgb {
        r: 0xe3,
        g: 0x77,
        b: 0xc2,
    }),
    Color::Custom(Rgb {
        r: 0x7f,
        g: 0x7f,
        b: 0x7f,
    }),
    Color::Custom(Rgb {
        r: 0xbc,
        g: 0xbd,
        b: 0x22,
    }),
    Color::Custom(Rgb {
        r: 0x17,
        g: 0xbe,
        b: 0xcf,
    }),
];

pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Infinite cycle over [`PALETTE`]; the palette wraps and colors repeat.
#[derive(Debug, Default)]
pub struct ColorCycle {
    next: usize,
}

impl ColorCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_color(&mut self) -> Color {
        let color = palette_color(self.next);
        self.next += 1;
        color
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }
}
