//! Terminal stand-ins for the indexed snowman pictures.
//!
//! Frame 0 is the whole snowman; every later frame has melted a bit more.

pub const FRAME_HEIGHT: u16 = 8;
pub const FRAME_WIDTH: u16 = 15;

const FRAMES: [[&str; FRAME_HEIGHT as usize]; 7] = [
    [
        "     _===_     ",
        "     |___|     ",
        "    ( . . )    ",
        "    (  >  )    ",
        "  \\(   :   )/  ",
        "   (   :   )   ",
        "  (    :    )  ",
        "   `-------'   ",
    ],
    [
        "               ",
        "               ",
        "    ( . . )    ",
        "    (  >  )    ",
        "  \\(   :   )/  ",
        "   (   :   )   ",
        "  (    :    )  ",
        "   `-------'   ",
    ],
    [
        "               ",
        "               ",
        "    ( . . )    ",
        "    (  >  )    ",
        "   (   :   )   ",
        "   (   :   )   ",
        "  (    :    )  ",
        "   `-------'   ",
    ],
    [
        "               ",
        "               ",
        "    (     )    ",
        "    (     )    ",
        "   (   :   )   ",
        "   (   :   )   ",
        "  (    :    )  ",
        "   `-------'   ",
    ],
    [
        "               ",
        "               ",
        "               ",
        "               ",
        "   (   :   )   ",
        "   (   :   )   ",
        "  (    :    )  ",
        "   `-------'   ",
    ],
    [
        "               ",
        "               ",
        "               ",
        "               ",
        "               ",
        "    (  :  )    ",
        "  (    :    )  ",
        "  `---------'  ",
    ],
    [
        "               ",
        "               ",
        "               ",
        "               ",
        "               ",
        "               ",
        "   .  ~ ~  .   ",
        " ~~~~~~~~~~~~~ ",
    ],
];

pub fn frame_count() -> usize {
    FRAMES.len()
}

/// Scales `wrong` out of `max_wrong` onto the available frames. The first
/// frame is only shown with no mistakes and the last only once lost.
pub fn frame_index(wrong: usize, max_wrong: usize) -> usize {
    let last = FRAMES.len() - 1;
    if max_wrong == 0 || wrong >= max_wrong {
        return last;
    }
    if wrong == 0 {
        return 0;
    }
    // keep 0 and last reserved
    let scaled = (wrong * last).div_ceil(max_wrong);
    scaled.clamp(1, last - 1)
}

pub fn frame(index: usize) -> &'static [&'static str] {
    &FRAMES[index.min(FRAMES.len() - 1)]
}
