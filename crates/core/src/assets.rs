//! Bundled art.
//!
//! Pure data: sprites, layered sprites and backdrops used by the three modes.

use crate::sprite::{DrawOrder, LayeredSprite, Sprite, SpriteFrame, SpriteLayer};

// ---------------------------------------------------------------------------
// Runner (character mode)

static LOCO_BODY: Sprite = Sprite::new(
    "loco-body",
    &[SpriteFrame::new(
        &[
            "        __==__           ___==___            ",
            "   ____/|_||_\\__  ____ /_|_____|_\\___       ",
            "  / _  \\        \\|__  |  _  _   _   |\\      ",
            "=/ |_|  |  ____  |  | | |_|(_)_(_)__|| \\__  ",
            "|_  _  _|_|____|_|__|_|___|_____|____|____| ",
        ],
        &[
            "........yyyy.. ........ yyyyyyyy ............",
            ".. ggggkkkkkkk.. gggg ..kwwwwwwwk.. ....     ",
            ". .gg.. ...... ..rr.. . rr rr rr .y.         ",
            "yy rrrr  . gggg .  . . rrrrccmcmrrrr . gggg  ",
            "kk kk kk kkwwww kkww kkwwwwwwwwwwwwww kkkkw ",
        ],
    )],
);

static LOCO_WHEELS: Sprite = Sprite::new(
    "loco-wheels",
    &[
        SpriteFrame::new(
            &["  o  o    o  o    o   o   o  o    o    o    "],
            &["  k  k    k  k    k   k   k  k    k    k    "],
        ),
        SpriteFrame::new(
            &["    o    o  o    o   o   o  o    o    o     "],
            &["    k    k  k    k   k   k  k    k    k     "],
        ),
        SpriteFrame::new(
            &["  o    o    o    o   o   o  o    o    o     "],
            &["  k    k    k    k   k   k  k    k    k     "],
        ),
    ],
);

static LOCO_TRAIL: Sprite = Sprite::new(
    "loco-trail",
    &[
        SpriteFrame::new(
            &[
                " ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~ ",
                "        *   *      *   *     *   *          ",
            ],
            &[
                " ccccccccccccccccccccccccccccccccccccccccccc ",
                " ....  c   c  ..  c   c  ..  c   c  ....    ",
            ],
        ),
        SpriteFrame::new(
            &[
                " ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~ ",
                "      *   *    *    *   *    *              ",
            ],
            &[
                " ccccccccccccccccccccccccccccccccccccccccccc ",
                "  ..  c   c  .. c  ..  c   c  ..            ",
            ],
        ),
        SpriteFrame::new(
            &[
                " ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~ ",
                "        *      *   *    *    *    *         ",
            ],
            &[
                " ccccccccccccccccccccccccccccccccccccccccccc ",
                " ....  c  ..  c   c  ..  c   c  ..  c       ",
            ],
        ),
    ],
);

/// The character-mode locomotive: sparkle trail, wheels, then the body on top.
pub static LOCOMOTIVE: LayeredSprite = LayeredSprite {
    name: "locomotive",
    layers: &[
        SpriteLayer {
            name: "trail",
            order: DrawOrder::Decoration,
            dx: 0,
            dy: 6,
            sprite: &LOCO_TRAIL,
        },
        SpriteLayer {
            name: "wheels",
            order: DrawOrder::Decoration,
            dx: 0,
            dy: 5,
            sprite: &LOCO_WHEELS,
        },
        SpriteLayer {
            name: "body",
            order: DrawOrder::Body,
            dx: 0,
            dy: 0,
            sprite: &LOCO_BODY,
        },
    ],
};

// ---------------------------------------------------------------------------
// Meteor (dot mode)

static SAUCER_HULL: Sprite = Sprite::new(
    "saucer-hull",
    &[SpriteFrame::dots(&[
        ".....AAAA.....",
        "....AssssA....",
        "..vvvvvvvvvv..",
        "vvvvvvvvvvvvvv",
        "..dddddddddd..",
    ])],
);

static SAUCER_LIGHTS: Sprite = Sprite::new(
    "saucer-lights",
    &[
        SpriteFrame::dots(&[".r...y...r...y"]),
        SpriteFrame::dots(&[".y...r...y...r"]),
        SpriteFrame::dots(&[".g...g...g...g"]),
    ],
);

static SAUCER_EXHAUST: Sprite = Sprite::new(
    "saucer-exhaust",
    &[
        SpriteFrame::dots(&["....e....e....", "...o......o..."]),
        SpriteFrame::dots(&["....o....o....", "....e....e...."]),
        SpriteFrame::dots(&["....G....G....", "...e......e..."]),
    ],
);

/// Dot-art saucer crossing the night sky.
pub static SAUCER: LayeredSprite = LayeredSprite {
    name: "saucer",
    layers: &[
        SpriteLayer {
            name: "exhaust",
            order: DrawOrder::Decoration,
            dx: 0,
            dy: 5,
            sprite: &SAUCER_EXHAUST,
        },
        SpriteLayer {
            name: "hull",
            order: DrawOrder::Body,
            dx: 0,
            dy: 0,
            sprite: &SAUCER_HULL,
        },
        SpriteLayer {
            name: "lights",
            order: DrawOrder::Overlay,
            dx: 0,
            dy: 3,
            sprite: &SAUCER_LIGHTS,
        },
    ],
};

// ---------------------------------------------------------------------------
// Tour (dot mode)

static CART_BODY: Sprite = Sprite::new(
    "cart-body",
    &[SpriteFrame::dots(&[
        "..DD............",
        "..DD...rrrrrrr..",
        "rrrrrrrrwWWWWr..",
        "rrrrrrrrrrrrrrrr",
        "kkkkkkkkkkkkkkkk",
    ])],
);

static CART_WHEELS: Sprite = Sprite::new(
    "cart-wheels",
    &[
        SpriteFrame::dots(&[".dk.dk....dk.dk."]),
        SpriteFrame::dots(&[".kd.kd....kd.kd."]),
    ],
);

static CART_SMOKE: Sprite = Sprite::new(
    "cart-smoke",
    &[
        SpriteFrame::dots(&["...v.", "..d..", "dd..."]),
        SpriteFrame::dots(&["..v..", "...d.", ".dd.."]),
        SpriteFrame::dots(&[".v...", "..d..", "..dd."]),
    ],
);

/// Dot-art cart used by the tour.
pub static CART: LayeredSprite = LayeredSprite {
    name: "cart",
    layers: &[
        SpriteLayer {
            name: "smoke",
            order: DrawOrder::Decoration,
            dx: 0,
            dy: 0,
            sprite: &CART_SMOKE,
        },
        SpriteLayer {
            name: "wheels",
            order: DrawOrder::Decoration,
            dx: 0,
            dy: 8,
            sprite: &CART_WHEELS,
        },
        SpriteLayer {
            name: "body",
            order: DrawOrder::Body,
            dx: 0,
            dy: 3,
            sprite: &CART_BODY,
        },
    ],
};

/// Tileable background strip with a two-frame animation.
pub static CITY: Sprite = Sprite::new(
    "city",
    &[
        SpriteFrame::dots(&[
            "......BBBB..............",
            "..BB..BWBB......BBBBB...",
            "..BB..BBBB..BB..BWBWB...",
            "BBWB..BWBB..BB..BBBBB.BB",
            "BBBB..BBBB.BWBB.BWBBB.BW",
            "BBBBBBBBBBBBBBBBBBBBBBBB",
            "DDDDDDDDDDDDDDDDDDDDDDDD",
        ]),
        SpriteFrame::dots(&[
            "......BBBB..............",
            "..BB..BBBB......BBBBB...",
            "..BB..BBWB..BB..BBBWB...",
            "BBBB..BBBB..BB..BWBBB.BB",
            "BWBB..BWBB.BBBB.BBBWB.BB",
            "BBBBBBBBBBBBBBBBBBBBBBBB",
            "DDDDDDDDDDDDDDDDDDDDDDDD",
        ]),
    ],
);

pub static HILLS: Sprite = Sprite::new(
    "hills",
    &[
        SpriteFrame::dots(&[
            "........f...............",
            ".......fff.........RR...",
            "..ll..fffff.......RRRR..",
            ".llll..l.....ll..RRRRRR.",
            "llllllllllllllllllllllll",
            "llllllllllllllllllllllll",
            "ffffffffffffffffffffffff",
        ]),
        SpriteFrame::dots(&[
            ".......f................",
            ".......fff.........RR...",
            "..ll..fffff.......RRRR..",
            ".llll..l.....ll..RRRRRR.",
            "llllllllllllllllllllllll",
            "llllllllllllllllllllllll",
            "ffffffffffffffffffffffff",
        ]),
    ],
);

pub static SEA: Sprite = Sprite::new(
    "sea",
    &[
        SpriteFrame::dots(&[
            "........................",
            "........................",
            "........................",
            "...A.......A.......A....",
            "aaAaAaaaaaAaAaaaaaAaAaaa",
            "aaaaaaaaaaaaaaaaaaaaaaaa",
            "DDDDDDDDDDDDDDDDDDDDDDDD",
        ]),
        SpriteFrame::dots(&[
            "........................",
            "........................",
            "........................",
            ".......A.......A.......A",
            "aaaaaaAaAaaaaaAaAaaaaaAa",
            "aaaaaaaaaaaaaaaaaaaaaaaa",
            "DDDDDDDDDDDDDDDDDDDDDDDD",
        ]),
    ],
);
