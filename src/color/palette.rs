use crate::foundation::core::Rgb;

/// Default accent (tomato).
pub const DEFAULT_ACCENT: Rgb = Rgb::from_u32(0xff6347);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Wallpaper theme.
pub enum Theme {
    /// Light dots on a near-black background.
    #[default]
    Dark,
    /// Dark dots on a near-white background.
    Light,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Fixed theme colors.
pub struct Palette {
    /// Canvas fill.
    pub background: Rgb,
    /// Units already behind "today".
    pub passed: Rgb,
    /// Default highlight for "today".
    pub current: Rgb,
    /// Units still ahead.
    pub future: Rgb,
    /// Text color.
    pub text: Rgb,
}

const DARK: Palette = Palette {
    background: Rgb::from_u32(0x1a1a1a),
    passed: Rgb::from_u32(0xffffff),
    current: Rgb::from_u32(0xff6347),
    future: Rgb::from_u32(0x3a3a3a),
    text: Rgb::from_u32(0xff6347),
};

const LIGHT: Palette = Palette {
    background: Rgb::from_u32(0xfafaff),
    passed: Rgb::from_u32(0x1a1a1a),
    current: Rgb::from_u32(0xff6347),
    future: Rgb::from_u32(0xe5e5e5),
    text: Rgb::from_u32(0xff6347),
};

impl Theme {
    /// The theme's palette.
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}
