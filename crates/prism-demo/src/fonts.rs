/// Common install locations of a plain sans-serif face.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Reads the first system font found, or `None` if none is installed.
pub fn load_system_font() -> Option<Vec<u8>> {
    SYSTEM_FONT_PATHS.iter().find_map(|path| {
        let bytes = std::fs::read(path).ok()?;
        log::debug!("using font {path}");
        Some(bytes)
    })
}
