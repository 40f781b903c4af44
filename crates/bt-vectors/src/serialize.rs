/// Zero-padded binary form of `value`, exactly `bit_width` characters.
///
/// A width of zero renders as the empty string.
pub fn render_vector(value: u64, bit_width: u32) -> String {
    debug_assert!(bit_width >= 64 || value >> bit_width == 0);
    if bit_width == 0 {
        return String::new();
    }
    format!("{value:0width$b}", width = bit_width as usize)
}

/// One output line, without the trailing newline.
pub fn render_line(value: u64, bit_width: u32, duplication_factor: u32) -> String {
    render_vector(value, bit_width).repeat(duplication_factor as usize)
}
