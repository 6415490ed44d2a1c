/// Upper bound of each of the eight logarithmic segments.
pub static SEG_END: [i16; 8] = [0xFF, 0x1FF, 0x3FF, 0x7FF, 0xFFF, 0x1FFF, 0x3FFF, 0x7FFF];

/// Returns the index of the first boundary in `table` that is `>= value`,
/// or `table.len()` if `value` is beyond every boundary. `table` must be
/// sorted ascending.
pub fn find_segment(value: i16, table: &[i16]) -> usize {
    table.iter()
        .position(|&end| value <= end)
        .unwrap_or(table.len())
}
