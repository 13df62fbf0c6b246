/// Glyphs ordered from sparse to dense visual weight. Index 0 is a space;
/// a fully dark pixel therefore renders as blank unless the ramp is reversed.
pub const DENSITY: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczesyXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Build the character ramp used to represent luminance levels: `whitespace`
/// blank characters followed by the density glyphs, the whole sequence
/// reversed when `reversed` is set. Callers clamp `whitespace` to the slider
/// range before calling.
pub fn build(whitespace: usize, reversed: bool) -> Vec<char> {
    let mut ramp = vec![' '; whitespace];
    ramp.extend(DENSITY.chars());

    if reversed {
        ramp.reverse();
    }

    ramp
}
