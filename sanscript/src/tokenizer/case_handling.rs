use smol_str::SmolStr;

#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

#[inline(always)]
pub fn upper_first(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_uppercase().collect::<String>() + c.as_str()),
    }
}

/// Upper-cases the first character and lower-cases the rest. Combining
/// marks after the first letter are left in place.
#[inline(always)]
pub fn capitalize(s: &str) -> SmolStr {
    upper_first(&lower_case(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_symbols() {
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("ai"), "Ai");
        assert_eq!(capitalize("kh"), "Kh");
        assert_eq!(capitalize("ā"), "Ā");
        assert_eq!(capitalize("oṃ"), "Oṃ");
        assert_eq!(capitalize("r\u{325}"), "R\u{325}");
        assert_eq!(capitalize("KH"), "Kh");
        assert_eq!(capitalize("'"), "'");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn first_only() {
        assert_eq!(upper_first("ṣa"), "Ṣa");
        assert_eq!(lower_case("ṢA"), "ṣa");
    }
}
