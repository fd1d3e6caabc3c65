pub fn log2(x: u64) -> u64 {
    ((std::mem::size_of::<u64>() * 8) as u64) - (x.leading_zeros() as u64) - 1
}

/// The smallest code width in `{1, 2, 4, 8, 16, 32, 64}` that can represent
/// every value in `0..=max`.
pub fn code_width_for(max: u64) -> u8 {
    if max == 0 {
        return 1;
    }
    let needed = log2(max) + 1;
    for w in [1u8, 2, 4, 8, 16, 32, 64] {
        if (w as u64) >= needed {
            return w;
        }
    }
    64
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_log2() {
        assert_eq!(log2(2u64), 1);
        assert_eq!(log2(3u64), 1);
        assert_eq!(log2(4u64), 2);
        assert_eq!(log2(5u64), 2);
        assert_eq!(log2(6u64), 2);
        assert_eq!(log2(7u64), 2);
        assert_eq!(log2(8u64), 3);
    }

    #[test]
    fn test_code_width_for() {
        assert_eq!(code_width_for(0), 1);
        assert_eq!(code_width_for(1), 1);
        assert_eq!(code_width_for(2), 2);
        assert_eq!(code_width_for(3), 2);
        assert_eq!(code_width_for(4), 4);
        assert_eq!(code_width_for(15), 4);
        assert_eq!(code_width_for(16), 8);
        assert_eq!(code_width_for(255), 8);
        assert_eq!(code_width_for(256), 16);
        assert_eq!(code_width_for(u32::MAX as u64), 32);
        assert_eq!(code_width_for(u64::MAX), 64);
    }
}
