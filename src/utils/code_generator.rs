use rand::Rng;

const DIGITS: &[u8] = b"0123456789";

pub const ADMIN_CODE_LENGTH: usize = 6;

/// 生成6位数字代码，每一位独立均匀抽取 (允许以0开头)
pub fn generate_six_digit_code() -> String {
    let mut rng = rand::thread_rng();
    (0..ADMIN_CODE_LENGTH)
        .map(|_| DIGITS[rng.gen_range(0..DIGITS.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_six_digit_code() {
        let code = generate_six_digit_code();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_every_position_can_be_zero() {
        // 1000 次里某一位从未出现 0 的概率约为 0.9^1000
        let codes: Vec<String> = (0..1000).map(|_| generate_six_digit_code()).collect();
        for pos in 0..ADMIN_CODE_LENGTH {
            assert!(
                codes.iter().any(|c| c.as_bytes()[pos] == b'0'),
                "position {pos} never produced a zero"
            );
        }
    }
}
