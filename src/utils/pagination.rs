/// 列表接口允许的最大条数
pub const MAX_LIST_LIMIT: u64 = 1000;

/// 未传时取默认值，传入时限制在 1..=MAX_LIST_LIMIT
pub fn clamp_limit(limit: Option<u64>, default: u64) -> u64 {
    limit.unwrap_or(default).clamp(1, MAX_LIST_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(None, 100), 100);
        assert_eq!(clamp_limit(Some(10), 100), 10);
        assert_eq!(clamp_limit(Some(0), 100), 1);
        assert_eq!(clamp_limit(Some(5000), 100), MAX_LIST_LIMIT);
    }
}
