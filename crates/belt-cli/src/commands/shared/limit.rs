/// Pick the row limit for a listing command.
///
/// A per-command `--limit` wins over the global flag, which wins over the
/// configured default.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn local_flag_wins() {
        assert_eq!(effective_limit(Some(5), Some(50), 20), 5);
    }

    #[test]
    fn global_flag_beats_fallback() {
        assert_eq!(effective_limit(None, Some(50), 20), 50);
    }

    #[test]
    fn fallback_applies_when_no_flags() {
        assert_eq!(effective_limit(None, None, 20), 20);
    }
}
