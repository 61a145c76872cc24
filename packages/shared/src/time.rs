use chrono::{DateTime, Utc};

/// Get current Unix timestamp (milliseconds)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a Unix timestamp (milliseconds) as a `HH:MM:SS` wall-clock string in UTC.
///
/// Out-of-range timestamps format as `00:00:00`.
pub fn format_clock_time(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "00:00:00".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock_time() {
        // テスト項目: ミリ秒タイムスタンプを HH:MM:SS 形式に変換できる
        // given (前提条件): 1970-01-01T13:45:07.999Z
        let millis = ((13 * 3600 + 45 * 60 + 7) * 1000 + 999) as i64;

        // when (操作):
        let formatted = format_clock_time(millis);

        // then (期待する結果):
        assert_eq!(formatted, "13:45:07");
    }

    #[test]
    fn test_format_clock_time_out_of_range() {
        // テスト項目: 範囲外のタイムスタンプは 00:00:00 になる
        assert_eq!(format_clock_time(i64::MAX), "00:00:00");
    }

    #[test]
    fn test_now_millis_after_2020() {
        // テスト項目: 現在時刻は 2020 年以降の値を返す
        let now = now_millis();
        assert!(now > 1_577_836_800_000);
    }
}
