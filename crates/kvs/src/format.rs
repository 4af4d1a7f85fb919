const SUFFIXES: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Render a count as a human-readable string by repeated division by 1024.
///
/// [`KeyValueStore::size`] feeds an *entry count* through this byte-magnitude
/// formatter, so "2 KB" means 2048 entries, not 2048 bytes.
///
/// [`KeyValueStore::size`]: crate::KeyValueStore::size
pub(crate) fn format_size(count: u64) -> String {
    let mut divisor: u64 = 1;
    for suffix in SUFFIXES {
        match divisor.checked_mul(1024) {
            Some(next) if count >= next => divisor = next,
            // Either the count fits under the next magnitude or the divisor
            // would overflow u64; this suffix is the one.
            _ => return format!("{} {}", count / divisor, suffix),
        }
    }
    format!("{} {}", count, SUFFIXES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_below_one_kilobyte() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn exact_magnitude_boundaries() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(format_size(1536), "1 KB");
        assert_eq!(format_size(2047), "1 KB");
        assert_eq!(format_size(2048), "2 KB");
    }

    #[test]
    fn largest_representable_count() {
        // u64::MAX / 2^60 == 15, so the formatter tops out in exabytes.
        assert_eq!(format_size(u64::MAX), "15 EB");
    }
}
