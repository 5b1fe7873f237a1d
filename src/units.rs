//! Integer-exact size and rate formatting.
//!
//! Transcripts must be byte-identical across platforms, so sizes are
//! rendered with integer tenths/hundredths instead of float formatting.

/// `NNN kB`.
pub fn kb(kb: u64) -> String {
    format!("{} kB", kb)
}

/// Decimal megabytes with one decimal: `1.2 MB`.
pub fn mb(kb: u64) -> String {
    let tenths = kb / 100;
    format!("{}.{} MB", tenths / 10, tenths % 10)
}

/// Pick kB below one megabyte, MB above, the way apt does.
pub fn size(kb_total: u64) -> String {
    if kb_total < 1000 {
        kb(kb_total)
    } else {
        mb(kb_total)
    }
}

/// Binary mebibytes with two decimals: `1.46 MiB`, pacman style.
pub fn mib(kb_total: u64) -> String {
    let centis = kb_total * 100 / 1024;
    format!("{}.{:02} MiB", centis / 100, centis % 100)
}

/// DNF's table sizes: `512 k` below one megabyte, `4.2 M` above.
pub fn dnf_size(kb_total: u64) -> String {
    if kb_total < 1000 {
        format!("{} k", kb_total)
    } else {
        let tenths = kb_total / 100;
        format!("{}.{} M", tenths / 10, tenths % 10)
    }
}

/// `NNN kB/s`.
pub fn rate(kbps: u64) -> String {
    format!("{} kB/s", kbps)
}

/// Megabytes per second with one decimal: `4.2 MB/s`.
pub fn mb_rate(kbps: u64) -> String {
    let tenths = kbps / 100;
    format!("{}.{} MB/s", tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kb_and_mb() {
        assert_eq!(kb(391), "391 kB");
        assert_eq!(mb(1204), "1.2 MB");
        assert_eq!(mb(8192), "8.1 MB");
    }

    #[test]
    fn test_size_switches_at_one_megabyte() {
        assert_eq!(size(999), "999 kB");
        assert_eq!(size(1000), "1.0 MB");
    }

    #[test]
    fn test_mib_truncates_to_hundredths() {
        assert_eq!(mib(1024), "1.00 MiB");
        assert_eq!(mib(1500), "1.46 MiB");
        assert_eq!(mib(64), "0.06 MiB");
    }

    #[test]
    fn test_dnf_size() {
        assert_eq!(dnf_size(512), "512 k");
        assert_eq!(dnf_size(8400), "8.4 M");
    }

    #[test]
    fn test_rates() {
        assert_eq!(rate(973), "973 kB/s");
        assert_eq!(mb_rate(4200), "4.2 MB/s");
        assert_eq!(mb_rate(750), "0.7 MB/s");
    }
}
