//! UTC label formatting for the time axis, without a browser clock so the
//! same code runs in native tests.

const MS_PER_DAY: f64 = 86_400_000.0;

/// Format a time-axis tick according to the visible span.
///
/// - under 3 days -> `HH:MM`
/// - under ~4 months -> `DD.MM`
/// - under ~2 years -> `MM.YYYY`
/// - beyond -> `YYYY`
pub fn format_time_label(epoch_ms: i64, span_ms: f64) -> String {
    let days = epoch_ms.div_euclid(86_400_000);
    let ms_of_day = epoch_ms.rem_euclid(86_400_000);
    let (year, month, day) = civil_from_days(days);

    let span_days = span_ms / MS_PER_DAY;
    if span_days < 3.0 {
        let minutes = ms_of_day / 60_000;
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    } else if span_days < 120.0 {
        format!("{day:02}.{month:02}")
    } else if span_days < 730.0 {
        format!("{month:02}.{year}")
    } else {
        format!("{year}")
    }
}

/// Days since 1970-01-01 to civil date (Howard Hinnant's algorithm).
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    (if month <= 2 { year + 1 } else { year }, month, day)
}
