use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

/// `YYYY-MM-DD` (o un datetime ISO) a fecha larga: "12 de junio de 2025".
/// Si no se puede interpretar, se devuelve tal cual.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format!(
            "{} de {} de {}",
            date.day(),
            MONTHS[date.month0() as usize],
            date.year()
        ),
        None => raw.to_string(),
    }
}

/// Parte de fecha de un `YYYY-MM-DD[THH:MM...]`
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_spanish_date() {
        assert_eq!(format_date("2025-06-12"), "12 de junio de 2025");
        assert_eq!(format_date("2024-12-01T18:30:00"), "1 de diciembre de 2024");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("pronto"), "pronto");
        assert_eq!(format_date("2025-13-01"), "2025-13-01");
    }
}
