use crate::core::urgency::{parse_date, UrgencyColor};
use crate::domain::model::{Karat, OrderStatus};
use serde::Serialize;

pub const ELLIPSIS: &str = "...";
pub const GROUP_LABEL_LIMIT: usize = 20;
pub const DESCRIPTION_LIMIT: usize = 50;

const COMPLETE_CHIP_TOKEN: &str = "#2e2e2e";
const LIGHT_TEXT_TOKEN: &str = "#fff";
const DARK_TEXT_TOKEN: &str = "#000";

/// Cuts `text` to `limit` characters and appends [`ELLIPSIS`] when it is longer.
pub fn truncate_label(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
    }
}

pub fn karat_tint(karat: &Karat) -> &'static str {
    match karat {
        Karat::K18 => "#c7cacb75",
        Karat::K20 => "#fbb2cb87",
        Karat::K22 => "#ade0f775",
        Karat::Other(_) => "#ffffff92",
    }
}

/// Badge shown in the corner of an order card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusChip {
    pub label: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub urgency: Option<UrgencyColor>,
}

/// Complete orders get a dark chip; everything else is tinted by its due date.
pub fn status_chip(status: &OrderStatus, urgency: UrgencyColor) -> StatusChip {
    match status {
        OrderStatus::Complete => StatusChip {
            label: "Complete",
            background: COMPLETE_CHIP_TOKEN,
            text: LIGHT_TEXT_TOKEN,
            urgency: None,
        },
        OrderStatus::Active => StatusChip {
            label: "Active",
            background: urgency.token(),
            text: DARK_TEXT_TOKEN,
            urgency: Some(urgency),
        },
        OrderStatus::Other(_) => StatusChip {
            label: "Complete",
            background: urgency.token(),
            text: DARK_TEXT_TOKEN,
            urgency: Some(urgency),
        },
    }
}

/// `YYYY-MM-DD` or an ISO timestamp as `DD.MM.YYYY`; anything else is returned as-is.
pub fn format_display_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%d.%m.%Y").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_label() {
        assert_eq!(truncate_label("Diamond Ring Custom Order", 10), "Diamond Ri...");
    }

    #[test]
    fn test_short_label_unchanged() {
        assert_eq!(truncate_label("Ring", 10), "Ring");
        assert_eq!(truncate_label("Exactly 10", 10), "Exactly 10");
        assert_eq!(truncate_label("", 10), "");
    }

    #[test]
    fn test_zero_limit_yields_only_ellipsis() {
        assert_eq!(truncate_label("Ring", 0), "...");
        assert_eq!(truncate_label("", 0), "");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_label("हार सेट नया", 3), "हार...");
        assert_eq!(truncate_label("Émeraude", 2), "Ém...");
    }

    #[test]
    fn test_default_group_limit() {
        let label = truncate_label("Shri Ganesh Jewellers Works", GROUP_LABEL_LIMIT);
        assert_eq!(label, "Shri Ganesh Jeweller...");
    }

    #[test]
    fn test_karat_tints() {
        assert_eq!(karat_tint(&Karat::K18), "#c7cacb75");
        assert_eq!(karat_tint(&Karat::K20), "#fbb2cb87");
        assert_eq!(karat_tint(&Karat::K22), "#ade0f775");
        assert_eq!(karat_tint(&Karat::Other("24K".into())), "#ffffff92");
    }

    #[test]
    fn test_status_chip() {
        let chip = status_chip(&OrderStatus::Complete, UrgencyColor::Urgent);
        assert_eq!(chip.label, "Complete");
        assert_eq!(chip.background, "#2e2e2e");
        assert_eq!(chip.urgency, None);

        let chip = status_chip(&OrderStatus::Active, UrgencyColor::Soon);
        assert_eq!(chip.label, "Active");
        assert_eq!(chip.background, UrgencyColor::Soon.token());
        assert_eq!(chip.text, "#000");
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_display_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_display_date("soon"), "soon");
    }
}
