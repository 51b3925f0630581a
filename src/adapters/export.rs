use crate::core::board::{BoardView, GroupSection, OrderCard};
use crate::utils::error::{BoardError, Result};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ExportFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(ExportFormat::Text),
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }
}

pub fn export(view: &BoardView, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(export_text(view)),
        ExportFormat::Json => export_json(view),
        ExportFormat::Csv => export_csv(view),
    }
}

/// Accordion-style listing: collapsed groups show only their heading.
pub fn export_text(view: &BoardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", "=".repeat(view.title.chars().count()));

    if view.groups.is_empty() {
        let _ = writeln!(out, "(no active or complete orders)");
        return out;
    }

    for group in &view.groups {
        write_group(&mut out, group);
    }
    out
}

fn write_group(out: &mut String, group: &GroupSection) {
    let marker = if group.expanded { "▾" } else { "▸" };
    let _ = writeln!(out, "{} {} ({})", marker, group.label, group.cards.len());
    if !group.expanded {
        return;
    }
    for card in &group.cards {
        let _ = writeln!(out, "    {}", card_line(card));
    }
}

fn card_line(card: &OrderCard) -> String {
    let mut parts = vec![format!("#{}", card.order_id)];
    if !card.title.is_empty() {
        parts.push(card.title.clone());
    }
    parts.push(card.chip.label.to_string());
    if !card.delivery.is_empty() {
        parts.push(format!("due {} ({})", card.delivery, card.urgency.as_str()));
    }
    if !card.karat.is_empty() {
        parts.push(card.karat.clone());
    }
    if let Some(weight) = card.lot_weight {
        parts.push(format!("lot {}", weight));
    }
    if !card.description.is_empty() {
        parts.push(card.description.clone());
    }
    parts.join(" | ")
}

pub fn export_json(view: &BoardView) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    group: &'a str,
    order_id: &'a str,
    status: &'a str,
    title: &'a str,
    lot_weight: Option<f64>,
    placed: &'a str,
    delivery: &'a str,
    urgency: &'a str,
    karat: &'a str,
    description: &'a str,
}

/// One row per order; every group is included regardless of expansion.
pub fn export_csv(view: &BoardView) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for group in &view.groups {
        for card in &group.cards {
            writer.serialize(CsvRow {
                group: &group.key,
                order_id: &card.order_id,
                status: &card.status,
                title: &card.title,
                lot_weight: card.lot_weight,
                placed: &card.placed,
                delivery: &card.delivery,
                urgency: card.urgency.as_str(),
                karat: &card.karat,
                description: &card.description,
            })?;
        }
    }

    let data = writer.into_inner().map_err(|e| BoardError::IoError(e.into_error()))?;
    String::from_utf8(data).map_err(|e| BoardError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::{BoardSettings, OrderBoard};
    use crate::domain::model::{Karigar, Order};
    use crate::domain::ports::FixedClock;
    use chrono::NaiveDate;

    fn board() -> OrderBoard {
        let orders = vec![
            Order::new("1", "active").with_product("Ring").with_delivery_date("2024-03-09"),
            Order::new("2", "complete")
                .with_product("Chain, gold")
                .with_karigar(Karigar::new("k1", "Amit")),
        ];
        OrderBoard::with_orders(BoardSettings::default(), orders, vec![])
    }

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
    }

    #[test]
    fn test_text_hides_collapsed_groups() {
        let text = export_text(&board().view(&clock()));
        assert!(text.starts_with("Karigar Orders\n==============\n"));
        assert!(text.contains("▸ Amit (1)"));
        assert!(text.contains("▸ Not Assigned (1)"));
        assert!(!text.contains("#1"));
    }

    #[test]
    fn test_text_lists_cards_of_expanded_groups() {
        let mut board = board();
        board.toggle_all();
        let text = export_text(&board.view(&clock()));
        assert!(text.contains("▾ Not Assigned (1)"));
        assert!(text.contains("#1 | Ring | Active | due 09.03.2024 (urgent)"));
    }

    #[test]
    fn test_empty_board_text() {
        let board = OrderBoard::with_orders(BoardSettings::default(), vec![], vec![]);
        let text = export_text(&board.view(&clock()));
        assert!(text.contains("(no active or complete orders)"));
    }

    #[test]
    fn test_csv_has_header_and_quotes_commas() {
        let csv = export_csv(&board().view(&clock())).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "group,order_id,status,title,lot_weight,placed,delivery,urgency,karat,description"
        );
        assert_eq!(lines.next().unwrap(), "Amit,2,complete,\"Chain, gold\",,,,normal,,");
        assert_eq!(lines.next().unwrap(), "Not Assigned,1,active,Ring,,,09.03.2024,urgent,,");
    }

    #[test]
    fn test_json_export_keeps_group_order() {
        let json = export_json(&board().view(&clock())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["groups"][0]["key"], "Amit");
        assert_eq!(value["groups"][1]["key"], "Not Assigned");
        assert_eq!(value["mode"], "by_karigar");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(ExportFormat::parse("CSV"), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::parse("yaml"), None);
    }
}
