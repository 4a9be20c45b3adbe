use colored::{ColoredString, Colorize};
use stok::api::{Action, CmdMessage, MessageLevel};
use stok::config::StokConfig;
use stok::index::DisplayRecord;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 4] = ["#", "Name", "Quantity", "Unit"];
const COLUMN_GAP: &str = "  ";

pub fn print_messages(messages: &[CmdMessage], action: Option<Action>) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", action_color(&message.content, action)),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn action_color(content: &str, action: Option<Action>) -> ColoredString {
    match action {
        Some(Action::Update) => content.blue(),
        Some(Action::Delete) => content.red(),
        Some(Action::Add) | None => content.green(),
    }
}

pub fn print_records(rows: &[DisplayRecord]) {
    if rows.is_empty() {
        println!("No records found.");
        return;
    }

    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|dr| {
            [
                dr.index.to_string(),
                dr.record.name.clone(),
                dr.record.quantity.clone(),
                dr.record.unit.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad_to_width(h, w))
        .collect();
    println!("{}", header.join(COLUMN_GAP).trim_end().bold());

    for row in &cells {
        let idx = pad_to_width(&row[0], widths[0]);
        let name = pad_to_width(&row[1], widths[1]);
        let quantity = format!("{:>width$}", row[2], width = widths[2]);
        println!(
            "{}{}{}{}{}{}{}",
            idx.yellow(),
            COLUMN_GAP,
            name,
            COLUMN_GAP,
            quantity,
            COLUMN_GAP,
            row[3]
        );
    }
}

pub fn print_config(config: &StokConfig) {
    for key in StokConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// Left-aligns by display width, so wide and combining characters line up.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
