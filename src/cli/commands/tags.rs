use crate::render::{display_width, pad_to_width};
use crate::tagging::TagTable;
use crate::ui::Style;

/// Prints every tag with its English expansion and Japanese gloss.
pub fn print_tags() {
    let table = TagTable::penn_treebank();
    let gloss_width = table
        .entries()
        .iter()
        .map(|entry| display_width(entry.gloss))
        .max()
        .unwrap_or(0);

    println!("{}", Style::header("Penn Treebank tags"));
    for entry in table.entries() {
        println!(
            "  {} {} {}",
            Style::code(format!("{:5}", entry.code)),
            pad_to_width(entry.gloss, gloss_width),
            Style::secondary(entry.expansion)
        );
    }
}
