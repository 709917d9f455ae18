use crate::model::card::CardRecord;

const FREQUENCY_HEADER: &str = "Frequency";
const SENTENCES_HEADER: &str = "Sentences";
const SHOWN: usize = 5;

/// Operator overview of a card list: the first and last five cards, then
/// the total. Columns are right-aligned to the width of their headers.
pub fn format_summary(cards: &[CardRecord]) -> String {
    let f_pad = FREQUENCY_HEADER.len();
    let s_pad = SENTENCES_HEADER.len();

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(
        "{FREQUENCY_HEADER:>f_pad$}  {SENTENCES_HEADER:>s_pad$}  Word"
    ));

    let row = |c: &CardRecord| {
        format!(
            "{:>f_pad$}  {:>s_pad$}  {}",
            c.frequency,
            c.sentence_count(),
            c.word
        )
    };

    lines.extend(cards.iter().take(SHOWN).map(row));

    for _ in 0..2 {
        lines.push(format!("{}...", " ".repeat(f_pad + s_pad)));
    }

    lines.extend(cards[cards.len().saturating_sub(SHOWN)..].iter().map(row));

    lines.push(String::new());
    lines.push(format!("Total cards: {}", cards.len()));

    lines.join("\n")
}
