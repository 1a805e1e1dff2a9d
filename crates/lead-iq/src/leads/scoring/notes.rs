/// Each rule adds its points once when any of its phrases appears in the notes.
const NOTE_RULES: &[(&[&str], i32)] = &[
    (&["busy", "always"], 3),
    (&["no online booking", "no booking"], 6),
    (&["hard to reach", "never answers"], 5),
];

/// Case-insensitive bonus from free-text sales notes.
pub(crate) fn notes_bonus(notes: &str) -> i32 {
    let notes = notes.to_lowercase();
    NOTE_RULES
        .iter()
        .filter(|(phrases, _)| phrases.iter().any(|phrase| notes.contains(phrase)))
        .map(|(_, points)| points)
        .sum()
}
