/// Normalize raw resume text to a canonical token stream
///
/// This is Stage 1 of the scoring pipeline. Lowercases the text, replaces
/// every character that is not an ASCII lowercase letter, digit, or
/// whitespace with a space, collapses whitespace runs, and trims.
///
/// Total and idempotent; the output alphabet is exactly `[a-z0-9 ]` with
/// single spaces between tokens.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();

    let replaced: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
