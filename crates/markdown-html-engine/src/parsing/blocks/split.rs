/// The literal blank line separating two blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into blank-line separated blocks.
///
/// Each line is trimmed and empty lines are dropped, so a block never
/// contains blank lines and is never empty. Source order is preserved.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    markdown
        .split(BLOCK_SEPARATOR)
        .filter_map(|raw| {
            let lines: Vec<&str> = raw
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
            (!lines.is_empty()).then(|| lines.join("\n"))
        })
        .collect()
}
