//! Source span lookup for manifest values.

use miette::SourceSpan;

/// Find the span of the value assigned to `key` in the TOML source.
///
/// Matches the first non-comment line of the form `key = value`. Returns
/// `None` if the key is not written out, rather than pointing somewhere wrong.
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;

    for line in src.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let trimmed = line.trim_start();
        if trimmed.starts_with('#') {
            continue;
        }
        let Some(rest) = trimmed.strip_prefix(key) else {
            continue;
        };
        let Some(value) = rest.trim_start().strip_prefix('=') else {
            continue;
        };

        let value_trimmed = value.trim_start();
        let value_start = line_start + (line.len() - value_trimmed.len());
        let value_len = value_trimmed.trim_end().len();
        return Some(SourceSpan::from((value_start, value_len)));
    }

    None
}
