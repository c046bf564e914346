/// Greedy word wrap at `width` characters.
///
/// Whitespace characters are normalized to spaces and runs of them are kept inside a line; the
/// whitespace run that would start a continuation line, or end any line, is dropped. Words longer
/// than the remaining space on a line are split so no line exceeds `width`. Text that is empty or
/// only whitespace yields no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut chunks = split_chunks(text);
    chunks.reverse();

    let mut lines = Vec::new();
    while !chunks.is_empty() {
        let mut line: Vec<Vec<char>> = Vec::new();
        let mut line_len = 0usize;

        if !lines.is_empty() && chunks.last().is_some_and(|c| is_space(c)) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.last() {
            if line_len + chunk.len() > width {
                break;
            }
            line_len += chunk.len();
            if let Some(chunk) = chunks.pop() {
                line.push(chunk);
            }
        }

        // A full line leaves the long word for the next one.
        if let Some(chunk) = chunks.last_mut()
            && chunk.len() > width
            && line_len < width
        {
            let rest = chunk.split_off(width - line_len);
            let head = std::mem::replace(chunk, rest);
            line.push(head);
        }

        if line.last().is_some_and(|c| is_space(c)) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.into_iter().flatten().collect());
        }
    }
    lines
}

fn is_space(chunk: &[char]) -> bool {
    chunk.first().is_some_and(|c| *c == ' ')
}

/// Alternating runs of spaces and non-spaces, with tabs and newlines already turned into spaces.
fn split_chunks(text: &str) -> Vec<Vec<char>> {
    let mut chunks: Vec<Vec<char>> = Vec::new();
    for c in text.chars() {
        let c = if c.is_whitespace() { ' ' } else { c };
        match chunks.last_mut() {
            Some(last) if (last[0] == ' ') == (c == ' ') => last.push(c),
            _ => chunks.push(vec![c]),
        }
    }
    chunks
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
