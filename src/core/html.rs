// src/core/html.rs
//
// Case-insensitive tag scanning. No DOM; good enough for pulling text out of
// simple content tags.

pub fn to_lower(s: &str) -> String {
    // ASCII-only so byte offsets line up with the original
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next `<tag ...>` opener at or after `from` in an already
/// lowercased document. Returns (start of `<`, index just past `>`).
/// `<p` does not match `<pre>` or `<param>`.
pub fn next_open_tag(lc: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let pat = join!("<", tag);
    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(&pat)? + at;
        let after = start + pat.len();
        match lc.as_bytes().get(after) {
            Some(b'>') | Some(b'/') => {}
            Some(b) if b.is_ascii_whitespace() => {}
            _ => {
                at = after;
                continue;
            }
        }
        let open_end = lc[after..].find('>')? + after + 1;
        return Some((start, open_end));
    }
}

/// Inner HTML of every `<tag>` element in document order. An element ends
/// at its closing tag, at the next opener of the same tag (HTML's implicit
/// close for `<p>`), or at the end of the document.
pub fn tag_blocks_ci<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    let lc = to_lower(s);
    let close = join!("</", tag);
    let mut out = Vec::new();
    let mut from = 0;

    while let Some((_, open_end)) = next_open_tag(&lc, tag, from) {
        let close_at = lc[open_end..].find(&close).map(|i| i + open_end);
        let next_at = next_open_tag(&lc, tag, open_end).map(|(st, _)| st);
        let end = match (close_at, next_at) {
            (Some(c), Some(n)) => c.min(n),
            (Some(c), None) => c,
            (None, Some(n)) => n,
            (None, None) => s.len(),
        };
        out.push(&s[open_end..end]);
        from = end;
    }
    out
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&super::sanitize::normalize_entities(&out))
}
