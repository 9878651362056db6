const MARKER: &[u8] = b"##";

/// A section discovered during a scan: the raw key text after the `##`
/// marker and the raw body bytes, both untrimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSection<'a> {
    pub key: &'a [u8],
    pub body: &'a [u8],
}

/// Single-pass scanner over `\n`-delimited input. A section's body only
/// ends when the next header line appears, so the scanner holds the
/// current key and body start until that happens or the buffer runs out.
///
/// Two header forms are recognized. With a colon, `## key : rest`, the
/// key ends at the first `:` and the body starts right after it on the
/// same line. Without one, `## key`, the body starts on the next line.
/// Bytes after the final `\n` are body text, never a header.
pub struct SectionScanner<'a> {
    data: &'a [u8],
    offset: usize,
    key: &'a [u8],
    body_begin: usize,
    in_section: bool,
    done: bool,
}

impl<'a> SectionScanner<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            key: &[],
            body_begin: 0,
            in_section: false,
            done: false,
        }
    }

    fn finish(&mut self, body_end: usize) -> Option<RawSection<'a>> {
        if !self.in_section {
            return None;
        }
        self.in_section = false;
        let data = self.data;
        Some(RawSection {
            key: self.key,
            body: &data[self.body_begin..body_end],
        })
    }
}

impl<'a> Iterator for SectionScanner<'a> {
    type Item = RawSection<'a>;

    fn next(&mut self) -> Option<RawSection<'a>> {
        let data = self.data;
        while !self.done {
            let line_begin = self.offset;
            if line_begin >= data.len() {
                self.done = true;
                return self.finish(data.len());
            }
            let Some(length) = data[line_begin..].iter().position(|&byte| byte == b'\n') else {
                self.done = true;
                return self.finish(data.len());
            };
            let line = &data[line_begin..line_begin + length];
            self.offset = line_begin + length + 1;
            if !line.starts_with(MARKER) {
                continue;
            }
            let (next_key, next_body_begin) =
                match line.iter().position(|&byte| byte == b':') {
                    Some(colon) => (&line[MARKER.len()..colon], line_begin + colon + 1),
                    None => (&line[MARKER.len()..], self.offset),
                };
            let finished = self.finish(line_begin);
            self.key = next_key;
            self.body_begin = next_body_begin;
            self.in_section = true;
            if finished.is_some() {
                return finished;
            }
        }
        None
    }
}
