use compact_str::CompactString;

use termcolor::{Color, ColorSpec};

use resarr_mem::ResizableArray;

/// Layout of one log record, as an ordered list of segments.
#[derive(Default)]
pub struct LogFmt {
    segments: ResizableArray<SegmentSpec>,
}

impl LogFmt {

    /// A bold, colored `[tag] ` prefix followed by the message.
    pub fn tagged(tag: &str, color: Color) -> Self {
        let mut fmt = Self::default();
        let mut text = CompactString::new("[");
        text.push_str(tag);
        text.push_str("] ");
        fmt.segments.push_back(SegmentSpec::Text(
            text,
            LogSpec::default().with_color_spec(|spec| {
                spec.set_fg(Some(color)).set_bold(true);
            }),
        ));
        fmt.segments.push_back(SegmentSpec::Message(LogSpec::default()));
        fmt
    }

    /// The bare message, no prefix.
    pub fn plain() -> Self {
        let mut fmt = Self::default();
        fmt.segments.push_back(SegmentSpec::Message(LogSpec::default()));
        fmt
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn clear(&mut self) {
        self.segments.clear();
    }
}

impl<'a> IntoIterator for &'a LogFmt {

    type Item = &'a SegmentSpec;
    type IntoIter = core::slice::Iter<'a, SegmentSpec>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.segments).into_iter()
    }
}

#[derive(Default, Clone, Debug)]
pub struct LogSpec {
    pub color_spec: Option<ColorSpec>,
}

impl LogSpec {

    #[inline(always)]
    pub fn with_color_spec(mut self, mut f: impl FnMut(&mut ColorSpec)) -> Self {
        let color_spec = self.color_spec.insert(ColorSpec::new());
        f(color_spec);
        self
    }
}

#[derive(Debug)]
pub enum SegmentSpec {
    Message(LogSpec),
    Text(CompactString, LogSpec),
}

/// Rebuilds a [`LogFmt`] from scratch.
pub struct LogFmtBuilder<'a> {
    fmt: &'a mut LogFmt,
}

impl<'a> LogFmtBuilder<'a> {

    #[inline(always)]
    pub fn new(fmt: &'a mut LogFmt) -> Self {
        fmt.clear();
        Self {
            fmt,
        }
    }

    #[inline(always)]
    pub fn message(&mut self, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.push_back(SegmentSpec::Message(f(Default::default())));
        self
    }

    #[inline(always)]
    pub fn text(&mut self, text: &str, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.push_back(SegmentSpec::Text(CompactString::new(text), f(Default::default())));
        self
    }
}

#[cfg(test)]
mod tests {

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tagged_prefixes_the_message() {
        let fmt = LogFmt::tagged("warn", Color::Yellow);
        let segments: Vec<_> = fmt.into_iter().collect();
        assert_eq!(segments.len(), 2);
        match segments[0] {
            SegmentSpec::Text(text, spec) => {
                assert_eq!(text.as_str(), "[warn] ");
                let color = spec.color_spec.as_ref().and_then(|c| c.fg().copied());
                assert_eq!(color, Some(Color::Yellow));
            },
            SegmentSpec::Message(_) => panic!("expected a text segment first"),
        }
        assert!(matches!(segments[1], SegmentSpec::Message(LogSpec { color_spec: None })));
    }

    #[test]
    fn builder_replaces_previous_segments() {
        let mut fmt = LogFmt::tagged("info", Color::Green);
        LogFmtBuilder::new(&mut fmt)
            .text(">> ", |spec| spec)
            .message(|spec| spec.with_color_spec(|c| { c.set_italic(true); }))
            .text(" <<", |spec| spec);
        assert_eq!(fmt.len(), 3);
        let texts: Vec<&str> = fmt
            .into_iter()
            .filter_map(|segment| match segment {
                SegmentSpec::Text(text, _) => Some(text.as_str()),
                SegmentSpec::Message(_) => None,
            })
            .collect();
        assert_eq!(texts, vec![">> ", " <<"]);
    }
}
