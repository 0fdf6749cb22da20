// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote state shared by the normalizer, splitter and lexer.

pub(crate) const QUOTES: [char; 3] = ['\'', '"', '`'];

/// Role of one scanned character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scan {
    /// Outside every quote
    Structural,
    /// Opening or closing quote character
    Delimiter,
    /// Backslash escaping the next quoted character
    Escape,
    /// Literal content inside quotes
    Quoted,
}

/// Tracks whether the scan position sits inside a quoted section.
///
/// Backslash escapes the next character only inside quotes.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct QuoteTracker {
    open: Option<(char, usize)>,
    escaped: bool,
}

impl QuoteTracker {
    /// Feed the character at byte offset `pos`.
    pub(crate) fn step(&mut self, pos: usize, c: char) -> Scan {
        match self.open {
            Some(_) if self.escaped => {
                self.escaped = false;
                Scan::Quoted
            }
            Some(_) if c == '\\' => {
                self.escaped = true;
                Scan::Escape
            }
            Some((q, _)) if c == q => {
                self.open = None;
                Scan::Delimiter
            }
            Some(_) => Scan::Quoted,
            None if QUOTES.contains(&c) => {
                self.open = Some((c, pos));
                Scan::Delimiter
            }
            None => Scan::Structural,
        }
    }

    /// Open quote character and its byte offset, if any.
    pub(crate) fn open(&self) -> Option<(char, usize)> {
        self.open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comment {
    Line,
    Block,
}

/// Character scanner that drops comments starting outside quotes: `--` to
/// end of line and `/* ... */`.
///
/// The newline ending a line comment is still yielded. A closed block
/// comment is yielded as one structural space at its closing `/`.
pub(crate) struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    tracker: QuoteTracker,
    comment: Option<Comment>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            tracker: QuoteTracker::default(),
            comment: None,
        }
    }

    fn peek_is(&mut self, next: char) -> bool {
        matches!(self.chars.peek(), Some((_, c)) if *c == next)
    }
}

impl Iterator for Scanner<'_> {
    type Item = (usize, char, Scan);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (pos, c) = self.chars.next()?;
            match self.comment {
                Some(Comment::Line) => {
                    if c == '\n' {
                        self.comment = None;
                        return Some((pos, c, Scan::Structural));
                    }
                    continue;
                }
                Some(Comment::Block) => {
                    if c == '*' && self.peek_is('/') {
                        let (end, _) = self.chars.next()?;
                        self.comment = None;
                        return Some((end, ' ', Scan::Structural));
                    }
                    continue;
                }
                None => {}
            }
            let role = self.tracker.step(pos, c);
            if role == Scan::Structural {
                let opened = match c {
                    '-' if self.peek_is('-') => Some(Comment::Line),
                    '/' if self.peek_is('*') => Some(Comment::Block),
                    _ => None,
                };
                if opened.is_some() {
                    self.chars.next();
                    self.comment = opened;
                    continue;
                }
            }
            return Some((pos, c, role));
        }
    }
}

pub(crate) fn scan(input: &str) -> Scanner<'_> {
    Scanner::new(input)
}

/// Open quote left at the end of `input`, if any.
pub(crate) fn unterminated(input: &str) -> Option<(char, usize)> {
    let mut scanner = Scanner::new(input);
    scanner.by_ref().for_each(drop);
    scanner.tracker.open()
}
