//! Query scanner.
//!
//! Splits a raw query string into a flat sequence of whitespace gaps and
//! query nodes in a single pass. Quoted phrases and range expressions are
//! recognized here, so the renderer never has to protect their contents
//! from the generic `field:value` rewrite. Anything the scanner cannot
//! classify is kept as verbatim text; scanning never fails.

/// One piece of a scanned query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// A run of whitespace, reproduced byte-for-byte in the output.
    Gap(String),
    /// A classified query construct.
    Node(Node),
}

/// A classified query construct.
///
/// `prefix` carries a leading run of `+` and `(` characters and `suffix`
/// whatever trailed the construct within its token (typically closing
/// parentheses); both are reproduced around the rewritten form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    /// Text the rewrite leaves untouched: bare terms, wildcards, and
    /// fragments too malformed to classify.
    Verbatim(String),

    /// A plain `field:value` pair.
    Pair {
        /// Leading `+`/`(` run.
        prefix: String,
        /// Logical field name.
        field: String,
        /// Field value (no embedded whitespace).
        value: String,
        /// Trailing token text.
        suffix: String,
    },

    /// A quoted `field:"phrase"` pair. Escape sequences inside the phrase
    /// are preserved exactly as written.
    Phrase {
        /// Leading `+`/`(` run.
        prefix: String,
        /// Logical field name.
        field: String,
        /// Phrase content between the quotes.
        phrase: String,
        /// Trailing token text.
        suffix: String,
    },

    /// A `field:[lo TO hi]` range. Brackets are tracked per side because
    /// inclusive (`[`/`]`) and exclusive (`{`/`}`) markers combine freely.
    Range {
        /// Leading `+`/`(` run.
        prefix: String,
        /// Logical field name.
        field: String,
        /// Opening bracket as written.
        open: char,
        /// Lower bound as written.
        lo: String,
        /// Upper bound as written.
        hi: String,
        /// Closing bracket as written.
        close: char,
        /// Trailing token text.
        suffix: String,
    },

    /// A `field:[* TO *]` range in any bracket style, which matches every
    /// document and collapses to a bare wildcard on the content field.
    MatchAny {
        /// Leading `+`/`(` run.
        prefix: String,
        /// Trailing token text.
        suffix: String,
    },
}

/// Characters that may appear in a logical field name.
///
/// The exclusions mirror the token boundaries of the query syntax:
/// whitespace and parentheses delimit tokens, `:` delimits the value, and
/// `+`, `"`, `\` all carry meaning of their own.
fn is_field_char(ch: char) -> bool {
    !ch.is_whitespace() && !matches!(ch, ':' | '(' | ')' | '+' | '"' | '\\')
}

/// Single-pass scanner over a query string.
struct Scanner<'a> {
    /// The original input.
    input: &'a str,
    /// Current byte position.
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner at the start of `input`.
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the unscanned remainder of the input.
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the next character.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consumes characters while `pred` holds, returning the consumed slice.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        &self.input[start..self.pos]
    }

    /// Scans the entire input into segments.
    fn scan(mut self) -> Vec<Segment> {
        let mut segments = Vec::new();

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                let gap = self.eat_while(char::is_whitespace);
                segments.push(Segment::Gap(gap.to_string()));
            } else {
                segments.push(Segment::Node(self.token()));
            }
        }

        segments
    }

    /// Scans one token starting at a non-whitespace character.
    fn token(&mut self) -> Node {
        let start = self.pos;

        let prefix = self.eat_while(|c| c == '+' || c == '(').to_string();
        let field = self.eat_while(is_field_char).to_string();

        if field.is_empty() || self.peek() != Some(':') {
            return self.verbatim_token(start);
        }
        self.bump(); // consume ':'

        match self.peek() {
            Some('"') => self.phrase(start, prefix, field),
            Some('[' | '{') => self.range(start, prefix, field),
            // A value opening a group or requiring a term is itself an
            // expression; leave the whole token alone.
            Some('+' | '(') => self.verbatim_token(start),
            _ => self.pair(start, prefix, field),
        }
    }

    /// Scans the value of a plain `field:value` pair.
    fn pair(&mut self, start: usize, prefix: String, field: String) -> Node {
        let value = self
            .eat_while(|c| !c.is_whitespace() && c != '(' && c != ')')
            .to_string();

        if value.is_empty() {
            return self.verbatim_token(start);
        }

        let suffix = self.token_tail();
        Node::Pair {
            prefix,
            field,
            value,
            suffix,
        }
    }

    /// Scans a quoted phrase value, honoring `\"` escapes.
    ///
    /// An unclosed quote demotes everything from the token start to the end
    /// of the input to verbatim text.
    fn phrase(&mut self, start: usize, prefix: String, field: String) -> Node {
        self.bump(); // consume opening quote
        let content_start = self.pos;

        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some('"') => {
                    let phrase = self.input[content_start..self.pos - 1].to_string();
                    let suffix = self.token_tail();
                    return Node::Phrase {
                        prefix,
                        field,
                        phrase,
                        suffix,
                    };
                }
                Some(_) => {}
                None => return self.verbatim_rest(start),
            }
        }
    }

    /// Scans a range value between `[`/`{` and `]`/`}`.
    ///
    /// The bounds must be single terms separated by ` TO `; anything else
    /// (including an unclosed bracket) is kept verbatim.
    fn range(&mut self, start: usize, prefix: String, field: String) -> Node {
        let open = self.bump().unwrap_or_default();
        let content_start = self.pos;

        let close = loop {
            match self.bump() {
                Some(ch @ (']' | '}')) => break ch,
                Some(_) => {}
                None => return self.verbatim_rest(start),
            }
        };

        let inner = &self.input[content_start..self.pos - 1];
        let suffix = self.token_tail();

        let Some((lo, hi)) = inner.split_once(" TO ") else {
            return Node::Verbatim(self.input[start..self.pos].to_string());
        };
        if lo.is_empty()
            || hi.is_empty()
            || lo.contains(char::is_whitespace)
            || hi.contains(char::is_whitespace)
        {
            return Node::Verbatim(self.input[start..self.pos].to_string());
        }

        if lo == "*" && hi == "*" {
            return Node::MatchAny { prefix, suffix };
        }

        Node::Range {
            prefix,
            field,
            open,
            lo: lo.to_string(),
            hi: hi.to_string(),
            close,
            suffix,
        }
    }

    /// Consumes the remaining non-whitespace tail of the current token.
    fn token_tail(&mut self) -> String {
        self.eat_while(|c| !c.is_whitespace()).to_string()
    }

    /// Rewinds to `start` and consumes one whitespace-delimited token verbatim.
    fn verbatim_token(&mut self, start: usize) -> Node {
        self.pos = start;
        let text = self.eat_while(|c| !c.is_whitespace());
        Node::Verbatim(text.to_string())
    }

    /// Consumes everything from `start` to the end of the input verbatim.
    fn verbatim_rest(&mut self, start: usize) -> Node {
        self.pos = self.input.len();
        Node::Verbatim(self.input[start..].to_string())
    }
}

/// Scans a query string into gaps and nodes.
pub(crate) fn scan(input: &str) -> Vec<Segment> {
    Scanner::new(input).scan()
}
