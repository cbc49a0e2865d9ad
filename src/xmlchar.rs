pub trait CxmlChar {
    fn is_cxml_name_start_char(&self) -> bool;

    fn is_cxml_name_char(&self) -> bool;

    fn is_cxml_punctuation(&self) -> bool;

    fn is_cxml_whitespace(&self) -> bool;

    fn is_cxml_text_terminator(&self) -> bool;
}

impl CxmlChar for char {
    /// NameStartChar ::= \[A-Z\] | \[a-z\] | "_"
    fn is_cxml_name_start_char(&self) -> bool {
        matches!(self, 'A'..='Z' | 'a'..='z' | '_')
    }

    /// NameChar ::= NameStartChar | \[0-9\] | "-" | "."
    fn is_cxml_name_char(&self) -> bool {
        self.is_cxml_name_start_char() || matches!(self, '0'..='9' | '-' | '.')
    }

    fn is_cxml_punctuation(&self) -> bool {
        matches!(self, ':' | ',' | '=' | '/' | '{' | '}' | '(' | ')')
    }

    /// Only the space character separates tokens; tabs and newlines are illegal
    fn is_cxml_whitespace(&self) -> bool {
        *self == ' '
    }

    /// An unquoted value runs until one of these
    fn is_cxml_text_terminator(&self) -> bool {
        matches!(self, ',' | '}' | '/' | ')')
    }
}
