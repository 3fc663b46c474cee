use std::fmt;

pub const MENUENTRY: &str = "menuentry";
pub const SUBMENU: &str = "submenu";

/// A bootable entry discovered in the GRUB configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// An entry declared at the top level of the menu.
    TopLevel { index: usize, title: Box<str> },
    /// An entry declared inside a submenu.
    Nested {
        index: usize,
        sub_index: usize,
        group: Box<str>,
        title: Box<str>,
    },
}

impl MenuEntry {
    /// The identifier accepted by `grub-set-default` and `grub-reboot`.
    pub fn id(&self) -> String {
        match self {
            MenuEntry::TopLevel { index, .. } => index.to_string(),
            MenuEntry::Nested { index, sub_index, .. } => format!("{}>{}", index, sub_index),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MenuEntry::TopLevel { title, .. } | MenuEntry::Nested { title, .. } => title,
        }
    }

    /// The enclosing submenu title, if any.
    pub fn group(&self) -> Option<&str> {
        match self {
            MenuEntry::TopLevel { .. } => None,
            MenuEntry::Nested { group, .. } => Some(group.as_ref()),
        }
    }
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MenuEntry::TopLevel { index, title } => write!(f, "{}\t{}", index, title),
            MenuEntry::Nested { index, sub_index, group, title } => {
                write!(f, "{}>{}\t{}>{}", index, sub_index, group, title)
            }
        }
    }
}

/// Matches a block opener of the form `<keyword> 'title'` or `<keyword> "title"`,
/// returning the title.
///
/// The keyword must start the line (leading whitespace aside) and be followed by
/// at least one whitespace character. The title ends at the next occurrence of
/// the opening quote, so an unterminated quote is not a match.
pub fn match_block<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.trim_start().strip_prefix(keyword)?;

    let unspaced = rest.trim_start();
    if unspaced.len() == rest.len() {
        return None;
    }

    let mut chars = unspaced.chars();
    let quote = chars.next().filter(|&c| c == '\'' || c == '"')?;
    let content = chars.as_str();

    content.find(quote).map(|end| &content[..end])
}
