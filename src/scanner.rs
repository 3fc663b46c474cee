//! Discovers menu entries in a filtered GRUB configuration.
//!
//! Block depth is tracked with a single counter of open `menuentry`/`submenu`
//! blocks, and only one level of submenu is recognized. A top-level index is
//! consumed each time the depth returns to zero.

use crate::entry::{match_block, MenuEntry, MENUENTRY, SUBMENU};

#[derive(Debug, Default)]
struct ScanState {
    depth: usize,
    top_index: usize,
    sub_index: usize,
    group: Option<Box<str>>,
}

impl ScanState {
    fn feed(&mut self, line: &str) -> Option<MenuEntry> {
        let mut found = None;
        let mut opened = false;

        if let Some(title) = match_block(line, MENUENTRY) {
            self.depth += 1;
            opened = true;
            // An empty submenu title still counts as an open submenu.
            found = Some(match self.group {
                Some(ref group) => {
                    let entry = MenuEntry::Nested {
                        index: self.top_index,
                        sub_index: self.sub_index,
                        group: group.clone(),
                        title: title.into(),
                    };
                    self.sub_index += 1;
                    entry
                }
                None => MenuEntry::TopLevel { index: self.top_index, title: title.into() },
            });
        }

        if let Some(title) = match_block(line, SUBMENU) {
            debug!("entering submenu {:?} at index {}", title, self.top_index);
            self.depth += 1;
            opened = true;
            self.group = Some(title.into());
        }

        if line.starts_with('}') {
            if self.depth > 0 {
                self.depth -= 1;
                if self.depth == 0 {
                    self.top_index += 1;
                    self.group = None;
                    self.sub_index = 0;
                }
            } else {
                trace!("ignoring closing brace outside of a menu block");
            }
        } else if !opened {
            trace!("ignoring line {:?}", line);
        }

        found
    }
}

/// Lazily yields the menu entries found in a sequence of filtered lines.
///
/// Lines must already be trimmed, with blank and comment lines removed.
/// Unrecognized lines are skipped without affecting the scan.
#[derive(Debug)]
pub struct Scanner<I> {
    lines: I,
    state: ScanState,
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new<L: IntoIterator<IntoIter = I>>(lines: L) -> Self {
        Self { lines: lines.into_iter(), state: ScanState::default() }
    }
}

impl<I> Iterator for Scanner<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = MenuEntry;

    fn next(&mut self) -> Option<MenuEntry> {
        let Scanner { lines, state } = self;
        lines.find_map(|line| state.feed(line.as_ref())).map(|entry| {
            debug!("found entry {}", entry);
            entry
        })
    }
}

/// Scans the given lines for menu entries.
pub fn scan<L>(lines: L) -> Scanner<L::IntoIter>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    Scanner::new(lines)
}
