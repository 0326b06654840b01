// std imports
use std::{
    fmt,
    io::{self, IsTerminal},
};

// third-party imports
use owo_colors::OwoColorize;
use terminal_size::terminal_size;

/// Returns the width of the terminal attached to standard output, if any.
pub fn terminal_width() -> Option<usize> {
    if io::stdout().is_terminal() {
        terminal_size().map(|(w, _)| usize::from(w.0))
    } else {
        None
    }
}

// ---

pub struct Formatter<O> {
    width: Option<usize>,
    output: O,
}

impl<O> Formatter<O>
where
    O: io::Write,
{
    pub fn new(output: O, width: Option<usize>) -> Self {
        Self { output, width }
    }

    /// Prints items in columns under group headers, or a plain list when the width is unknown.
    pub fn format_grouped_list<G, V, GI, I>(&mut self, groups: GI) -> io::Result<()>
    where
        GI: IntoIterator<Item = (G, I)>,
        I: IntoIterator<Item = V>,
        G: fmt::Display,
        V: AsRef<str>,
    {
        let Some(width) = self.width else {
            return self.format_raw_list(groups.into_iter().flat_map(|x| x.1));
        };

        let groups = groups
            .into_iter()
            .map(|(g, items)| (g, items.into_iter().collect::<Vec<_>>()))
            .collect::<Vec<_>>();

        let max_len = groups
            .iter()
            .flat_map(|x| x.1.iter().map(|x| x.as_ref().len()))
            .max()
            .unwrap_or(0);

        let columns = (width / (max_len + 4)).max(1);
        let out = &mut self.output;

        for (group, items) in &groups {
            writeln!(out, "{}:", group.bold())?;

            let rows = items.len().div_ceil(columns);
            for row in 0..rows {
                for col in 0..columns {
                    if let Some(val) = items.get(row + col * rows) {
                        write!(out, "• {:width$}", val.as_ref(), width = max_len + 2)?;
                    }
                }
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn format_raw_list<I, V>(&mut self, items: I) -> io::Result<()>
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        for item in items {
            writeln!(&mut self.output, "{}", item.as_ref())?;
        }
        Ok(())
    }
}
