//!
//! The terminal summary of the aligned series.
//!

use colored::Colorize;

use crate::alignment::Aligned;
use crate::model::implementation::Implementation;

///
/// The terminal summary of the aligned series.
///
/// Prints one row per input size and highlights the fastest implementation.
///
pub struct Summary<'a> {
    /// The aligned series.
    pub aligned: &'a Aligned,
}

impl<'a> Summary<'a> {
    const SIZE_WIDTH: usize = 10;
    const VALUE_WIDTH: usize = 14;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(aligned: &'a Aligned) -> Self {
        Self { aligned }
    }

    ///
    /// Returns the implementation with the lowest mean time at the `index`-th size.
    ///
    pub fn fastest(&self, index: usize) -> Option<Implementation> {
        self.aligned
            .series
            .iter()
            .filter_map(|(implementation, values)| {
                values
                    .get(index)
                    .copied()
                    .flatten()
                    .map(|value| (*implementation, value))
            })
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(implementation, _)| implementation)
    }

    ///
    /// Prints the summary to `stdout`.
    ///
    pub fn print(&self) -> anyhow::Result<()> {
        self.write_all(&mut std::io::stdout())
    }

    ///
    /// Writes the summary to `w`.
    ///
    pub fn write_all<W>(&self, w: &mut W) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        let width = Self::SIZE_WIDTH + Self::VALUE_WIDTH * self.aligned.series.len();
        let title = "Mean time (ns)";

        writeln!(
            w,
            "╔═╡ {} ╞{}╗",
            title.bright_white(),
            "═".repeat(width.saturating_sub(title.len() + 3))
        )?;
        write!(w, "║{:>width$}", "Size".bright_white(), width = Self::SIZE_WIDTH)?;
        for (implementation, _) in self.aligned.series.iter() {
            write!(
                w,
                "{}",
                format!("{:>width$}", implementation.label(), width = Self::VALUE_WIDTH)
                    .bright_white()
            )?;
        }
        writeln!(w, "║")?;

        for (index, size) in self.aligned.sizes.iter().enumerate() {
            let fastest = self.fastest(index);
            write!(w, "║{size:>width$}", width = Self::SIZE_WIDTH)?;
            for (implementation, values) in self.aligned.series.iter() {
                match values.get(index).copied().flatten() {
                    Some(value) => {
                        let cell = format!("{value:>width$.3}", width = Self::VALUE_WIDTH);
                        if fastest == Some(*implementation) {
                            write!(w, "{}", cell.green())?;
                        } else {
                            write!(w, "{cell}")?;
                        }
                    }
                    None => write!(w, "{:>width$}", "-", width = Self::VALUE_WIDTH)?,
                }
            }
            writeln!(w, "║")?;
        }

        writeln!(w, "╚{}╝", "═".repeat(width))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Summary;
    use crate::alignment::Aligned;
    use crate::model::implementation::Implementation;

    fn aligned() -> Aligned {
        Aligned {
            sizes: vec![16, 32],
            series: vec![
                (Implementation::RustFFT, vec![Some(30.0), Some(61.5)]),
                (Implementation::FFTW, vec![Some(25.0), None]),
                (Implementation::Monarch, vec![Some(12.25), Some(70.0)]),
            ],
        }
    }

    #[test]
    fn fastest() {
        let aligned = aligned();
        let summary = Summary::new(&aligned);
        assert_eq!(summary.fastest(0), Some(Implementation::Monarch));
        assert_eq!(summary.fastest(1), Some(Implementation::RustFFT));
        assert_eq!(summary.fastest(2), None);
    }

    #[test]
    fn write_all() {
        let aligned = aligned();
        let mut buffer = Vec::new();
        Summary::new(&aligned)
            .write_all(&mut buffer)
            .expect("Writing to memory");
        let text = String::from_utf8(buffer).expect("Always valid");

        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("rustfft"));
        assert!(text.contains("12.250"));
        assert!(text.contains("61.500"));
        assert!(text.lines().nth(3).is_some_and(|line| line.contains('-')));
    }
}
