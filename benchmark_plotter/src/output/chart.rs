//!
//! The comparison line chart.
//!

use std::path::Path;

use plotters::prelude::*;

use crate::alignment::Aligned;
use crate::model::implementation::Implementation;

///
/// The comparison line chart, one line per implementation.
///
pub struct Chart<'a> {
    /// The aligned series to draw.
    pub aligned: &'a Aligned,
    /// The chart caption.
    pub title: &'static str,
    /// The image size in pixels.
    pub dimensions: (u32, u32),
}

impl<'a> Chart<'a> {
    /// The default chart caption.
    pub const TITLE: &'static str = "FFT Times";
    /// The x axis description.
    pub const X_DESCRIPTION: &'static str = "FFT Size";
    /// The y axis description.
    pub const Y_DESCRIPTION: &'static str = "Time (ns)";
    /// The default image size in pixels.
    pub const DIMENSIONS: (u32, u32) = (1024, 768);

    const FONT: &'static str = "sans-serif";
    const MARKER_RADIUS: u32 = 3;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(aligned: &'a Aligned) -> Self {
        Self {
            aligned,
            title: Self::TITLE,
            dimensions: Self::DIMENSIONS,
        }
    }

    ///
    /// Draws the chart as an SVG image at `path`, creating missing parent directories.
    ///
    pub fn render(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| {
                anyhow::anyhow!("Chart directory {parent:?} creating: {error}")
            })?;
        }

        let root = SVGBackend::new(path, self.dimensions).into_drawing_area();
        root.fill(&WHITE)?;

        let x_axis = x_range(self.aligned.sizes.as_slice());
        let y_end = self
            .aligned
            .max_time()
            .filter(|time| *time > 0.0)
            .map(|time| time * 1.1)
            .unwrap_or(1.0);

        let mut chart = ChartBuilder::on(&root)
            .caption(self.title, (Self::FONT, 32))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(x_axis, 0f64..y_end)?;

        chart
            .configure_mesh()
            .x_desc(Self::X_DESCRIPTION)
            .y_desc(Self::Y_DESCRIPTION)
            .label_style((Self::FONT, 16))
            .axis_desc_style((Self::FONT, 20))
            .draw()?;

        for (implementation, values) in self.aligned.series.iter() {
            let color = color(*implementation);
            let style = color.stroke_width(2);

            // The legend entry is attached to an empty series, as a series may consist
            // of several segments or none at all.
            chart
                .draw_series(LineSeries::new(Vec::<(usize, f64)>::new(), style))?
                .label(implementation.label())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

            for segment in segments(self.aligned.sizes.as_slice(), values.as_slice()) {
                chart.draw_series(
                    segment
                        .iter()
                        .map(|point| Circle::new(*point, Self::MARKER_RADIUS, color.filled())),
                )?;
                chart.draw_series(LineSeries::new(segment, style))?;
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((Self::FONT, 16))
            .draw()?;

        root.present()
            .map_err(|error| anyhow::anyhow!("Chart file {path:?} writing: {error}"))?;
        Ok(())
    }
}

///
/// The line color of `implementation`.
///
fn color(implementation: Implementation) -> RGBColor {
    match implementation {
        Implementation::RustFFT => RGBColor(31, 119, 180),
        Implementation::FFTW => RGBColor(255, 127, 14),
        Implementation::Monarch => RGBColor(44, 160, 44),
    }
}

///
/// The x axis range covering the ascending `sizes`, never empty.
///
fn x_range(sizes: &[usize]) -> std::ops::Range<usize> {
    let start = sizes.first().copied().unwrap_or(0);
    let end = sizes
        .last()
        .copied()
        .unwrap_or(1)
        .max(start.saturating_add(1));
    start.min(end - 1)..end
}

///
/// Splits a series into runs of consecutive measured points.
///
fn segments(sizes: &[usize], values: &[Option<f64>]) -> Vec<Vec<(usize, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (size, value) in sizes.iter().zip(values.iter()) {
        match value {
            Some(value) => current.push((*size, *value)),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::segments;
    use super::x_range;
    use super::Chart;
    use crate::alignment::Aligned;
    use crate::model::implementation::Implementation;

    #[test]
    fn segments_contiguous() {
        let result = segments(&[1, 2, 3], &[Some(1.0), Some(2.0), Some(3.0)]);
        assert_eq!(result, vec![vec![(1, 1.0), (2, 2.0), (3, 3.0)]]);
    }

    #[test]
    fn segments_gaps() {
        let result = segments(
            &[1, 2, 3, 4, 5, 6],
            &[None, Some(2.0), None, None, Some(5.0), Some(6.0)],
        );
        assert_eq!(result, vec![vec![(2, 2.0)], vec![(5, 5.0), (6, 6.0)]]);
    }

    #[test]
    fn segments_empty() {
        assert!(segments(&[1, 2], &[None, None]).is_empty());
        assert!(segments(&[], &[]).is_empty());
    }

    #[test]
    fn x_range_bounds() {
        assert_eq!(x_range(&[]), 0..1);
        assert_eq!(x_range(&[64]), 64..65);
        assert_eq!(x_range(&[8, 1024]), 8..1024);
        assert_eq!(x_range(&[usize::MAX]), usize::MAX - 1..usize::MAX);
    }

    #[test]
    fn render() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let path = directory.path().join("charts").join("comparison.svg");
        let aligned = Aligned {
            sizes: vec![1024, 2048],
            series: vec![
                (Implementation::RustFFT, vec![Some(120.5), Some(250.0)]),
                (Implementation::FFTW, vec![Some(95.2), None]),
                (Implementation::Monarch, vec![Some(80.0), Some(170.0)]),
            ],
        };

        Chart::new(&aligned)
            .render(path.as_path())
            .expect("Chart rendering");

        let content = std::fs::read_to_string(path).expect("Chart reading");
        assert!(content.contains("<svg"));
        assert!(content.contains("FFT Times"));
        assert!(content.contains("FFT Size"));
        assert!(content.contains("Time (ns)"));
        for implementation in Implementation::ALL {
            assert!(content.contains(implementation.label()));
        }
    }

    #[test]
    fn render_empty() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let path = directory.path().join("empty.svg");
        let aligned = Aligned {
            sizes: vec![],
            series: Implementation::ALL
                .into_iter()
                .map(|implementation| (implementation, vec![]))
                .collect(),
        };

        Chart::new(&aligned)
            .render(path.as_path())
            .expect("Chart rendering");
        assert!(path.exists());
    }
}
