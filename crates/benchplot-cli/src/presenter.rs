//! Text chart renderer.

use std::io::{self, Write};

use benchplot_core::{ChartRenderer, ChartSpec, PlotError};

use crate::output::format_table;

/// Renders charts as plain-text tables.
pub struct TextChartRenderer<W: Write> {
    out: W,
}

impl TextChartRenderer<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextChartRenderer<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_chart(&mut self, chart: &ChartSpec) -> io::Result<()> {
        writeln!(self.out, "{}", chart.title)?;
        writeln!(self.out, "{} vs {}", chart.y_title, chart.x_title)?;
        write!(self.out, "{}", format_table(chart))?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> ChartRenderer for TextChartRenderer<W> {
    fn render(&mut self, chart: &ChartSpec) -> Result<(), PlotError> {
        self.write_chart(chart)
            .map_err(|e| PlotError::Render(format!("{}: {e}", chart.title)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchplot_core::LabeledSeries;

    #[test]
    fn renders_title_axes_and_rows() {
        let mut buf = Vec::new();
        let chart = ChartSpec::new(
            "matTranspose OMP",
            vec![
                LabeledSeries::new("# Threads : 1", vec![0.002; 9]),
                LabeledSeries::new("# Threads : 2", vec![0.001; 9]),
            ],
        );
        TextChartRenderer::new(&mut buf).render(&chart).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("matTranspose OMP\n"));
        assert!(text.contains("Elaboration Time (s) vs Matrix Size (n)"));
        assert!(text.contains("# Threads : 2"));
        assert!(text.contains("2.00ms"));
    }

    #[test]
    fn renders_empty_chart() {
        let mut buf = Vec::new();
        TextChartRenderer::new(&mut buf)
            .render(&ChartSpec::new("checkSym MPI", vec![]))
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("checkSym MPI"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_render_error() {
        let mut r = TextChartRenderer::new(FailingWriter);
        let err = r.render(&ChartSpec::new("t", vec![])).unwrap_err();
        assert!(matches!(err, PlotError::Render(_)));
    }
}
