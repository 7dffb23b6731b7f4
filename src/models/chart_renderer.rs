//! Bar chart rendering for ranked character frequencies
//!
//! Charts are drawn with [`plotters`] onto a bitmap backend and saved as PNG.
//! One bar is drawn per distinct character, left to right in ranked order.

use crate::constants::{CHART_CAPTION, CHART_X_DESC, CHART_Y_DESC, FALLBACK_FONT_FAMILY};
use crate::types::CharFrequencyEntry;
use crate::Error;
use log::{debug, info, warn};
use plotters::coord::ranged1d::SegmentValue;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::path::Path;

/// Tick labels are drawn at this angle, counter-clockwise, in degrees.
pub const LABEL_ROTATION_DEGREES: f64 = 45.0;

/// Minimum horizontal room per bar before the chart widens.
const MIN_BAR_SLOT_PX: u32 = 28;

/// Room taken by the y label area and margins.
const CHART_FRAME_PX: u32 = 150;

const CAPTION_FONT_SIZE: i32 = 36;
const AXIS_DESC_FONT_SIZE: i32 = 24;
const TICK_FONT_SIZE: i32 = 18;
const X_LABEL_AREA_PX: u32 = 90;

// Mixed-script sample used to check that a font family loads
const FONT_PROBE_TEXT: &str = "가Aa1";

// Source pixels lighter than this are treated as background
const INK_THRESHOLD: u8 = 32;

type Result<T> = core::result::Result<T, Error>;

/// Renders ranked frequencies as a bar chart.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    font_family: String,
    base_size: (u32, u32),
}

impl ChartRenderer {
    /// Creates a renderer, resolving `preferred_font_family` on the host.
    ///
    /// If the preferred family cannot be loaded, a warning is logged and the
    /// generic sans-serif family is used instead. Glyph coverage may suffer,
    /// but the chart is still produced. Fails only if no font can be loaded.
    pub fn new(preferred_font_family: &str, base_size: (u32, u32)) -> Result<Self> {
        let font_family = resolve_font_family(preferred_font_family)?;

        Ok(ChartRenderer {
            font_family,
            base_size,
        })
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Pixel size of a chart holding `bar_count` bars.
    pub fn chart_size(&self, bar_count: usize) -> (u32, u32) {
        (chart_width(self.base_size.0, bar_count), self.base_size.1)
    }

    /// Renders the chart and writes it to `output_path`, replacing any existing file.
    pub fn render_to_file(&self, ranked: &[CharFrequencyEntry], output_path: &Path) -> Result<()> {
        let size = self.chart_size(ranked.len());
        info!(
            "Rendering {} bars ({}x{}) to {}...",
            ranked.len(),
            size.0,
            size.1,
            output_path.display()
        );

        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        self.draw(&root, ranked)?;

        // Writes the image file
        root.present()
            .map_err(|e| Error::ChartError(format!("Failed to save chart: {}", e)))?;

        Ok(())
    }

    /// Draws the chart onto an arbitrary drawing area.
    pub fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        ranked: &[CharFrequencyEntry],
    ) -> Result<()> {
        if ranked.is_empty() {
            warn!("No characters to chart; writing an empty chart");
        }

        let family = self.font_family.as_str();
        let bar_count = ranked.len();
        let y_top = y_axis_top(ranked);

        root.fill(&WHITE)
            .map_err(|e| Error::ChartError(format!("Failed to create drawing area: {}", e)))?;

        let mut chart = ChartBuilder::on(root)
            .caption(CHART_CAPTION, (family, CAPTION_FONT_SIZE))
            .margin(20)
            .x_label_area_size(X_LABEL_AREA_PX)
            .y_label_area_size(70)
            // Integer ranges are inclusive, so `0..last` yields one segment per bar
            .build_cartesian_2d((0..bar_count.saturating_sub(1)).into_segmented(), 0..y_top)
            .map_err(|e| Error::ChartError(format!("Failed to configure chart: {}", e)))?;

        // Tick labels are drawn separately so they can be rotated
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(CHART_X_DESC)
            .y_desc(CHART_Y_DESC)
            .x_label_formatter(&|_: &SegmentValue<usize>| String::new())
            .axis_desc_style((family, AXIS_DESC_FONT_SIZE))
            .label_style((family, TICK_FONT_SIZE))
            .draw()
            .map_err(|e| Error::ChartError(format!("Failed to draw mesh: {}", e)))?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BLUE.filled())
                    .margin(bar_margin(root.dim_in_pixel().0, bar_count))
                    .data(ranked.iter().enumerate().map(|(i, (_, count))| (i, *count))),
            )
            .map_err(|e| Error::ChartError(format!("Failed to draw bars: {}", e)))?;

        let label_font = FontDesc::new(
            FontFamily::from(family),
            TICK_FONT_SIZE as f64,
            FontStyle::Normal,
        );

        for (i, (ch, _)) in ranked.iter().enumerate() {
            let (tick_x, axis_y) = chart.backend_coord(&(SegmentValue::CenterOf(i), 0));
            draw_rotated_label(
                root,
                &ch.to_string(),
                &label_font,
                (tick_x, axis_y + 8),
                LABEL_ROTATION_DEGREES,
            )?;
        }

        debug!("Drew {} tick labels", bar_count);

        Ok(())
    }
}

fn resolve_font_family(preferred: &str) -> Result<String> {
    for family in [preferred, FALLBACK_FONT_FAMILY] {
        let probe = FontDesc::new(FontFamily::from(family), 20.0, FontStyle::Normal);

        match probe.box_size(FONT_PROBE_TEXT) {
            Ok(_) => {
                debug!("Using font family '{}'", family);
                return Ok(family.to_string());
            }
            Err(e) => warn!("Font family '{}' is not available: {:?}", family, e),
        }
    }

    Err(Error::ChartError(format!(
        "No usable font found (tried '{}' and '{}')",
        preferred, FALLBACK_FONT_FAMILY
    )))
}

/// Chart width that leaves every bar at least `MIN_BAR_SLOT_PX` of room.
fn chart_width(base_width: u32, bar_count: usize) -> u32 {
    let needed = (bar_count as u32)
        .saturating_mul(MIN_BAR_SLOT_PX)
        .saturating_add(CHART_FRAME_PX);

    base_width.max(needed)
}

/// Top of the y range, with a little headroom over the tallest bar.
fn y_axis_top(ranked: &[CharFrequencyEntry]) -> usize {
    let max_count = ranked.iter().map(|(_, count)| *count).max().unwrap_or(0);

    max_count + max_count / 10 + 1
}

/// Gap on each side of a bar, a fifth of its slot.
fn bar_margin(chart_width: u32, bar_count: usize) -> u32 {
    if bar_count == 0 {
        return 0;
    }

    let slot = chart_width.saturating_sub(CHART_FRAME_PX) / bar_count as u32;
    slot / 5
}

/// Bounding box of a `width` x `height` box rotated by `degrees`.
fn rotated_bounds(width: u32, height: u32, degrees: f64) -> (u32, u32) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (w, h) = (width as f64, height as f64);

    let out_w = w * cos.abs() + h * sin.abs();
    let out_h = w * sin.abs() + h * cos.abs();

    // Trig rounding would otherwise push exact sizes up a pixel
    (
        (out_w - 1e-9).ceil() as u32,
        (out_h - 1e-9).ceil() as u32,
    )
}

/// Maps an offset from the rotated label's center back to an offset from
/// the unrotated label's center. Screen coordinates, y grows downward,
/// positive `degrees` turn the label counter-clockwise.
fn unrotate_offset(dx: f64, dy: f64, degrees: f64) -> (f64, f64) {
    let (sin, cos) = degrees.to_radians().sin_cos();

    (dx * cos - dy * sin, dx * sin + dy * cos)
}

/// Draws `text` rotated about its center, with the top of its bounding box at `anchor.1`
/// and horizontally centered on `anchor.0`.
///
/// plotters only supports quarter-turn text transforms, so the label is
/// rasterized into a scratch bitmap and copied pixel by pixel.
fn draw_rotated_label<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    text: &str,
    font: &FontDesc,
    anchor: (i32, i32),
    degrees: f64,
) -> Result<()> {
    let (text_w, text_h) = font
        .box_size(text)
        .map_err(|e| Error::ChartError(format!("Failed to measure label '{}': {:?}", text, e)))?;
    let (src_w, src_h) = (text_w.max(1) + 2, text_h.max(1) + 2);

    let mut buffer = vec![255u8; (src_w * src_h * 3) as usize];
    {
        let scratch = BitMapBackend::with_buffer(&mut buffer, (src_w, src_h)).into_drawing_area();
        let style = TextStyle::from(font.clone()).color(&BLACK);

        scratch
            .draw_text(text, &style, (1, 1))
            .map_err(|e| Error::ChartError(format!("Failed to rasterize label: {}", e)))?;
        scratch
            .present()
            .map_err(|e| Error::ChartError(format!("Failed to rasterize label: {}", e)))?;
    }

    let (dst_w, dst_h) = rotated_bounds(src_w, src_h, degrees);
    let src_center = (src_w as f64 / 2.0, src_h as f64 / 2.0);
    let dst_center = (dst_w as f64 / 2.0, dst_h as f64 / 2.0);
    let origin = (anchor.0 - (dst_w / 2) as i32, anchor.1);

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let (sx, sy) = unrotate_offset(
                dst_x as f64 + 0.5 - dst_center.0,
                dst_y as f64 + 0.5 - dst_center.1,
                degrees,
            );
            let (sx, sy) = (sx + src_center.0, sy + src_center.1);

            if sx < 0.0 || sy < 0.0 || sx >= src_w as f64 || sy >= src_h as f64 {
                continue;
            }

            let offset = ((sy as u32 * src_w + sx as u32) * 3) as usize;
            let ink = 255 - buffer[offset];
            if ink < INK_THRESHOLD {
                continue;
            }

            root.draw_pixel(
                (origin.0 + dst_x as i32, origin.1 + dst_y as i32),
                &BLACK.mix(ink as f64 / 255.0),
            )
            .map_err(|e| Error::ChartError(format!("Failed to draw label: {}", e)))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_width_keeps_base_for_small_sets() {
        assert_eq!(chart_width(1500, 0), 1500);
        assert_eq!(chart_width(1500, 26), 1500);
    }

    #[test]
    fn test_chart_width_grows_for_large_label_sets() {
        // 2350 Hangul syllables would never fit in 1500px
        assert_eq!(chart_width(1500, 100), 100 * MIN_BAR_SLOT_PX + CHART_FRAME_PX);
        assert!(chart_width(1500, 2350) > 1500);
    }

    #[test]
    fn test_y_axis_top_has_headroom() {
        assert_eq!(y_axis_top(&[]), 1);
        assert_eq!(y_axis_top(&[('b', 3), ('a', 2)]), 4);
        assert_eq!(y_axis_top(&[('x', 100)]), 111);
    }

    #[test]
    fn test_bar_margin() {
        assert_eq!(bar_margin(1500, 0), 0);
        assert_eq!(bar_margin(1650, 10), 30);
    }

    #[test]
    fn test_rotated_bounds() {
        assert_eq!(rotated_bounds(10, 20, 0.0), (10, 20));
        assert_eq!(rotated_bounds(10, 20, 90.0), (20, 10));

        // 10 * cos45 + 10 * sin45 = 14.14...
        assert_eq!(rotated_bounds(10, 10, 45.0), (15, 15));
    }

    #[test]
    fn test_unrotate_offset() {
        let (x, y) = unrotate_offset(3.0, 4.0, 0.0);
        assert!((x - 3.0).abs() < 1e-9 && (y - 4.0).abs() < 1e-9);

        // A point to the right of center, turned a quarter counter-clockwise,
        // lands above center; mapping back returns it to the right.
        let (x, y) = unrotate_offset(0.0, -5.0, 90.0);
        assert!((x - 5.0).abs() < 1e-9 && y.abs() < 1e-9);
    }

    /// Horizontal runs of pure-blue columns as `(first_x, last_x, height)`.
    fn blue_column_runs(buffer: &[u8], size: (u32, u32)) -> Vec<(u32, u32, u32)> {
        let (width, height) = size;
        let is_blue = |x: u32, y: u32| {
            let offset = ((y * width + x) * 3) as usize;
            buffer[offset] == BLUE.0 && buffer[offset + 1] == BLUE.1 && buffer[offset + 2] == BLUE.2
        };

        let mut runs: Vec<(u32, u32, u32)> = Vec::new();
        let mut current: Option<(u32, u32, u32)> = None;

        for x in 0..width {
            let column_height = (0..height).filter(|&y| is_blue(x, y)).count() as u32;

            current = match (current, column_height) {
                (Some(run), 0) => {
                    runs.push(run);
                    None
                }
                (Some((start, _, h)), column_height) => Some((start, x, h.max(column_height))),
                (None, 0) => None,
                (None, column_height) => Some((x, x, column_height)),
            };
        }
        runs.extend(current);

        runs
    }

    fn render_into_buffer(ranked: &[CharFrequencyEntry]) -> Option<(Vec<u8>, (u32, u32))> {
        let renderer = match ChartRenderer::new("sans-serif", (1500, 600)) {
            Ok(renderer) => renderer,
            Err(e) => {
                eprintln!("Skipping chart rendering test: {}", e);
                return None;
            }
        };

        let size = renderer.chart_size(ranked.len());
        let mut buffer = vec![0u8; (size.0 * size.1 * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
            renderer.draw(&root, ranked).unwrap();
            root.present().unwrap();
        }

        Some((buffer, size))
    }

    #[test]
    fn test_bars_follow_ranked_order_and_heights() {
        let Some((buffer, size)) = render_into_buffer(&[('b', 3), ('a', 2), ('c', 2)]) else {
            return;
        };

        let runs = blue_column_runs(&buffer, size);
        assert_eq!(runs.len(), 3, "expected one bar per character: {:?}", runs);

        // Left to right: b (3), a (2), c (2)
        let heights: Vec<u32> = runs.iter().map(|&(_, _, h)| h).collect();
        assert!(heights[0] > heights[1]);
        assert!(heights[1].abs_diff(heights[2]) <= 1);
        assert!((heights[0] * 2).abs_diff(heights[1] * 3) <= 3, "{:?}", heights);
    }

    #[test]
    fn test_no_empty_slot_after_last_bar() {
        let Some((buffer, size)) = render_into_buffer(&[('b', 3), ('a', 2), ('c', 2)]) else {
            return;
        };

        let runs = blue_column_runs(&buffer, size);
        assert_eq!(runs.len(), 3);

        let slot = runs[1].0 - runs[0].0;
        assert!(runs[2].0 - runs[1].0 <= slot + 1);

        // Only the bar margin and chart margin remain right of the last bar
        let trailing_gap = size.0 - runs[2].1;
        assert!(
            trailing_gap < slot / 2,
            "trailing gap {} vs slot {}",
            trailing_gap,
            slot
        );
    }

    #[test]
    fn test_empty_dataset_draws_no_bars() {
        let Some((buffer, size)) = render_into_buffer(&[]) else {
            return;
        };

        assert!(blue_column_runs(&buffer, size).is_empty());
    }
}
