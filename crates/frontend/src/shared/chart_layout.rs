//! Per-context layout of the chart widgets.
//!
//! Charts appear twice: as a small tile on the dashboard and as a full page.
//! Everything that differs between the two lives in [`ChartLayout`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartContext {
    Dashboard,
    FullPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLayout {
    pub width_px: u32,
    pub height_px: u32,
    pub margin: Margin,
    pub show_legend: bool,
    pub axis_bottom_legend: Option<&'static str>,
    pub axis_left_legend: Option<&'static str>,
    pub selector_font_px: u32,
}

impl ChartLayout {
    pub fn for_context(
        context: ChartContext,
        axis_bottom_legend: &'static str,
        axis_left_legend: &'static str,
    ) -> Self {
        match context {
            ChartContext::Dashboard => Self {
                width_px: 520,
                height_px: 250,
                margin: Margin {
                    top: 20,
                    right: 20,
                    bottom: 30,
                    left: 50,
                },
                show_legend: false,
                axis_bottom_legend: None,
                axis_left_legend: None,
                selector_font_px: 12,
            },
            ChartContext::FullPage => Self {
                width_px: 960,
                height_px: 560,
                margin: Margin {
                    top: 50,
                    right: 150,
                    bottom: 60,
                    left: 80,
                },
                show_legend: true,
                axis_bottom_legend: Some(axis_bottom_legend),
                axis_left_legend: Some(axis_left_legend),
                selector_font_px: 17,
            },
        }
    }

    /// Drawable width inside the margins.
    pub fn inner_width(&self) -> f64 {
        self.width_px.saturating_sub(self.margin.left + self.margin.right) as f64
    }

    /// Drawable height inside the margins.
    pub fn inner_height(&self) -> f64 {
        self.height_px.saturating_sub(self.margin.top + self.margin.bottom) as f64
    }
}

/// Evenly spaced tick values from 0 up to at least `max`.
pub fn axis_ticks(max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !max.is_finite() || max <= 0.0 {
        return vec![0.0];
    }
    let step = max / count as f64;
    (0..=count).map(|i| step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_layout_hides_legends() {
        let layout = ChartLayout::for_context(ChartContext::Dashboard, "Month", "Inbound Traffic");
        assert!(!layout.show_legend);
        assert_eq!(layout.axis_bottom_legend, None);
        assert_eq!(layout.axis_left_legend, None);
        assert_eq!(layout.selector_font_px, 12);
    }

    #[test]
    fn test_full_page_layout_shows_axis_legends() {
        let layout = ChartLayout::for_context(ChartContext::FullPage, "Month", "Inbound Traffic");
        assert!(layout.show_legend);
        assert_eq!(layout.axis_bottom_legend, Some("Month"));
        assert_eq!(layout.axis_left_legend, Some("Inbound Traffic"));
        assert_eq!(layout.inner_width(), 730.0);
        assert_eq!(layout.inner_height(), 450.0);
    }

    #[test]
    fn test_axis_ticks() {
        assert_eq!(axis_ticks(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(axis_ticks(0.0, 4), vec![0.0]);
        assert_eq!(axis_ticks(f64::NAN, 4), vec![0.0]);
    }
}
