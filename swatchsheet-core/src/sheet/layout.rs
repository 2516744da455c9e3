use crate::page::POINTS_PER_INCH;
use crate::text::Font;
use crate::variants::STEPS;

/// A font at a given size.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f64,
}

impl TextStyle {
    pub fn new(font: Font, size: f64) -> Self {
        Self { font, size }
    }
}

/// Geometry and typography of the swatch sheet, in points.
///
/// `Default` is the print layout: an 11.61 × 15.24 inch page with a 200pt
/// margin on every side.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub page_width: f64,
    pub page_height: f64,
    pub margin: f64,

    /// Side of a square swatch.
    pub cell: f64,
    /// Gaps between swatches inside a group.
    pub gap_x: f64,
    pub gap_y: f64,
    /// Gaps between groups.
    pub group_gap_x: f64,
    pub group_gap_y: f64,
    /// Room for the two label lines under the last swatch row of a group.
    pub label_space: f64,

    pub name_line_height: f64,
    pub cmyk_line_height: f64,
    pub title_line_height: f64,
    pub comment_height: f64,
    /// Distance from the nominal grid top down to the comment baseline.
    pub comment_anchor: f64,
    /// Gap between the title block and the grid.
    pub block_gap: f64,

    pub name_style: TextStyle,
    pub cmyk_style: TextStyle,
    pub title_style: TextStyle,
    pub comment_style: TextStyle,
    pub label_style: TextStyle,
    /// Label baselines, measured down from the bottom edge of a swatch.
    pub label_offsets: [f64; 2],
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            page_width: 11.61 * POINTS_PER_INCH,
            page_height: 15.24 * POINTS_PER_INCH,
            margin: 200.0,
            cell: 44.0,
            gap_x: 12.0,
            gap_y: 24.0,
            group_gap_x: 40.0,
            group_gap_y: 20.0,
            label_space: 24.0,
            name_line_height: 30.0,
            cmyk_line_height: 24.0,
            title_line_height: 30.0,
            comment_height: 24.0,
            comment_anchor: 12.0,
            block_gap: 40.0,
            name_style: TextStyle::new(Font::HelveticaBold, 20.0),
            cmyk_style: TextStyle::new(Font::Helvetica, 14.0),
            title_style: TextStyle::new(Font::HelveticaBold, 18.0),
            comment_style: TextStyle::new(Font::Helvetica, 11.0),
            label_style: TextStyle::new(Font::Helvetica, 7.0),
            label_offsets: [9.0, 18.0],
        }
    }
}

impl SheetLayout {
    pub fn working_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    pub fn working_height(&self) -> f64 {
        self.page_height - 2.0 * self.margin
    }

    pub fn group_width(&self) -> f64 {
        span(STEPS, self.cell, self.gap_x)
    }

    pub fn group_height(&self) -> f64 {
        span(STEPS, self.cell, self.gap_y) + self.label_space
    }

    pub fn grid_width(&self) -> f64 {
        span(STEPS, self.group_width(), self.group_gap_x)
    }

    pub fn grid_height(&self) -> f64 {
        span(STEPS, self.group_height(), self.group_gap_y)
    }

    /// Horizontal distance between neighbouring swatches.
    pub(crate) fn cell_pitch_x(&self) -> f64 {
        self.cell + self.gap_x
    }

    pub(crate) fn cell_pitch_y(&self) -> f64 {
        self.cell + self.gap_y
    }

    pub(crate) fn group_pitch_x(&self) -> f64 {
        self.group_width() + self.group_gap_x
    }

    pub(crate) fn group_pitch_y(&self) -> f64 {
        self.group_height() + self.group_gap_y
    }
}

/// Total extent of `count` items of `size` separated by `gap`.
fn span(count: usize, size: f64, gap: f64) -> f64 {
    count as f64 * size + (count as f64 - 1.0) * gap
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_page() {
        let layout = SheetLayout::default();
        assert!(close(layout.page_width, 835.92));
        assert!(close(layout.page_height, 1097.28));
        assert!(close(layout.working_width(), 435.92));
        assert!(close(layout.working_height(), 697.28));
    }

    #[test]
    fn test_derived_dimensions() {
        let layout = SheetLayout::default();
        assert_eq!(layout.group_width(), 156.0);
        assert_eq!(layout.group_height(), 204.0);
        assert_eq!(layout.grid_width(), 548.0);
        assert_eq!(layout.grid_height(), 652.0);
        assert_eq!(layout.group_pitch_x(), 196.0);
        assert_eq!(layout.group_pitch_y(), 224.0);
        assert_eq!(layout.cell_pitch_x(), 56.0);
        assert_eq!(layout.cell_pitch_y(), 68.0);
    }

    #[test]
    fn test_custom_layout_dimensions() {
        let layout = SheetLayout {
            cell: 30.0,
            gap_x: 5.0,
            gap_y: 5.0,
            label_space: 0.0,
            group_gap_x: 10.0,
            group_gap_y: 10.0,
            ..SheetLayout::default()
        };
        assert_eq!(layout.group_width(), 100.0);
        assert_eq!(layout.group_height(), 100.0);
        assert_eq!(layout.grid_width(), 320.0);
        assert_eq!(layout.grid_height(), 320.0);
    }
}
