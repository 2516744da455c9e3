use super::layout::{SheetLayout, TextStyle};
use crate::cmyk::CmykColor;
use crate::error::Result;
use crate::graphics::Color;
use crate::page::Page;
use crate::text::{measure_text, Font};
use crate::variants::{ChannelDeltas, VariantGrid, STEPS};

/// A single run of text with its baseline origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub font: Font,
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

/// A filled square; `(x, y)` is its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedSwatch {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: CmykColor,
    pub deltas: ChannelDeltas,
}

/// Every mark on the sheet with absolute coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    titles: Vec<PlacedText>,
    comment: Option<PlacedText>,
    swatches: Vec<PlacedSwatch>,
    labels: Vec<PlacedText>,
    grid_top: f64,
    grid_left: f64,
}

impl SheetPlan {
    /// One line without a reference name, two with one.
    pub fn titles(&self) -> &[PlacedText] {
        &self.titles
    }

    pub fn comment(&self) -> Option<&PlacedText> {
        self.comment.as_ref()
    }

    /// Swatches in grid order: group by group, variant by variant.
    pub fn swatches(&self) -> &[PlacedSwatch] {
        &self.swatches
    }

    /// Two labels per swatch, in swatch order.
    pub fn labels(&self) -> &[PlacedText] {
        &self.labels
    }

    /// All text runs in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &PlacedText> {
        self.titles
            .iter()
            .chain(self.comment.iter())
            .chain(self.labels.iter())
    }

    pub fn grid_top(&self) -> f64 {
        self.grid_top
    }

    pub fn grid_left(&self) -> f64 {
        self.grid_left
    }

    /// Emits the plan into `page`: swatches first, then all text in key black.
    pub fn draw(&self, page: &mut Page) -> Result<()> {
        let graphics = page.graphics();
        for swatch in &self.swatches {
            graphics
                .set_fill_color(swatch.color.to_color())
                .rect(swatch.x, swatch.y, swatch.size, swatch.size)
                .fill();
        }

        let text = page.text();
        text.set_fill_color(Color::key_black());
        for run in self.texts() {
            text.set_font(run.font.clone(), run.size)
                .at(run.x, run.y)
                .write(&run.text)?;
        }

        Ok(())
    }
}

impl SheetLayout {
    /// Lays out the sheet for `grid`.
    ///
    /// `title_name` replaces the plain CMYK title with the name plus a CMYK
    /// subtitle. Blank `comment` and `title_name` count as absent. Fails if
    /// any text style uses a font without metrics.
    pub fn plan(
        &self,
        grid: &VariantGrid,
        base: CmykColor,
        comment: Option<&str>,
        title_name: Option<&str>,
    ) -> Result<SheetPlan> {
        let title_name = non_blank(title_name);
        let comment = non_blank(comment);

        let title_lines: Vec<(String, &TextStyle, f64)> = match title_name {
            Some(name) => vec![
                (name.to_string(), &self.name_style, self.name_line_height),
                (base.to_string(), &self.cmyk_style, self.cmyk_line_height),
            ],
            None => vec![(base.plain_title(), &self.title_style, self.title_line_height)],
        };

        let title_height: f64 = title_lines.iter().map(|(_, _, height)| height).sum();
        let comment_height = if comment.is_some() {
            self.comment_height
        } else {
            0.0
        };
        let block = title_height + comment_height + self.block_gap + self.grid_height();

        let mut cursor = self.margin + (self.working_height() + block) / 2.0;

        let mut titles = Vec::with_capacity(title_lines.len());
        for (text, style, line_height) in title_lines {
            titles.push(self.centered(text, style, cursor - style.size)?);
            cursor -= line_height;
        }

        let nominal_grid_top = cursor - self.block_gap;
        let (comment, grid_top) = match comment {
            Some(comment) => (
                Some(self.centered(
                    format!("Comment: {comment}"),
                    &self.comment_style,
                    nominal_grid_top - self.comment_anchor,
                )?),
                nominal_grid_top - self.comment_height,
            ),
            None => (None, nominal_grid_top),
        };

        let grid_left = self.margin + (self.working_width() - self.grid_width()) / 2.0;

        let mut swatches = Vec::with_capacity(STEPS.pow(4));
        let mut labels = Vec::with_capacity(2 * STEPS.pow(4));

        for row in 0..STEPS {
            for col in 0..STEPS {
                let group = &grid.groups()[row * STEPS + col];
                let group_left = grid_left + col as f64 * self.group_pitch_x();
                let group_top = grid_top - row as f64 * self.group_pitch_y();

                for i in 0..STEPS {
                    for j in 0..STEPS {
                        let variant = &group.variants()[i * STEPS + j];
                        let x = group_left + j as f64 * self.cell_pitch_x();
                        let y = group_top - i as f64 * self.cell_pitch_y() - self.cell;

                        swatches.push(PlacedSwatch {
                            x,
                            y,
                            size: self.cell,
                            color: variant.color(),
                            deltas: variant.deltas(),
                        });

                        let deltas = variant.deltas();
                        let lines = [deltas.cyan_magenta_label(), deltas.yellow_black_label()];
                        for (text, offset) in lines.into_iter().zip(self.label_offsets) {
                            labels.push(self.centered_in(text, &self.label_style, x, self.cell, y - offset)?);
                        }
                    }
                }
            }
        }

        tracing::debug!(
            grid_top,
            grid_left,
            swatches = swatches.len(),
            "planned swatch sheet"
        );

        Ok(SheetPlan {
            titles,
            comment,
            swatches,
            labels,
            grid_top,
            grid_left,
        })
    }

    /// Text centered across the working width.
    fn centered(&self, text: String, style: &TextStyle, baseline: f64) -> Result<PlacedText> {
        self.centered_in(text, style, self.margin, self.working_width(), baseline)
    }

    fn centered_in(
        &self,
        text: String,
        style: &TextStyle,
        left: f64,
        width: f64,
        baseline: f64,
    ) -> Result<PlacedText> {
        let text_width = measure_text(&text, &style.font, style.size)?;
        Ok(PlacedText {
            x: left + (width - text_width) / 2.0,
            y: baseline,
            font: style.font.clone(),
            size: style.size,
            text,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
