//! SVG rendering of a lottery.
//!
//! The drawing mirrors the canvas the lottery is operated on: vertical lines
//! run from `margin` to `height - margin`, start labels `1..=N` sit above
//! them, result labels sit below, and every rung is a horizontal stroke
//! between its two verticals at the height it was clicked.

use std::path::PathBuf;

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use amida_core::{
    color::Color,
    geometry::{Point, Size},
    session::Lottery,
};

use super::{Error, Exporter};
use crate::config::{CanvasConfig, StyleConfig};

/// Builder for an [`Svg`] exporter.
#[derive(Debug)]
pub struct SvgBuilder {
    file_name: PathBuf,
    canvas: CanvasConfig,
    style: StyleConfig,
}

impl SvgBuilder {
    /// Creates a builder writing to `file_name` with default canvas and style.
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            canvas: CanvasConfig::default(),
            style: StyleConfig::default(),
        }
    }

    pub fn with_canvas(mut self, canvas: &CanvasConfig) -> Self {
        self.canvas = canvas.clone();
        self
    }

    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Resolves the configured colors and builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] for unparsable colors, and for a canvas
    /// whose margins leave no room for the ladder.
    pub fn build(self) -> Result<Svg, Error> {
        let canvas = &self.canvas;
        if canvas.height() <= 2.0 * canvas.margin() {
            return Err(Error::Render(format!(
                "canvas height {} leaves no room for a ladder with margin {}",
                canvas.height(),
                canvas.margin()
            )));
        }

        Ok(Svg {
            file_name: self.file_name,
            size: Size::new(canvas.width(), canvas.height()),
            margin: canvas.margin(),
            label_offset: canvas.label_offset(),
            background: self.style.background_color().map_err(Error::Render)?,
            line_color: self.style.line_color().map_err(Error::Render)?,
            label_color: self.style.label_color().map_err(Error::Render)?,
            stroke_width: self.style.stroke_width(),
            font_size: self.style.font_size(),
        })
    }
}

/// SVG exporter for lotteries.
#[derive(Debug)]
pub struct Svg {
    file_name: PathBuf,
    size: Size,
    margin: f32,
    label_offset: f32,
    background: Option<Color>,
    line_color: Color,
    label_color: Color,
    stroke_width: f32,
    font_size: f32,
}

impl Svg {
    /// Renders the lottery to an SVG document.
    pub fn render_lottery(&self, lottery: &Lottery) -> Document {
        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", self.size.width(), self.size.height()),
            )
            .set("width", self.size.width())
            .set("height", self.size.height());

        let doc = match self.background {
            Some(color) => doc.add(
                svg_element::Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", &color)
                    .set("fill-opacity", color.alpha()),
            ),
            None => doc,
        };

        doc.add(self.render_ladder(lottery))
            .add(self.render_labels(lottery))
    }

    /// Draws the vertical lines and the rungs between them.
    fn render_ladder(&self, lottery: &Lottery) -> svg_element::Group {
        let top = self.margin;
        let bottom = self.size.height() - self.margin;
        let lines = lottery.verticals();

        let mut group = svg_element::Group::new()
            .set("data-layer", "ladder")
            .set("stroke", &self.line_color)
            .set("stroke-opacity", self.line_color.alpha())
            .set("stroke-width", self.stroke_width)
            .set("stroke-linecap", "round");

        for line in lines.iter() {
            let x = line.position();
            group = group.add(stroke(Point::new(x, top), Point::new(x, bottom)));
        }

        for rung in lottery.rungs() {
            let endpoints = lines.get(rung.start()).zip(lines.get(rung.end()));
            let Some((start, end)) = endpoints else {
                continue;
            };
            let from = Point::new(start.position(), rung.position());
            group = group.add(stroke(from, from.with_x(end.position())));
        }

        group
    }

    /// Draws the start labels above the ladder and the result labels below.
    fn render_labels(&self, lottery: &Lottery) -> svg_element::Group {
        let top = self.margin - self.label_offset;
        let bottom = self.size.height() - self.margin + self.label_offset;

        let mut group = svg_element::Group::new()
            .set("data-layer", "labels")
            .set("fill", &self.label_color)
            .set("fill-opacity", self.label_color.alpha())
            .set("font-size", self.font_size)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central");

        let result = lottery.result();
        for line in lottery.verticals().iter() {
            let x = line.position();
            group = group.add(label(Point::new(x, top), line.index().label()));

            if let Some(end_label) = result.label_at(line.index()) {
                group = group.add(label(Point::new(x, bottom), end_label));
            }
        }

        group
    }
}

impl Exporter for Svg {
    fn export_lottery(&mut self, lottery: &Lottery) -> Result<(), Error> {
        debug!(
            lines = lottery.verticals().len(),
            rungs = lottery.rungs().len();
            "Rendering lottery"
        );
        let doc = self.render_lottery(lottery);

        svg::save(&self.file_name, &doc).map_err(Error::Io)?;

        info!(file_name:? = self.file_name; "SVG exported");
        Ok(())
    }
}

fn stroke(from: Point, to: Point) -> svg_element::Line {
    svg_element::Line::new()
        .set("x1", from.x())
        .set("y1", from.y())
        .set("x2", to.x())
        .set("y2", to.y())
}

fn label(position: Point, text: usize) -> svg_element::Text {
    svg_element::Text::new(text.to_string())
        .set("x", position.x())
        .set("y", position.y())
}
