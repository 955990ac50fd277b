//! Pixel-box shape drawing on top of the canvas.
//!
//! Shapes are addressed by inclusive pixel bounding boxes: `BBox::new(0, 0, 9, 9)`
//! covers a 10x10 pixel area. Outlines are drawn inside the box, arcs take
//! angles in degrees measured clockwise from three o'clock, and points passed to
//! lines and polygons name pixel centres.

use anon_brand_canvas2d::{path, Canvas, CanvasColor, CanvasFont, LineJoin, Pen};

/// Inclusive pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BBox {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box of a circle of radius `r` centred on pixel `(cx, cy)`.
    pub fn around(cx: f32, cy: f32, r: f32) -> Self {
        Self {
            x0: cx - r,
            y0: cy - r,
            x1: cx + r,
            y1: cy + r,
        }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0 + 1.0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0 + 1.0
    }

    /// Geometric centre of the covered pixel area.
    pub fn center(&self) -> (f32, f32) {
        (
            (self.x0 + self.x1 + 1.0) / 2.0,
            (self.y0 + self.y1 + 1.0) / 2.0,
        )
    }
}

/// Fill and outline of a closed shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub fill: Option<CanvasColor>,
    pub outline: Option<CanvasColor>,
    pub width: f32,
}

impl ShapeStyle {
    pub fn fill(color: CanvasColor) -> Self {
        Self {
            fill: Some(color),
            outline: None,
            width: 1.0,
        }
    }

    pub fn outline(color: CanvasColor, width: f32) -> Self {
        Self {
            fill: None,
            outline: Some(color),
            width,
        }
    }

    pub fn with_outline(self, color: CanvasColor, width: f32) -> Self {
        Self {
            outline: Some(color),
            width,
            ..self
        }
    }
}

fn pixel_center((x, y): (f32, f32)) -> (f32, f32) {
    (x + 0.5, y + 0.5)
}

/// Extension trait with pixel-box drawing primitives.
pub trait BrandDraw {
    /// Ellipse inscribed in `bbox`.
    fn ellipse_box(&mut self, bbox: BBox, style: ShapeStyle);

    /// Circle of radius `r` centred on pixel `(cx, cy)`.
    fn circle(&mut self, cx: f32, cy: f32, r: f32, style: ShapeStyle) {
        self.ellipse_box(BBox::around(cx, cy, r), style);
    }

    fn rectangle(&mut self, bbox: BBox, style: ShapeStyle);

    fn rounded_rectangle(&mut self, bbox: BBox, radius: f32, style: ShapeStyle);

    /// Closed polygon through pixel centres.
    fn polygon(&mut self, points: &[(f32, f32)], style: ShapeStyle);

    /// Connected line segments through pixel centres.
    fn line(&mut self, points: &[(f32, f32)], color: CanvasColor, width: f32);

    /// Arc of the ellipse inscribed in `bbox` from `start_deg` to `end_deg`.
    fn arc_box(&mut self, bbox: BBox, start_deg: f32, end_deg: f32, color: CanvasColor, width: f32);

    /// Text with its top-left corner at `(x, y)`.
    fn text(&mut self, pos: (f32, f32), text: &str, font: &CanvasFont, color: CanvasColor);
}

impl BrandDraw for Canvas {
    fn ellipse_box(&mut self, bbox: BBox, style: ShapeStyle) {
        let (cx, cy) = bbox.center();
        let (rx, ry) = (bbox.width() / 2.0, bbox.height() / 2.0);

        if let Some(fill) = style.fill {
            if let Some(disc) = path::ellipse(cx, cy, rx, ry) {
                self.fill_path(&disc, fill);
            }
        }
        if let Some(outline) = style.outline {
            let half = style.width / 2.0;
            if let Some(ring) = path::ellipse(cx, cy, rx - half, ry - half) {
                // Sub-2px rings sit on half-pixel radii; snap them to whole pixels
                let pen = if style.width < 2.0 {
                    Pen::new(style.width).aliased()
                } else {
                    Pen::new(style.width)
                };
                self.stroke_path(&ring, outline, &pen);
            }
        }
    }

    fn rectangle(&mut self, bbox: BBox, style: ShapeStyle) {
        if let Some(fill) = style.fill {
            if let Some(area) = path::rect(bbox.x0, bbox.y0, bbox.width(), bbox.height()) {
                self.fill_path(&area, fill);
            }
        }
        if let Some(outline) = style.outline {
            let w = style.width;
            let frame = path::rect(
                bbox.x0 + w / 2.0,
                bbox.y0 + w / 2.0,
                bbox.width() - w,
                bbox.height() - w,
            );
            if let Some(frame) = frame {
                self.stroke_path(&frame, outline, &Pen::new(w));
            }
        }
    }

    fn rounded_rectangle(&mut self, bbox: BBox, radius: f32, style: ShapeStyle) {
        if let Some(fill) = style.fill {
            let area = path::round_rect(bbox.x0, bbox.y0, bbox.width(), bbox.height(), radius);
            if let Some(area) = area {
                self.fill_path(&area, fill);
            }
        }
        if let Some(outline) = style.outline {
            let w = style.width;
            let frame = path::round_rect(
                bbox.x0 + w / 2.0,
                bbox.y0 + w / 2.0,
                bbox.width() - w,
                bbox.height() - w,
                (radius - w / 2.0).max(0.0),
            );
            if let Some(frame) = frame {
                self.stroke_path(&frame, outline, &Pen::new(w));
            }
        }
    }

    fn polygon(&mut self, points: &[(f32, f32)], style: ShapeStyle) {
        let centred: Vec<(f32, f32)> = points.iter().copied().map(pixel_center).collect();
        let Some(shape) = path::polyline(&centred, true) else {
            return;
        };

        if let Some(fill) = style.fill {
            self.fill_path(&shape, fill);
        }
        if let Some(outline) = style.outline {
            self.stroke_path(&shape, outline, &Pen::new(style.width));
        }
    }

    fn line(&mut self, points: &[(f32, f32)], color: CanvasColor, width: f32) {
        let centred: Vec<(f32, f32)> = points.iter().copied().map(pixel_center).collect();
        if let Some(segments) = path::polyline(&centred, false) {
            self.stroke_path(&segments, color, &Pen::new(width).join(LineJoin::Round));
        }
    }

    fn arc_box(&mut self, bbox: BBox, start_deg: f32, end_deg: f32, color: CanvasColor, width: f32) {
        let (cx, cy) = bbox.center();
        let half = width / 2.0;
        let (rx, ry) = (bbox.width() / 2.0 - half, bbox.height() / 2.0 - half);
        if let Some(curve) = path::arc(cx, cy, rx, ry, start_deg, end_deg) {
            self.stroke_path(&curve, color, &Pen::new(width));
        }
    }

    fn text(&mut self, (x, y): (f32, f32), text: &str, font: &CanvasFont, color: CanvasColor) {
        self.fill_text(text, font, x, y, color);
    }
}
