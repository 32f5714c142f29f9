//! Viewport and coordinate transformation for the profile canvas.
//!
//! Handles conversion between pixel coordinates (screen space) and real
//! coordinates (millimetres in the vessel cross-section). The vessel axis
//! runs through the horizontal centre of the canvas and the vessel bottom
//! sits a fixed baseline above the lower canvas edge.

use std::fmt;

use bowlkit_core::GeometryError;

use crate::model::Point;

/// Default gap between the lower canvas edge and the vessel bottom (mm).
pub const DEFAULT_BASELINE_MM: f64 = 12.7;

/// Pixel/real mapping for one display surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    canvas_width: f64,
    canvas_height: f64,
    baseline: f64,
}

impl Viewport {
    /// Creates a viewport with `scale` pixels per millimetre.
    pub fn new(canvas_width: f64, canvas_height: f64, scale: f64) -> Result<Self, GeometryError> {
        validate_scale(scale)?;
        Ok(Self {
            scale,
            canvas_width,
            canvas_height,
            baseline: DEFAULT_BASELINE_MM,
        })
    }

    /// Creates a viewport whose width shows `canvas_mm` millimetres.
    pub fn fit_width(
        canvas_width: f64,
        canvas_height: f64,
        canvas_mm: f64,
    ) -> Result<Self, GeometryError> {
        if !(canvas_mm.is_finite() && canvas_mm > 0.0) {
            return Err(GeometryError::invalid_parameter(
                "canvas_mm",
                format!("must be positive and finite, got {canvas_mm}"),
            ));
        }
        Self::new(canvas_width, canvas_height, canvas_width / canvas_mm)
    }

    /// Sets the gap between the lower canvas edge and the vessel bottom.
    pub fn with_baseline(mut self, baseline: f64) -> Result<Self, GeometryError> {
        if !baseline.is_finite() {
            return Err(GeometryError::invalid_parameter(
                "baseline",
                format!("must be finite, got {baseline}"),
            ));
        }
        self.baseline = baseline;
        Ok(self)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Sets the canvas dimensions (typically called when window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Sets pixels per millimetre.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), GeometryError> {
        validate_scale(scale)?;
        self.scale = scale;
        Ok(())
    }

    /// Converts pixel coordinates to real coordinates.
    ///
    /// Formula:
    /// ```text
    /// x = (pixel_x - canvas_width / 2) / scale
    /// y = (canvas_height - pixel_y) / scale - baseline
    /// ```
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point {
        Point::new(
            (pixel_x - self.canvas_width / 2.0) / self.scale,
            (self.canvas_height - pixel_y) / self.scale - self.baseline,
        )
    }

    /// Converts real coordinates to pixel coordinates.
    ///
    /// Equivalent to [`world_to_pixel_with_offset`](Self::world_to_pixel_with_offset)
    /// with `offset = -baseline`.
    pub fn world_to_pixel(&self, x: f64, y: f64) -> Point {
        self.world_to_pixel_with_offset(x, y, -self.baseline)
    }

    /// Converts real coordinates to pixel coordinates with an explicit
    /// vertical offset (the ring view draws with `offset = 0`).
    ///
    /// Formula:
    /// ```text
    /// pixel_x = x * scale + canvas_width / 2
    /// pixel_y = -(y - offset) * scale + canvas_height
    /// ```
    pub fn world_to_pixel_with_offset(&self, x: f64, y: f64, offset: f64) -> Point {
        Point::new(
            x * self.scale + self.canvas_width / 2.0,
            -(y - offset) * self.scale + self.canvas_height,
        )
    }

    /// Converts a real point to pixel coordinates.
    pub fn world_point_to_pixel(&self, point: &Point) -> Point {
        self.world_to_pixel(point.x, point.y)
    }
}

fn validate_scale(scale: f64) -> Result<(), GeometryError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::invalid_parameter(
            "scale",
            format!("must be positive and finite, got {scale}"),
        ))
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Viewport({}x{} px, {:.3} px/mm, baseline {} mm)",
            self.canvas_width, self.canvas_height, self.scale, self.baseline
        )
    }
}
