//! Drawing surface abstraction.
//!
//! The simulation only needs four primitives from its canvas, so it draws
//! through [`Surface`] instead of holding a `CanvasRenderingContext2d`
//! directly. The browser implementation lives here too.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

/// The drawing operations the particle field uses.
pub trait Surface {
	/// Clear the rectangle `(0, 0, width, height)`.
	fn clear(&mut self, width: f64, height: f64);
	/// Set the fill color for subsequent circles.
	fn set_fill_color(&mut self, color: &str);
	/// Set the global alpha for subsequent circles.
	fn set_alpha(&mut self, alpha: f64);
	/// Fill a circle centered at `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn set_fill_color(&mut self, color: &str) {
		self.set_fill_style_str(color);
	}

	fn set_alpha(&mut self, alpha: f64) {
		self.set_global_alpha(alpha);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}
}
