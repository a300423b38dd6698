use crate::error::{SelectorError, SelectorResult};

/// Linear mapping between a time domain (milliseconds) and a horizontal pixel
/// span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> SelectorResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(SelectorError::invalid(
                "scale domain must be finite and non-zero",
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.domain_end - self.domain_start
    }

    /// Maps a domain value onto `[0, width_px]`. Values outside the domain map
    /// outside the span.
    pub fn domain_to_pixel(self, value: f64, width_px: f64) -> SelectorResult<f64> {
        validate_width(width_px)?;
        if !value.is_finite() {
            return Err(SelectorError::invalid("value must be finite"));
        }

        let normalized = (value - self.domain_start) / self.span();
        Ok(normalized * width_px)
    }

    /// Converts a pixel displacement into a domain displacement.
    pub fn pixel_delta_to_domain(self, delta_px: f64, width_px: f64) -> SelectorResult<f64> {
        validate_width(width_px)?;
        if !delta_px.is_finite() {
            return Err(SelectorError::invalid("pixel delta must be finite"));
        }

        Ok(self.span() * delta_px / width_px)
    }
}

fn validate_width(width_px: f64) -> SelectorResult<()> {
    if !width_px.is_finite() || width_px <= 0.0 {
        return Err(SelectorError::invalid(
            "pixel span must be finite and > 0",
        ));
    }
    Ok(())
}
