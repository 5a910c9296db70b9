/// Pointer travel (in px) per degree of rotation.
pub const TILT_DIVISOR: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation (degrees) around the X and Y axes for the hovered hero image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltState {
    pub x: f64,
    pub y: f64,
}

impl TiltState {
    pub fn from_pointer(px: f64, py: f64, bounds: BoundingBox) -> Self {
        let x = -(py - bounds.top - bounds.height / 2.0) / TILT_DIVISOR;
        let y = (px - bounds.left - bounds.width / 2.0) / TILT_DIVISOR;
        // adding 0.0 turns -0.0 into 0.0 so the css never reads "-0deg"
        Self {
            x: x + 0.0,
            y: y + 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn transform(&self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: BoundingBox = BoundingBox {
        left: 0.0,
        top: 0.0,
        width: 100.0,
        height: 100.0,
    };

    #[test]
    fn test_center_is_flat() {
        let tilt = TiltState::from_pointer(50.0, 50.0, BOX);
        assert_eq!(tilt, TiltState { x: 0.0, y: 0.0 });
        assert_eq!(tilt.transform(), "rotateX(0deg) rotateY(0deg)");
    }

    #[test]
    fn test_corners() {
        let tilt = TiltState::from_pointer(100.0, 100.0, BOX);
        assert_eq!(tilt, TiltState { x: -2.0, y: 2.0 });
        assert_eq!(tilt.transform(), "rotateX(-2deg) rotateY(2deg)");

        let tilt = TiltState::from_pointer(0.0, 0.0, BOX);
        assert_eq!(tilt, TiltState { x: 2.0, y: -2.0 });
    }

    #[test]
    fn test_offset_box() {
        let bounds = BoundingBox {
            left: 200.0,
            top: 40.0,
            width: 350.0,
            height: 310.0,
        };
        let tilt = TiltState::from_pointer(200.0 + 175.0, 40.0 + 155.0, bounds);
        assert_eq!(tilt, TiltState::default());

        let tilt = TiltState::from_pointer(200.0 + 350.0, 40.0, bounds);
        assert_eq!(tilt.x, 155.0 / TILT_DIVISOR);
        assert_eq!(tilt.y, 175.0 / TILT_DIVISOR);
    }

    #[test]
    fn test_reset() {
        let mut tilt = TiltState::from_pointer(100.0, 0.0, BOX);
        assert_ne!(tilt, TiltState::default());
        tilt.reset();
        assert_eq!(tilt, TiltState { x: 0.0, y: 0.0 });
    }
}
