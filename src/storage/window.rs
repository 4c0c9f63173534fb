use serde::{Deserialize, Serialize};

/// Terminal size in cells, persisted as `{"width": .., "height": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub width: u16,
    pub height: u16,
}

impl WindowGeometry {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_string(&WindowGeometry::new(120, 40)).unwrap();
        assert_eq!(json, r#"{"width":120,"height":40}"#);
    }

    #[test]
    fn test_deserialize_ignores_field_order() {
        let geometry: WindowGeometry =
            serde_json::from_str(r#"{"height": 30, "width": 90}"#).unwrap();
        assert_eq!(geometry, WindowGeometry::new(90, 30));
    }
}
