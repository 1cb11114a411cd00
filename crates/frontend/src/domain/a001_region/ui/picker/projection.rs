use contracts::domain::a001_region::GeoPoint;

/// Прямоугольная (равнопромежуточная) проекция территории Непала в SVG viewBox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapFrame {
    pub west: f64,
    pub east: f64,
    pub north: f64,
    pub south: f64,
    pub width: f64,
    pub height: f64,
}

impl MapFrame {
    /// Рамка вокруг Непала с небольшим полем
    pub fn nepal(width: f64, height: f64) -> Self {
        Self {
            west: 79.9,
            east: 88.3,
            north: 30.6,
            south: 26.2,
            width,
            height,
        }
    }

    /// Координаты точки в пикселях viewBox (x вправо на восток, y вниз на юг)
    pub fn project(&self, point: GeoPoint) -> (f64, f64) {
        let x = (point.lng - self.west) / (self.east - self.west) * self.width;
        let y = (self.north - point.lat) / (self.north - self.south) * self.height;
        (x, y)
    }

    /// Атрибут `points` для `<polygon>`
    pub fn polygon_points(&self, ring: &[GeoPoint]) -> String {
        ring.iter()
            .map(|p| {
                let (x, y) = self.project(*p);
                format!("{:.1},{:.1}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_corners() {
        let frame = MapFrame::nepal(840.0, 440.0);
        assert_eq!(frame.project(GeoPoint::new(30.6, 79.9)), (0.0, 0.0));
        let (x, y) = frame.project(GeoPoint::new(26.2, 88.3));
        assert!((x - 840.0).abs() < 1e-9);
        assert!((y - 440.0).abs() < 1e-9);
    }

    #[test]
    fn test_east_is_right_and_south_is_down() {
        let frame = MapFrame::nepal(830.0, 440.0);
        let kathmandu = frame.project(GeoPoint::new(27.7172, 85.324));
        let pokhara = frame.project(GeoPoint::new(28.2096, 83.9856));
        assert!(kathmandu.0 > pokhara.0);
        assert!(kathmandu.1 > pokhara.1);
    }

    #[test]
    fn test_polygon_points_format() {
        let frame = MapFrame::nepal(840.0, 440.0);
        let ring = [GeoPoint::new(30.6, 79.9), GeoPoint::new(26.2, 88.3)];
        assert_eq!(frame.polygon_points(&ring), "0.0,0.0 840.0,440.0");
        assert_eq!(frame.view_box(), "0 0 840 440");
    }
}
