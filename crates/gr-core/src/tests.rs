//! Unit tests for gr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(EdgeId(0) < EdgeId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(NodeId::default(), NodeId::INVALID);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(9.9312, 76.2673);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(9.0, 76.0);
        let b = GeoPoint::new(10.0, 76.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn midpoint_is_mean() {
        let m = GeoPoint::new(10.0, 76.0).midpoint(GeoPoint::new(10.2, 76.4));
        assert!((m.lat - 10.1).abs() < 1e-12);
        assert!((m.lon - 76.2).abs() < 1e-12);
    }

    #[test]
    fn finite_check() {
        assert!(GeoPoint::new(1.0, 2.0).is_finite());
        assert!(!GeoPoint::new(f64::NAN, 2.0).is_finite());
    }
}

#[cfg(test)]
mod config {
    use crate::{GrError, RoutingConfig};

    #[test]
    fn default_is_valid() {
        assert!(RoutingConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_norm() {
        let cfg = RoutingConfig { exposure_norm: 0.0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(GrError::Config(_))));
    }

    #[test]
    fn rejects_penalty_not_above_one() {
        let cfg = RoutingConfig { penalty_factor: 1.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_negative_snap_distance() {
        let cfg = RoutingConfig { max_snap_distance_m: Some(-1.0), ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn fetch_radius_has_floor_and_padding() {
        let cfg = RoutingConfig::default();
        assert_eq!(cfg.fetch_radius_m(100.0), 2_500.0);
        assert_eq!(cfg.fetch_radius_m(5_000.0), 5_500.0);
    }
}
