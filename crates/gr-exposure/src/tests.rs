//! Unit tests for gr-exposure.

#[cfg(test)]
mod sample {
    use std::io::Cursor;

    use crate::{ExposureError, SensorSample, SensorSet, load_samples_reader};

    const CSV: &str = "\
lat,lon,pm25
9.9816,76.2999,42.0
9.9312, 76.2673, 88.5
10.0159,76.3419,17.2
";

    #[test]
    fn load_from_reader() {
        let set = load_samples_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.samples()[1], SensorSample::new(9.9312, 76.2673, 88.5));
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let bad = "lat,lon,pm25\n9.98,76.29,lots\n";
        let result = load_samples_reader(Cursor::new(bad));
        assert!(matches!(result, Err(ExposureError::Parse(_))));
    }

    #[test]
    fn columns_must_match() {
        let result = SensorSet::from_columns(&[1.0, 2.0], &[1.0], &[5.0, 6.0]);
        assert!(matches!(
            result,
            Err(ExposureError::MismatchedColumns { lats: 2, lons: 1, values: 2 })
        ));
    }

    #[test]
    fn non_finite_rows_dropped() {
        let set = SensorSet::from_columns(
            &[1.0, f64::NAN, 3.0],
            &[1.0, 2.0, 3.0],
            &[10.0, 20.0, f64::INFINITY],
        )
        .unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn require_minimum() {
        let set = SensorSet::from_columns(&[1.0, 2.0], &[1.0, 2.0], &[5.0, 6.0]).unwrap();
        assert!(set.require(2).is_ok());
        assert!(matches!(
            set.require(3),
            Err(ExposureError::InsufficientSensorData { got: 2, required: 3 })
        ));
    }
}

#[cfg(test)]
mod estimate {
    use gr_core::GeoPoint;

    use crate::{
        ConstantEstimator, Exposure, ExposureError, IdwEstimator, SensorSample, SensorSet,
        SpatialEstimator,
    };

    fn three_sensors() -> SensorSet {
        SensorSet::new(vec![
            SensorSample::new(0.0, 0.0, 10.0),
            SensorSample::new(0.0, 0.1, 100.0),
            SensorSample::new(0.1, 0.0, 40.0),
        ])
    }

    #[test]
    fn exposure_variants() {
        assert_eq!(Exposure::from_raw(3.0, 1.0), Exposure::Estimate(3.0));
        assert_eq!(Exposure::from_raw(f64::NAN, 1.0), Exposure::Fallback(1.0));
        assert!(!Exposure::Fallback(1.0).is_estimate());
        assert_eq!(Exposure::Fallback(1.0).value(), 1.0);
    }

    #[test]
    fn constant_surface() {
        let out = ConstantEstimator { value: 7.0 }
            .estimate(&three_sensors(), &[GeoPoint::new(0.0, 0.0); 4], 1.0)
            .unwrap();
        assert_eq!(out, vec![Exposure::Estimate(7.0); 4]);
    }

    #[test]
    fn idw_snaps_to_sensor() {
        let out = IdwEstimator::default()
            .estimate(&three_sensors(), &[GeoPoint::new(0.0, 0.1)], 1.0)
            .unwrap();
        assert_eq!(out, vec![Exposure::Estimate(100.0)]);
    }

    #[test]
    fn idw_stays_within_sample_range() {
        let points: Vec<GeoPoint> = (0..10)
            .map(|i| GeoPoint::new(0.01 * i as f64, 0.005 * i as f64))
            .collect();
        let out = IdwEstimator::default().estimate(&three_sensors(), &points, 1.0).unwrap();
        assert_eq!(out.len(), points.len());
        for e in out {
            assert!(e.is_estimate());
            assert!((10.0..=100.0).contains(&e.value()), "got {e:?}");
        }
    }

    #[test]
    fn idw_nearer_sensor_dominates() {
        let out = IdwEstimator::default()
            .estimate(&three_sensors(), &[GeoPoint::new(0.0, 0.09)], 1.0)
            .unwrap();
        assert!(out[0].value() > 55.0, "got {:?}", out[0]);
    }

    #[test]
    fn idw_bad_point_degrades_alone() {
        let points = [GeoPoint::new(0.0, 0.0), GeoPoint::new(f64::NAN, 0.0)];
        let out = IdwEstimator::default().estimate(&three_sensors(), &points, 2.5).unwrap();
        assert_eq!(out[0], Exposure::Estimate(10.0));
        assert_eq!(out[1], Exposure::Fallback(2.5));
    }

    #[test]
    fn idw_invalid_power_fails_batch() {
        let est = IdwEstimator { power: 0.0, snap_m: 1.0 };
        let result = est.estimate(&three_sensors(), &[GeoPoint::new(0.0, 0.0)], 1.0);
        assert!(matches!(result, Err(ExposureError::Estimator(_))));
    }
}
