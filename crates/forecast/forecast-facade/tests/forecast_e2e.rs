//! End-to-end forecasting from the bundled sample dataset

use data_core::{InMemoryDatasetSource, FOOD_DEMAND, MEDICAL_DEMAND};
use data_spi::DatasetSource;
use forecast_facade::{AdditiveForecaster, DemandForecaster};

#[test]
fn test_sample_metrics_forecast() {
    let source = InMemoryDatasetSource::sample();
    let forecaster = AdditiveForecaster::default();

    for metric in [FOOD_DEMAND, MEDICAL_DEMAND] {
        let series = source.load_series(metric).unwrap();
        let result = forecaster.forecast(&series).unwrap();

        assert_eq!(result.metric, metric);
        assert_eq!(result.len(), 22);
        assert_eq!(result.points[21].week, 22);

        // Both sample series grow every week
        let future = result.future();
        assert!(future.last().unwrap().point_estimate > future[0].point_estimate);
    }
}

#[test]
fn test_forecaster_as_trait_object() {
    let forecaster: Box<dyn DemandForecaster> = Box::new(AdditiveForecaster::default());
    let series = InMemoryDatasetSource::sample()
        .load_series(FOOD_DEMAND)
        .unwrap();

    assert_eq!(forecaster.horizon(), 12);
    assert!(forecaster.forecast(&series).is_ok());
}
