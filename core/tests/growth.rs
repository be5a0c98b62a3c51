//! Growth: linear stages, clamping at maturity, split-advance equivalence.

use farm_core::{
    catalog::CropCatalog,
    config::FarmConfig,
    error::FarmError,
    event::FarmEvent,
    farm::FarmState,
};

fn farm_with_plots(crops: &[&str]) -> FarmState {
    let mut farm = FarmState::new(
        CropCatalog::standard(),
        FarmConfig {
            starting_gold: 10_000,
            starting_plot_capacity: 50,
            ..FarmConfig::default_test()
        },
    )
    .unwrap();
    for crop in crops {
        farm.buy_seeds(crop, 1).unwrap();
        farm.plant(crop).unwrap();
    }
    farm
}

#[test]
fn plot_is_ready_exactly_when_days_reach_grow_time() {
    for spec in CropCatalog::standard().iter() {
        for days in 1..=spec.grow_time + 3 {
            let mut farm = farm_with_plots(&[spec.id.as_str()]);

            farm.advance(u64::from(days)).unwrap();

            let plot = &farm.plots()[0];
            assert_eq!(
                plot.is_ready(),
                days >= spec.grow_time,
                "{} after {days} day(s)",
                spec.id
            );
            assert_eq!(plot.growth_stage(), days.min(spec.grow_time));
            assert!(plot.growth_stage() <= plot.required_growth());
        }
    }
}

#[test]
fn ready_plots_stop_growing() {
    let mut farm = farm_with_plots(&["carrot"]);

    farm.advance(3).unwrap();
    assert!(farm.plots()[0].is_ready());
    farm.advance(100).unwrap();

    assert!(farm.plots()[0].is_ready());
    assert_eq!(farm.plots()[0].growth_stage(), 3);
    assert_eq!(farm.plots()[0].status_label(), "READY");
}

#[test]
fn split_advance_matches_single_advance() {
    let crops = ["pepper", "carrot", "pine", "corn", "radish", "pumpkin"];
    for a in 1..=6u64 {
        for b in 1..=6u64 {
            let mut split = farm_with_plots(&crops);
            let mut whole = farm_with_plots(&crops);

            split.advance(a).unwrap();
            split.advance(b).unwrap();
            whole.advance(a + b).unwrap();

            assert_eq!(split.snapshot(), whole.snapshot(), "advance({a}); advance({b})");
        }
    }
}

#[test]
fn staggered_plantings_grow_independently() {
    let mut farm = farm_with_plots(&["carrot"]);
    farm.advance(2).unwrap();
    farm.buy_seeds("carrot", 1).unwrap();
    farm.plant("carrot").unwrap();

    farm.advance(1).unwrap();

    assert!(farm.plots()[0].is_ready());
    assert_eq!(farm.plots()[1].growth_stage(), 1);
    assert_eq!(farm.plots()[1].status_label(), "Stage 1/3");
}

#[test]
fn zero_days_is_an_invalid_duration() {
    let mut farm = farm_with_plots(&["pepper"]);

    let err = farm.advance(0).unwrap_err();

    assert!(matches!(err, FarmError::InvalidDuration { days: 0 }));
    assert_eq!(farm.day(), 0);
    assert_eq!(farm.plots()[0].growth_stage(), 0);
}

#[test]
fn advancing_reports_newly_ready_plots_and_moves_the_clock() {
    let mut farm = farm_with_plots(&["carrot", "radish", "pepper"]);

    let event = farm.advance(4).unwrap();

    assert_eq!(event, FarmEvent::TimeAdvanced { day: 4, days: 4, newly_ready: 2 });
    assert_eq!(farm.day(), 4);
}

#[test]
fn empty_farm_still_passes_time() {
    let mut farm = FarmState::build_test();

    farm.advance(1_000_000).unwrap();

    assert_eq!(farm.day(), 1_000_000);
}
